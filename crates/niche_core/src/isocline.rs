use crate::model::{Parameters, CAPACITY_FLOOR};
use serde::{Deserialize, Serialize};

/// A zero-growth isocline over the visible domain, given by its two
/// endpoint samples. Each isocline is affine in N1 under this model, so
/// the endpoints determine the whole line; denser sampling is neither
/// needed nor wanted (it would mask a non-affine model change).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Isocline {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

/// Computes both zero-growth isoclines over x in [0, max_n1]:
///
///   dN1/dt = 0:  y = (k1 - x) / a12    (a12 floored at `CAPACITY_FLOOR`)
///   dN2/dt = 0:  y = k2 - a21 * x
///
/// Returned in that order. Total over all real parameters.
pub fn zero_growth_isoclines(params: &Parameters, max_n1: f64) -> [Isocline; 2] {
    let x = [0.0, max_n1];
    let a12 = params.a12.max(CAPACITY_FLOOR);

    let species1 = Isocline {
        x,
        y: [
            (params.k1 - x[0]) / a12,
            (params.k1 - x[1]) / a12,
        ],
    };
    let species2 = Isocline {
        x,
        y: [
            params.k2 - params.a21 * x[0],
            params.k2 - params.a21 * x[1],
        ],
    };

    [species1, species2]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_params() -> Parameters {
        Parameters {
            r1: 1.0,
            r2: 1.0,
            k1: 130.0,
            k2: 90.0,
            a12: 0.6,
            a21: 1.4,
            n10: 30.0,
            n20: 30.0,
            t_max: 60.0,
            dt: 0.05,
        }
    }

    #[test]
    fn endpoints_satisfy_closed_form() {
        let params = reference_params();
        let max_n1 = 150.0;
        let [iso1, iso2] = zero_growth_isoclines(&params, max_n1);

        assert_eq!(iso1.x, [0.0, max_n1]);
        assert!((iso1.y[0] - params.k1 / params.a12).abs() < 1e-12);
        assert!((iso1.y[1] - (params.k1 - max_n1) / params.a12).abs() < 1e-12);

        assert_eq!(iso2.x, [0.0, max_n1]);
        assert!((iso2.y[0] - params.k2).abs() < 1e-12);
        assert!((iso2.y[1] - (params.k2 - params.a21 * max_n1)).abs() < 1e-12);
    }

    #[test]
    fn isoclines_are_endpoint_only() {
        let [iso1, iso2] = zero_growth_isoclines(&reference_params(), 100.0);
        assert_eq!(iso1.x.len(), 2);
        assert_eq!(iso2.x.len(), 2);
    }

    #[test]
    fn vanishing_a12_is_floored() {
        let mut params = reference_params();
        params.a12 = 0.0;
        let [iso1, _] = zero_growth_isoclines(&params, 100.0);
        assert!(iso1.y[0].is_finite());
        assert!((iso1.y[0] - params.k1 / CAPACITY_FLOOR).abs() < 1e-3);
    }

    #[test]
    fn isocline_endpoints_are_zero_growth_loci() {
        // Points on isocline 1 should zero dN1/dt (when n1 > 0), and
        // likewise for isocline 2.
        let params = reference_params();
        let model = crate::model::CompetitionModel::new(params);
        let max_n1 = 120.0;
        let [iso1, iso2] = zero_growth_isoclines(&params, max_n1);

        let (d1, _) = model.growth_rates(iso1.x[1], iso1.y[1]);
        assert!(d1.abs() < 1e-9, "dN1/dt on isocline 1 was {d1}");

        let (_, d2) = model.growth_rates(iso2.x[1], iso2.y[1]);
        assert!(d2.abs() < 1e-9, "dN2/dt on isocline 2 was {d2}");
    }
}
