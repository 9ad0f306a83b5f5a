use crate::model::{CompetitionModel, Parameters};
use serde::{Deserialize, Serialize};

/// Interior grid resolution per axis. Fixed by design, not configurable.
pub const FIELD_GRID: usize = 15;

/// Arrow length as a fraction of each axis's domain bound.
pub const ARROW_SCALE: f64 = 0.07;

/// One directed segment of the sampled field, in phase-space coordinates.
/// The tail sits on the grid point; the head is the grid point offset by
/// the scaled unit derivative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldArrow {
    pub tail_x: f64,
    pub tail_y: f64,
    pub head_x: f64,
    pub head_y: f64,
}

/// Samples the competition vector field on a `FIELD_GRID` × `FIELD_GRID`
/// grid of interior points over (0, max_n1] × (0, max_n2], excluding the
/// axes themselves.
///
/// Each arrow is the local derivative normalized by its Euclidean length
/// (a zero vector substitutes length 1 and renders as a zero-length
/// arrow), then scaled by `ARROW_SCALE` of each axis bound independently,
/// so arrows keep a consistent visual size under any aspect ratio.
pub fn sample_direction_field(params: &Parameters, max_n1: f64, max_n2: f64) -> Vec<FieldArrow> {
    let model = CompetitionModel::new(*params);
    let x_step = max_n1 / FIELD_GRID as f64;
    let y_step = max_n2 / FIELD_GRID as f64;
    let mut arrows = Vec::with_capacity(FIELD_GRID * FIELD_GRID);

    for i in 1..=FIELD_GRID {
        for j in 1..=FIELD_GRID {
            let x = i as f64 * x_step;
            let y = j as f64 * y_step;
            let (d1, d2) = model.growth_rates(x, y);

            let len = d1.hypot(d2);
            let len = if len == 0.0 { 1.0 } else { len };
            let ux = (d1 / len) * max_n1 * ARROW_SCALE;
            let uy = (d2 / len) * max_n2 * ARROW_SCALE;

            arrows.push(FieldArrow {
                tail_x: x,
                tail_y: y,
                head_x: x + ux,
                head_y: y + uy,
            });
        }
    }

    arrows
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
    fn field_always_has_grid_squared_arrows() {
        let arrows = sample_direction_field(&reference_params(), 150.0, 104.0);
        assert_eq!(arrows.len(), FIELD_GRID * FIELD_GRID);
        for arrow in &arrows {
            assert!(arrow.tail_x.is_finite() && arrow.tail_y.is_finite());
            assert!(arrow.head_x.is_finite() && arrow.head_y.is_finite());
        }
    }

    #[test]
    fn grid_excludes_the_axes() {
        let arrows = sample_direction_field(&reference_params(), 150.0, 90.0);
        for arrow in &arrows {
            assert!(arrow.tail_x > 0.0, "tail on the y-axis: {arrow:?}");
            assert!(arrow.tail_y > 0.0, "tail on the x-axis: {arrow:?}");
        }
        // Corner of the grid is the domain bound itself.
        let last = arrows.last().unwrap();
        assert!((last.tail_x - 150.0).abs() < 1e-12);
        assert!((last.tail_y - 90.0).abs() < 1e-12);
    }

    #[test]
    fn arrows_are_normalized_then_scaled_per_axis() {
        let max_n1 = 200.0;
        let max_n2 = 100.0;
        let params = reference_params();
        let model = crate::model::CompetitionModel::new(params);
        let arrows = sample_direction_field(&params, max_n1, max_n2);

        for arrow in &arrows {
            let (d1, d2) = model.growth_rates(arrow.tail_x, arrow.tail_y);
            let len = d1.hypot(d2);
            if len == 0.0 {
                continue;
            }
            let expected_dx = d1 / len * max_n1 * ARROW_SCALE;
            let expected_dy = d2 / len * max_n2 * ARROW_SCALE;
            assert!((arrow.head_x - arrow.tail_x - expected_dx).abs() < 1e-12);
            assert!((arrow.head_y - arrow.tail_y - expected_dy).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_derivative_renders_as_zero_length_arrow() {
        // r1 = r2 = 0 kills the field everywhere.
        let mut params = reference_params();
        params.r1 = 0.0;
        params.r2 = 0.0;
        let arrows = sample_direction_field(&params, 100.0, 100.0);
        for arrow in &arrows {
            assert_eq!(arrow.head_x, arrow.tail_x);
            assert_eq!(arrow.head_y, arrow.tail_y);
        }
    }
}
