use crate::traits::VectorField;
use serde::{Deserialize, Serialize};

/// Floor applied to carrying capacities (and the a12 divisor in the
/// isocline) so a zero or negative configuration cannot divide by zero.
pub const CAPACITY_FLOOR: f64 = 1e-9;

/// The ten scalar inputs of a simulation request. Immutable once built;
/// every component reads it, none mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    /// Intrinsic growth rate of species 1.
    pub r1: f64,
    /// Intrinsic growth rate of species 2.
    pub r2: f64,
    /// Carrying capacity of species 1.
    pub k1: f64,
    /// Carrying capacity of species 2.
    pub k2: f64,
    /// Per-capita effect of species 2 on species 1's crowding.
    pub a12: f64,
    /// Per-capita effect of species 1 on species 2's crowding.
    pub a21: f64,
    /// Initial population of species 1.
    pub n10: f64,
    /// Initial population of species 2.
    pub n20: f64,
    /// Simulation horizon.
    pub t_max: f64,
    /// Fixed integration step.
    pub dt: f64,
}

/// The Lotka-Volterra competition vector field.
///
/// `growth_rates` is the single source of model truth: the integrator,
/// the direction-field sampler, and any future consumer of the dynamics
/// must route through it rather than restate the formula.
#[derive(Debug, Clone, Copy)]
pub struct CompetitionModel {
    params: Parameters,
}

impl CompetitionModel {
    pub fn new(params: Parameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Instantaneous growth rates (dN1/dt, dN2/dt) at populations (n1, n2).
    ///
    /// Capacities are floored at `CAPACITY_FLOOR` during use, not mutated,
    /// so a zero or negative capacity yields a finite rate instead of a
    /// division by zero. Total over all real inputs.
    pub fn growth_rates(&self, n1: f64, n2: f64) -> (f64, f64) {
        let p = &self.params;
        let d1 = p.r1 * n1 * (1.0 - (n1 + p.a12 * n2) / p.k1.max(CAPACITY_FLOOR));
        let d2 = p.r2 * n2 * (1.0 - (n2 + p.a21 * n1) / p.k2.max(CAPACITY_FLOOR));
        (d1, d2)
    }
}

impl VectorField<f64> for CompetitionModel {
    fn dimension(&self) -> usize {
        2
    }

    fn rates(&self, state: &[f64], out: &mut [f64]) {
        let (d1, d2) = self.growth_rates(state[0], state[1]);
        out[0] = d1;
        out[1] = d2;
    }
}
