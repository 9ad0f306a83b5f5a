use crate::model::{CompetitionModel, Parameters};
use crate::solvers::ClampedEuler;
use crate::traits::Steppable;
use serde::{Deserialize, Serialize};

/// Floor applied to dt when sizing the series, so a zero or negative step
/// yields the minimal two-sample trajectory instead of dividing by zero.
pub const DT_FLOOR: f64 = 1e-6;

/// Time series of both populations, indexed in lockstep.
/// Produced whole by `simulate`, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub t: Vec<f64>,
    pub n1: Vec<f64>,
    pub n2: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Number of samples in the series: max(2, floor(t_max / dt) + 1), with
/// dt floored at `DT_FLOOR` for the division only.
fn step_count(params: &Parameters) -> usize {
    let samples = (params.t_max / params.dt.max(DT_FLOOR)).floor() + 1.0;
    samples.max(2.0) as usize
}

/// Integrates the competition model by fixed-step forward Euler with
/// per-step clamping at zero.
///
/// Deterministic, O(n) time and space, and total: no real-valued
/// `Parameters` can make it fail. Negative initial populations are
/// clamped to zero rather than rejected. Timestamps are `i * dt` rather
/// than the stepper's accumulated clock, so `t[i]` carries no summation
/// drift.
pub fn simulate(params: &Parameters) -> Trajectory {
    let n = step_count(params);
    let model = CompetitionModel::new(*params);
    let mut solver = ClampedEuler::new(2);

    let mut t = Vec::with_capacity(n);
    let mut n1 = Vec::with_capacity(n);
    let mut n2 = Vec::with_capacity(n);

    let mut clock = 0.0;
    let mut state = [params.n10.max(0.0), params.n20.max(0.0)];

    t.push(0.0);
    n1.push(state[0]);
    n2.push(state[1]);

    for i in 1..n {
        solver.step(&model, &mut clock, &mut state, params.dt);
        t.push(i as f64 * params.dt);
        n1.push(state[0]);
        n2.push(state[1]);
    }

    Trajectory { t, n1, n2 }
}
