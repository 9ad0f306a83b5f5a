use crate::traits::{Scalar, Steppable, VectorField};

/// Fixed-step forward Euler with a non-negativity clamp.
///
/// After each update, every state component is floored at zero. Populations
/// therefore never go negative at any step, not just at initialization;
/// the clamp is part of the model's semantics and must survive any solver
/// swap. No adaptive step-size control: accuracy for large dt is the
/// caller's responsibility.
pub struct ClampedEuler<T: Scalar> {
    k1: Vec<T>,
}

impl<T: Scalar> ClampedEuler<T> {
    pub fn new(dim: usize) -> Self {
        Self {
            k1: vec![T::from_f64(0.0).unwrap(); dim],
        }
    }
}

impl<T: Scalar> Steppable<T> for ClampedEuler<T> {
    fn step(&mut self, field: &impl VectorField<T>, t: &mut T, state: &mut [T], dt: T) {
        let zero = T::from_f64(0.0).unwrap();

        // k1 = f(y)
        field.rates(state, &mut self.k1);

        // y_next = max(0, y + dt * k1)
        for i in 0..state.len() {
            state[i] = (state[i] + dt * self.k1[i]).max(zero);
        }

        *t = *t + dt;
    }
}
