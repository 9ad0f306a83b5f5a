pub mod field;
pub mod isocline;
pub mod model;
pub mod presets;
pub mod solvers;
/// The `niche_core` crate is the computation engine for the Niche
/// two-species competition explorer. Everything here is a pure function
/// of an immutable [`model::Parameters`]: no globals, no caching, no
/// incremental state between invocations.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `VectorField`
///   (autonomous dynamics), `Steppable` (solvers).
/// - **Model**: the Lotka-Volterra competition derivative, the single
///   source of model truth.
/// - **Solvers**: `ClampedEuler`, fixed-step forward Euler with the
///   model's non-negativity clamp.
/// - **Trajectory / Field / Isocline**: the three independent consumers
///   of the derivative that feed visualization.
pub mod traits;
pub mod trajectory;
