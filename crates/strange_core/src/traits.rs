use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

use crate::draw::DrawConfig;
use crate::vector::Vec3;

/// A trait for types that can be used as scalars in the simulation state.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// Capability contract shared by every attractor model.
///
/// A model is a value: its title, start point, parameters and draw
/// configuration are fixed at construction and never mutated. Swapping the
/// active system means exchanging the whole model.
pub trait AttractorModel<T: Scalar> {
    /// Display title of the model.
    fn title(&self) -> &str;

    /// Deterministic initial condition of the trajectory.
    fn start(&self) -> Vec3<T>;

    /// Rendering-relevant parameters owned by this model.
    fn draw_config(&self) -> &DrawConfig;

    /// Evaluates the state derivative f(v) = (dx/dt, dy/dt, dz/dt).
    fn derivative(&self, v: Vec3<T>) -> Vec3<T>;

    /// Advances the state by one explicit (forward) Euler step:
    /// `v + f(v) * dt`.
    ///
    /// `dt` may be any non-negative value; zero returns `v` unchanged.
    /// The result is never clamped, so an oversized `dt` diverges just as
    /// the underlying system would.
    fn next_point(&self, v: Vec3<T>, dt: T) -> Vec3<T> {
        if dt == T::zero() {
            return v;
        }
        v + self.derivative(v) * dt
    }
}
