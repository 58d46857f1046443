use anyhow::Result;
use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in our integrators.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// The right-hand side of a first-order system dx/dt = f(t, x).
///
/// Implementations should be deterministic and free of side effects; the
/// integrators call them synchronously and never hold on to them.
pub trait Derivative<T: Scalar> {
    /// Evaluates the rate of change of every state variable.
    /// t: current time
    /// x: current state, of length `dim`
    /// dim: dimension of the state space
    ///
    /// The returned vector must have length `dim`.
    fn evaluate(&self, t: T, x: &[T], dim: usize) -> Result<Vec<T>>;
}

impl<T, F> Derivative<T> for F
where
    T: Scalar,
    F: Fn(T, &[T], usize) -> Vec<T>,
{
    fn evaluate(&self, t: T, x: &[T], dim: usize) -> Result<Vec<T>> {
        Ok(self(t, x, dim))
    }
}

/// Adapts a fallible closure into a [`Derivative`].
///
/// Errors returned by the closure reach the caller of the step untouched.
#[derive(Debug, Clone, Copy)]
pub struct TryFn<F>(pub F);

impl<T, F> Derivative<T> for TryFn<F>
where
    T: Scalar,
    F: Fn(T, &[T], usize) -> Result<Vec<T>>,
{
    fn evaluate(&self, t: T, x: &[T], dim: usize) -> Result<Vec<T>> {
        (self.0)(t, x, dim)
    }
}

/// A trait for solvers that can step a system forward.
pub trait Steppable<T: Scalar> {
    /// Performs one step of size dt.
    /// t: current time (updated after a successful step)
    /// state: current state (updated after a successful step)
    /// dt: step size
    ///
    /// On error neither `t` nor `state` is modified.
    fn advance<D>(&self, derivative: &D, t: &mut T, state: &mut [T], dt: T) -> Result<()>
    where
        D: Derivative<T> + ?Sized;
}
