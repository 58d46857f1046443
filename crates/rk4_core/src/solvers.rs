use crate::error::StepError;
use crate::traits::{Derivative, Scalar, Steppable};
use anyhow::Result;
use log::{debug, trace};

/// Classic Runge-Kutta 4th order step.
///
/// Advances the state `x` at time `t` by one step of size `h` and returns the
/// estimate at `t + h` as a new vector; `x` itself is never modified.
///
/// ```text
/// k1 = h * f(t,       x)
/// k2 = h * f(t + h/2, x + k1/2)
/// k3 = h * f(t + h/2, x + k2/2)
/// k4 = h * f(t + h,   x + k3)
/// x_next = x + (k1 + 2*k2 + 2*k3 + k4) / 6
/// ```
///
/// `derivative` is evaluated exactly four times, in stage order. `dim` must be
/// positive and match both `x.len()` and the length of every derivative
/// result; violations are reported as [`StepError`] before any further stage
/// runs. Errors raised by `derivative` are returned as-is. Non-finite values
/// are not checked and propagate through the arithmetic.
pub fn rk4_step<T, D>(t: T, x: &[T], h: T, dim: usize, derivative: &D) -> Result<Vec<T>>
where
    T: Scalar,
    D: Derivative<T> + ?Sized,
{
    if dim == 0 {
        return Err(reject(StepError::ZeroDimension));
    }
    if x.len() != dim {
        return Err(reject(StepError::StateLength {
            expected: dim,
            actual: x.len(),
        }));
    }
    trace!("RK4 step from t = {:?} with h = {:?} (dim = {})", t, h, dim);

    let two = T::one() + T::one();
    let six = two * (two + T::one());
    let t_mid = t + h / two;

    // k1 = h * f(t, x)
    let k1 = scaled_slope(derivative, 1, t, x, h, dim)?;

    // k2 = h * f(t + h/2, x + k1/2)
    let tmp: Vec<T> = x.iter().zip(&k1).map(|(&xi, &ki)| xi + ki / two).collect();
    let k2 = scaled_slope(derivative, 2, t_mid, &tmp, h, dim)?;

    // k3 = h * f(t + h/2, x + k2/2)
    let tmp: Vec<T> = x.iter().zip(&k2).map(|(&xi, &ki)| xi + ki / two).collect();
    let k3 = scaled_slope(derivative, 3, t_mid, &tmp, h, dim)?;

    // k4 = h * f(t + h, x + k3)
    let tmp: Vec<T> = x.iter().zip(&k3).map(|(&xi, &ki)| xi + ki).collect();
    let k4 = scaled_slope(derivative, 4, t + h, &tmp, h, dim)?;

    let next = (0..dim)
        .map(|i| x[i] + (k1[i] + two * k2[i] + two * k3[i] + k4[i]) / six)
        .collect();
    Ok(next)
}

/// Evaluates one stage and returns `h * f(t, x)`.
fn scaled_slope<T, D>(
    derivative: &D,
    stage: usize,
    t: T,
    x: &[T],
    h: T,
    dim: usize,
) -> Result<Vec<T>>
where
    T: Scalar,
    D: Derivative<T> + ?Sized,
{
    let slope = derivative.evaluate(t, x, dim)?;
    if slope.len() != dim {
        return Err(reject(StepError::DerivativeLength {
            stage,
            expected: dim,
            actual: slope.len(),
        }));
    }
    Ok(slope.into_iter().map(|v| h * v).collect())
}

fn reject(err: StepError) -> anyhow::Error {
    debug!("Rejected RK4 step: {err}");
    err.into()
}

/// Classic Runge-Kutta 4th Order Solver bound to a fixed state dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RK4 {
    dim: usize,
}

impl RK4 {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Same as [`rk4_step`] with this solver's dimension.
    pub fn step<T, D>(&self, t: T, x: &[T], h: T, derivative: &D) -> Result<Vec<T>>
    where
        T: Scalar,
        D: Derivative<T> + ?Sized,
    {
        rk4_step(t, x, h, self.dim, derivative)
    }
}

impl<T: Scalar> Steppable<T> for RK4 {
    fn advance<D>(&self, derivative: &D, t: &mut T, state: &mut [T], dt: T) -> Result<()>
    where
        D: Derivative<T> + ?Sized,
    {
        let next = rk4_step(*t, state, dt, self.dim, derivative)?;
        state.copy_from_slice(&next);
        *t = *t + dt;
        Ok(())
    }
}
