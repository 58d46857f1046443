//! The `rk4_core` crate provides a single numerical primitive: one step of the classical
//! fourth-order Runge-Kutta method for first-order systems dx/dt = f(t, x).
//! Driving a trajectory, picking step sizes and error control are left to the caller.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `Derivative` (the caller's vector field),
//!   `Steppable` (solvers that advance a state in place).
//! - **Solvers**: `rk4_step` and the dimension-bound `RK4` stepper.
//! - **Errors**: `StepError`, the contract violations a step rejects.
pub mod error;
pub mod solvers;
pub mod traits;
