use thiserror::Error;

/// Caller contract violations detected by the step evaluator.
///
/// These are returned inside [`anyhow::Error`]; use
/// `err.downcast_ref::<StepError>()` to match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("State dimension must be positive.")]
    ZeroDimension,
    #[error("State dimension mismatch. Expected {expected}, got {actual}.")]
    StateLength { expected: usize, actual: usize },
    #[error("Derivative at stage {stage} returned {actual} components, expected {expected}.")]
    DerivativeLength {
        stage: usize,
        expected: usize,
        actual: usize,
    },
}
