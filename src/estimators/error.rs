use thiserror::Error;

/// Simplified `Result` using [`EstimatorError`](crate::EstimatorError) as error type
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Error variants from hyperparameter validation, model estimation or scoring.
///
/// Every variant signals an invalid argument. Numeric degeneracies (a vertical
/// least-squares fit, a zero total sum of squares) are not errors: they show up
/// as NaN or infinite values in the results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    #[error("inputs have not the same size: {left} != {right}")]
    MismatchedLengths { left: usize, right: usize },
    #[error("inputs have not enough values: expected at least {expected}, found {found}")]
    NotEnoughSamples { expected: usize, found: usize },
    #[error("invalid learning rate {0}, must be positive")]
    InvalidLearningRate(f32),
    #[error("invalid gradient threshold {0}, must be a fraction in (0, 1)")]
    InvalidGradientThreshold(f32),
    #[error("invalid maximum number of iterations {0}, must be positive")]
    InvalidMaxIterations(usize),
    #[error("invalid epsilon {0}, must be positive")]
    InvalidEpsilon(f32),
    #[error("targets must contain two classes of values, found {0}")]
    NotTwoClasses(usize),
    #[error("targets must contain binary values, 0 or 1")]
    NonBinaryTargets,
}
