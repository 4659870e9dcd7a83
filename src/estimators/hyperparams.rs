use super::error::{EstimatorError, Result};
use super::param_guard::ParamGuard;
use crate::maths::DEFAULT_EPSILON;
use crate::Float;
use std::marker::PhantomData;

/// Denominator used by the coefficient of determination returned by
/// [`LinearRegression::score`](super::linear_regression::LinearRegression::score).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalSumOfSquares {
    /// Spread of the predicted values around their own mean,
    /// `Σŷ² − (Σŷ)²/n`. This is the historical behaviour of the estimator.
    Predictions,
    /// Spread of the true targets around their mean, `Σ(y − ȳ)²`, as in the
    /// textbook definition of R².
    Targets,
}

impl Default for TotalSumOfSquares {
    fn default() -> Self {
        TotalSumOfSquares::Predictions
    }
}

/// A verified hyperparameter set ready for the fitting of a linear regression
/// model
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressionValidParams<F> {
    total_sum_of_squares: TotalSumOfSquares,
    phantom: PhantomData<F>,
}

impl<F: Float> LinearRegressionValidParams<F> {
    pub fn total_sum_of_squares(&self) -> TotalSumOfSquares {
        self.total_sum_of_squares
    }
}

/// A hyper-parameter set during construction
///
/// Ordinary least squares have nothing to tune: the only setting selects how
/// the fitted model scores itself.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressionParams<F>(LinearRegressionValidParams<F>);

impl<F: Float> Default for LinearRegressionParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a linear regression model
impl<F: Float> LinearRegressionParams<F> {
    /// Create default linear regression hyper parameters
    pub fn new() -> LinearRegressionParams<F> {
        Self(LinearRegressionValidParams {
            total_sum_of_squares: TotalSumOfSquares::default(),
            phantom: PhantomData,
        })
    }

    /// Set the total sum of squares used as denominator of R².
    ///
    /// Defaults to [`TotalSumOfSquares::Predictions`] if not set.
    pub fn total_sum_of_squares(mut self, total_sum_of_squares: TotalSumOfSquares) -> Self {
        self.0.total_sum_of_squares = total_sum_of_squares;
        self
    }
}

impl<F: Float> ParamGuard for LinearRegressionParams<F> {
    type Checked = LinearRegressionValidParams<F>;
    type Error = EstimatorError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// Stopping rule of the gradient descent used by
/// [`LogisticRegression`](super::logistic_regression::LogisticRegression).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoppingRule {
    /// Stop once `max_iterations` steps were taken, or as soon as both
    /// relative gradients `|d_coeff / coeff|` and `|d_intercept / intercept|`
    /// fall below the gradient threshold.
    RelativeGradient,
    /// Historical rule: keep iterating while both relative gradients exceed
    /// the threshold, or while fewer than `max_iterations` steps were taken.
    /// It always performs at least `max_iterations` steps and may run past
    /// them, up to a hard stop at
    /// [`LEGACY_ITERATION_FACTOR`](super::logistic_regression::LEGACY_ITERATION_FACTOR)
    /// times `max_iterations` for samples where both gradients never shrink.
    Legacy,
}

impl Default for StoppingRule {
    fn default() -> Self {
        StoppingRule::RelativeGradient
    }
}

/// A verified hyperparameter set ready for the fitting of a logistic
/// regression model
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegressionValidParams<F> {
    learning_rate: F,
    gradient_threshold: F,
    max_iterations: usize,
    label_epsilon: F,
    stopping_rule: StoppingRule,
}

impl<F: Float> LogisticRegressionValidParams<F> {
    pub fn learning_rate(&self) -> F {
        self.learning_rate
    }

    pub fn gradient_threshold(&self) -> F {
        self.gradient_threshold
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn label_epsilon(&self) -> F {
        self.label_epsilon
    }

    pub fn stopping_rule(&self) -> StoppingRule {
        self.stopping_rule
    }
}

/// A hyper-parameter set during construction
///
/// Configures the gradient descent minimizing the squared error between the
/// thresholded predictions `1{sigmoid(coeff * x + intercept) >= 0.5}` and the
/// binary targets.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegressionParams<F>(LogisticRegressionValidParams<F>);

impl<F: Float> Default for LogisticRegressionParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a logistic regression model
impl<F: Float> LogisticRegressionParams<F> {
    /// Create default logistic regression hyper parameters
    pub fn new() -> LogisticRegressionParams<F> {
        Self(LogisticRegressionValidParams {
            learning_rate: F::cast(0.001),
            gradient_threshold: F::cast(0.01),
            max_iterations: 100,
            label_epsilon: F::cast(DEFAULT_EPSILON),
            stopping_rule: StoppingRule::default(),
        })
    }

    /// Set the step size of the gradient descent.
    ///
    /// Defaults to `0.001` if not set.
    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.0.learning_rate = learning_rate;
        self
    }

    /// Set the convergence threshold on the relative gradients, as a fraction
    /// in `(0, 1)`.
    ///
    /// Defaults to `0.01` if not set.
    pub fn gradient_threshold(mut self, gradient_threshold: F) -> Self {
        self.0.gradient_threshold = gradient_threshold;
        self
    }

    /// Set the maximum number of gradient steps.
    ///
    /// Defaults to `100` if not set.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.0.max_iterations = max_iterations;
        self
    }

    /// Set the tolerance under which two target values are considered to be
    /// the same class.
    ///
    /// Defaults to `1e-6` if not set.
    pub fn label_epsilon(mut self, label_epsilon: F) -> Self {
        self.0.label_epsilon = label_epsilon;
        self
    }

    /// Set the stopping rule of the gradient descent.
    ///
    /// Defaults to [`StoppingRule::RelativeGradient`] if not set.
    pub fn stopping_rule(mut self, stopping_rule: StoppingRule) -> Self {
        self.0.stopping_rule = stopping_rule;
        self
    }
}

impl<F: Float> ParamGuard for LogisticRegressionParams<F> {
    type Checked = LogisticRegressionValidParams<F>;
    type Error = EstimatorError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        let params = &self.0;
        if !(params.learning_rate > F::zero()) {
            Err(EstimatorError::InvalidLearningRate(
                params.learning_rate.to_f32().unwrap_or(f32::NAN),
            ))
        } else if !(params.gradient_threshold > F::zero() && params.gradient_threshold < F::one())
        {
            Err(EstimatorError::InvalidGradientThreshold(
                params.gradient_threshold.to_f32().unwrap_or(f32::NAN),
            ))
        } else if params.max_iterations == 0 {
            Err(EstimatorError::InvalidMaxIterations(params.max_iterations))
        } else if !(params.label_epsilon > F::zero()) {
            Err(EstimatorError::InvalidEpsilon(
                params.label_epsilon.to_f32().unwrap_or(f32::NAN),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
