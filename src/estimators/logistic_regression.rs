use log::{debug, trace, warn};
use ndarray::{Array1, ArrayView1};

use super::error::{EstimatorError, Result};
use super::hyperparams::{LogisticRegressionParams, LogisticRegressionValidParams, StoppingRule};
use super::traits::Fit;
use crate::datasets::{DatasetBase, Records, Targets};
use crate::maths;
use crate::Float;

/// Hard stop of [`StoppingRule::Legacy`], as a multiple of `max_iterations`.
pub const LEGACY_ITERATION_FACTOR: usize = 10;

/// Simple logistic regression
///
/// Binary classifier predicting label `1` when
/// `sigmoid(coefficient * x + intercept) >= 0.5` and `0` otherwise. The
/// parameters are estimated by gradient descent.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression<F> {
    coefficient: F,
    intercept: F,
    n_iterations: usize,
    converged: bool,
}

impl<F: Float> LogisticRegression<F> {
    /// This method instantiates a logistic regression estimator with default
    /// parameters for the gradient descent.
    pub fn params() -> LogisticRegressionParams<F> {
        LogisticRegressionParams::new()
    }

    /// This method is a getter for the coefficient of the fitted logit.
    pub fn coefficient(&self) -> F {
        self.coefficient
    }

    /// This method is a getter for the intercept of the fitted logit.
    pub fn intercept(&self) -> F {
        self.intercept
    }

    /// Number of gradient steps performed during the fit.
    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    /// Whether both relative gradients were under the threshold when the
    /// descent stopped.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Probability of label `1` for every record of `x`.
    pub fn predict_proba<R: Records<Elem = F>>(&self, x: &R) -> Array1<F> {
        maths::sigmoid(&maths::linear(
            &x.as_records(),
            self.coefficient,
            self.intercept,
        ))
    }

    /// Predicted label, `0` or `1`, for every record of `x`.
    pub fn predict<R: Records<Elem = F>>(&self, x: &R) -> Array1<usize> {
        predict_labels(x.as_records(), self.coefficient, self.intercept)
    }

    /// Returns the accuracy of the predictions on the dataset records with
    /// respect to its labels.
    pub fn score<R: Records<Elem = F>, T: Targets<Elem = usize>>(
        &self,
        dataset: &DatasetBase<R, T>,
    ) -> Result<F> {
        let (x, y) = dataset.views();
        let y_pred = self.predict(&x);
        maths::accuracy_score(&y, &y_pred)
    }
}

fn predict_labels<F: Float>(x: ArrayView1<F>, coefficient: F, intercept: F) -> Array1<usize> {
    let half = F::cast(0.5);
    maths::sigmoid(&maths::linear(&x, coefficient, intercept))
        .mapv(|proba| if proba >= half { 1 } else { 0 })
}

/// Gradient magnitude relative to the parameter it updates. A null gradient
/// is always small, a non-null gradient on a null parameter never is.
fn relative_gradient<F: Float>(gradient: F, parameter: F) -> F {
    if gradient == F::zero() {
        F::zero()
    } else if parameter == F::zero() {
        F::infinity()
    } else {
        (gradient / parameter).abs()
    }
}

/// This function checks that the labels hold exactly the two classes `0` and
/// `1`, up to `epsilon`.
pub fn check_binary_targets<F: Float>(y: ArrayView1<usize>, epsilon: F) -> Result<()> {
    let labels = y.mapv(|label| F::cast(label));
    let classes = maths::distinct(&labels, epsilon);
    if classes.len() != 2 {
        return Err(EstimatorError::NotTwoClasses(classes.len()));
    }
    if classes
        .iter()
        .any(|&class| class != F::zero() && class != F::one())
    {
        return Err(EstimatorError::NonBinaryTargets);
    }
    Ok(())
}

/// This function runs the gradient descent of a [`LogisticRegression`] from
/// null parameters.
///
/// At each step the labels predicted by the current parameters are compared
/// to the targets `y`, and the parameters move against the mean gradients
/// `d_coefficient = mean(x * r)` and `d_intercept = mean(r)` of the residuals
/// `r = y_pred - y`.
pub fn gradient_descent<F: Float>(
    x: ArrayView1<F>,
    y: ArrayView1<F>,
    params: &LogisticRegressionValidParams<F>,
) -> LogisticRegression<F> {
    let n_samples = F::cast(x.len());
    let learning_rate = params.learning_rate();
    let threshold = params.gradient_threshold();
    let max_iterations = params.max_iterations();
    let hard_stop = max_iterations.saturating_mul(LEGACY_ITERATION_FACTOR);

    let mut coefficient = F::zero();
    let mut intercept = F::zero();
    let mut n_iterations = 0;
    let mut converged;

    loop {
        let y_pred = predict_labels(x, coefficient, intercept).mapv(|label| F::cast(label));
        let residuals = &y_pred - &y;

        let d_coefficient = maths::dot(&x, &residuals) / n_samples;
        let d_intercept = maths::sum(&residuals) / n_samples;
        coefficient -= learning_rate * d_coefficient;
        intercept -= learning_rate * d_intercept;
        n_iterations += 1;

        trace!(
            "Iteration {}: coefficient {} (gradient {}), intercept {} (gradient {})",
            n_iterations,
            coefficient,
            d_coefficient,
            intercept,
            d_intercept
        );

        converged = relative_gradient(d_coefficient, coefficient) <= threshold
            && relative_gradient(d_intercept, intercept) <= threshold;

        let stop = match params.stopping_rule() {
            StoppingRule::RelativeGradient => converged || n_iterations >= max_iterations,
            StoppingRule::Legacy => {
                let both_large = (d_coefficient / coefficient).abs() > threshold
                    && (d_intercept / intercept).abs() > threshold;
                !(both_large || n_iterations < max_iterations) || n_iterations >= hard_stop
            }
        };
        if stop {
            break;
        }
    }

    if converged {
        debug!("Converged after {} iterations.", n_iterations);
    } else {
        warn!(
            "Stopped after {} iterations without reaching the gradient threshold {}.",
            n_iterations, threshold
        );
    }

    LogisticRegression {
        coefficient,
        intercept,
        n_iterations,
        converged,
    }
}

/// This implements the gradient descent fit of a [`LogisticRegression`] on
/// binary labels.
impl<F: Float, R: Records<Elem = F>, T: Targets<Elem = usize>> Fit<R, T, EstimatorError>
    for LogisticRegressionValidParams<F>
{
    type Object = LogisticRegression<F>;

    /// Fails if records and labels differ in length, if fewer than two samples
    /// are given, or if the labels are not exactly the classes `0` and `1`.
    fn fit(&self, dataset: &DatasetBase<R, T>) -> Result<Self::Object> {
        let n_samples = dataset.check_paired(2)?;
        let (x, y) = dataset.views();
        check_binary_targets(y, self.label_epsilon())?;

        debug!(
            "Fitting {} samples: learning rate {}, gradient threshold {}, max iterations {}",
            n_samples,
            self.learning_rate(),
            self.gradient_threshold(),
            self.max_iterations()
        );

        let y = y.mapv(|label| F::cast(label));
        Ok(gradient_descent(x, y.view(), self))
    }
}
