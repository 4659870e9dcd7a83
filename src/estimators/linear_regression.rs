use log::{debug, warn};
use ndarray::{Array1, ArrayView1};
use ndarray_stats::{DeviationExt, SummaryStatisticsExt};
use num_traits::Signed;

use super::error::{EstimatorError, Result};
use super::hyperparams::{LinearRegressionParams, LinearRegressionValidParams, TotalSumOfSquares};
use super::traits::Fit;
use crate::datasets::{DatasetBase, Records, Targets};
use crate::maths;
use crate::Float;

/// Simple linear regression
///
/// The estimator fits `y = coefficient * x + intercept` by ordinary least
/// squares, in closed form.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression<F> {
    coefficient: F,
    intercept: F,
    total_sum_of_squares: TotalSumOfSquares,
}

impl<F: Float> LinearRegression<F> {
    /// This method instantiates a linear regression estimator with default
    /// parameters.
    pub fn params() -> LinearRegressionParams<F> {
        LinearRegressionParams::new()
    }

    /// This method is a getter for the slope of the fitted line. It is NaN
    /// when all training records were identical.
    pub fn coefficient(&self) -> F {
        self.coefficient
    }

    /// This method is a getter for the intercept of the fitted line.
    pub fn intercept(&self) -> F {
        self.intercept
    }

    pub fn total_sum_of_squares(&self) -> TotalSumOfSquares {
        self.total_sum_of_squares
    }

    /// Predicts `coefficient * x + intercept` for every record of `x`.
    pub fn predict<R: Records<Elem = F>>(&self, x: &R) -> Array1<F> {
        maths::linear(&x.as_records(), self.coefficient, self.intercept)
    }

    /// Returns the coefficient of determination R² of the predictions on the
    /// dataset records with respect to its targets.
    ///
    /// The residual sum of squares is divided by the total sum of squares
    /// selected with
    /// [`LinearRegressionParams::total_sum_of_squares`]. A zero total sum of
    /// squares yields a NaN or infinite score.
    pub fn score<R: Records<Elem = F>, T: Targets<Elem = F>>(
        &self,
        dataset: &DatasetBase<R, T>,
    ) -> Result<F>
    where
        F: Signed,
    {
        let n_samples = dataset.check_paired(1)?;
        let (x, y) = dataset.views();
        let y_pred = self.predict(&x);

        let ss_res = y
            .sq_l2_dist(&y_pred)
            .map_err(|_| EstimatorError::MismatchedLengths {
                left: y.len(),
                right: y_pred.len(),
            })?;
        let ss_tot = match self.total_sum_of_squares {
            TotalSumOfSquares::Predictions => {
                let sum_pred = maths::sum(&y_pred);
                maths::dot(&y_pred, &y_pred) - sum_pred * sum_pred / F::cast(n_samples)
            }
            TotalSumOfSquares::Targets => {
                let variance = y
                    .central_moment(2)
                    .map_err(|_| EstimatorError::NotEnoughSamples {
                        expected: 1,
                        found: 0,
                    })?;
                variance * F::cast(n_samples)
            }
        };

        Ok(F::one() - ss_res / ss_tot)
    }
}

/// Closed-form least-squares estimates of the slope and intercept.
///
/// A zero denominator (all records equal) yields a NaN slope, which then
/// propagates to the intercept.
pub fn least_squares<F: Float>(x: ArrayView1<F>, y: ArrayView1<F>) -> (F, F) {
    let n_samples = F::cast(x.len());
    let sx = maths::sum(&x);
    let sy = maths::sum(&y);
    let sxx = maths::dot(&x, &x);
    let sxy = maths::dot(&x, &y);

    let num = n_samples * sxy - sx * sy;
    let denom = n_samples * sxx - sx * sx;

    let coefficient = if denom != F::zero() {
        num / denom
    } else {
        warn!("Records have no spread, the least-squares slope is undefined.");
        F::nan()
    };
    let intercept = (sy - coefficient * sx) / n_samples;

    (coefficient, intercept)
}

/// This implements the ordinary least-squares fit of a [`LinearRegression`].
impl<F: Float, R: Records<Elem = F>, T: Targets<Elem = F>> Fit<R, T, EstimatorError>
    for LinearRegressionValidParams<F>
{
    type Object = LinearRegression<F>;

    /// Fails if records and targets differ in length or if fewer than two
    /// samples are given.
    fn fit(&self, dataset: &DatasetBase<R, T>) -> Result<Self::Object> {
        let n_samples = dataset.check_paired(2)?;
        let (x, y) = dataset.views();
        let (coefficient, intercept) = least_squares(x, y);

        debug!(
            "Fitted {} samples: coefficient {}, intercept {}",
            n_samples, coefficient, intercept
        );

        Ok(LinearRegression {
            coefficient,
            intercept,
            total_sum_of_squares: self.total_sum_of_squares(),
        })
    }
}
