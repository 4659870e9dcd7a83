use super::traits::Fit;
use crate::datasets::{DatasetBase, Records, Targets};
use std::error::Error;

/// Validation step between a hyperparameter builder and the estimator it
/// configures.
///
/// Builders such as [`LogisticRegressionParams`](super::hyperparams::LogisticRegressionParams)
/// accept any value through their setters. Only `check_ref()` or `check()`
/// hands out the validated set, and both must apply the same rules.
pub trait ParamGuard {
    /// The validated hyperparameters
    type Checked;
    /// Error returned when a hyperparameter is out of range
    type Error: Error;

    /// Validates the hyperparameters and borrows the validated set
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    /// Validates the hyperparameters and returns the validated set
    fn check(self) -> Result<Self::Checked, Self::Error>;
}

/// Any builder whose validated set can be fitted can be fitted directly: the
/// hyperparameters are checked first and a validation error is returned as a
/// fitting error.
impl<R: Records, T: Targets, E, P: ParamGuard> Fit<R, T, E> for P
where
    P::Checked: Fit<R, T, E>,
    E: Error + From<P::Error>,
{
    type Object = <<P as ParamGuard>::Checked as Fit<R, T, E>>::Object;

    fn fit(&self, dataset: &DatasetBase<R, T>) -> Result<Self::Object, E> {
        let checked = self.check_ref()?;
        checked.fit(dataset)
    }
}
