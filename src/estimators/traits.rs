use crate::datasets::{DatasetBase, Records, Targets};

/// Fit trait
///
/// The fittable trait allows an estimator to be fitted to a dataset (a pair of
/// records and targets). The fitted object holds the estimated parameters and
/// is the only handle through which predictions can be made.
pub trait Fit<R: Records, T: Targets, E: std::error::Error> {
    type Object;

    fn fit(&self, dataset: &DatasetBase<R, T>) -> Result<Self::Object, E>;
}
