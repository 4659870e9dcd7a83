use super::{DatasetBase, Records, Targets};
use crate::estimators::error::{EstimatorError, Result};
use ndarray::ArrayView1;

/// This implementation block provides a method for the creation of datasets
/// from a pair of records and targets.
impl<R: Records, T: Targets> From<(R, T)> for DatasetBase<R, T> {
    fn from(data: (R, T)) -> Self {
        DatasetBase {
            records: data.0,
            targets: data.1,
        }
    }
}

/// This implementation block provides methods to get record and target objects
/// from the dataset.
impl<R: Records, T: Targets> DatasetBase<R, T> {
    /// This method instantiates a new dataset from records and targets.
    pub fn new(records: R, targets: T) -> DatasetBase<R, T> {
        DatasetBase { records, targets }
    }

    /// This method is a getter for the targets.
    pub fn targets(&self) -> &T {
        &self.targets
    }

    /// This method is a getter for the records.
    pub fn records(&self) -> &R {
        &self.records
    }

    /// Number of records, regardless of the number of targets.
    pub fn n_samples(&self) -> usize {
        self.records.n_samples()
    }

    /// Views over both sides of the dataset.
    pub fn views(&self) -> (ArrayView1<R::Elem>, ArrayView1<T::Elem>) {
        (self.records.as_records(), self.targets.as_targets())
    }

    /// Checks that records and targets are paired one-to-one and that at least
    /// `min_samples` pairs are available. Returns the number of pairs.
    pub fn check_paired(&self, min_samples: usize) -> Result<usize> {
        let n_records = self.records.n_samples();
        let n_targets = self.targets.n_samples();
        if n_records != n_targets {
            return Err(EstimatorError::MismatchedLengths {
                left: n_records,
                right: n_targets,
            });
        }
        if n_records < min_samples {
            return Err(EstimatorError::NotEnoughSamples {
                expected: min_samples,
                found: n_records,
            });
        }
        Ok(n_records)
    }
}
