use super::*;
use crate::estimators::error::EstimatorError;
use ndarray::{array, Array1};

#[test]
fn test_dataset_from_tuple() {
    let x = array![1., 2., 3.];
    let y = array![0, 1, 1];
    let dataset = DatasetBase::from((x.view(), y.view()));
    assert_eq!(dataset.n_samples(), 3);
    assert_eq!(dataset.records().as_records(), x.view());
    assert_eq!(dataset.targets().as_targets(), y.view());
}

#[test]
fn test_check_paired() {
    let dataset: Dataset<f64, f64> = DatasetBase::new(array![1., 2.], array![3., 4.]);
    assert_eq!(dataset.check_paired(2), Ok(2));
}

#[test]
fn test_check_paired_mismatched_lengths() {
    let dataset = DatasetBase::new(array![1., 2., 3.], array![3., 4.]);
    assert_eq!(
        dataset.check_paired(2),
        Err(EstimatorError::MismatchedLengths { left: 3, right: 2 })
    );
}

#[test]
fn test_check_paired_not_enough_samples() {
    let dataset = DatasetBase::new(Array1::<f64>::zeros(1), Array1::<f64>::zeros(1));
    assert_eq!(
        dataset.check_paired(2),
        Err(EstimatorError::NotEnoughSamples {
            expected: 2,
            found: 1
        })
    );
}

#[test]
fn test_check_paired_reports_lengths_before_size() {
    let dataset = DatasetBase::new(Array1::<f64>::zeros(0), Array1::<f64>::zeros(1));
    assert!(matches!(
        dataset.check_paired(1),
        Err(EstimatorError::MismatchedLengths { .. })
    ));
}
