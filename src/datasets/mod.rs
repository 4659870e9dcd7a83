use ndarray::{Array1, ArrayView1};

mod impl_datasets;
mod impl_records;
mod impl_targets;

#[cfg(test)]
mod tests;

/// A dataset pairs one-dimensional records (the `x` sample) with targets (the
/// `y` sample). No validation happens at construction: estimators check the
/// pairing when they consume the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetBase<R, T>
where
    R: Records,
    T: Targets,
{
    pub records: R,
    pub targets: T,
}

/// Owned dataset with records of type `F` and targets of type `T`.
pub type Dataset<F, T> = DatasetBase<Array1<F>, Array1<T>>;

/// One-dimensional sample of input values.
pub trait Records: Sized {
    type Elem;

    fn n_samples(&self) -> usize;
    fn as_records(&self) -> ArrayView1<Self::Elem>;
}

/// One-dimensional sample of target values, either continuous responses or
/// class labels.
pub trait Targets: Sized {
    type Elem;

    fn n_samples(&self) -> usize;
    fn as_targets(&self) -> ArrayView1<Self::Elem>;
}
