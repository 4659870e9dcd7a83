use super::Records;
use ndarray::{ArrayBase, ArrayView1, Data, Ix1};

impl<F, S: Data<Elem = F>> Records for ArrayBase<S, Ix1> {
    type Elem = F;

    fn n_samples(&self) -> usize {
        self.len()
    }

    fn as_records(&self) -> ArrayView1<F> {
        self.view()
    }
}

impl<R: Records> Records for &R {
    type Elem = R::Elem;

    fn n_samples(&self) -> usize {
        (*self).n_samples()
    }

    fn as_records(&self) -> ArrayView1<Self::Elem> {
        (*self).as_records()
    }
}
