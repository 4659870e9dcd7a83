use super::Targets;
use ndarray::{ArrayBase, ArrayView1, Data, Ix1};

impl<F, S: Data<Elem = F>> Targets for ArrayBase<S, Ix1> {
    type Elem = F;

    fn n_samples(&self) -> usize {
        self.len()
    }

    fn as_targets(&self) -> ArrayView1<F> {
        self.view()
    }
}

impl<T: Targets> Targets for &T {
    type Elem = T::Elem;

    fn n_samples(&self) -> usize {
        (*self).n_samples()
    }

    fn as_targets(&self) -> ArrayView1<Self::Elem> {
        (*self).as_targets()
    }
}
