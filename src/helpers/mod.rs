/// This module contains helpers functions to efficiently write tests.
pub mod test_helpers {
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::{Array1, ArrayView1};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    pub fn assert_array_all_close<F>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    pub fn fill_random_vector(capacity: usize, seed: u64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., 1.).unwrap();

        let mut data_x: Vec<f64> = Vec::with_capacity(capacity);
        for _ in 0..data_x.capacity() {
            data_x.push(normal.sample(&mut r));
        }
        data_x
    }

    /// Draws `n_samples` standard normal records and targets
    /// `coefficient * x + intercept + noise_std * e` with standard normal `e`.
    pub fn generate_random_data(
        n_samples: usize,
        coefficient: f64,
        intercept: f64,
        noise_std: f64,
    ) -> (Array1<f64>, Array1<f64>) {
        let x = Array1::from_vec(fill_random_vector(n_samples, 42));
        let noise = Array1::from_vec(fill_random_vector(n_samples, 43));
        let y = x.mapv(|xi| coefficient * xi + intercept) + noise * noise_std;
        (x, y)
    }

    /// Draws `n_samples` standard normal records labelled `1` when above
    /// `boundary` and `0` otherwise.
    pub fn generate_random_labels(n_samples: usize, boundary: f64) -> (Array1<f64>, Array1<usize>) {
        let x = Array1::from_vec(fill_random_vector(n_samples, 42));
        let y = x.mapv(|xi| if xi > boundary { 1 } else { 0 });
        (x, y)
    }
}
