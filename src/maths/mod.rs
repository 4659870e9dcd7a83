//! Stateless numeric helpers over one-dimensional samples.
//!
//! Every function borrows its input and returns a freshly allocated output.

use ndarray::{Array1, ArrayBase, Data, Ix1};
use std::cmp::Ordering;

use crate::estimators::error::{EstimatorError, Result};
use crate::Float;


/// Default tolerance of [`distinct`].
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Sum of the values of `x`.
pub fn sum<F: Float, S: Data<Elem = F>>(x: &ArrayBase<S, Ix1>) -> F {
    x.sum()
}

/// Inner product of `x` and `y`, truncated to the shortest of both.
pub fn dot<F: Float, S: Data<Elem = F>, T: Data<Elem = F>>(
    x: &ArrayBase<S, Ix1>,
    y: &ArrayBase<T, Ix1>,
) -> F {
    x.iter().zip(y.iter()).map(|(&xi, &yi)| xi * yi).sum()
}

/// Elementwise linear transform `a * x + b`.
pub fn linear<F: Float, S: Data<Elem = F>>(x: &ArrayBase<S, Ix1>, a: F, b: F) -> Array1<F> {
    x.mapv(|xi| a * xi + b)
}

/// The logistic function `1 / (1 + exp(-z))`.
pub fn sigmoid_scalar<F: Float>(z: F) -> F {
    F::one() / (F::one() + (-z).exp())
}

/// Elementwise logistic function.
pub fn sigmoid<F: Float, S: Data<Elem = F>>(x: &ArrayBase<S, Ix1>) -> Array1<F> {
    x.mapv(sigmoid_scalar)
}

/// Elementwise reciprocal `1 / x`. Zeros map to infinities.
pub fn reciprocal<F: Float, S: Data<Elem = F>>(x: &ArrayBase<S, Ix1>) -> Array1<F> {
    x.mapv(|xi| xi.recip())
}

/// Elementwise natural logarithm. Negative values map to NaN, zeros to
/// negative infinity.
pub fn log<F: Float, S: Data<Elem = F>>(x: &ArrayBase<S, Ix1>) -> Array1<F> {
    x.mapv(|xi| xi.ln())
}

/// Elementwise power `x^p`.
pub fn pow<F: Float, S: Data<Elem = F>>(x: &ArrayBase<S, Ix1>, p: F) -> Array1<F> {
    x.mapv(|xi| xi.powf(p))
}

/// Sorted distinct values of `x` up to `epsilon`.
///
/// Values are scanned in increasing order and a value opens a new class when
/// it lies at least `epsilon` away from the representative of the current
/// class, so two values strictly closer than `epsilon` share a class. Each
/// class is represented by its smallest member. NaN values are dropped.
pub fn distinct<F: Float, S: Data<Elem = F>>(x: &ArrayBase<S, Ix1>, epsilon: F) -> Vec<F> {
    let mut sorted: Vec<F> = x.iter().copied().filter(|xi| !xi.is_nan()).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mut classes: Vec<F> = Vec::with_capacity(sorted.len());
    for value in sorted {
        match classes.last() {
            Some(&last) if (value - last).abs() < epsilon => {}
            _ => classes.push(value),
        }
    }
    classes
}

/// Fraction of positions where `y_true` and `y_pred` agree.
pub fn accuracy_score<F, A, S, T>(
    y_true: &ArrayBase<S, Ix1>,
    y_pred: &ArrayBase<T, Ix1>,
) -> Result<F>
where
    F: Float,
    A: PartialEq,
    S: Data<Elem = A>,
    T: Data<Elem = A>,
{
    if y_true.len() != y_pred.len() {
        return Err(EstimatorError::MismatchedLengths {
            left: y_true.len(),
            right: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(EstimatorError::NotEnoughSamples {
            expected: 1,
            found: 0,
        });
    }
    let n_correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(truth, pred)| truth == pred)
        .count();
    Ok(F::cast(n_correct) / F::cast(y_true.len()))
}
