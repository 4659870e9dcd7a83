//! Simple regression estimators over one-dimensional samples.
//!
//! Two estimators are provided: an ordinary-least-squares
//! [`LinearRegression`](estimators::linear_regression::LinearRegression) and a
//! gradient-descent [`LogisticRegression`](estimators::logistic_regression::LogisticRegression)
//! for binary classification. Both are configured through a hyperparameter
//! builder and fitted on a [`DatasetBase`](datasets::DatasetBase):
//!
//! ```
//! use ndarray::array;
//! use simplereg::datasets::DatasetBase;
//! use simplereg::estimators::linear_regression::LinearRegression;
//! use simplereg::estimators::traits::Fit;
//!
//! let dataset = DatasetBase::from((array![1., 2., 3., 4.], array![3., 5., 7., 9.]));
//! let model = LinearRegression::params().fit(&dataset).unwrap();
//! assert_eq!(model.predict(&array![5.]), array![11.]);
//! ```

use ndarray::ScalarOperand;

use num_traits::{FromPrimitive, NumAssignOps, NumCast};

use std::cmp::PartialOrd;
use std::fmt;
use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Float point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point
/// number and implement them for 32bit and 64bit float points.
/// Ref: https://github.com/rust-ml/linfa/blob/master/src/dataset/mod.rs#L36
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Sum
    + NumAssignOps
    + for<'a> AddAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> DivAssign<&'a Self>
    + ScalarOperand
    + approx::AbsDiffEq<Epsilon = Self>
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

pub mod datasets;
pub mod estimators;
pub mod helpers;
pub mod maths;

pub use estimators::error::{EstimatorError, Result};
