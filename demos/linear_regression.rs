extern crate simplereg;

use simplereg::{
    datasets::DatasetBase,
    estimators::{
        hyperparams::TotalSumOfSquares, linear_regression::LinearRegression, traits::Fit,
    },
    helpers::test_helpers::generate_random_data,
};

fn main() {
    let (x, y) = generate_random_data(200, 1.5, 3., 0.8);
    let dataset = DatasetBase::from((x, y));

    println!("#### Fitting simple linear regression");
    let model = LinearRegression::params()
        .total_sum_of_squares(TotalSumOfSquares::Targets)
        .fit(&dataset)
        .unwrap();

    println!(
        "coefficient: {:.4}, intercept: {:.4}, R²: {:.4}",
        model.coefficient(),
        model.intercept(),
        model.score(&dataset).unwrap()
    );
}
