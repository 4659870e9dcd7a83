extern crate simplereg;

use simplereg::{
    datasets::DatasetBase,
    estimators::{logistic_regression::LogisticRegression, traits::Fit},
    helpers::test_helpers::generate_random_labels,
};

fn main() {
    let (x, y) = generate_random_labels(200, 0.5);
    let dataset = DatasetBase::from((x, y));

    println!("#### Fitting simple logistic regression");
    let model = LogisticRegression::params()
        .learning_rate(0.05)
        .max_iterations(1000)
        .fit(&dataset)
        .unwrap();

    println!(
        "coefficient: {:.4}, intercept: {:.4}, iterations: {}, converged: {}",
        model.coefficient(),
        model.intercept(),
        model.n_iterations(),
        model.converged()
    );
    println!("accuracy: {:.3}", model.score(&dataset).unwrap());
}
