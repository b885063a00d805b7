#[cfg(test)]
#[path = "../../tests/unit/utils/math_test.rs"]
mod math_test;

/// Returns coefficient of variation: standard deviation divided by mean.
/// Zero mean gives zero to keep the value usable as a convergence signal.
pub fn get_cv(values: &[f64]) -> f64 {
    let (variance, mean) = get_variance_mean(values);
    if mean == 0. {
        return 0.;
    }

    variance.sqrt() / mean
}

/// Gets mean of values using given slice.
pub fn get_mean_slice(values: &[f64]) -> f64 {
    if values.is_empty() { 0. } else { values.iter().sum::<f64>() / values.len() as f64 }
}

/// Returns variance and mean.
fn get_variance_mean(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0., 0.);
    }

    let mean = get_mean_slice(values);

    let (first, second) = values.iter().fold((0., 0.), |acc, v| {
        let dev = v - mean;
        (acc.0 + dev * dev, acc.1 + dev)
    });

    // NOTE Bessel's correction is not used here
    ((first - (second * second / values.len() as f64)) / (values.len() as f64), mean)
}
