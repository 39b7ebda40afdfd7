pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0_f64
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Sum of squared deviations from `mean`.
pub fn sum_sq_dev(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum()
}

/// Sample variance (n - 1 denominator), `None` below two values.
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values);
    Some(sum_sq_dev(values, mean) / (values.len() - 1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_basic() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
    }

    #[test]
    fn sum_sq_dev_basic() {
        // deviations -2, 0, 2
        assert_eq!(sum_sq_dev(&[2.0, 4.0, 6.0], 4.0), 8.0);
    }

    #[test]
    fn sample_variance_needs_two() {
        assert_eq!(sample_variance(&[]), None);
        assert_eq!(sample_variance(&[3.0]), None);
    }

    #[test]
    fn sample_variance_known() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((sample_variance(&v).unwrap() - 4.571428571428571).abs() < 1e-10);
    }
}
