//! Sen's slope estimator.

/// Median of all pairwise slopes `(x[j] - x[i]) / (j - i)` for `i < j`.
///
/// Expects a finite series (the caller drops missing values first);
/// positions refer to the compacted series. Returns NaN for fewer than
/// 2 values.
pub(crate) fn sen_slope(x: &[f64]) -> f64 {
    let n = x.len();
    if n < 2 {
        return f64::NAN;
    }
    let mut slopes = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            slopes.push((x[j] - x[i]) / (j - i) as f64);
        }
    }
    indra_stats::median(&slopes).unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linear_series_recovers_rate() {
        let x: Vec<f64> = (0..10).map(|i| 3.0 + 1.5 * i as f64).collect();
        assert_relative_eq!(sen_slope(&x), 1.5);
    }

    #[test]
    fn constant_series_zero() {
        assert_relative_eq!(sen_slope(&[4.0, 4.0, 4.0, 4.0]), 0.0);
    }

    #[test]
    fn robust_to_single_outlier() {
        // One wild value barely moves the median of pairwise slopes.
        let mut x: Vec<f64> = (0..20).map(|i| i as f64).collect();
        x[10] = 500.0;
        let slope = sen_slope(&x);
        assert_relative_eq!(slope, 1.0, epsilon = 0.1);
    }

    #[test]
    fn short_input_nan() {
        assert!(sen_slope(&[1.0]).is_nan());
        assert!(sen_slope(&[]).is_nan());
    }
}
