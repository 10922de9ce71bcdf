//! The Mann-Kendall monotonic trend test.

use statrs::function::erf::erfc;

use crate::sen::sen_slope;

/// Minimum number of non-missing samples for the test to be defined.
pub const MIN_SAMPLES: usize = 3;

/// Direction of a detected trend.
///
/// The label is purely directional (the sign of the S statistic);
/// statistical significance is applied separately via
/// [`crate::TrendSurface::significant_slope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendLabel {
    /// S > 0.
    Increasing,
    /// S < 0.
    Decreasing,
    /// S = 0.
    NoTrend,
}

impl TrendLabel {
    fn from_s(s: i64) -> Self {
        match s.cmp(&0) {
            std::cmp::Ordering::Greater => TrendLabel::Increasing,
            std::cmp::Ordering::Less => TrendLabel::Decreasing,
            std::cmp::Ordering::Equal => TrendLabel::NoTrend,
        }
    }
}

/// Result of the Mann-Kendall test on a single series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MkTest {
    /// Mann-Kendall S statistic: sum of pairwise signs.
    pub s: i64,
    /// Variance of S with the standard tie correction.
    pub var_s: f64,
    /// Continuity-corrected standardized statistic.
    pub z: f64,
    /// Two-sided p-value from the normal approximation.
    pub p_value: f64,
    /// Kendall's tau (S normalized by the pair count).
    pub tau: f64,
    /// Sen's slope: median of all pairwise rate estimates.
    pub slope: f64,
    /// Directional trend label from the sign of S.
    pub label: TrendLabel,
}

/// Run the Mann-Kendall trend test on a series.
///
/// Missing (non-finite) entries are dropped before scoring; pairwise
/// positions refer to the compacted series. Returns `None` when fewer
/// than [`MIN_SAMPLES`] finite values remain — insufficient data is an
/// explicit absent result, never a fabricated statistic.
///
/// An all-identical series yields S = 0, slope = 0, p = 1 and
/// [`TrendLabel::NoTrend`].
pub fn mann_kendall(series: &[f64]) -> Option<MkTest> {
    let x = indra_stats::finite(series);
    let n = x.len();
    if n < MIN_SAMPLES {
        return None;
    }

    let mut s: i64 = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            let d = x[j] - x[i];
            if d > 0.0 {
                s += 1;
            } else if d < 0.0 {
                s -= 1;
            }
        }
    }

    let var_s = variance_s(&x);

    // Continuity correction; a zero variance (all values tied) pins z at 0.
    let z = if var_s > 0.0 {
        match s.cmp(&0) {
            std::cmp::Ordering::Greater => (s as f64 - 1.0) / var_s.sqrt(),
            std::cmp::Ordering::Less => (s as f64 + 1.0) / var_s.sqrt(),
            std::cmp::Ordering::Equal => 0.0,
        }
    } else {
        0.0
    };

    // Two-sided: p = 2 * (1 - Phi(|z|)) = erfc(|z| / sqrt(2)).
    let p_value = erfc(z.abs() / std::f64::consts::SQRT_2).clamp(0.0, 1.0);

    let n_pairs = (n * (n - 1) / 2) as f64;
    let tau = s as f64 / n_pairs;

    Some(MkTest {
        s,
        var_s,
        z,
        p_value,
        tau,
        slope: sen_slope(&x),
        label: TrendLabel::from_s(s),
    })
}

/// Variance of S with the correction for tied groups:
/// `[n(n-1)(2n+5) - sum_g t_g(t_g-1)(2t_g+5)] / 18`.
fn variance_s(x: &[f64]) -> f64 {
    let n = x.len() as f64;

    let mut sorted = x.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut tie_term = 0.0;
    let mut run = 1usize;
    for k in 1..=sorted.len() {
        if k < sorted.len() && sorted[k] == sorted[k - 1] {
            run += 1;
        } else {
            if run > 1 {
                let t = run as f64;
                tie_term += t * (t - 1.0) * (2.0 * t + 5.0);
            }
            run = 1;
        }
    }

    (n * (n - 1.0) * (2.0 * n + 5.0) - tie_term) / 18.0
}
