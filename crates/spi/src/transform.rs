//! Per-pixel SPI pipeline: roll, group by calendar month, fit, transform.

use statrs::distribution::{ContinuousCDF, Gamma};
use statrs::function::erf::erf_inv;

use crate::config::{FitMethod, SpiConfig};
use crate::gamma::{gamma_dist, GammaParams};
use crate::rolling::rolling_sum;

/// Epsilon constant used for clamping CDF probabilities away from 0 and 1.
const EPS: f64 = 1e-12;

/// Inverse standard-normal CDF.
fn probit(p: f64) -> f64 {
    std::f64::consts::SQRT_2 * erf_inv(2.0 * p - 1.0)
}

/// Mixed-distribution month-group model: probability mass `q` at zero
/// combined with a Gamma over the positive accumulations, so
/// `F(x) = q + (1 - q) * G(x)` for `x > 0` and `F(0) = q`.
struct MonthModel {
    q: f64,
    dist: Gamma,
}

impl MonthModel {
    fn cdf(&self, x: f64) -> f64 {
        if x > 0.0 {
            self.q + (1.0 - self.q) * self.dist.cdf(x)
        } else {
            self.q
        }
    }
}

/// Fit the mixed model to one calendar-month group of accumulations.
///
/// Returns `None` on degenerate input (too few positive values, constant
/// samples, invalid parameter estimates); the caller leaves the group
/// missing and continues with the other months.
fn fit_month_group(values: &[f64], config: &SpiConfig) -> Option<MonthModel> {
    let n = values.len();
    let zeros = values.iter().filter(|&&v| v == 0.0).count();
    let q = zeros as f64 / n as f64;

    let positives: Vec<f64> = values.iter().copied().filter(|&v| v > 0.0).collect();
    if positives.len() < config.min_samples() {
        return None;
    }

    let np = positives.len() as f64;
    let mean = positives.iter().sum::<f64>() / np;
    let params = match config.fit_method() {
        FitMethod::ThomMle => {
            let mean_ln = positives.iter().map(|v| v.ln()).sum::<f64>() / np;
            GammaParams::from_thom(mean, mean_ln)?
        }
        FitMethod::Mme => {
            let var = indra_stats::variance(&positives);
            GammaParams::from_moments(mean, var)?
        }
    };

    let dist = gamma_dist(&params).ok()?;
    Some(MonthModel { q, dist })
}

/// Compute the SPI series for one pixel.
///
/// `months` gives the calendar month (1..=12) of every timestep. Returns
/// the index series (NaN where undefined) and the number of calendar-month
/// groups whose fit failed.
pub(crate) fn spi_series(
    series: &[f64],
    months: &[u8],
    config: &SpiConfig,
) -> (Vec<f64>, usize) {
    let rolled = rolling_sum(series, config.scale());
    let n = rolled.len();
    let mut out = vec![f64::NAN; n];
    let mut failed_groups = 0usize;

    for m in 1u8..=12 {
        let indices: Vec<usize> = (0..n)
            .filter(|&t| months[t] == m && rolled[t].is_finite())
            .collect();
        if indices.is_empty() {
            continue;
        }
        let group: Vec<f64> = indices.iter().map(|&t| rolled[t]).collect();

        match fit_month_group(&group, config) {
            Some(model) => {
                for (&t, &x) in indices.iter().zip(group.iter()) {
                    let u = model.cdf(x).clamp(EPS, 1.0 - EPS);
                    out[t] = probit(u).clamp(-config.clamp(), config.clamp());
                }
            }
            None => failed_groups += 1,
        }
    }

    (out, failed_groups)
}
