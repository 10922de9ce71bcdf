use anyhow::{Context, Result};
use indra_extremes::{count_days_above, percentile_total};
use indra_io::{read_precipitation_grid, write_field, LoaderConfig};
use indra_trend::series_trend;
use tracing::{info, warn};

use crate::cli::ExtremesArgs;
use crate::config::IndraConfig;

pub fn run(args: ExtremesArgs, config: &IndraConfig) -> Result<()> {
    let loader = LoaderConfig::new()
        .with_precip_aliases(config.io.precip_aliases.clone())
        .with_sentinel(config.io.sentinel);
    let daily = read_precipitation_grid(&args.input, &loader)
        .with_context(|| format!("failed to load archive {}", args.input.display()))?;

    let (name, yearly) = if let Some(p) = args.percentile {
        ("extreme_total", percentile_total(&daily, p, None)?)
    } else {
        let threshold = args.threshold.unwrap_or(config.extremes.threshold);
        ("days_above", count_days_above(&daily, threshold)?)
    };

    info!(index = name, n_years = yearly.n_time(), "computed extremes index");
    write_field(&args.output, name, &yearly)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    match series_trend(&yearly.spatial_mean()) {
        Some(test) => info!(
            slope = test.slope,
            p_value = test.p_value,
            label = ?test.label,
            "area-mean index trend"
        ),
        None => warn!("index series has too few samples for a trend test"),
    }

    Ok(())
}
