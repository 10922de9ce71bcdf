use anyhow::{Context, Result};
use chrono::Local;
use indra_grid::AggOp;
use indra_io::{read_precipitation_grid, write_field, LoaderConfig};
use tracing::info;

use crate::cli::AggregateArgs;
use crate::config::IndraConfig;

pub fn run(args: AggregateArgs, config: &IndraConfig) -> Result<()> {
    let loader = LoaderConfig::new()
        .with_precip_aliases(config.io.precip_aliases.clone())
        .with_sentinel(config.io.sentinel);
    let daily = read_precipitation_grid(&args.input, &loader)
        .with_context(|| format!("failed to load archive {}", args.input.display()))?;

    let base = if args.hydro_year {
        daily.hydrological_year_shift(Local::now().date_naive())
    } else {
        daily
    };

    let derived = base.aggregate(args.resolution.into(), AggOp::Sum);
    info!(
        n_time = derived.n_time(),
        resolution = ?args.resolution,
        hydro_year = args.hydro_year,
        "derived resolution"
    );

    write_field(&args.output, "tp", &derived)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    Ok(())
}
