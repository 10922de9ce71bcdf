use anyhow::{Context, Result};
use indra_grid::{AggOp, Resolution};
use indra_io::{read_precipitation_grid, write_field, LoaderConfig};
use indra_spi::{compute_spi, SpiConfig};
use tracing::info;

use crate::cli::SpiArgs;
use crate::config::IndraConfig;

pub fn run(args: SpiArgs, config: &IndraConfig) -> Result<()> {
    let loader = LoaderConfig::new()
        .with_precip_aliases(config.io.precip_aliases.clone())
        .with_sentinel(config.io.sentinel);
    let daily = read_precipitation_grid(&args.input, &loader)
        .with_context(|| format!("failed to load archive {}", args.input.display()))?;

    let monthly = daily.aggregate(Resolution::Monthly, AggOp::Sum);

    let scale = args.scale.unwrap_or(config.spi.scale);
    let spi_config = SpiConfig::new()
        .with_scale(scale)
        .with_clamp(config.spi.clamp);
    let field = compute_spi(&monthly, &spi_config)?;

    info!(scale, n_time = field.n_time(), "computed SPI field");
    write_field(&args.output, "spi", &field)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    Ok(())
}
