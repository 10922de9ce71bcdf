use anyhow::{Context, Result};
use chrono::Local;
use indra_grid::{AggOp, Resolution, Season};
use indra_io::{read_precipitation_grid, write_surface, LoaderConfig};
use indra_trend::{pointwise_trend, series_trend};
use tracing::{info, warn};

use crate::cli::TrendArgs;
use crate::config::IndraConfig;

pub fn run(args: TrendArgs, config: &IndraConfig) -> Result<()> {
    let loader = LoaderConfig::new()
        .with_precip_aliases(config.io.precip_aliases.clone())
        .with_sentinel(config.io.sentinel);
    let mut grid = read_precipitation_grid(&args.input, &loader)
        .with_context(|| format!("failed to load archive {}", args.input.display()))?;

    if let Some(name) = &args.season {
        let season: Season = name.parse()?;
        if season.spans_year_boundary() {
            grid = grid.hydrological_year_shift(Local::now().date_naive());
        }
        grid = grid
            .select_months(season.months())
            .with_context(|| format!("season '{season}' has no overlap with the record"))?;
    }

    if args.start_year.is_some() || args.end_year.is_some() {
        let (first, last) = grid.year_range();
        let start = args.start_year.unwrap_or(first);
        let end = args.end_year.unwrap_or(last);
        grid = grid
            .select_years(start, end)
            .with_context(|| format!("no data in requested years {start}-{end}"))?;
    }

    let yearly = grid.aggregate(Resolution::Yearly, AggOp::Sum);
    let surface = pointwise_trend(&yearly);

    let alpha = args.alpha.unwrap_or(config.trend.alpha);
    let significant = surface.significant_slope(alpha)?;
    write_surface(
        &args.output,
        "significant_slope",
        &significant,
        surface.lat(),
        surface.lon(),
    )
    .with_context(|| format!("failed to write {}", args.output.display()))?;

    match series_trend(&yearly.spatial_mean()) {
        Some(test) => info!(
            slope = test.slope,
            p_value = test.p_value,
            label = ?test.label,
            "area-mean yearly trend"
        ),
        None => warn!("area-mean series has too few samples for a trend test"),
    }

    Ok(())
}
