use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use indra_grid::Resolution;

/// Gridded precipitation trend and drought analytics.
#[derive(Parser)]
#[command(
    name = "indra",
    version,
    about = "Gridded precipitation trend and drought analytics"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true, default_value = "indra.toml")]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Re-derive the archive at another temporal resolution.
    Aggregate(AggregateArgs),
    /// Compute the significance-filtered trend surface.
    Trend(TrendArgs),
    /// Compute the Standardized Precipitation Index field.
    Spi(SpiArgs),
    /// Compute an extreme precipitation index grid.
    Extremes(ExtremesArgs),
}

/// Temporal resolution on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ResolutionArg {
    Daily,
    Monthly,
    Yearly,
}

impl From<ResolutionArg> for Resolution {
    fn from(r: ResolutionArg) -> Self {
        match r {
            ResolutionArg::Daily => Resolution::Daily,
            ResolutionArg::Monthly => Resolution::Monthly,
            ResolutionArg::Yearly => Resolution::Yearly,
        }
    }
}

/// Arguments for the `aggregate` subcommand.
#[derive(clap::Args)]
pub struct AggregateArgs {
    /// Path to input NetCDF archive.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the derived NetCDF output.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Target temporal resolution.
    #[arg(short, long, value_enum)]
    pub resolution: ResolutionArg,

    /// Relabel December to the following year before binning.
    #[arg(long)]
    pub hydro_year: bool,
}

/// Arguments for the `trend` subcommand.
#[derive(clap::Args)]
pub struct TrendArgs {
    /// Path to input NetCDF archive.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the slope surface NetCDF output.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Restrict to a season (winter, pre-monsoon, monsoon, post-monsoon).
    #[arg(short, long)]
    pub season: Option<String>,

    /// First year of the analysis window.
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Last year of the analysis window.
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Override the significance level from config.
    #[arg(long)]
    pub alpha: Option<f64>,
}

/// Arguments for the `spi` subcommand.
#[derive(clap::Args)]
pub struct SpiArgs {
    /// Path to input NetCDF archive.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the SPI field NetCDF output.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Override the accumulation scale in months from config.
    #[arg(long)]
    pub scale: Option<usize>,
}

/// Arguments for the `extremes` subcommand.
#[derive(clap::Args)]
pub struct ExtremesArgs {
    /// Path to input NetCDF archive.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the yearly index NetCDF output.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Fixed depth threshold in mm (R1mm/R10mm/R20mm style).
    #[arg(long, conflicts_with = "percentile")]
    pub threshold: Option<f64>,

    /// Wet-day percentile in (0, 1) (R95p/R99p style).
    #[arg(long)]
    pub percentile: Option<f64>,
}
