use tracing_subscriber::EnvFilter;

/// Workspace crates whose log output follows the CLI verbosity flag.
const CRATE_TARGETS: &[&str] = &[
    "indra",
    "indra_extremes",
    "indra_grid",
    "indra_io",
    "indra_spi",
    "indra_stats",
    "indra_trend",
];

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing from the `-v` count (warn by default, then info,
/// debug, trace). A set `RUST_LOG` env var takes precedence.
pub fn init(verbosity: u8) {
    let level = level_for(verbosity);
    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
