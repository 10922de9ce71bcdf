//! NetCDF archive loading.
//!
//! The loader is the only place sentinel-encoded missing values exist:
//! every fill value is resolved to NaN before a [`Grid`] is handed to the
//! engines, so no sentinel ever leaks into arithmetic.

use std::path::Path;

use chrono::NaiveDate;
use indra_grid::Grid;
use ndarray::Array3;
use netcdf::AttributeValue;
use tracing::info;

use crate::error::IoError;

/// Loader settings: variable-name aliases and the archive's missing-value
/// sentinel.
///
/// # Example
///
/// ```
/// use indra_io::LoaderConfig;
///
/// let config = LoaderConfig::new().with_sentinel(Some(-9999.0));
/// ```
#[derive(Clone, Debug)]
pub struct LoaderConfig {
    precip_aliases: Vec<String>,
    lat_aliases: Vec<String>,
    lon_aliases: Vec<String>,
    time_name: String,
    sentinel: Option<f64>,
}

impl LoaderConfig {
    /// Creates a configuration with the usual CHIRPS-style defaults:
    /// precipitation under `tp`/`precip`/`pr`, coordinates under
    /// `lat`/`latitude` and `lon`/`longitude`, sentinel `-99.9`.
    pub fn new() -> Self {
        Self {
            precip_aliases: vec!["tp".into(), "precip".into(), "pr".into()],
            lat_aliases: vec!["lat".into(), "latitude".into()],
            lon_aliases: vec!["lon".into(), "longitude".into()],
            time_name: "time".into(),
            sentinel: Some(-99.9),
        }
    }

    /// Sets the precipitation variable aliases, tried in order.
    pub fn with_precip_aliases(mut self, aliases: Vec<String>) -> Self {
        self.precip_aliases = aliases;
        self
    }

    /// Sets the explicit missing-value sentinel (`None` relies solely on
    /// the file's `_FillValue`/`missing_value` attributes).
    pub fn with_sentinel(mut self, sentinel: Option<f64>) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// The configured sentinel, if any.
    pub fn sentinel(&self) -> Option<f64> {
        self.sentinel
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Open a NetCDF file at `path`, returning [`IoError::FileNotFound`] if the
/// path does not exist on disk.
fn open_file(path: &Path) -> Result<netcdf::File, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(netcdf::open(path)?)
}

/// Read a 1-D `f64` variable, trying each alias in order.
fn read_1d_f64(
    file: &netcdf::File,
    aliases: &[String],
    path: &Path,
) -> Result<Vec<f64>, IoError> {
    for alias in aliases {
        if let Some(var) = file.variable(alias) {
            return Ok(var.get_values::<f64, _>(..)?);
        }
    }
    let name = aliases.first().cloned().unwrap_or_else(|| "unknown".into());
    Err(IoError::MissingVariable {
        name,
        path: path.to_path_buf(),
    })
}

/// Read a string attribute from a variable.
fn attr_str(var: &netcdf::Variable<'_>, name: &str) -> Option<String> {
    var.attribute_value(name)
        .and_then(|res| res.ok())
        .and_then(|av| match av {
            AttributeValue::Str(s) => Some(s),
            _ => None,
        })
}

/// Read a numeric attribute from a variable as f64.
fn attr_f64(var: &netcdf::Variable<'_>, name: &str) -> Option<f64> {
    var.attribute_value(name)
        .and_then(|res| res.ok())
        .and_then(|av| match av {
            AttributeValue::Double(v) => Some(v),
            AttributeValue::Float(v) => Some(v as f64),
            AttributeValue::Int(v) => Some(v as f64),
            AttributeValue::Short(v) => Some(v as f64),
            _ => None,
        })
}

/// Parse CF-style time units of the form `days since YYYY-MM-DD[...]`.
pub(crate) fn parse_time_units(units: &str) -> Result<NaiveDate, IoError> {
    let rest = units
        .strip_prefix("days since ")
        .ok_or_else(|| IoError::InvalidTime {
            reason: format!("unsupported time units '{units}' (expected 'days since ...')"),
        })?;
    let date_str = rest.get(..10).ok_or_else(|| IoError::InvalidTime {
        reason: format!("base date truncated in units '{units}'"),
    })?;
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| IoError::InvalidTime {
        reason: format!("failed to parse base date '{date_str}': {e}"),
    })
}

/// Convert floating-point day offsets from a base date into dates.
/// Fractional offsets are truncated to whole days.
pub(crate) fn offsets_to_dates(
    base_date: NaiveDate,
    offsets: &[f64],
) -> Result<Vec<NaiveDate>, IoError> {
    offsets
        .iter()
        .map(|&offset| {
            let days = offset as i64;
            base_date
                .checked_add_signed(chrono::TimeDelta::days(days))
                .ok_or_else(|| IoError::InvalidTime {
                    reason: format!("date overflow adding {days} days to {base_date}"),
                })
        })
        .collect()
}

/// True when `v` matches the sentinel within a small absolute tolerance
/// (fill values frequently round-trip through f32 storage).
fn matches_sentinel(v: f64, sentinel: f64) -> bool {
    (v - sentinel).abs() <= 1e-4
}

/// Load a precipitation [`Grid`] from a NetCDF archive.
///
/// Resolves the file's `_FillValue`/`missing_value` attributes and the
/// configured sentinel to NaN, decodes the CF time axis, and validates the
/// grid invariants (strictly increasing duplicate-free timestamps, shape
/// consistency) before handing the grid over.
pub fn read_precipitation_grid(path: &Path, config: &LoaderConfig) -> Result<Grid, IoError> {
    let file = open_file(path)?;

    let lat = read_1d_f64(&file, &config.lat_aliases, path)?;
    let lon = read_1d_f64(&file, &config.lon_aliases, path)?;

    let time_var = file
        .variable(&config.time_name)
        .ok_or_else(|| IoError::MissingVariable {
            name: config.time_name.clone(),
            path: path.to_path_buf(),
        })?;
    let units = attr_str(&time_var, "units").ok_or_else(|| IoError::MissingAttribute {
        name: "units".to_string(),
        path: path.to_path_buf(),
    })?;
    let base_date = parse_time_units(&units)?;
    let offsets = time_var.get_values::<f64, _>(..)?;
    let time = offsets_to_dates(base_date, &offsets)?;

    let var = config
        .precip_aliases
        .iter()
        .find_map(|alias| file.variable(alias))
        .ok_or_else(|| IoError::MissingVariable {
            name: config
                .precip_aliases
                .first()
                .cloned()
                .unwrap_or_else(|| "unknown".into()),
            path: path.to_path_buf(),
        })?;

    let dims = var.dimensions();
    if dims.len() != 3 {
        return Err(IoError::DimensionMismatch {
            name: format!("{} dimensions", var.name()),
            expected: 3,
            got: dims.len(),
        });
    }
    let (nt, ny, nx) = (dims[0].len(), dims[1].len(), dims[2].len());

    let mut data = var.get_values::<f64, _>(..)?;

    // Resolve every sentinel encoding to NaN before the grid is built.
    let mut sentinels: Vec<f64> = Vec::new();
    if let Some(fill) = attr_f64(&var, "_FillValue") {
        sentinels.push(fill);
    }
    if let Some(missing) = attr_f64(&var, "missing_value") {
        sentinels.push(missing);
    }
    if let Some(s) = config.sentinel {
        sentinels.push(s);
    }
    let mut resolved = 0usize;
    if !sentinels.is_empty() {
        for v in data.iter_mut() {
            if sentinels.iter().any(|&s| matches_sentinel(*v, s)) {
                *v = f64::NAN;
                resolved += 1;
            }
        }
    }

    let values = Array3::from_shape_vec((nt, ny, nx), data).map_err(|_| {
        IoError::DimensionMismatch {
            name: format!("{} values", var.name()),
            expected: nt * ny * nx,
            got: 0,
        }
    })?;

    info!(
        path = %path.display(),
        n_time = nt,
        n_lat = ny,
        n_lon = nx,
        resolved,
        "loaded precipitation archive"
    );

    Ok(Grid::new(time, lat, lon, values)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_time_units_plain() {
        let base = parse_time_units("days since 1981-01-01").unwrap();
        assert_eq!(base, NaiveDate::from_ymd_opt(1981, 1, 1).unwrap());
    }

    #[test]
    fn parse_time_units_with_time_of_day() {
        let base = parse_time_units("days since 2000-06-15 00:00:00").unwrap();
        assert_eq!(base, NaiveDate::from_ymd_opt(2000, 6, 15).unwrap());
    }

    #[test]
    fn parse_time_units_rejects_other_units() {
        assert!(matches!(
            parse_time_units("hours since 1981-01-01"),
            Err(IoError::InvalidTime { .. })
        ));
    }

    #[test]
    fn offsets_to_dates_basic() {
        let base = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let dates = offsets_to_dates(base, &[0.0, 1.0, 365.0]).unwrap();
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(dates[1], NaiveDate::from_ymd_opt(2000, 1, 2).unwrap());
        // 2000 is a leap year, so day 365 is Dec 31.
        assert_eq!(dates[2], NaiveDate::from_ymd_opt(2000, 12, 31).unwrap());
    }

    #[test]
    fn offsets_truncate_fractional_days() {
        let base = NaiveDate::from_ymd_opt(2001, 6, 15).unwrap();
        let dates = offsets_to_dates(base, &[0.5, 1.9]).unwrap();
        assert_eq!(dates[0], base);
        assert_eq!(dates[1], NaiveDate::from_ymd_opt(2001, 6, 16).unwrap());
    }

    #[test]
    fn sentinel_matching_tolerates_f32_rounding() {
        assert!(matches_sentinel(-99.9000015258789, -99.9)); // f32 round trip
        assert!(matches_sentinel(-99.9, -99.9));
        assert!(!matches_sentinel(-99.0, -99.9));
        assert!(!matches_sentinel(0.0, -99.9));
    }

    #[test]
    fn missing_file_reported() {
        let r = read_precipitation_grid(
            Path::new("/nonexistent/archive.nc"),
            &LoaderConfig::new(),
        );
        assert!(matches!(r, Err(IoError::FileNotFound { .. })));
    }
}
