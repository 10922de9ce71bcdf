//! Self-describing NetCDF output for derived surfaces and fields.

use std::path::Path;

use indra_grid::Grid;
use ndarray::Array2;
use tracing::info;

use crate::error::IoError;

/// Write a 2-D (lat, lon) surface with its coordinate variables.
pub fn write_surface(
    path: &Path,
    name: &str,
    surface: &Array2<f64>,
    lat: &[f64],
    lon: &[f64],
) -> Result<(), IoError> {
    let shape = surface.shape();
    if shape != [lat.len(), lon.len()] {
        return Err(IoError::DimensionMismatch {
            name: format!("{name} surface"),
            expected: lat.len() * lon.len(),
            got: shape[0] * shape[1],
        });
    }

    let mut file = netcdf::create(path)?;
    file.add_dimension("lat", lat.len())?;
    file.add_dimension("lon", lon.len())?;

    let mut lat_var = file.add_variable::<f64>("lat", &["lat"])?;
    lat_var.put_values(lat, ..)?;
    let mut lon_var = file.add_variable::<f64>("lon", &["lon"])?;
    lon_var.put_values(lon, ..)?;

    let mut var = file.add_variable::<f64>(name, &["lat", "lon"])?;
    let flat: Vec<f64> = surface.iter().copied().collect();
    var.put_values(&flat, ..)?;

    info!(path = %path.display(), name, "wrote surface");
    Ok(())
}

/// Write a full (time, lat, lon) grid with CF-style day offsets on the
/// time axis.
pub fn write_field(path: &Path, name: &str, grid: &Grid) -> Result<(), IoError> {
    let (n_time, n_lat, n_lon) = grid.shape();

    let mut file = netcdf::create(path)?;
    file.add_dimension("time", n_time)?;
    file.add_dimension("lat", n_lat)?;
    file.add_dimension("lon", n_lon)?;

    let base = grid.time()[0];
    let offsets: Vec<f64> = grid
        .time()
        .iter()
        .map(|d| (*d - base).num_days() as f64)
        .collect();
    let mut time_var = file.add_variable::<f64>("time", &["time"])?;
    time_var.put_values(&offsets, ..)?;
    time_var.put_attribute("units", format!("days since {base}"))?;

    let mut lat_var = file.add_variable::<f64>("lat", &["lat"])?;
    lat_var.put_values(grid.lat(), ..)?;
    let mut lon_var = file.add_variable::<f64>("lon", &["lon"])?;
    lon_var.put_values(grid.lon(), ..)?;

    let mut var = file.add_variable::<f64>(name, &["time", "lat", "lon"])?;
    let flat: Vec<f64> = grid.values().iter().copied().collect();
    var.put_values(&flat, ..)?;

    info!(path = %path.display(), name, n_time, "wrote field");
    Ok(())
}
