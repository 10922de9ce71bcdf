//! Region masking via polygon containment.

use geo::{Contains, Coord, Intersects, MultiPolygon, Point, Rect};
use tracing::debug;

use crate::grid::Grid;

/// Cell boundaries along one coordinate axis: midpoints between neighbors,
/// with edge cells extended by half the adjacent spacing. A single-element
/// axis gets a nominal half-degree footprint.
fn cell_edges(coords: &[f64]) -> Vec<(f64, f64)> {
    let n = coords.len();
    if n == 1 {
        return vec![(coords[0] - 0.5, coords[0] + 0.5)];
    }
    (0..n)
        .map(|k| {
            let lo = if k == 0 {
                coords[0] - (coords[1] - coords[0]) / 2.0
            } else {
                (coords[k - 1] + coords[k]) / 2.0
            };
            let hi = if k == n - 1 {
                coords[n - 1] + (coords[n - 1] - coords[n - 2]) / 2.0
            } else {
                (coords[k] + coords[k + 1]) / 2.0
            };
            (lo.min(hi), lo.max(hi))
        })
        .collect()
}

impl Grid {
    /// Mask every pixel outside `region` to missing, at all timesteps.
    /// The grid shape is unchanged.
    ///
    /// With `all_touched = false` a pixel survives if its center lies
    /// inside the region; with `all_touched = true` it survives if its
    /// footprint rectangle intersects the region at all, which keeps
    /// boundary pixels.
    pub fn clip_to_region(&self, region: &MultiPolygon<f64>, all_touched: bool) -> Grid {
        let lat_edges = cell_edges(self.lat());
        let lon_edges = cell_edges(self.lon());

        let mut clipped = self.clone();
        let mut masked = 0usize;

        for i in 0..self.n_lat() {
            for j in 0..self.n_lon() {
                let inside = if all_touched {
                    let (lat_lo, lat_hi) = lat_edges[i];
                    let (lon_lo, lon_hi) = lon_edges[j];
                    let footprint = Rect::new(
                        Coord { x: lon_lo, y: lat_lo },
                        Coord { x: lon_hi, y: lat_hi },
                    )
                    .to_polygon();
                    footprint.intersects(region)
                } else {
                    region.contains(&Point::new(self.lon()[j], self.lat()[i]))
                };

                if !inside {
                    masked += 1;
                    for t in 0..self.n_time() {
                        clipped.values_mut()[[t, i, j]] = f64::NAN;
                    }
                }
            }
        }

        debug!(
            masked,
            total = self.n_lat() * self.n_lon(),
            all_touched,
            "masked pixels outside region"
        );
        clipped
    }
}
