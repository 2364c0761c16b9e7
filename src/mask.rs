use log::{debug, warn};
use rayon::prelude::*;

use crate::config::{Constants, DistanceMetric};
use crate::grid::SourceGrid;
use crate::math::geodesy::degree_approx_distance;
use crate::path::TransectPath;

/// Which source grid points lie close enough to the path to feed the
/// interpolation. Recomputed per cross-section call; it only depends on
/// geometry, so every slice of the field reuses the same mask.
#[derive(Debug, Clone)]
pub struct SpatialMask {
    /// Keep-flag per flattened grid point (row-major, length ny*nx)
    pub keep: Vec<bool>,
    /// Minimum distance from each grid point to the path (km)
    pub distances_to_path: Vec<f64>,
    /// Number of retained points
    pub retained: usize,
}

impl SpatialMask {
    /// Compute the keep-mask for all grid points within `buffer_km` of
    /// the path. An infinite buffer retains the whole grid.
    pub fn build(
        grid: &SourceGrid,
        path: &TransectPath,
        buffer_km: f64,
        metric: DistanceMetric,
        constants: &Constants,
    ) -> Self {
        let (grid_lats, grid_lons) = grid.flat_points();

        // Path trigonometry is hoisted out of the per-grid-point scan;
        // the scan itself parallelizes over grid points with a fixed
        // reduction order inside each point.
        let path_lat_rad: Vec<f64> = path.lats.iter().map(|v| v.to_radians()).collect();
        let path_lon_rad: Vec<f64> = path.lons.iter().map(|v| v.to_radians()).collect();
        let path_cos_lat: Vec<f64> = path_lat_rad.iter().map(|v| v.cos()).collect();

        let distances_to_path: Vec<f64> = grid_lats
            .par_iter()
            .zip(grid_lons.par_iter())
            .map(|(&glat, &glon)| match metric {
                DistanceMetric::Haversine => {
                    let glat_rad = glat.to_radians();
                    let glon_rad = glon.to_radians();
                    let cos_glat = glat_rad.cos();
                    let mut min_dist = f64::INFINITY;
                    for i in 0..path_lat_rad.len() {
                        let dlat = path_lat_rad[i] - glat_rad;
                        let dlon = path_lon_rad[i] - glon_rad;
                        let a = (dlat / 2.0).sin().powi(2)
                            + cos_glat * path_cos_lat[i] * (dlon / 2.0).sin().powi(2);
                        let d = constants.earth_radius_km * 2.0 * a.sqrt().asin();
                        min_dist = min_dist.min(d);
                    }
                    min_dist
                }
                DistanceMetric::DegreeApprox => {
                    let mut min_dist = f64::INFINITY;
                    for (&plat, &plon) in path.lats.iter().zip(path.lons.iter()) {
                        let d = degree_approx_distance(glat, glon, plat, plon, constants);
                        min_dist = min_dist.min(d);
                    }
                    min_dist
                }
            })
            .collect();

        let keep: Vec<bool> = distances_to_path.iter().map(|&d| d <= buffer_km).collect();
        let retained = keep.iter().filter(|&&k| k).count();

        debug!(
            "spatial buffer +/-{} km: retained {}/{} grid points ({:.1}%)",
            buffer_km,
            retained,
            keep.len(),
            100.0 * retained as f64 / keep.len().max(1) as f64
        );
        if retained == 0 {
            warn!(
                "spatial buffer of {} km retains no grid points; every slice will be NaN-filled",
                buffer_km
            );
        }

        Self {
            keep,
            distances_to_path,
            retained,
        }
    }

    /// Flat indices of the retained grid points.
    pub fn kept_indices(&self) -> Vec<usize> {
        self.keep
            .iter()
            .enumerate()
            .filter_map(|(i, &k)| k.then_some(i))
            .collect()
    }
}
