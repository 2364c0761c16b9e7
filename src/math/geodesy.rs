use ndarray::Array2;

use crate::config::Constants;

/// Calculate the great-circle distance between two geographic points (km).
///
/// Haversine formula with the mean Earth radius from `Constants`. Inputs
/// are degrees; no bounds checking is performed.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64, constants: &Constants) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();

    let a =
        (dlat / 2.0).sin().powi(2) + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    constants.earth_radius_km * c
}

/// Pairwise haversine distances between two point sets (km).
///
/// Returns an (m, n) matrix where m is the length of the `b` set and n the
/// length of the `a` set; entry (i, j) equals the distance from b[i] to
/// a[j]. The trigonometric terms of each set are precomputed once so the
/// fill loop stays cheap even for full model grids (n up to 10^6).
pub fn haversine_distance_matrix(
    lats_a: &[f64],
    lons_a: &[f64],
    lats_b: &[f64],
    lons_b: &[f64],
    constants: &Constants,
) -> Array2<f64> {
    let n = lats_a.len();
    let m = lats_b.len();

    let lat_a_rad: Vec<f64> = lats_a.iter().map(|v| v.to_radians()).collect();
    let lon_a_rad: Vec<f64> = lons_a.iter().map(|v| v.to_radians()).collect();
    let lat_b_rad: Vec<f64> = lats_b.iter().map(|v| v.to_radians()).collect();
    let lon_b_rad: Vec<f64> = lons_b.iter().map(|v| v.to_radians()).collect();

    let cos_a: Vec<f64> = lat_a_rad.iter().map(|v| v.cos()).collect();
    let cos_b: Vec<f64> = lat_b_rad.iter().map(|v| v.cos()).collect();

    let mut out = Array2::zeros((m, n));
    for i in 0..m {
        for j in 0..n {
            let dlat = lat_b_rad[i] - lat_a_rad[j];
            let dlon = lon_b_rad[i] - lon_a_rad[j];
            let a = (dlat / 2.0).sin().powi(2) + cos_a[j] * cos_b[i] * (dlon / 2.0).sin().powi(2);
            out[[i, j]] = constants.earth_radius_km * 2.0 * a.sqrt().asin();
        }
    }
    out
}

/// Flat-Earth distance between two points (km).
///
/// Degrees scaled by 111 km with meridional convergence at the mean
/// latitude. Kept for compatibility with the buffer filtering used by the
/// WRF plotting variant of the cross-section routine.
pub fn degree_approx_distance(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    constants: &Constants,
) -> f64 {
    let mean_lat_rad = (0.5 * (lat1 + lat2)).to_radians();
    let dy = (lat2 - lat1) * constants.deg_dist;
    let dx = (lon2 - lon1) * constants.deg_dist * mean_lat_rad.cos();
    dx.hypot(dy)
}

/// Orientation angle from point 1 to point 2 using a planar approximation.
///
/// Degrees counter-clockwise from East in [0, 360): 0 = East, 90 = North,
/// 180 = West, 270 = South. dlon maps to the x axis and dlat to the y axis.
pub fn orientation_cartesian(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    dlat.atan2(dlon).to_degrees().rem_euclid(360.0)
}

/// Orientation angle from point 1 to point 2 on the sphere.
///
/// Computes the true initial bearing with spherical trigonometry, then
/// converts from "clockwise from North" to "counter-clockwise from East"
/// so both orientation models share the same convention.
pub fn orientation_spherical(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let y = dlon.sin() * lat2_rad.cos();
    let x = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * dlon.cos();
    let bearing_from_north = y.atan2(x).to_degrees();

    (90.0 - bearing_from_north).rem_euclid(360.0)
}
