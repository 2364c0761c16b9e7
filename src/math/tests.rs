use super::geodesy::*;
use super::interpolate::*;
use crate::config::{Constants, InterpMethod};

#[test]
fn test_haversine_distance() {
    let constants = Constants::default();
    // Quarter of Earth's circumference along the equator
    let dist = haversine_distance(0.0, 0.0, 0.0, 90.0, &constants);
    let expected = std::f64::consts::PI / 2.0 * constants.earth_radius_km;
    assert!((dist - expected).abs() < 0.1);

    // Identical points
    let dist = haversine_distance(45.0, -100.0, 45.0, -100.0, &constants);
    assert!(dist < 1e-10);
}

#[test]
fn test_haversine_matrix_matches_scalar() {
    let constants = Constants::default();
    let lats_a = [10.0, 20.0, 30.0];
    let lons_a = [100.0, 110.0, 120.0];
    let lats_b = [15.0, 25.0];
    let lons_b = [105.0, 115.0];

    let matrix = haversine_distance_matrix(&lats_a, &lons_a, &lats_b, &lons_b, &constants);
    assert_eq!(matrix.shape(), &[2, 3]);

    for i in 0..2 {
        for j in 0..3 {
            let scalar =
                haversine_distance(lats_b[i], lons_b[i], lats_a[j], lons_a[j], &constants);
            assert!((matrix[[i, j]] - scalar).abs() < 1e-9);
        }
    }
}

#[test]
fn test_orientation_cartesian_cardinals() {
    assert!((orientation_cartesian(0.0, 0.0, 0.0, 1.0) - 0.0).abs() < 1e-10);
    assert!((orientation_cartesian(0.0, 0.0, 1.0, 0.0) - 90.0).abs() < 1e-10);
    assert!((orientation_cartesian(0.0, 0.0, 0.0, -1.0) - 180.0).abs() < 1e-10);
    assert!((orientation_cartesian(0.0, 0.0, -1.0, 0.0) - 270.0).abs() < 1e-10);
}

#[test]
fn test_orientation_spherical_cardinals() {
    // Small deltas near the equator so curvature is negligible
    assert!((orientation_spherical(0.0, 0.0, 0.0, 0.1) - 0.0).abs() < 1e-6);
    assert!((orientation_spherical(0.0, 0.0, 0.1, 0.0) - 90.0).abs() < 1e-6);
    assert!((orientation_spherical(0.0, 0.0, 0.0, -0.1) - 180.0).abs() < 1e-6);
    assert!((orientation_spherical(0.0, 0.0, -0.1, 0.0) - 270.0).abs() < 1e-6);
}

#[test]
fn test_degree_approx_distance() {
    let constants = Constants::default();
    // One degree of latitude at the equator
    let dist = degree_approx_distance(0.0, 0.0, 1.0, 0.0, &constants);
    assert!((dist - constants.deg_dist).abs() < 1e-10);

    // One degree of longitude shrinks with latitude
    let at_equator = degree_approx_distance(0.0, 0.0, 0.0, 1.0, &constants);
    let at_60 = degree_approx_distance(60.0, 0.0, 60.0, 1.0, &constants);
    assert!(at_60 < at_equator);
    assert!((at_60 - constants.deg_dist * 0.5).abs() < 0.5);
}

#[test]
fn test_nearest_neighbor_picks_closest() {
    let interp = make_interpolator(InterpMethod::Nearest);
    let points = vec![(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)];
    let values = vec![1.0, 2.0, 3.0];

    let result = interp.interpolate(&points, &values, &[(1.0, 1.0), (9.0, 0.5)]);
    assert_eq!(result[0], 1.0);
    assert_eq!(result[1], 2.0);
}

#[test]
fn test_linear_tin_reproduces_plane() {
    let interp = make_interpolator(InterpMethod::Linear);
    // Samples on z = 2x + 3y + 1
    let mut points = Vec::new();
    let mut values = Vec::new();
    for i in 0..5 {
        for j in 0..5 {
            let (x, y) = (i as f64, j as f64);
            points.push((x, y));
            values.push(2.0 * x + 3.0 * y + 1.0);
        }
    }

    let targets = vec![(0.5, 0.5), (2.3, 1.7), (3.9, 3.1)];
    let result = interp.interpolate(&points, &values, &targets);
    for (&(x, y), &v) in targets.iter().zip(result.iter()) {
        assert!((v - (2.0 * x + 3.0 * y + 1.0)).abs() < 1e-9);
    }
}

#[test]
fn test_linear_tin_nan_outside_hull() {
    let interp = make_interpolator(InterpMethod::Linear);
    let points = vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
    let values = vec![1.0, 1.0, 1.0];

    let result = interp.interpolate(&points, &values, &[(5.0, 5.0)]);
    assert!(result[0].is_nan());
}

#[test]
fn test_cubic_shepard_reproduces_constant() {
    let interp = make_interpolator(InterpMethod::Cubic);
    let mut points = Vec::new();
    for i in 0..4 {
        for j in 0..4 {
            points.push((i as f64, j as f64));
        }
    }
    let values = vec![7.5; points.len()];

    let result = interp.interpolate(&points, &values, &[(1.5, 1.5), (0.0, 0.0)]);
    assert!((result[0] - 7.5).abs() < 1e-12);
    // Exact hit on a sample point
    assert_eq!(result[1], 7.5);
}

#[test]
fn test_interpolators_handle_empty_input() {
    for method in [InterpMethod::Nearest, InterpMethod::Linear, InterpMethod::Cubic] {
        let interp = make_interpolator(method);
        let result = interp.interpolate(&[], &[], &[(0.0, 0.0)]);
        assert!(result[0].is_nan());
    }
}
