use delaunator::{triangulate, Point};
use ordered_float::OrderedFloat;

use crate::config::InterpMethod;

/// Number of neighbors blended by the cubic Shepard strategy.
const SHEPARD_NEIGHBORS: usize = 12;

/// Scattered-data interpolation from irregular (lon, lat) samples onto
/// arbitrary query points.
///
/// `points`, `values` and the returned vector are bare magnitudes; unit
/// handling happens in the output assembler. Queries that cannot be
/// answered (outside the data hull, or no samples at all) yield NaN.
pub trait Interpolator: Send + Sync {
    fn interpolate(&self, points: &[(f64, f64)], values: &[f64], targets: &[(f64, f64)])
        -> Vec<f64>;
}

/// Pick the interpolation strategy for the requested method.
pub fn make_interpolator(method: InterpMethod) -> Box<dyn Interpolator> {
    match method {
        InterpMethod::Nearest => Box::new(NearestNeighbor),
        InterpMethod::Linear => Box::new(LinearTin),
        InterpMethod::Cubic => Box::new(CubicShepard),
    }
}

/// Nearest-neighbor interpolation backed by a k-d tree.
pub struct NearestNeighbor;

impl Interpolator for NearestNeighbor {
    fn interpolate(
        &self,
        points: &[(f64, f64)],
        values: &[f64],
        targets: &[(f64, f64)],
    ) -> Vec<f64> {
        if points.is_empty() {
            return vec![f64::NAN; targets.len()];
        }

        let items: Vec<(usize, [f64; 2])> = points
            .iter()
            .enumerate()
            .map(|(idx, &(x, y))| (idx, [x, y]))
            .collect();
        let kdtree = kd_tree::KdTree2::build_by_key(items, |item, k| OrderedFloat(item.1[k]));

        targets
            .iter()
            .map(|&(x, y)| {
                kdtree
                    .nearest_by(&[x, y], |item, k| item.1[k])
                    .map(|found| values[found.item.0])
                    .unwrap_or(f64::NAN)
            })
            .collect()
    }
}

/// Piecewise-linear interpolation on a Delaunay triangulation.
///
/// Each query point is located inside a triangle of the triangulated
/// sample set and blended with barycentric weights. Points outside the
/// convex hull come back as NaN, matching scipy's griddata behavior that
/// the analysis scripts were written against.
pub struct LinearTin;

impl Interpolator for LinearTin {
    fn interpolate(
        &self,
        points: &[(f64, f64)],
        values: &[f64],
        targets: &[(f64, f64)],
    ) -> Vec<f64> {
        if points.len() < 3 {
            return vec![f64::NAN; targets.len()];
        }

        let sites: Vec<Point> = points.iter().map(|&(x, y)| Point { x, y }).collect();
        let triangulation = triangulate(&sites);
        if triangulation.triangles.is_empty() {
            // Degenerate input (e.g. all samples collinear)
            return vec![f64::NAN; targets.len()];
        }

        targets
            .iter()
            .map(|&(px, py)| {
                for tri in triangulation.triangles.chunks_exact(3) {
                    let (a, b, c) = (tri[0], tri[1], tri[2]);
                    let (ax, ay) = points[a];
                    let (bx, by) = points[b];
                    let (cx, cy) = points[c];

                    // Cheap bounding-box rejection before the barycentric test
                    if px < ax.min(bx).min(cx)
                        || px > ax.max(bx).max(cx)
                        || py < ay.min(by).min(cy)
                        || py > ay.max(by).max(cy)
                    {
                        continue;
                    }

                    if let Some((w0, w1, w2)) = barycentric(ax, ay, bx, by, cx, cy, px, py) {
                        return w0 * values[a] + w1 * values[b] + w2 * values[c];
                    }
                }
                f64::NAN
            })
            .collect()
    }
}

/// Barycentric weights of (px, py) in triangle abc, or None when the point
/// lies outside (small negative tolerance absorbs edge roundoff).
fn barycentric(
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
    cx: f64,
    cy: f64,
    px: f64,
    py: f64,
) -> Option<(f64, f64, f64)> {
    let det = (by - cy) * (ax - cx) + (cx - bx) * (ay - cy);
    if det.abs() < f64::EPSILON {
        return None;
    }
    let w0 = ((by - cy) * (px - cx) + (cx - bx) * (py - cy)) / det;
    let w1 = ((cy - ay) * (px - cx) + (ax - cx) * (py - cy)) / det;
    let w2 = 1.0 - w0 - w1;

    let tol = -1.0e-9;
    if w0 >= tol && w1 >= tol && w2 >= tol {
        Some((w0, w1, w2))
    } else {
        None
    }
}

/// Smooth local interpolation: inverse-cube-distance Shepard weighting
/// over the nearest samples. Reproduces constants exactly and degrades
/// gracefully where the triangulation-based scheme would return NaN.
pub struct CubicShepard;

impl Interpolator for CubicShepard {
    fn interpolate(
        &self,
        points: &[(f64, f64)],
        values: &[f64],
        targets: &[(f64, f64)],
    ) -> Vec<f64> {
        if points.is_empty() {
            return vec![f64::NAN; targets.len()];
        }

        let items: Vec<(usize, [f64; 2])> = points
            .iter()
            .enumerate()
            .map(|(idx, &(x, y))| (idx, [x, y]))
            .collect();
        let kdtree = kd_tree::KdTree2::build_by_key(items, |item, k| OrderedFloat(item.1[k]));
        let k = SHEPARD_NEIGHBORS.min(points.len());

        targets
            .iter()
            .map(|&(x, y)| {
                let neighbors = kdtree.nearests_by(&[x, y], k, |item, axis| item.1[axis]);
                let mut weight_sum = 0.0;
                let mut value_sum = 0.0;
                for found in &neighbors {
                    let dist = found.squared_distance.sqrt();
                    if dist < f64::EPSILON {
                        // Query coincides with a sample point
                        return values[found.item.0];
                    }
                    let w = 1.0 / dist.powi(3);
                    weight_sum += w;
                    value_sum += w * values[found.item.0];
                }
                if weight_sum > 0.0 {
                    value_sum / weight_sum
                } else {
                    f64::NAN
                }
            })
            .collect()
    }
}
