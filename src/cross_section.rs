use log::{debug, warn};
use ndarray::{Array1, ArrayD, IxDyn};
use rayon::prelude::*;

use crate::config::{Constants, CrossSectionParams, OrientationMethod};
use crate::error::CrossSectionError;
use crate::grid::{Field, SourceGrid};
use crate::mask::SpatialMask;
use crate::math::interpolate::make_interpolator;
use crate::path::{CompassOctant, TransectPath};

/// Result of a cross-section extraction.
///
/// The field's leading dimensions are unchanged; the two spatial
/// dimensions are replaced by one trailing `cross_section_index` axis of
/// length `steps`. The per-index coordinate arrays all share that length.
#[derive(Debug, Clone)]
pub struct CrossSection {
    /// Interpolated values, shape = leading dims + [steps]
    pub values: ArrayD<f64>,
    /// Latitude at each path point (degrees)
    pub latitude: Array1<f64>,
    /// Longitude at each path point (degrees)
    pub longitude: Array1<f64>,
    /// Cumulative distance from the start (km)
    pub distance_km: Array1<f64>,
    /// Local tangent direction at each point (degrees CCW from East)
    pub orientation: Array1<f64>,
    /// Overall path orientation (degrees CCW from East)
    pub orientation_deg: f64,
    /// Orientation model the angles were computed with
    pub orientation_method: OrientationMethod,
    /// Compass octant of the overall orientation
    pub direction: CompassOctant,
    /// Formatted start point, "(lat, lon)" with 2 decimals
    pub start: String,
    /// Formatted end point, "(lat, lon)" with 2 decimals
    pub end: String,
    /// Unit label carried over from the input field, if any
    pub units: Option<String>,
}

impl CrossSection {
    /// Number of points along the cross-section.
    pub fn steps(&self) -> usize {
        self.latitude.len()
    }

    /// Total path length (km).
    pub fn total_distance_km(&self) -> f64 {
        self.distance_km[self.distance_km.len() - 1]
    }
}

/// Interpolate an N-dimensional field onto a path between two geographic
/// points.
///
/// The trailing two dimensions of `field` must match the grid shape; all
/// leading dimensions (time, level, member, ...) are carried through
/// untouched. Slices over the leading dimensions are interpolated
/// independently and in parallel; a slice without any valid source point
/// is NaN-filled rather than aborting the whole operation.
pub fn cross_section(
    field: &Field,
    grid: &SourceGrid,
    params: &CrossSectionParams,
) -> Result<CrossSection, CrossSectionError> {
    params.validate()?;
    let constants = Constants::default();

    if grid.lats.shape() != grid.lons.shape() {
        return Err(CrossSectionError::GridShapeMismatch {
            lats: grid.lats.shape().to_vec(),
            lons: grid.lons.shape().to_vec(),
        });
    }

    let shape = field.data.shape().to_vec();
    if shape.len() < 2 {
        return Err(CrossSectionError::FieldRankTooLow(shape.len()));
    }
    let (ny, nx) = (grid.ny(), grid.nx());
    if shape[shape.len() - 2] != ny || shape[shape.len() - 1] != nx {
        return Err(CrossSectionError::FieldShapeMismatch {
            field: shape[shape.len() - 2..].to_vec(),
            ny,
            nx,
        });
    }

    debug!(
        "cross section: {} path points, method {}, orientation {}",
        params.steps, params.method, params.orientation_method
    );

    let path = TransectPath::build(
        params.start,
        params.end,
        params.steps,
        params.orientation_method,
        &constants,
    )?;
    let mask = SpatialMask::build(
        grid,
        &path,
        params.buffer_km,
        params.distance_metric,
        &constants,
    );

    // Flatten leading dims into one slice axis, spatial dims into one
    let leading: Vec<usize> = shape[..shape.len() - 2].to_vec();
    let n_other: usize = leading.iter().product();
    let n_spatial = ny * nx;
    let flat = field
        .data
        .as_standard_layout()
        .into_owned()
        .into_shape((n_other, n_spatial))?;

    // Candidate source points shared by every slice; the interpolators
    // work in (lon, lat) = (x, y) coordinates
    let (grid_lats, grid_lons) = grid.flat_points();
    let kept_indices = mask.kept_indices();
    let kept_points: Vec<(f64, f64)> = kept_indices
        .iter()
        .map(|&i| (grid_lons[i], grid_lats[i]))
        .collect();
    let targets: Vec<(f64, f64)> = path
        .lons
        .iter()
        .zip(path.lats.iter())
        .map(|(&lon, &lat)| (lon, lat))
        .collect();

    let interpolator = make_interpolator(params.method);
    let steps = params.steps;

    debug!("interpolating {} slices", n_other);
    let rows: Vec<Vec<f64>> = (0..n_other)
        .into_par_iter()
        .map(|idx| {
            let row = flat.row(idx);

            // The valid-point set differs slice to slice: the spatial
            // mask is shared, the NaN filter is not
            let mut points = Vec::with_capacity(kept_points.len());
            let mut values = Vec::with_capacity(kept_points.len());
            for (&flat_idx, &point) in kept_indices.iter().zip(kept_points.iter()) {
                let value = row[flat_idx];
                if !value.is_nan() {
                    points.push(point);
                    values.push(value);
                }
            }

            if values.is_empty() {
                warn!("slice {} has no valid source points, filling with NaN", idx);
                return vec![f64::NAN; steps];
            }

            interpolator.interpolate(&points, &values, &targets)
        })
        .collect();

    // Reassemble: leading dims back, one trailing cross_section_index axis
    let mut out_shape = leading;
    out_shape.push(steps);
    let flat_out: Vec<f64> = rows.into_iter().flatten().collect();
    let values = ArrayD::from_shape_vec(IxDyn(&out_shape), flat_out)?;

    Ok(CrossSection {
        values,
        latitude: path.lats.clone(),
        longitude: path.lons.clone(),
        distance_km: path.distance_km.clone(),
        orientation: path.orientation.clone(),
        orientation_deg: path.orientation_deg,
        orientation_method: path.orientation_method,
        direction: path.direction,
        start: format!("({:.2}, {:.2})", params.start.0, params.start.1),
        end: format!("({:.2}, {:.2})", params.end.0, params.end.1),
        units: field.units.clone(),
    })
}
