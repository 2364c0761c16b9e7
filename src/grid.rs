use ndarray::{Array2, ArrayD};

use crate::error::CrossSectionError;

/// Native coordinates of the field to be sliced.
///
/// Both arrays have shape (ny, nx). Curvilinear grids (rotated or nested
/// model domains) are supported directly; plain rectilinear axes can be
/// broadcast with [`SourceGrid::from_axes`].
#[derive(Debug, Clone)]
pub struct SourceGrid {
    /// Latitude of every grid point (degrees)
    pub lats: Array2<f64>,
    /// Longitude of every grid point (degrees)
    pub lons: Array2<f64>,
}

impl SourceGrid {
    pub fn new(lats: Array2<f64>, lons: Array2<f64>) -> Result<Self, CrossSectionError> {
        if lats.shape() != lons.shape() {
            return Err(CrossSectionError::GridShapeMismatch {
                lats: lats.shape().to_vec(),
                lons: lons.shape().to_vec(),
            });
        }
        Ok(Self { lats, lons })
    }

    /// Broadcast 1D coordinate axes into the 2D meshgrid form.
    pub fn from_axes(lats_1d: &[f64], lons_1d: &[f64]) -> Self {
        let ny = lats_1d.len();
        let nx = lons_1d.len();
        let lats = Array2::from_shape_fn((ny, nx), |(j, _)| lats_1d[j]);
        let lons = Array2::from_shape_fn((ny, nx), |(_, i)| lons_1d[i]);
        Self { lats, lons }
    }

    pub fn ny(&self) -> usize {
        self.lats.nrows()
    }

    pub fn nx(&self) -> usize {
        self.lats.ncols()
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.lats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lats.is_empty()
    }

    /// Flatten the grid into parallel (lat, lon) vectors in row-major order.
    pub fn flat_points(&self) -> (Vec<f64>, Vec<f64>) {
        let lats = self.lats.iter().copied().collect();
        let lons = self.lons.iter().copied().collect();
        (lats, lons)
    }

    /// Boolean box mask for points inside (lon_min, lon_max, lat_min, lat_max).
    ///
    /// Handy for cropping a field to a region of interest before slicing.
    pub fn extent_mask(&self, extent: (f64, f64, f64, f64)) -> Array2<bool> {
        let (lon_min, lon_max, lat_min, lat_max) = extent;
        Array2::from_shape_fn((self.ny(), self.nx()), |(j, i)| {
            let lat = self.lats[[j, i]];
            let lon = self.lons[[j, i]];
            lon >= lon_min && lon <= lon_max && lat >= lat_min && lat <= lat_max
        })
    }
}

/// An N-dimensional field whose trailing two dimensions are spatial.
///
/// The optional unit label is the explicit replacement for the dynamic
/// unit discovery the analysis scripts performed: interpolation always
/// runs on the bare magnitudes and the label is reattached on output.
#[derive(Debug, Clone)]
pub struct Field {
    pub data: ArrayD<f64>,
    pub units: Option<String>,
}

impl Field {
    pub fn new(data: ArrayD<f64>) -> Self {
        Self { data, units: None }
    }

    pub fn with_units(data: ArrayD<f64>, units: impl Into<String>) -> Self {
        Self {
            data,
            units: Some(units.into()),
        }
    }
}
