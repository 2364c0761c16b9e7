use thiserror::Error;

/// Errors raised by the cross-section engine.
///
/// Configuration and shape errors abort the whole operation before any
/// interpolation runs. Per-slice data sparsity is not an error; empty
/// slices are NaN-filled and reported through the `log` facade.
#[derive(Error, Debug)]
pub enum CrossSectionError {
    #[error("unknown orientation method '{0}', expected 'cartesian' or 'spherical'")]
    UnknownOrientationMethod(String),

    #[error("unknown interpolation method '{0}', expected 'nearest', 'linear' or 'cubic'")]
    UnknownInterpMethod(String),

    #[error("unknown distance metric '{0}', expected 'haversine' or 'degrees'")]
    UnknownDistanceMetric(String),

    #[error("path needs at least 2 steps, got {0}")]
    TooFewSteps(usize),

    #[error("grid shape mismatch: lats {lats:?} vs lons {lons:?}")]
    GridShapeMismatch { lats: Vec<usize>, lons: Vec<usize> },

    #[error("field trailing dimensions {field:?} do not match grid shape ({ny}, {nx})")]
    FieldShapeMismatch {
        field: Vec<usize>,
        ny: usize,
        nx: usize,
    },

    #[error("field must have at least 2 dimensions, got {0}")]
    FieldRankTooLow(usize),

    #[error("reshape failed: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
