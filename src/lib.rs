//! Cross-section interpolation for curvilinear meteorological grids.
//!
//! Extracts a 1D slice of an N-dimensional field along an arbitrary path
//! between two geographic points. The grid may be curvilinear (2D
//! latitude/longitude coordinate arrays); leading field dimensions such as
//! time, level or ensemble member are carried through unchanged.

pub mod config;
pub mod cross_section;
pub mod error;
pub mod grid;
pub mod mask;
pub mod math;
pub mod path;

pub use config::{
    Constants, CrossSectionParams, DistanceMetric, InterpMethod, OrientationMethod,
};
pub use cross_section::{cross_section, CrossSection};
pub use error::CrossSectionError;
pub use grid::{Field, SourceGrid};
pub use mask::SpatialMask;
pub use path::{CompassOctant, TransectPath};
