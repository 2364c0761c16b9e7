use std::fmt;
use std::str::FromStr;

use crate::error::CrossSectionError;

/// Physical constants shared by the geodesy routines.
#[derive(Clone, Debug)]
pub struct Constants {
    /// Earth's mean radius (km)
    pub earth_radius_km: f64,
    /// Average distance covered by 1 degree of latitude (km)
    pub deg_dist: f64,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            earth_radius_km: 6371.0,
            deg_dist: 111.0,
        }
    }
}

/// How the orientation angle between two points is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrientationMethod {
    /// Planar approximation: atan2(dlat, dlon). Ignores Earth curvature.
    Cartesian,
    /// True initial great-circle bearing from spherical trigonometry.
    Spherical,
}

impl fmt::Display for OrientationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrientationMethod::Cartesian => write!(f, "cartesian"),
            OrientationMethod::Spherical => write!(f, "spherical"),
        }
    }
}

impl FromStr for OrientationMethod {
    type Err = CrossSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cartesian" => Ok(OrientationMethod::Cartesian),
            "spherical" => Ok(OrientationMethod::Spherical),
            other => Err(CrossSectionError::UnknownOrientationMethod(
                other.to_string(),
            )),
        }
    }
}

/// Scattered-data interpolation strategy applied per slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterpMethod {
    /// Nearest neighbor through a k-d tree.
    Nearest,
    /// Barycentric interpolation on a Delaunay triangulation.
    Linear,
    /// Local Shepard weighting over the nearest neighbors.
    Cubic,
}

impl fmt::Display for InterpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpMethod::Nearest => write!(f, "nearest"),
            InterpMethod::Linear => write!(f, "linear"),
            InterpMethod::Cubic => write!(f, "cubic"),
        }
    }
}

impl FromStr for InterpMethod {
    type Err = CrossSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest" => Ok(InterpMethod::Nearest),
            "linear" => Ok(InterpMethod::Linear),
            "cubic" => Ok(InterpMethod::Cubic),
            other => Err(CrossSectionError::UnknownInterpMethod(other.to_string())),
        }
    }
}

/// Distance metric used by the spatial pre-filter.
///
/// The source variants disagree on this: one measures the buffer with true
/// haversine distance, the other with a flat 111 km/degree approximation.
/// Both behaviors are kept selectable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceMetric {
    Haversine,
    DegreeApprox,
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMetric::Haversine => write!(f, "haversine"),
            DistanceMetric::DegreeApprox => write!(f, "degrees"),
        }
    }
}

impl FromStr for DistanceMetric {
    type Err = CrossSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "haversine" => Ok(DistanceMetric::Haversine),
            "degrees" => Ok(DistanceMetric::DegreeApprox),
            other => Err(CrossSectionError::UnknownDistanceMetric(other.to_string())),
        }
    }
}

/// Parameters for one cross-section extraction.
///
/// Built with defaults matching the original analysis scripts: 101 path
/// points, nearest-neighbor interpolation, no spatial buffer.
#[derive(Clone, Debug)]
pub struct CrossSectionParams {
    /// Start point (latitude, longitude) in degrees
    pub start: (f64, f64),
    /// End point (latitude, longitude) in degrees
    pub end: (f64, f64),
    /// Number of sample points along the path
    pub steps: usize,
    /// Scattered interpolation strategy
    pub method: InterpMethod,
    /// Buffer half-width around the path (km); infinity keeps the whole grid
    pub buffer_km: f64,
    /// Orientation angle model
    pub orientation_method: OrientationMethod,
    /// Metric used when measuring the buffer distance
    pub distance_metric: DistanceMetric,
}

impl CrossSectionParams {
    pub fn new(start: (f64, f64), end: (f64, f64)) -> Self {
        Self {
            start,
            end,
            steps: 101,
            method: InterpMethod::Nearest,
            buffer_km: f64::INFINITY,
            orientation_method: OrientationMethod::Cartesian,
            distance_metric: DistanceMetric::Haversine,
        }
    }

    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn method(mut self, method: InterpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn buffer_km(mut self, buffer_km: f64) -> Self {
        self.buffer_km = buffer_km;
        self
    }

    pub fn orientation_method(mut self, orientation_method: OrientationMethod) -> Self {
        self.orientation_method = orientation_method;
        self
    }

    pub fn distance_metric(mut self, distance_metric: DistanceMetric) -> Self {
        self.distance_metric = distance_metric;
        self
    }

    /// Check parameter validity before any computation starts.
    pub fn validate(&self) -> Result<(), CrossSectionError> {
        if self.steps < 2 {
            return Err(CrossSectionError::TooFewSteps(self.steps));
        }
        Ok(())
    }
}
