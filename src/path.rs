use std::fmt;

use ndarray::Array1;

use crate::config::{Constants, OrientationMethod};
use crate::error::CrossSectionError;
use crate::math::geodesy::{haversine_distance, orientation_cartesian, orientation_spherical};

/// Compass octant of the overall path direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompassOctant {
    E,
    NE,
    N,
    NW,
    W,
    SW,
    S,
    SE,
}

impl CompassOctant {
    /// Classify an orientation angle (degrees CCW from East) into one of
    /// the 8 half-open 45-degree bins. The wraparound bin maps to East.
    pub fn from_angle(angle: f64) -> Self {
        let angle = angle.rem_euclid(360.0);
        if !(22.5..337.5).contains(&angle) {
            CompassOctant::E
        } else if angle < 67.5 {
            CompassOctant::NE
        } else if angle < 112.5 {
            CompassOctant::N
        } else if angle < 157.5 {
            CompassOctant::NW
        } else if angle < 202.5 {
            CompassOctant::W
        } else if angle < 247.5 {
            CompassOctant::SW
        } else if angle < 292.5 {
            CompassOctant::S
        } else {
            CompassOctant::SE
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompassOctant::E => "E",
            CompassOctant::NE => "NE",
            CompassOctant::N => "N",
            CompassOctant::NW => "NW",
            CompassOctant::W => "W",
            CompassOctant::SW => "SW",
            CompassOctant::S => "S",
            CompassOctant::SE => "SE",
        }
    }
}

impl fmt::Display for CompassOctant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Orientation from point 1 to point 2 under the selected model.
pub fn orientation_angle(
    method: OrientationMethod,
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
) -> f64 {
    match method {
        OrientationMethod::Cartesian => orientation_cartesian(lat1, lon1, lat2, lon2),
        OrientationMethod::Spherical => orientation_spherical(lat1, lon1, lat2, lon2),
    }
}

/// A sampled cross-section path between two geographic points.
///
/// Points are spaced linearly in (lat, lon) coordinate space, not along
/// the geodesic; distances along the path are nevertheless measured with
/// the haversine formula. This mirrors the behavior of the original
/// analysis routine.
#[derive(Debug, Clone)]
pub struct TransectPath {
    /// Latitude at each path point (degrees)
    pub lats: Array1<f64>,
    /// Longitude at each path point (degrees)
    pub lons: Array1<f64>,
    /// Cumulative great-circle distance from the start (km)
    pub distance_km: Array1<f64>,
    /// Local tangent direction at each point (degrees CCW from East)
    pub orientation: Array1<f64>,
    /// Overall orientation from start to end (degrees CCW from East)
    pub orientation_deg: f64,
    /// Octant classification of the overall orientation
    pub direction: CompassOctant,
    /// Model used for all orientation angles above
    pub orientation_method: OrientationMethod,
}

impl TransectPath {
    /// Build a path with `steps` sample points from `start` to `end`,
    /// both given as (latitude, longitude) in degrees.
    pub fn build(
        start: (f64, f64),
        end: (f64, f64),
        steps: usize,
        orientation_method: OrientationMethod,
        constants: &Constants,
    ) -> Result<Self, CrossSectionError> {
        if steps < 2 {
            return Err(CrossSectionError::TooFewSteps(steps));
        }

        let lats = Array1::linspace(start.0, end.0, steps);
        let lons = Array1::linspace(start.1, end.1, steps);

        // Cumulative distance: sequential sum of segment lengths
        let mut distance_km = Array1::zeros(steps);
        for i in 1..steps {
            let segment = haversine_distance(
                lats[i - 1],
                lons[i - 1],
                lats[i],
                lons[i],
                constants,
            );
            distance_km[i] = distance_km[i - 1] + segment;
        }

        // Local orientation: centered difference in the interior gives a
        // smoother tangent than consecutive-pair bearings
        let mut orientation = Array1::zeros(steps);
        orientation[0] =
            orientation_angle(orientation_method, lats[0], lons[0], lats[1], lons[1]);
        for i in 1..steps - 1 {
            orientation[i] = orientation_angle(
                orientation_method,
                lats[i - 1],
                lons[i - 1],
                lats[i + 1],
                lons[i + 1],
            );
        }
        orientation[steps - 1] = orientation_angle(
            orientation_method,
            lats[steps - 2],
            lons[steps - 2],
            lats[steps - 1],
            lons[steps - 1],
        );

        let orientation_deg =
            orientation_angle(orientation_method, start.0, start.1, end.0, end.1);
        let direction = CompassOctant::from_angle(orientation_deg);

        Ok(Self {
            lats,
            lons,
            distance_km,
            orientation,
            orientation_deg,
            direction,
            orientation_method,
        })
    }

    /// Number of sample points on the path.
    pub fn len(&self) -> usize {
        self.lats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lats.is_empty()
    }

    /// Path points as (lat, lon) pairs.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.lats
            .iter()
            .zip(self.lons.iter())
            .map(|(&lat, &lon)| (lat, lon))
            .collect()
    }

    /// Total path length (km).
    pub fn total_distance_km(&self) -> f64 {
        self.distance_km[self.distance_km.len() - 1]
    }
}
