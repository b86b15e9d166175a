use crate::geoseg::ReferenceablePoint;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::hash::{Hash, Hasher};

/// Mean earth radius, in metres
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A position on the earth's surface, in decimal degrees
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Great-circle distance in metres (haversine)
    pub fn haversine(&self, other: &Self) -> f64 {
        let (lat1, lat2) = (self.latitude.to_radians(), other.latitude.to_radians());
        let d_lat = lat2 - lat1;
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        // a can drift just past 1.0 for antipodal points
        let c = 2.0 * a.sqrt().min(1.0).asin();

        EARTH_RADIUS_M * c
    }
}

// Bitwise, so that Eq and Hash agree
impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
    }
}

impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl ReferenceablePoint for GeoPoint {
    fn distance_to(&self, other: &Self) -> f64 {
        self.haversine(other)
    }

    fn is_referenceable(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A bus stop, located by a GeoPoint
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusStop {
    pub id: String,
    pub address: String,
    pub point: GeoPoint,
}

impl BusStop {
    pub fn new<S: AsRef<str> + ?Sized, T: AsRef<str> + ?Sized>(id: &S, address: &T, point: GeoPoint) -> Self {
        Self {
            id: id.as_ref().to_string(),
            address: address.as_ref().to_string(),
            point,
        }
    }
}

impl fmt::Display for BusStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) @ {}", self.id, self.address, self.point)
    }
}

impl ReferenceablePoint for BusStop {
    fn distance_to(&self, other: &Self) -> f64 {
        self.point.distance_to(&other.point)
    }

    fn is_referenceable(&self) -> bool {
        !self.id.is_empty() && self.point.is_referenceable()
    }
}

/// Anything a segment can run between while ranking stops: the user's own position, or a stop
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Place {
    Location(GeoPoint),
    Stop(BusStop),
}

impl Place {
    pub fn point(&self) -> &GeoPoint {
        match self {
            Place::Location(p) => p,
            Place::Stop(stop) => &stop.point,
        }
    }

    pub fn as_stop(&self) -> Option<&BusStop> {
        match self {
            Place::Stop(stop) => Some(stop),
            Place::Location(_) => None,
        }
    }
}

impl From<GeoPoint> for Place {
    fn from(p: GeoPoint) -> Self {
        Place::Location(p)
    }
}

impl From<BusStop> for Place {
    fn from(stop: BusStop) -> Self {
        Place::Stop(stop)
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Place::Location(p) => fmt::Display::fmt(p, f),
            Place::Stop(stop) => fmt::Display::fmt(stop, f),
        }
    }
}

impl ReferenceablePoint for Place {
    fn distance_to(&self, other: &Self) -> f64 {
        self.point().distance_to(other.point())
    }

    fn is_referenceable(&self) -> bool {
        match self {
            Place::Location(p) => p.is_referenceable(),
            Place::Stop(stop) => stop.is_referenceable(),
        }
    }
}
