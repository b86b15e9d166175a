//! A planar point for segments on a flat 2D map, backed by glam

use crate::geoseg::*;
use glam::DVec2;
use serde::{Deserialize, Serialize};

use std::fmt;
use std::hash::{Hash, Hasher};

/// A point on a plane, measured with plain Euclidean distance
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanarPoint(pub DVec2);

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }
}

impl From<DVec2> for PlanarPoint {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}

impl PartialEq for PlanarPoint {
    fn eq(&self, other: &Self) -> bool {
        self.0.x.to_bits() == other.0.x.to_bits() && self.0.y.to_bits() == other.0.y.to_bits()
    }
}

impl Eq for PlanarPoint {}

impl Hash for PlanarPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.x.to_bits().hash(state);
        self.0.y.to_bits().hash(state);
    }
}

impl fmt::Display for PlanarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.0.x, self.0.y)
    }
}

impl ReferenceablePoint for PlanarPoint {
    fn distance_to(&self, other: &Self) -> f64 {
        self.0.distance(other.0)
    }

    fn is_referenceable(&self) -> bool {
        self.0.is_finite()
    }
}

/// Segment on a plane
pub type PlanarSegment = Segment<PlanarPoint>;
