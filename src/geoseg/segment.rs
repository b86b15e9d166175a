use crate::geoseg::{Endpoint, ReferenceablePoint, SegmentError};

use serde::{Deserialize, Serialize};

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The segment between two points, with the distance between them worked out once on construction.
///
/// In terms of stop ranking, `from` is the user's current location and `to` is a stop.
///
/// Equality looks at the distance and both endpoints, while `compare_to` only looks at the distance,
/// so two segments that are not equal can still compare as `Ordering::Equal`. For that reason
/// Segment does not implement `Ord`, and shouldn't be used as a key of an ordered collection.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "SegmentRecord<P>")]
#[serde(bound(deserialize = "P: ReferenceablePoint + Deserialize<'de>"))]
pub struct Segment<P> {
    distance: f64,
    from: P,
    to: P,
}

/// Unchecked field-order mirror of a Segment, used on the way in from a decoder
#[derive(Deserialize)]
pub struct SegmentRecord<P> {
    distance: f64,
    from: P,
    to: P,
}

impl<P: ReferenceablePoint> Segment<P> {
    /// Create the segment between `from` and `to`.
    ///
    /// Both points must be referenceable, and the distance the point type reports must be
    /// finite and non-negative.
    pub fn new(from: P, to: P) -> Result<Self, SegmentError> {
        check_endpoints(&from, &to)?;
        let distance = check_distance(from.distance_to(&to))?;

        Ok(Self { distance, from, to })
    }

    /// Same as `new`, but a missing point is reported as unreferenceable instead of being unrepresentable
    pub fn from_optional(from: Option<P>, to: Option<P>) -> Result<Self, SegmentError> {
        let from = from.ok_or(SegmentError::UnreferenceablePoint(Endpoint::From))?;
        let to = to.ok_or(SegmentError::UnreferenceablePoint(Endpoint::To))?;
        Self::new(from, to)
    }
}

impl<P> Segment<P> {
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn from(&self) -> &P {
        &self.from
    }

    pub fn to(&self) -> &P {
        &self.to
    }

    pub fn endpoint(&self, end: Endpoint) -> &P {
        match end {
            Endpoint::From => &self.from,
            Endpoint::To => &self.to,
        }
    }

    pub fn into_endpoints(self) -> (P, P) {
        (self.from, self.to)
    }

    /// Order two segments by distance alone, shortest first.
    ///
    /// Endpoints are never used to break ties.
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.distance.total_cmp(&other.distance)
    }
}

fn check_endpoints<P: ReferenceablePoint>(from: &P, to: &P) -> Result<(), SegmentError> {
    if !from.is_referenceable() {
        return Err(SegmentError::UnreferenceablePoint(Endpoint::From));
    }
    if !to.is_referenceable() {
        return Err(SegmentError::UnreferenceablePoint(Endpoint::To));
    }
    Ok(())
}

fn check_distance(distance: f64) -> Result<f64, SegmentError> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(SegmentError::InvalidDistance(distance));
    }
    // -0.0 becomes 0.0, otherwise coincident points could hash differently
    Ok(distance + 0.0)
}

impl<P: ReferenceablePoint> TryFrom<SegmentRecord<P>> for Segment<P> {
    type Error = SegmentError;

    fn try_from(record: SegmentRecord<P>) -> Result<Self, Self::Error> {
        check_endpoints(&record.from, &record.to)?;
        let distance = check_distance(record.distance)?;

        // Must be exactly what the endpoints give on this build
        let computed = check_distance(record.from.distance_to(&record.to))?;
        if computed.to_bits() != distance.to_bits() {
            return Err(SegmentError::InvalidDistance(distance));
        }

        Ok(Self { distance, from: record.from, to: record.to })
    }
}

impl<P: PartialEq> PartialEq for Segment<P> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.distance.to_bits() == other.distance.to_bits()
                && self.from == other.from
                && self.to == other.to)
    }
}

impl<P: Eq> Eq for Segment<P> {}

impl<P: Hash> Hash for Segment<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.distance.to_bits().hash(state);
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl<P: fmt::Display> fmt::Display for Segment<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from: [{}], to: [{}], distance: {:?}", self.from, self.to, self.distance)
    }
}
