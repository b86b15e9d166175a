use crate::geoseg::Endpoint;

use std::fmt;

/// Reasons a Segment can't be built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentError {
    /// The point at the given end is missing or not referenceable
    UnreferenceablePoint(Endpoint),
    /// The point type reported a NaN or negative distance
    InvalidDistance(f64),
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentError::UnreferenceablePoint(end) => {
                write!(f, "Unreferenceable point at the '{}' end of the segment", end.name())
            }
            SegmentError::InvalidDistance(d) => write!(f, "Invalid segment distance: {d}"),
        }
    }
}

impl std::error::Error for SegmentError {}
