use std::fmt::Display;
use std::hash::Hash;

/// A point a Segment can be anchored to.
///
/// Equality and hashing must agree with each other, since a Segment's own
/// equality and hash are built out of its endpoints'.
pub trait ReferenceablePoint: Eq + Hash + Display {
    /// Distance to another point, in whatever unit the point type measures in
    fn distance_to(&self, other: &Self) -> f64;

    /// Whether the point is valid enough to anchor a Segment
    fn is_referenceable(&self) -> bool {
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    From,
    To,
}

impl Endpoint {
    pub const fn name(&self) -> &'static str {
        match self {
            Endpoint::From => "from",
            Endpoint::To => "to",
        }
    }
}
