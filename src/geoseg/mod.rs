mod error;
mod geo;
mod point;
mod segment;
pub mod codec;
pub mod rank;

pub use error::SegmentError;
pub use geo::{BusStop, GeoPoint, Place, EARTH_RADIUS_M};
pub use point::{Endpoint, ReferenceablePoint};
pub use segment::Segment;

pub (crate) use segment::SegmentRecord;
