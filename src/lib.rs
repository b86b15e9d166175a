mod geoseg;
#[cfg(feature = "2d")]
pub mod geoseg2d;

pub use geoseg::*;
