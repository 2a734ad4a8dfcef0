//! Geographic primitives: cartographic positions, reference ellipsoids,
//! extents, and map projections.

pub use self::cartographic::Cartographic;
pub use self::ellipsoid::Ellipsoid;
pub use self::extent::{Extent, ExtentError, MAX_SUBSAMPLE_POINTS};
pub use self::projection::{GeographicProjection, Projection};

mod cartographic;
mod ellipsoid;
mod extent;
mod projection;
