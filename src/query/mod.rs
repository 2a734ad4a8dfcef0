//! Non-persistent geometric queries.
//!
//! The queries of this module classify bounding volumes against planes, the
//! building block of visibility culling:
//!
//! * [`BoundingSphere::intersect_plane`](crate::bounding_volume::BoundingSphere::intersect_plane)
//!   classifies a sphere against a single plane.
//! * [`CullingVolume::visibility`] classifies a sphere against a whole set
//!   of culling planes at once.

pub use self::culling_volume::CullingVolume;
pub use self::plane::{Plane, PlaneIntersection};

mod culling_volume;
mod plane;
