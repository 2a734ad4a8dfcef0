use crate::bounding_volume::BoundingSphere;
use crate::query::{Plane, PlaneIntersection};

/// A convex volume delimited by a set of culling planes whose normals all
/// point toward the interior, a view frustum being the usual example.
#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CullingVolume {
    /// The planes delimiting this volume.
    pub planes: Vec<Plane>,
}

impl CullingVolume {
    /// Creates a culling volume from its delimiting planes.
    #[inline]
    pub fn new(planes: Vec<Plane>) -> CullingVolume {
        CullingVolume { planes }
    }

    /// Classifies the position of a sphere relative to this volume.
    ///
    /// The sphere is `Outside` as soon as it lies entirely outside of one of
    /// the planes, `Inside` when it lies entirely inside of all of them, and
    /// `Intersecting` otherwise. A volume with no plane reports everything
    /// as `Inside`.
    pub fn visibility(&self, sphere: &BoundingSphere) -> PlaneIntersection {
        let mut intersecting = false;

        for plane in &self.planes {
            match sphere.intersect_plane(plane) {
                PlaneIntersection::Outside => return PlaneIntersection::Outside,
                PlaneIntersection::Intersecting => intersecting = true,
                PlaneIntersection::Inside => {}
            }
        }

        if intersecting {
            PlaneIntersection::Intersecting
        } else {
            PlaneIntersection::Inside
        }
    }
}
