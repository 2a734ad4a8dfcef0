use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real, UnitVector};

/// A plane, given by its unit normal and its constant term.
///
/// The plane is the set of points `pt` such that `normal.dot(pt) + d == 0`,
/// so the four scalars `(a, b, c, d)` of the usual plane equation
/// `a * x + b * y + c * z + d = 0` are the three components of `normal`
/// followed by `d`.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Plane {
    /// The plane's unit normal.
    pub normal: UnitVector<Real>,
    /// The constant term of the plane equation. This is the signed distance
    /// from the plane to the origin, along the normal.
    pub d: Real,
}

impl Plane {
    /// Creates a plane from its unit normal and its constant term.
    #[inline]
    pub fn new(normal: UnitVector<Real>, d: Real) -> Plane {
        Plane { normal, d }
    }

    /// Creates the plane containing `point` with the given unit normal.
    #[inline]
    pub fn from_point_normal(point: &Point<Real>, normal: UnitVector<Real>) -> Plane {
        let d = -normal.dot(&point.coords);
        Plane { normal, d }
    }

    /// The signed distance between `pt` and this plane.
    ///
    /// The distance is positive on the side the normal points toward.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) + self.d
    }
}

/// The position of a volume relative to a plane or to a culling volume.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum PlaneIntersection {
    /// Entirely on the side of the plane opposite its normal.
    Outside,
    /// Crossing the plane.
    Intersecting,
    /// Entirely on the side of the plane its normal points toward.
    Inside,
}

impl BoundingSphere {
    /// Classifies the position of this sphere relative to `plane`.
    ///
    /// A sphere exactly tangent to the plane is classified `Inside` when it
    /// lies on the side the normal points toward, and `Intersecting` when it
    /// lies on the opposite side.
    #[inline]
    pub fn intersect_plane(&self, plane: &Plane) -> PlaneIntersection {
        let distance = plane.signed_distance(&self.center);

        if distance < -self.radius {
            PlaneIntersection::Outside
        } else if distance < self.radius {
            PlaneIntersection::Intersecting
        } else {
            PlaneIntersection::Inside
        }
    }
}
