//! Bounding sphere.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Isometry, Point, Real};
use na;

/// A Bounding Sphere.
///
/// The cheapest bounding volume to transform and to test against a plane,
/// which makes it the volume of choice for visibility culling of scene
/// objects.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of the bounding sphere.
    pub center: Point<Real>,
    /// The radius of the bounding sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// Computes the bounding sphere of a point cloud.
    ///
    /// Two enclosing spheres are computed in two passes over `pts`, and the
    /// smaller of them is returned: the sphere centered at the middle of the
    /// point cloud's axis-aligned bounding box, and the sphere obtained by
    /// Ritter's algorithm. The result is a tight fit but not the minimal
    /// enclosing sphere. An empty point cloud yields the degenerate sphere
    /// of radius zero centered at the origin.
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[cfg(feature = "f32")] {
    /// use orbis3d::bounding_volume::BoundingSphere;
    /// use nalgebra::Point3;
    ///
    /// let sphere = BoundingSphere::from_points(&[
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(-1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    ///     Point3::new(0.0, -1.0, 0.0),
    /// ]);
    ///
    /// assert_eq!(sphere.center, Point3::origin());
    /// assert_eq!(sphere.radius, 1.0);
    /// # }
    /// ```
    pub fn from_points(pts: &[Point<Real>]) -> BoundingSphere {
        super::bounding_sphere_utils::point_cloud_bounding_sphere(pts)
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Transforms this bounding sphere by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::new(m * self.center, self.radius)
    }

    /// Checks whether `pt` lies inside of this sphere.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) <= self.radius * self.radius
    }

    /// Grows this sphere in-place, keeping its center, so it also contains `pt`.
    ///
    /// The radius is left untouched if `pt` already lies inside of this
    /// sphere.
    #[inline]
    pub fn expand(&mut self, pt: &Point<Real>) {
        let distance = na::distance(&self.center, pt);

        if distance > self.radius {
            self.radius = distance;
        }
    }

    /// The smallest sphere with the same center as `self` containing both
    /// `self` and `pt`.
    #[inline]
    #[must_use]
    pub fn expanded(&self, pt: &Point<Real>) -> BoundingSphere {
        let mut res = *self;
        res.expand(pt);
        res
    }
}

impl Default for BoundingSphere {
    /// The degenerate sphere of radius zero centered at the origin.
    #[inline]
    fn default() -> BoundingSphere {
        BoundingSphere::new(Point::origin(), 0.0)
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point<Real> {
        *self.center()
    }

    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance_squared = delta_pos.norm_squared();
        let sum_radius = self.radius + other.radius;

        distance_squared <= sum_radius * sum_radius
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance = delta_pos.norm();

        distance + other.radius <= self.radius
    }

    /// Merges this sphere with `other`, in-place.
    ///
    /// The merged center is the midpoint of the two input centers and the
    /// radius is the smallest one reaching around both inputs from there.
    /// The result always contains both inputs entirely but is not the
    /// minimal sphere doing so. The new center and radius are fully
    /// computed before either field is written.
    #[inline]
    fn merge(&mut self, other: &BoundingSphere) {
        let center = na::center(&self.center, &other.center);
        let radius = (na::distance(&self.center, &center) + self.radius)
            .max(na::distance(&other.center, &center) + other.radius);

        self.center = center;
        self.radius = radius;
    }

    #[inline]
    fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let mut res = *self;

        res.merge(other);

        res
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.radius = self.radius + amount
    }

    #[inline]
    fn loosened(&self, amount: Real) -> BoundingSphere {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        BoundingSphere::new(self.center, self.radius + amount)
    }

    #[inline]
    fn tighten(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The tightening margin must be positive.");
        assert!(amount <= self.radius, "The tightening margin is to large.");
        self.radius = self.radius - amount
    }

    #[inline]
    fn tightened(&self, amount: Real) -> BoundingSphere {
        assert!(amount >= 0.0, "The tightening margin must be positive.");
        assert!(amount <= self.radius, "The tightening margin is to large.");
        BoundingSphere::new(self.center, self.radius - amount)
    }
}
