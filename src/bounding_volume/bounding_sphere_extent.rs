use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::geodesy::{Ellipsoid, Extent, Projection};
use crate::math::Real;

impl BoundingSphere {
    /// Computes the sphere enclosing the map projection of an extent, lying
    /// in the `z = 0` plane.
    ///
    /// The sphere is built from the projected southwest and northeast
    /// corners: its center is the middle of the projected rectangle and its
    /// radius is half of the rectangle's diagonal.
    pub fn from_extent_2d<P>(extent: &Extent, projection: &P) -> BoundingSphere
    where
        P: Projection,
    {
        BoundingSphere::from_extent_with_heights_2d(extent, projection, 0.0, 0.0)
    }

    /// Computes the sphere enclosing the map projection of an extent whose
    /// surface heights span `[minimum_height, maximum_height]`.
    ///
    /// The elevation span contributes to the projected diagonal, and the
    /// center sits halfway up it.
    pub fn from_extent_with_heights_2d<P>(
        extent: &Extent,
        projection: &P,
        minimum_height: Real,
        maximum_height: Real,
    ) -> BoundingSphere
    where
        P: Projection,
    {
        let mut southwest = extent.southwest();
        southwest.height = minimum_height;
        let mut northeast = extent.northeast();
        northeast.height = maximum_height;

        let lower_left = projection.project(&southwest);
        let upper_right = projection.project(&northeast);

        let aabb = Aabb::new(lower_left.inf(&upper_right), lower_left.sup(&upper_right));
        aabb.bounding_sphere()
    }

    /// Computes the sphere enclosing the footprint of an extent on the
    /// surface of an ellipsoid.
    ///
    /// The footprint is approximated by the fixed-density point set of
    /// [`Extent::subsample`], so the sphere of a very large extent, or of an
    /// extent crossing the antimeridian, can be looser than an exhaustive
    /// sampling would give.
    pub fn from_extent_3d(extent: &Extent, ellipsoid: &Ellipsoid) -> BoundingSphere {
        if extent.east < extent.west {
            log::debug!(
                "Computing the bounding sphere of an extent crossing the antimeridian: the result may not be tight."
            );
        }

        let pts = extent.subsample(ellipsoid, 0.0);
        BoundingSphere::from_points(&pts)
    }
}
