use crate::geodesy::{Cartographic, Ellipsoid};
use crate::math::{Point, Real};

/// A map projection between cartographic positions and planar cartesian
/// coordinates.
///
/// The projected `x` and `y` are in meters; the cartographic height travels
/// through unchanged as `z`.
pub trait Projection {
    /// Projects a cartographic position to planar coordinates.
    fn project(&self, pos: &Cartographic) -> Point<Real>;

    /// Recovers the cartographic position of a projected point.
    fn unproject(&self, point: &Point<Real>) -> Cartographic;
}

/// The equirectangular projection, where the planar coordinates are the
/// geographic angles scaled by the largest radius of the reference
/// ellipsoid.
///
/// Cheap to compute both ways, at the price of east-west stretching away
/// from the equator.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GeographicProjection {
    semimajor_axis: Real,
}

impl GeographicProjection {
    /// Creates the projection scaled by the given ellipsoid's largest
    /// radius.
    #[inline]
    pub fn new(ellipsoid: &Ellipsoid) -> GeographicProjection {
        GeographicProjection {
            semimajor_axis: ellipsoid.maximum_radius(),
        }
    }
}

impl Default for GeographicProjection {
    #[inline]
    fn default() -> GeographicProjection {
        GeographicProjection::new(&Ellipsoid::wgs84())
    }
}

impl Projection for GeographicProjection {
    #[inline]
    fn project(&self, pos: &Cartographic) -> Point<Real> {
        Point::new(
            pos.longitude * self.semimajor_axis,
            pos.latitude * self.semimajor_axis,
            pos.height,
        )
    }

    #[inline]
    fn unproject(&self, point: &Point<Real>) -> Cartographic {
        Cartographic::new(
            point.x / self.semimajor_axis,
            point.y / self.semimajor_axis,
            point.z,
        )
    }
}
