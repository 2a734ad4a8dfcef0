use crate::geodesy::Cartographic;
use crate::math::{Point, Real, UnitVector, Vector};

/// A quadric surface of revolution centered at the origin and aligned with
/// the coordinate axes, used as the reference surface for cartographic
/// positions.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Ellipsoid {
    radii: Vector<Real>,
    radii_squared: Vector<Real>,
    maximum_radius: Real,
}

impl Ellipsoid {
    /// Creates an ellipsoid from its three semi-axes.
    ///
    /// # Panics
    /// Panics if any semi-axis is not strictly positive.
    #[inline]
    pub fn new(rx: Real, ry: Real, rz: Real) -> Ellipsoid {
        assert!(
            rx > 0.0 && ry > 0.0 && rz > 0.0,
            "The ellipsoid semi-axes must be strictly positive."
        );
        let radii = Vector::new(rx, ry, rz);
        Ellipsoid {
            radii,
            radii_squared: radii.component_mul(&radii),
            maximum_radius: rx.max(ry).max(rz),
        }
    }

    /// The World Geodetic System 1984 reference ellipsoid.
    #[inline]
    pub fn wgs84() -> Ellipsoid {
        Ellipsoid::new(6378137.0, 6378137.0, 6356752.3142451793)
    }

    /// The sphere with all three semi-axes equal to one.
    #[inline]
    pub fn unit_sphere() -> Ellipsoid {
        Ellipsoid::new(1.0, 1.0, 1.0)
    }

    /// The three semi-axes of this ellipsoid.
    #[inline]
    pub fn radii(&self) -> Vector<Real> {
        self.radii
    }

    /// The largest of the three semi-axes.
    #[inline]
    pub fn maximum_radius(&self) -> Real {
        self.maximum_radius
    }

    /// The outward unit normal of the ellipsoid surface at the given
    /// cartographic position.
    #[inline]
    pub fn geodetic_surface_normal_cartographic(&self, pos: &Cartographic) -> UnitVector<Real> {
        let (sin_lon, cos_lon) = pos.longitude.sin_cos();
        let (sin_lat, cos_lat) = pos.latitude.sin_cos();
        UnitVector::new_normalize(Vector::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat))
    }

    /// Converts a cartographic position to cartesian coordinates centered on
    /// this ellipsoid.
    pub fn cartographic_to_cartesian(&self, pos: &Cartographic) -> Point<Real> {
        let n = self.geodetic_surface_normal_cartographic(pos).into_inner();
        let k = self.radii_squared.component_mul(&n);
        let gamma = n.dot(&k).sqrt();
        Point::from(k / gamma + n * pos.height)
    }
}

impl Default for Ellipsoid {
    #[inline]
    fn default() -> Ellipsoid {
        Ellipsoid::wgs84()
    }
}
