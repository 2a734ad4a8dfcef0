use crate::math::Real;

/// A geodetic position given as angles on a reference ellipsoid.
///
/// The `longitude` and `latitude` are expressed in radians and the `height`
/// in meters above the ellipsoid surface.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Cartographic {
    /// The angle east of the prime meridian, in radians.
    pub longitude: Real,
    /// The angle north of the equator, in radians.
    pub latitude: Real,
    /// The height above the ellipsoid surface, in meters.
    pub height: Real,
}

impl Cartographic {
    /// Creates a cartographic position from angles given in radians.
    #[inline]
    pub fn new(longitude: Real, latitude: Real, height: Real) -> Cartographic {
        Cartographic {
            longitude,
            latitude,
            height,
        }
    }

    /// Creates a cartographic position from angles given in degrees.
    #[inline]
    pub fn from_degrees(longitude: Real, latitude: Real, height: Real) -> Cartographic {
        Cartographic::new(longitude.to_radians(), latitude.to_radians(), height)
    }
}
