use crate::geodesy::{Cartographic, Ellipsoid};
use crate::math::{Point, Real};
use crate::utils::{FRAC_PI_2, PI, TWO_PI};
use arrayvec::ArrayVec;

/// The maximum number of points [`Extent::subsample`] can return.
pub const MAX_SUBSAMPLE_POINTS: usize = 9;

/// Error raised when an [`Extent`] is built from out-of-range angles.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ExtentError {
    /// A longitude was outside of the `[-pi, pi]` range.
    #[error("the longitude {value} is outside of the [-pi, pi] range.")]
    InvalidLongitude {
        /// The rejected angle, in radians.
        value: Real,
    },
    /// A latitude was outside of the `[-pi/2, pi/2]` range.
    #[error("the latitude {value} is outside of the [-pi/2, pi/2] range.")]
    InvalidLatitude {
        /// The rejected angle, in radians.
        value: Real,
    },
}

/// A rectangular geographic region bounded by two meridians and two
/// parallels.
///
/// All four angles are in radians, with longitudes in `[-pi, pi]` and
/// latitudes in `[-pi/2, pi/2]`. An extent with `east < west` crosses the
/// antimeridian.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Extent {
    /// The westernmost longitude, in radians.
    pub west: Real,
    /// The southernmost latitude, in radians.
    pub south: Real,
    /// The easternmost longitude, in radians.
    pub east: Real,
    /// The northernmost latitude, in radians.
    pub north: Real,
}

impl Extent {
    /// The extent covering the whole globe.
    pub const MAX: Extent = Extent {
        west: -PI,
        south: -FRAC_PI_2,
        east: PI,
        north: FRAC_PI_2,
    };

    /// Creates an extent from its bounding angles given in radians.
    pub fn new(west: Real, south: Real, east: Real, north: Real) -> Result<Extent, ExtentError> {
        check_longitude(west)?;
        check_longitude(east)?;
        check_latitude(south)?;
        check_latitude(north)?;
        Ok(Extent {
            west,
            south,
            east,
            north,
        })
    }

    /// Creates an extent from its bounding angles given in degrees.
    pub fn from_degrees(
        west: Real,
        south: Real,
        east: Real,
        north: Real,
    ) -> Result<Extent, ExtentError> {
        Extent::new(
            west.to_radians(),
            south.to_radians(),
            east.to_radians(),
            north.to_radians(),
        )
    }

    /// The southwest corner of this extent, on the ellipsoid surface.
    #[inline]
    pub fn southwest(&self) -> Cartographic {
        Cartographic::new(self.west, self.south, 0.0)
    }

    /// The northeast corner of this extent, on the ellipsoid surface.
    #[inline]
    pub fn northeast(&self) -> Cartographic {
        Cartographic::new(self.east, self.north, 0.0)
    }

    /// The angular width of this extent.
    ///
    /// Extents crossing the antimeridian measure the short way around.
    #[inline]
    pub fn width(&self) -> Real {
        if self.east < self.west {
            self.east + TWO_PI - self.west
        } else {
            self.east - self.west
        }
    }

    /// The angular height of this extent.
    #[inline]
    pub fn height(&self) -> Real {
        self.north - self.south
    }

    /// Approximates the footprint of this extent on the ellipsoid with a
    /// small set of cartesian points, all of them `surface_height` above the
    /// surface.
    ///
    /// The four corners are always sampled. To capture the bulge of the
    /// ellipsoid in between, the parallel of greatest circumference touching
    /// the extent (the equator when it is spanned, otherwise the boundary
    /// parallel closest to it) is sampled again at every cardinal longitude
    /// strictly between `west` and `east`, and at both edge meridians when
    /// that parallel is the equator itself.
    pub fn subsample(
        &self,
        ellipsoid: &Ellipsoid,
        surface_height: Real,
    ) -> ArrayVec<Point<Real>, MAX_SUBSAMPLE_POINTS> {
        let mut result = ArrayVec::new();
        let mut lla = Cartographic::new(self.west, self.north, surface_height);
        result.push(ellipsoid.cartographic_to_cartesian(&lla));
        lla.longitude = self.east;
        result.push(ellipsoid.cartographic_to_cartesian(&lla));
        lla.latitude = self.south;
        result.push(ellipsoid.cartographic_to_cartesian(&lla));
        lla.longitude = self.west;
        result.push(ellipsoid.cartographic_to_cartesian(&lla));

        if self.north < 0.0 {
            lla.latitude = self.north;
        } else if self.south > 0.0 {
            lla.latitude = self.south;
        } else {
            lla.latitude = 0.0;
        }

        for longitude in [-FRAC_PI_2, 0.0, FRAC_PI_2] {
            if self.west < longitude && longitude < self.east {
                lla.longitude = longitude;
                result.push(ellipsoid.cartographic_to_cartesian(&lla));
            }
        }

        if lla.latitude == 0.0 {
            lla.longitude = self.west;
            result.push(ellipsoid.cartographic_to_cartesian(&lla));
            lla.longitude = self.east;
            result.push(ellipsoid.cartographic_to_cartesian(&lla));
        }

        result
    }
}

fn check_longitude(value: Real) -> Result<(), ExtentError> {
    if value < -PI || value > PI {
        Err(ExtentError::InvalidLongitude { value })
    } else {
        Ok(())
    }
}

fn check_latitude(value: Real) -> Result<(), ExtentError> {
    if value < -FRAC_PI_2 || value > FRAC_PI_2 {
        Err(ExtentError::InvalidLatitude { value })
    } else {
        Ok(())
    }
}
