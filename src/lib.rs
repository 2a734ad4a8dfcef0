/*!
orbis3d
========

**orbis3d** is a 3-dimensional geometry library for virtual-globe and
large-scene renderers, written with the Rust programming language. It
provides bounding volumes (spheres and axis-aligned boxes), the
geographic primitives they are computed from (ellipsoids, cartographic
extents, map projections), and plane-classification queries for
visibility culling.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![doc(html_root_url = "http://docs.rs/orbis3d/0.4.0")]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod geodesy;
pub mod query;
mod utils;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub type Real = f64;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub type Real = f32;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub type Point<Real> = na::Point3<Real>;

    /// The vector type.
    pub type Vector<Real> = na::Vector3<Real>;

    /// The unit vector type.
    pub type UnitVector<Real> = na::UnitVector3<Real>;

    /// The transformation matrix type.
    pub type Isometry<Real> = na::Isometry3<Real>;
}
