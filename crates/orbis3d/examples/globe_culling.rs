extern crate nalgebra as na;

use na::Vector3;
use orbis3d::bounding_volume::BoundingSphere;
use orbis3d::geodesy::{Ellipsoid, Extent};
use orbis3d::query::{CullingVolume, Plane, PlaneIntersection};

fn main() {
    /*
     * Bound a patch of a unit-sphere globe.
     */
    let globe = Ellipsoid::unit_sphere();
    let extent = Extent::from_degrees(-20.0, -10.0, 20.0, 30.0).unwrap();
    let patch = BoundingSphere::from_extent_3d(&extent, &globe);

    /*
     * Classify the patch against single clipping planes.
     */
    let front = Plane::new(Vector3::x_axis(), 0.0);
    let behind = Plane::new(Vector3::x_axis(), -2.0);
    let equator = Plane::new(Vector3::z_axis(), 0.0);

    assert_eq!(patch.intersect_plane(&front), PlaneIntersection::Inside);
    assert_eq!(patch.intersect_plane(&behind), PlaneIntersection::Outside);
    assert_eq!(patch.intersect_plane(&equator), PlaneIntersection::Intersecting);

    /*
     * Classify it against a clipping volume.
     */
    let volume = CullingVolume::new(vec![front, equator]);
    assert_eq!(volume.visibility(&patch), PlaneIntersection::Intersecting);
}
