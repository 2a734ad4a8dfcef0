use na::{Point3, Vector3};
use orbis3d::bounding_volume::BoundingSphere;
use orbis3d::query::{CullingVolume, Plane, PlaneIntersection};

#[test]
fn plane_side_classification_of_a_unit_sphere() {
    let plane = Plane::new(Vector3::z_axis(), 0.0);

    let crossing = BoundingSphere::new(Point3::origin(), 1.0);
    let above = BoundingSphere::new(Point3::new(0.0, 0.0, 2.0), 1.0);
    let below = BoundingSphere::new(Point3::new(0.0, 0.0, -2.0), 1.0);

    assert_eq!(crossing.intersect_plane(&plane), PlaneIntersection::Intersecting);
    assert_eq!(above.intersect_plane(&plane), PlaneIntersection::Inside);
    assert_eq!(below.intersect_plane(&plane), PlaneIntersection::Outside);
}

#[test]
fn tangent_spheres_follow_the_boundary_rule() {
    let plane = Plane::new(Vector3::z_axis(), 0.0);

    // A sphere tangent from the positive side is fully inside, while one
    // tangent from the negative side still counts as intersecting.
    let tangent_above = BoundingSphere::new(Point3::new(0.0, 0.0, 1.0), 1.0);
    let tangent_below = BoundingSphere::new(Point3::new(0.0, 0.0, -1.0), 1.0);

    assert_eq!(tangent_above.intersect_plane(&plane), PlaneIntersection::Inside);
    assert_eq!(
        tangent_below.intersect_plane(&plane),
        PlaneIntersection::Intersecting
    );
}

#[test]
fn zero_radius_sphere_on_the_plane_is_inside() {
    let plane = Plane::new(Vector3::z_axis(), 0.0);
    let point_sphere = BoundingSphere::new(Point3::origin(), 0.0);

    assert_eq!(point_sphere.intersect_plane(&plane), PlaneIntersection::Inside);
}

#[test]
fn plane_through_a_point_has_zero_distance_there() {
    let point = Point3::new(1.0, 2.0, 3.0);
    let plane = Plane::from_point_normal(&point, Vector3::y_axis());

    assert_eq!(plane.signed_distance(&point), 0.0);
    assert_eq!(plane.signed_distance(&Point3::new(1.0, 3.0, 3.0)), 1.0);
    assert_eq!(plane.signed_distance(&Point3::new(-5.0, 0.0, 10.0)), -2.0);
}

fn cube_volume(half_side: f32) -> CullingVolume {
    CullingVolume::new(vec![
        Plane::from_point_normal(&Point3::new(half_side, 0.0, 0.0), -Vector3::x_axis()),
        Plane::from_point_normal(&Point3::new(-half_side, 0.0, 0.0), Vector3::x_axis()),
        Plane::from_point_normal(&Point3::new(0.0, half_side, 0.0), -Vector3::y_axis()),
        Plane::from_point_normal(&Point3::new(0.0, -half_side, 0.0), Vector3::y_axis()),
        Plane::from_point_normal(&Point3::new(0.0, 0.0, half_side), -Vector3::z_axis()),
        Plane::from_point_normal(&Point3::new(0.0, 0.0, -half_side), Vector3::z_axis()),
    ])
}

#[test]
fn culling_against_a_cube_volume() {
    let volume = cube_volume(2.0);

    let inside = BoundingSphere::new(Point3::origin(), 1.0);
    let too_big = BoundingSphere::new(Point3::origin(), 3.0);
    let poking_out = BoundingSphere::new(Point3::new(1.5, 0.0, 0.0), 1.0);
    let far_away = BoundingSphere::new(Point3::new(10.0, 0.0, 0.0), 1.0);

    assert_eq!(volume.visibility(&inside), PlaneIntersection::Inside);
    assert_eq!(volume.visibility(&too_big), PlaneIntersection::Intersecting);
    assert_eq!(volume.visibility(&poking_out), PlaneIntersection::Intersecting);
    assert_eq!(volume.visibility(&far_away), PlaneIntersection::Outside);
}

#[test]
fn an_empty_culling_volume_rejects_nothing() {
    let volume = CullingVolume::new(Vec::new());
    let sphere = BoundingSphere::new(Point3::new(100.0, -30.0, 2.0), 5.0);

    assert_eq!(volume.visibility(&sphere), PlaneIntersection::Inside);
}
