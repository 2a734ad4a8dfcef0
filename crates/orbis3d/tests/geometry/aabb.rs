use na::{Point3, Vector3};
use orbis3d::bounding_volume::{details, Aabb, BoundingVolume};

#[test]
fn point_cloud_aabb_is_the_componentwise_envelope() {
    let pts = [
        Point3::new(2.0, 0.5, -1.0),
        Point3::new(-1.0, 3.0, 0.0),
        Point3::new(0.0, 0.0, 4.0),
    ];

    let aabb = Aabb::from_points(&pts);
    assert_eq!(aabb.mins, Point3::new(-1.0, 0.0, -1.0));
    assert_eq!(aabb.maxs, Point3::new(2.0, 3.0, 4.0));
    assert_eq!(aabb, details::local_point_cloud_aabb(&pts));
}

#[test]
fn invalid_aabb_absorbs_the_first_point_taken() {
    let mut aabb = Aabb::new_invalid();

    aabb.take_point(Point3::new(1.0, 2.0, 3.0));
    assert_eq!(aabb.mins, aabb.maxs);

    aabb.take_point(Point3::new(0.0, 5.0, -1.0));
    assert_eq!(aabb.mins, Point3::new(0.0, 2.0, -1.0));
    assert_eq!(aabb.maxs, Point3::new(1.0, 5.0, 3.0));
}

#[test]
fn aabb_sphere_spans_the_diagonal() {
    let aabb = Aabb::new(Point3::origin(), Point3::new(2.0, 2.0, 2.0));
    let sphere = aabb.bounding_sphere();

    assert_eq!(sphere.center(), &Point3::new(1.0, 1.0, 1.0));
    assert!(relative_eq!(
        sphere.radius() * sphere.radius(),
        3.0,
        epsilon = 1.0e-6
    ));
}

#[test]
fn merged_aabb_is_the_envelope_of_both() {
    let a = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
    let b = Aabb::new(
        Point3::new(0.5, 0.5, 0.5),
        Point3::new(2.0, 2.0, 2.0),
    );
    let merged = a.merged(&b);

    assert_eq!(merged.mins, Point3::origin());
    assert_eq!(merged.maxs, Point3::new(2.0, 2.0, 2.0));
    assert!(a.intersects(&b));
    assert!(merged.contains(&a));
    assert!(merged.contains(&b));
    assert!(!a.contains(&b));

    let mut in_place = a;
    in_place.merge(&b);
    assert_eq!(in_place, merged);
}

#[test]
fn loosened_then_tightened_margins_cancel() {
    let aabb = Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
    let loosened = aabb.loosened(0.25);

    assert_eq!(loosened.mins, Point3::new(-1.25, -1.25, -1.25));
    assert_eq!(loosened.maxs, Point3::new(1.25, 1.25, 1.25));
    assert_eq!(loosened.tightened(0.25), aabb);
}

#[test]
fn aabb_extents_and_local_point_queries() {
    let aabb = Aabb::new(Point3::origin(), Point3::new(4.0, 2.0, 6.0));

    assert_eq!(aabb.center(), Point3::new(2.0, 1.0, 3.0));
    assert_eq!(aabb.half_extents(), Vector3::new(2.0, 1.0, 3.0));
    assert_eq!(aabb.extents(), Vector3::new(4.0, 2.0, 6.0));

    assert!(aabb.contains_local_point(&Point3::new(4.0, 2.0, 6.0)));
    assert!(aabb.contains_local_point(&Point3::new(2.0, 0.0, 3.0)));
    assert!(!aabb.contains_local_point(&Point3::new(4.1, 1.0, 3.0)));
}

#[test]
fn translated_aabb_keeps_its_extents() {
    let aabb = Aabb::new(Point3::origin(), Point3::new(1.0, 2.0, 3.0));
    let moved = aabb.translated(&Vector3::new(10.0, -5.0, 0.5));

    assert_eq!(moved.mins, Point3::new(10.0, -5.0, 0.5));
    assert_eq!(moved.maxs, Point3::new(11.0, -3.0, 3.5));
    assert_eq!(moved.extents(), aabb.extents());
}
