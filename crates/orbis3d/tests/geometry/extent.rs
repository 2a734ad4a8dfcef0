use na::{self, Point3};
use orbis3d::bounding_volume::BoundingSphere;
use orbis3d::geodesy::{Ellipsoid, Extent, ExtentError, GeographicProjection, Projection};

#[test]
fn degenerate_extent_collapses_to_a_point() {
    let extent = Extent::new(0.3, -0.2, 0.3, -0.2).unwrap();
    let projection = GeographicProjection::new(&Ellipsoid::unit_sphere());
    let sphere = BoundingSphere::from_extent_2d(&extent, &projection);

    assert_eq!(sphere.radius(), 0.0);
    assert_eq!(sphere.center(), &projection.project(&extent.southwest()));
}

#[test]
fn extent_sphere_spans_the_projected_diagonal() {
    let extent = Extent::new(-0.4, -0.1, 0.2, 0.3).unwrap();
    let projection = GeographicProjection::new(&Ellipsoid::unit_sphere());
    let sphere = BoundingSphere::from_extent_2d(&extent, &projection);

    assert!(relative_eq!(
        *sphere.center(),
        Point3::new(-0.1, 0.1, 0.0),
        epsilon = 1.0e-6
    ));
    // Half the diagonal of a 0.6 x 0.4 rectangle.
    assert!(relative_eq!(
        sphere.radius() * sphere.radius(),
        0.13,
        epsilon = 1.0e-6
    ));
}

#[test]
fn extent_heights_widen_the_diagonal() {
    let extent = Extent::new(-0.4, -0.1, 0.2, 0.3).unwrap();
    let projection = GeographicProjection::new(&Ellipsoid::unit_sphere());
    let sphere =
        BoundingSphere::from_extent_with_heights_2d(&extent, &projection, 2.0, 10.0);

    assert!(relative_eq!(
        *sphere.center(),
        Point3::new(-0.1, 0.1, 6.0),
        epsilon = 1.0e-6
    ));
    assert!(relative_eq!(
        sphere.radius() * sphere.radius(),
        16.13,
        epsilon = 1.0e-4
    ));
}

#[test]
fn extent_3d_sphere_encloses_every_subsample_point() {
    let ellipsoid = Ellipsoid::unit_sphere();
    let extent = Extent::from_degrees(-30.0, -15.0, 40.0, 50.0).unwrap();
    let sphere = BoundingSphere::from_extent_3d(&extent, &ellipsoid);

    for pt in &extent.subsample(&ellipsoid, 0.0) {
        assert!(
            na::distance(sphere.center(), pt) <= sphere.radius() + 1.0e-5,
            "sample {:?} is not enclosed",
            pt
        );
    }

    // A regional extent must not degenerate into a whole-globe sphere.
    assert!(sphere.radius() < 1.0);
}

#[test]
fn antimeridian_extent_still_encloses_its_samples() {
    let ellipsoid = Ellipsoid::unit_sphere();
    let extent = Extent::new(2.8, -0.3, -2.8, 0.3).unwrap();

    assert!(relative_eq!(
        extent.width(),
        2.0 * std::f32::consts::PI - 5.6,
        epsilon = 1.0e-6
    ));

    let sphere = BoundingSphere::from_extent_3d(&extent, &ellipsoid);

    for pt in &extent.subsample(&ellipsoid, 0.0) {
        assert!(na::distance(sphere.center(), pt) <= sphere.radius() + 1.0e-5);
    }
}

#[test]
fn out_of_range_extents_are_rejected() {
    assert!(matches!(
        Extent::from_degrees(-200.0, 0.0, 10.0, 20.0),
        Err(ExtentError::InvalidLongitude { .. })
    ));
    assert_eq!(
        Extent::new(0.0, -2.0, 0.1, 0.2),
        Err(ExtentError::InvalidLatitude { value: -2.0 })
    );
}
