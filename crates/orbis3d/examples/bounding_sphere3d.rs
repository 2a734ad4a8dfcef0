extern crate nalgebra as na;

use na::Point3;
use orbis3d::bounding_volume::{BoundingSphere, BoundingVolume};

fn main() {
    /*
     * Initialize a small point cloud.
     */
    let pts = [
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(-1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, -1.0, 0.0),
    ];

    /*
     * Compute its bounding sphere.
     */
    let sphere = BoundingSphere::from_points(&pts);
    assert_eq!(sphere.center, Point3::origin());
    assert_eq!(sphere.radius, 1.0);

    // Merge with a sphere sitting further down the x axis.
    let other = BoundingSphere::new(Point3::new(4.0, 0.0, 0.0), 2.0);
    let merged = sphere.merged(&other);

    assert!(merged.contains(&sphere));
    assert!(merged.contains(&other));
    assert!(!sphere.contains(&other));

    // Grow the first sphere until it reaches an outlying point.
    let grown = sphere.expanded(&Point3::new(3.0, 0.0, 0.0));
    assert_eq!(grown.center, sphere.center);
    assert_eq!(grown.radius, 3.0);
}
