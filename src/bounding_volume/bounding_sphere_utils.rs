use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};
use na;

/// Computes the bounding sphere of a set of points.
///
/// Exactly two passes are made over `pts`. The first one tracks the extreme
/// point along each axis. The second one simultaneously folds every point
/// into the seed sphere of Ritter's algorithm (the sphere spanning the
/// extreme pair of widest span), and measures the radius of the naive sphere
/// centered at the middle of the axis-aligned bounding box. Whichever of the
/// two spheres ends up smaller is returned.
///
/// The fold enlarging the Ritter sphere is order-dependent, so the points
/// are always consumed left-to-right. Every input point is contained in the
/// result, up to floating-point rounding.
pub fn point_cloud_bounding_sphere(pts: &[Point<Real>]) -> BoundingSphere {
    if pts.is_empty() {
        return BoundingSphere::default();
    }

    // The extreme point along each axis, first encountered wins.
    let mut x_min = pts[0];
    let mut x_max = pts[0];
    let mut y_min = pts[0];
    let mut y_max = pts[0];
    let mut z_min = pts[0];
    let mut z_max = pts[0];

    for pt in &pts[1..] {
        if pt.x < x_min.x {
            x_min = *pt;
        }
        if pt.x > x_max.x {
            x_max = *pt;
        }
        if pt.y < y_min.y {
            y_min = *pt;
        }
        if pt.y > y_max.y {
            y_max = *pt;
        }
        if pt.z < z_min.z {
            z_min = *pt;
        }
        if pt.z > z_max.z {
            z_max = *pt;
        }
    }

    // Seed the Ritter sphere with the extreme pair of widest span.
    let x_span = na::distance_squared(&x_max, &x_min);
    let y_span = na::distance_squared(&y_max, &y_min);
    let z_span = na::distance_squared(&z_max, &z_min);

    let mut diameter1 = x_min;
    let mut diameter2 = x_max;
    let mut max_span = x_span;

    if y_span > max_span {
        max_span = y_span;
        diameter1 = y_min;
        diameter2 = y_max;
    }

    if z_span > max_span {
        diameter1 = z_min;
        diameter2 = z_max;
    }

    let mut ritter_center = na::center(&diameter1, &diameter2);
    let mut ritter_radius = na::distance(&diameter2, &ritter_center);

    let min_box_pt = Point::new(x_min.x, y_min.y, z_min.z);
    let max_box_pt = Point::new(x_max.x, y_max.y, z_max.z);
    let naive_center = na::center(&min_box_pt, &max_box_pt);
    let mut naive_sqradius = 0.0;

    for pt in pts {
        let naive_distance_squared = na::distance_squared(pt, &naive_center);

        if naive_distance_squared > naive_sqradius {
            naive_sqradius = naive_distance_squared;
        }

        let ritter_distance_squared = na::distance_squared(pt, &ritter_center);

        if ritter_distance_squared > ritter_radius * ritter_radius {
            // Grow the sphere just enough for its boundary to pass through
            // `pt`, keeping the whole previous sphere inside.
            let old_center_to_point = ritter_distance_squared.sqrt();
            ritter_radius = (ritter_radius + old_center_to_point) * 0.5;

            let old_to_new = old_center_to_point - ritter_radius;
            ritter_center = Point::from(
                (ritter_center.coords * ritter_radius + pt.coords * old_to_new)
                    / old_center_to_point,
            );
        }
    }

    let naive_radius = naive_sqradius.sqrt();

    if ritter_radius < naive_radius {
        BoundingSphere::new(ritter_center, ritter_radius)
    } else {
        BoundingSphere::new(naive_center, naive_radius)
    }
}
