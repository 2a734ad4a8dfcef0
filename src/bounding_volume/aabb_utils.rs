use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use std::iter::IntoIterator;

/// Computes the AABB of a set of points.
pub fn local_point_cloud_aabb<'a, I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    let mut it = pts.into_iter();

    let p0 = it.next().expect(
        "Point cloud Aabb construction: the input iterator should yield at least one point.",
    );
    let mut aabb = Aabb::new(*p0, *p0);

    for pt in it {
        aabb.take_point(*pt);
    }

    aabb
}
