use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// The center is calculated by averaging all the point coordinates. All points are
/// weighted equally. Returns `None` if the iterator is empty.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use polysat3d::utils::center;
/// use polysat3d::math::Point;
///
/// let points = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(0.0, 4.0, 0.0),
/// ];
///
/// let c = center(points.iter().copied()).unwrap();
/// assert!((c.x - 4.0 / 3.0).abs() < 1e-6);
/// assert!((c.y - 4.0 / 3.0).abs() < 1e-6);
/// assert!(c.z.abs() < 1e-6);
/// # }
/// ```
#[inline]
pub fn center(pts: impl IntoIterator<Item = Point<Real>>) -> Option<Point<Real>> {
    let mut piter = pts.into_iter();
    let mut res = piter.next()?.coords;
    let mut count = 1usize;

    for pt in piter {
        res += pt.coords;
        count += 1;
    }

    let denom: Real = na::convert::<f64, Real>(1.0 / (count as f64));
    Some(Point::from(res * denom))
}
