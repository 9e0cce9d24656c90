use crate::math::{Point2, Real, DEFAULT_EPSILON};

/// Tests if the given point is inside an arbitrary closed polygon, using the even-odd rule.
///
/// A horizontal half-line is cast from `pt` toward `+x` and the number of polygon edges it
/// crosses is counted: the point is inside if that number is odd. The polygon is assumed to
/// be closed, i.e., first and last point of the polygon are implicitly assumed to be
/// connected by an edge. Its orientation does not matter.
///
/// Points lying on an edge of the polygon, up to a tolerance relative to the edge length,
/// are inside.
pub fn point_in_poly2d(pt: &Point2<Real>, poly: &[Point2<Real>]) -> bool {
    if poly.is_empty() {
        return false;
    }

    let mut inside = false;

    for (i, a) in poly.iter().enumerate() {
        let b = &poly[(i + 1) % poly.len()];

        if on_segment(pt, a, b) {
            return true;
        }

        // Half-open test on y so that a vertex lying exactly on the
        // half-line is only counted once.
        if (a.y > pt.y) != (b.y > pt.y) {
            let x = a.x + (pt.y - a.y) * (b.x - a.x) / (b.y - a.y);

            if pt.x < x {
                inside = !inside;
            }
        }
    }

    inside
}

fn on_segment(pt: &Point2<Real>, a: &Point2<Real>, b: &Point2<Real>) -> bool {
    let ab = b - a;
    let ap = pt - a;
    let len2 = ab.norm_squared();
    let tol = DEFAULT_EPSILON.sqrt();

    // Distance to the line, then position along the segment, both scaled by its length.
    ab.perp(&ap).abs() <= tol * len2
        && (-tol * len2..=len2 * (1.0 + tol)).contains(&ab.dot(&ap))
}
