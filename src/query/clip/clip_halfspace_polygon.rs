use crate::math::{Point, Real, Vector};
use crate::query;

/// Cuts a polygon with the given half-space.
///
/// Given the half-space `center` and outward `normal`,
/// this computes the intersecting between the half-space and
/// the polygon. (Note that a point `pt` is considered as inside of
/// the half-space if `normal.dot(&(pt - center)) <= 0.0`.
///
/// If an edge crossing the boundary is too close to being parallel to it for the crossing
/// point to be computed, its endpoint is kept as-is when it lies outside, instead of being
/// moved onto the boundary.
pub fn clip_halfspace_polygon(
    center: &Point<Real>,
    normal: &Vector<Real>,
    polygon: &[Point<Real>],
    result: &mut Vec<Point<Real>>,
) {
    result.clear();

    let Some(last_pt) = polygon.last() else {
        return;
    };

    let keep_point = |pt: &Point<Real>| (pt - center).dot(normal) <= 0.0;
    let mut last_keep = keep_point(last_pt);

    if last_keep {
        result.push(*last_pt);
    }

    for i in 0..polygon.len() {
        let pt = &polygon[i];
        let keep = keep_point(pt);

        if keep != last_keep {
            // We crossed the plane, so we need
            // to cut the edge.
            let prev_i = if i == 0 { polygon.len() - 1 } else { i - 1 };
            let prev_pt = &polygon[prev_i];
            let dir = pt - prev_pt;

            match query::details::line_toi_with_halfspace(center, normal, prev_pt, &dir)
                .filter(|toi| toi.is_finite())
            {
                Some(toi) => result.push(prev_pt + dir * toi.clamp(0.0, 1.0)),
                None => {
                    log::debug!("Edge parallel to a clipping plane, keeping its endpoint.");
                    if !keep {
                        result.push(*pt);
                    }
                }
            }

            last_keep = keep;
        }

        if keep && i != polygon.len() - 1 {
            result.push(*pt);
        }
    }
}
