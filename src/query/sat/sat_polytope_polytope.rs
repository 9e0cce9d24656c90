use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::details::{
    closest_points_line_line_parameters_eps, closest_points_segment_segment,
};
use crate::query::SatOptions;
use crate::shape::ConvexPolytope;
use na::Unit;

/// The pair of edges whose cross product is the axis of least penetration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EdgeQuery {
    /// A half-edge of the first polytope.
    pub edge1: u32,
    /// A half-edge of the second polytope.
    pub edge2: u32,
    /// The penetration depth along `normal`. Non-positive if the polytopes are separated.
    pub penetration: Real,
    /// The candidate axis, pointing from the first polytope toward the second.
    pub normal: Unit<Vector<Real>>,
    /// The midpoint of the closest points between both edges.
    pub witness: Point<Real>,
}

/// Finds the pair of edges, one from each polytope, whose cross product has the smallest
/// penetration.
///
/// Pairs of (nearly) parallel edges are skipped. Every other pair is first checked for
/// separation: if the projections of both polytopes onto its axis do not overlap, that axis is
/// returned immediately with a non-positive penetration.
///
/// Otherwise, an axis is only a contact candidate if:
/// - the closest points between the supporting lines of both edges lie within both segments,
///   up to `options.segment_tolerance`;
/// - both edges support the axis: the first edge reaches the maximum of the first polytope's
///   projection and the second edge reaches the minimum of the second polytope's projection,
///   up to `options.support_tolerance`.
///
/// Returns `None` if the polytopes are not separated by any edge axis and no pair of edges
/// yields a contact candidate.
pub fn edge_test(
    poly1: &ConvexPolytope,
    poly2: &ConvexPolytope,
    options: &SatOptions,
) -> Option<EdgeQuery> {
    let mesh1 = poly1.mesh();
    let mesh2 = poly2.mesh();
    let centroid_dir = poly2.centroid() - poly1.centroid();
    let range = -options.segment_tolerance..=1.0 + options.segment_tolerance;
    let mut best: Option<EdgeQuery> = None;

    for edge1 in mesh1.undirected_edges() {
        let (a1, b1) = mesh1.segment(edge1);
        let dir1 = b1 - a1;

        for edge2 in mesh2.undirected_edges() {
            let (a2, b2) = mesh2.segment(edge2);
            let dir2 = b2 - a2;

            let cross = dir1.cross(&dir2);
            let norm = cross.norm();

            if norm <= options.parallel_epsilon * dir1.norm() * dir2.norm() {
                continue;
            }

            let mut axis = cross / norm;

            // Orient the axis away from the first polytope. The edge center is not a reliable
            // reference if it is level with the origin along the axis.
            let side = axis.dot(&(mesh1.edge_center(edge1) - poly1.origin()));
            let flip = if side.abs() <= options.parallel_epsilon {
                axis.dot(&centroid_dir) < 0.0
            } else {
                side < 0.0
            };

            if flip {
                axis = -axis;
            }

            let proj1 = poly1.projection(&axis);
            let proj2 = poly2.projection(&axis);
            let overlap = proj1.overlap(&proj2);

            if overlap <= 0.0 {
                log::trace!("Separated by the axis of edges {edge1} and {edge2}.");
                if proj2.max <= proj1.min {
                    axis = -axis;
                }

                let (p1, p2) = closest_points_segment_segment((&a1, &b1), (&a2, &b2));
                return Some(EdgeQuery {
                    edge1,
                    edge2,
                    penetration: overlap,
                    normal: Unit::new_unchecked(axis),
                    witness: na::center(&p1, &p2),
                });
            }

            let (s, t, parallel) = closest_points_line_line_parameters_eps(
                &a1,
                &dir1,
                &a2,
                &dir2,
                DEFAULT_EPSILON,
            );

            if parallel || !range.contains(&s) || !range.contains(&t) {
                log::trace!(
                    "Discarded the axis of edges {edge1} and {edge2}: closest points out of the segments."
                );
                continue;
            }

            let supports1 = (a1.coords.dot(&axis) - proj1.max).abs() <= options.support_tolerance;
            let supports2 = (a2.coords.dot(&axis) - proj2.min).abs() <= options.support_tolerance;

            if !supports1 || !supports2 {
                log::trace!(
                    "Discarded the axis of edges {edge1} and {edge2}: the edges do not support it."
                );
                continue;
            }

            let penetration = proj1.max - proj2.min;

            if best.map(|b| penetration < b.penetration).unwrap_or(true) {
                let (p1, p2) = closest_points_segment_segment((&a1, &b1), (&a2, &b2));
                best = Some(EdgeQuery {
                    edge1,
                    edge2,
                    penetration,
                    normal: Unit::new_unchecked(axis),
                    witness: na::center(&p1, &p2),
                });
            }
        }
    }

    best
}
