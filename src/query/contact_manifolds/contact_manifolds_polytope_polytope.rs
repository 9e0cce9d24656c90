use crate::math::{Point, Real, Vector};
use crate::query::{details, SatOptions};
use crate::shape::ConvexPolytope;
use na::Unit;

/// The face of `polytope` whose normal is the most anti-parallel to `reference_normal`.
///
/// Ties are resolved in favor of the face with the smallest index.
pub fn incident_face(polytope: &ConvexPolytope, reference_normal: &Unit<Vector<Real>>) -> u32 {
    let mut best_id = 0;
    let mut best_dot = Real::MAX;

    for (i, normal) in polytope.normals().enumerate() {
        let dot = normal.dot(reference_normal.as_ref());

        if dot < best_dot {
            best_dot = dot;
            best_id = i as u32;
        }
    }

    best_id
}

/// Computes the contact points between a reference face and an incident face.
///
/// The boundary of `incident_face` (a face of `incident`) is clipped successively by the
/// side planes of `reference_face` (a face of `reference`): each side plane contains one
/// edge of the reference face and faces away from its interior. The remaining points that
/// are not in front of the reference face are then projected onto its plane.
///
/// All the side planes and the final filter are inflated by `options.clip_tolerance`, so
/// faces that exactly coincide keep their whole boundary.
pub fn generate_manifold(
    reference: &ConvexPolytope,
    reference_face: u32,
    incident: &ConvexPolytope,
    incident_face: u32,
    options: &SatOptions,
) -> Vec<Point<Real>> {
    let ref_mesh = reference.mesh();
    let ref_plane = ref_mesh.plane(reference_face);
    let ref_center = ref_mesh.face_center(reference_face);

    let mut polygon: Vec<_> = incident.mesh().face_points(incident_face).collect();
    let mut clipped = Vec::with_capacity(polygon.len() * 2);

    for edge in ref_mesh.edge_loop(reference_face) {
        let edge_origin = ref_mesh.origin(edge).point;
        let side = ref_mesh.direction(edge).cross(&*ref_plane.normal);

        let Some(mut side) = Unit::try_new(side, crate::math::DEFAULT_EPSILON) else {
            continue;
        };

        // The interior of the face must be on the negative side.
        if side.dot(&(ref_center - edge_origin)) > 0.0 {
            side = -side;
        }

        let center = edge_origin + *side * options.clip_tolerance;
        details::clip_halfspace_polygon(&center, side.as_ref(), &polygon, &mut clipped);
        core::mem::swap(&mut polygon, &mut clipped);

        if polygon.is_empty() {
            break;
        }
    }

    polygon
        .iter()
        .filter(|pt| ref_plane.signed_distance(pt) <= options.clip_tolerance)
        .map(|pt| ref_plane.project_point(pt))
        .collect()
}
