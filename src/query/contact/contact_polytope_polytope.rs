use crate::query::details::{edge_test, face_test, generate_manifold, incident_face};
use crate::query::{Contact, ContactKind, ReferenceSide, SatOptions};
use crate::shape::ConvexPolytope;

/// Computes the contact between two convex polytopes expressed in the same frame.
///
/// Returns `None` if a separating axis is found. Otherwise, the contact is an edge contact if
/// the best edge axis penetrates less than both face axes (by more than `options.edge_bias`),
/// and a face contact on the face of least penetration otherwise.
pub fn contact_polytopes(
    poly1: &ConvexPolytope,
    poly2: &ConvexPolytope,
    options: &SatOptions,
) -> Option<Contact> {
    let face1 = face_test(poly1, poly2);
    if face1.penetration <= 0.0 {
        log::trace!("Separated by the face {} of the first polytope.", face1.face);
        return None;
    }

    let face2 = face_test(poly2, poly1);
    if face2.penetration <= 0.0 {
        log::trace!("Separated by the face {} of the second polytope.", face2.face);
        return None;
    }

    let edge = edge_test(poly1, poly2, options);
    if let Some(edge) = &edge {
        if edge.penetration <= 0.0 {
            log::trace!(
                "Separated by the edges {} and {}.",
                edge.edge1,
                edge.edge2
            );
            return None;
        }

        if edge.penetration + options.edge_bias < face1.penetration.min(face2.penetration) {
            log::trace!("Edge contact with penetration {}.", edge.penetration);
            return Some(Contact {
                kind: ContactKind::Edge {
                    edge1: edge.edge1,
                    edge2: edge.edge2,
                },
                penetration: edge.penetration,
                normal: edge.normal,
                witness: edge.witness,
                points: vec![edge.witness],
            });
        }
    }

    // Ties are resolved in favor of the first polytope.
    let (reference, reference_poly, query, incident_poly) = if face1.penetration <= face2.penetration
    {
        (ReferenceSide::First, poly1, face1, poly2)
    } else {
        (ReferenceSide::Second, poly2, face2, poly1)
    };

    let reference_normal = reference_poly.face(query.face).normal;
    let incident = incident_face(incident_poly, &reference_normal);
    let mut points = generate_manifold(
        reference_poly,
        query.face,
        incident_poly,
        incident,
        options,
    );

    if points.is_empty() {
        log::debug!("Empty contact manifold, falling back to the witness point.");
        points.push(query.witness);
    }

    let normal = match reference {
        ReferenceSide::First => reference_normal,
        ReferenceSide::Second => -reference_normal,
    };

    log::trace!(
        "Face contact on {:?} face {} with penetration {}.",
        reference,
        query.face,
        query.penetration
    );

    Some(Contact {
        kind: ContactKind::Face {
            reference,
            reference_face: query.face,
            incident_face: incident,
        },
        penetration: query.penetration,
        normal,
        witness: query.witness,
        points,
    })
}
