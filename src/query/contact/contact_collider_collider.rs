use crate::math::{Real, Transform};
use crate::query::details::contact_polytopes;
use crate::query::{PartContact, SatOptions};
use crate::shape::Collider;

/// Computes the contacts between two colliders placed in the world.
///
/// Both colliders are transformed to the world frame by `pos1` and `pos2`, then every convex
/// part of the first collider is tested against every convex part of the second. One
/// [`PartContact`] is returned for each pair of parts that is not separated. An empty vector
/// means that the colliders do not touch.
///
/// All the returned points and normals are expressed in the world frame.
pub fn contact(
    pos1: &Transform<Real>,
    collider1: &Collider,
    pos2: &Transform<Real>,
    collider2: &Collider,
    options: &SatOptions,
) -> Vec<PartContact> {
    let collider1 = collider1.transformed(pos1);
    let collider2 = collider2.transformed(pos2);
    let mut result = Vec::new();

    for (part1, poly1) in collider1.polytopes().enumerate() {
        for (part2, poly2) in collider2.polytopes().enumerate() {
            if let Some(contact) = contact_polytopes(poly1, poly2, options) {
                result.push(PartContact {
                    part1,
                    part2,
                    contact,
                });
            }
        }
    }

    result
}

/// Tests whether two colliders placed in the world are intersecting.
///
/// This stops at the first pair of convex parts that is not separated.
pub fn intersection_test(
    pos1: &Transform<Real>,
    collider1: &Collider,
    pos2: &Transform<Real>,
    collider2: &Collider,
    options: &SatOptions,
) -> bool {
    let collider1 = collider1.transformed(pos1);
    let collider2 = collider2.transformed(pos2);

    collider1.polytopes().any(|poly1| {
        collider2
            .polytopes()
            .any(|poly2| contact_polytopes(poly1, poly2, options).is_some())
    })
}
