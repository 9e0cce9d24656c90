use crate::math::{Point, Real};
use crate::shape::{ConvexPolytope, SupportMap};

/// The face of a polytope whose normal is the axis of least penetration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct FaceQuery {
    /// The index of the face on the first shape.
    pub face: u32,
    /// The penetration depth along the normal of `face`. Non-positive if the shapes are
    /// separated.
    pub penetration: Real,
    /// The support point of the second shape in the direction opposite to the normal of
    /// `face`.
    pub witness: Point<Real>,
}

/// Finds the face of `poly1` whose normal has the smallest penetration of `sm2`.
///
/// For each face of normal `n`, the penetration is the distance from the deepest point of
/// `sm2` along `-n` to the plane of the face.
pub fn face_test<S: ?Sized + SupportMap>(poly1: &ConvexPolytope, sm2: &S) -> FaceQuery {
    let mesh = poly1.mesh();
    let mut best: Option<FaceQuery> = None;

    for face_id in 0..mesh.face_count() as u32 {
        let plane = mesh.plane(face_id);
        let witness = sm2.support_point(&-plane.normal.into_inner());
        let penetration = -plane.signed_distance(&witness);

        if best.map(|b| penetration < b.penetration).unwrap_or(true) {
            best = Some(FaceQuery {
                face: face_id,
                penetration,
                witness,
            });
        }
    }

    // A mesh always has at least one face.
    best.unwrap_or(FaceQuery {
        face: 0,
        penetration: Real::MAX,
        witness: poly1.origin(),
    })
}
