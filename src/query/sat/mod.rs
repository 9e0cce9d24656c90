//! Application of the Separating Axis Theorem (SAT) to convex polytopes.
//!
//! Two convex polytopes do not intersect if and only if there exists an axis onto which
//! their projections do not overlap. For polyhedra, it is sufficient to test:
//!
//! - the face normals of both polytopes ([`face_test`]),
//! - the cross products of one edge of each polytope ([`edge_test`]).
//!
//! Each test reports the axis of least penetration among its candidates. A non-positive
//! penetration on any axis proves the polytopes are separated.

pub use self::sat_polytope_polytope::{edge_test, EdgeQuery};
pub use self::sat_polytope_support_map::{face_test, FaceQuery};

mod sat_polytope_polytope;
mod sat_polytope_support_map;
