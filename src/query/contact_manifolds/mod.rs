//! Contact manifold generation between polytope faces.

pub use self::contact_manifolds_polytope_polytope::{generate_manifold, incident_face};

mod contact_manifolds_polytope_polytope;
