//! Shapes supported by polysat.

pub use self::composite::{Collider, CompositeCollider, CompositeError, Polytopes};
pub use self::convex_polytope::ConvexPolytope;
pub use self::half_edge::{
    EdgeLoop, Face, FaceDescriptor, HalfEdge, HalfEdgeMesh, MeshBuilderError, Plane, Vertex,
};
#[doc(inline)]
pub use self::support_map::SupportMap;

mod builders;
mod composite;
mod convex_polytope;
mod half_edge;
mod support_map;
