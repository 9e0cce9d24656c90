//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::contact()`](contact()) to compute the contacts between two colliders placed in
//!   the world, including their contact manifolds.
//! * [`query::intersection_test()`](intersection_test()) to determine if two colliders are
//!   intersecting or not.
//! * [`query::cast_ray()`](cast_ray()) to find the closest point where a ray hits a collider.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are the building blocks of the queries
//! above: the separating axis tests, the contact classification between two convex polytopes
//! already expressed in the same frame, polygon clipping, and closest points between lines
//! and segments.

pub use self::contact::{
    contact, intersection_test, Contact, ContactKind, PartContact, ReferenceSide,
};
pub use self::query_options::SatOptions;
pub use self::ray::{cast_ray, Ray, RayHit};

mod clip;
pub mod closest_points;
pub mod contact;
mod contact_manifolds;
mod query_options;
mod ray;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::clip::*;
    pub use super::closest_points::*;
    pub use super::contact::contact_polytopes;
    pub use super::contact_manifolds::*;
    pub use super::ray::{line_toi_with_halfspace, ray_toi_with_halfspace};
    pub use super::sat::*;
}
