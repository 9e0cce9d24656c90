//! Implementation details of the `contact` and `intersection_test` functions.

pub use self::contact::{Contact, ContactKind, PartContact, ReferenceSide};
pub use self::contact_collider_collider::{contact, intersection_test};
pub use self::contact_polytope_polytope::contact_polytopes;

mod contact;
mod contact_collider_collider;
mod contact_polytope_polytope;
