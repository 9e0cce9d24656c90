use crate::math::{Point, Real, Vector};
use na::Unit;

/// The polytope owning the reference face of a face contact.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ReferenceSide {
    /// The reference face belongs to the first polytope.
    First,
    /// The reference face belongs to the second polytope.
    Second,
}

/// The features of two polytopes in contact.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ContactKind {
    /// The axis of least penetration is the normal of a face.
    Face {
        /// Which polytope owns `reference_face`.
        reference: ReferenceSide,
        /// The face whose normal is the contact axis.
        reference_face: u32,
        /// The face of the other polytope that was clipped against the reference face.
        incident_face: u32,
    },
    /// The axis of least penetration is the cross product of two edges.
    Edge {
        /// The half-edge of the first polytope.
        edge1: u32,
        /// The half-edge of the second polytope.
        edge2: u32,
    },
}

/// Geometric description of the contact between two convex polytopes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Contact {
    /// The features generating the contact.
    pub kind: ContactKind,
    /// The penetration depth along `normal`. Always positive.
    pub penetration: Real,
    /// The contact normal, pointing from the first polytope toward the second.
    pub normal: Unit<Vector<Real>>,
    /// The deepest point found by the separating axis tests.
    pub witness: Point<Real>,
    /// The contact points.
    ///
    /// For face contacts, this is the incident face clipped by the reference face and projected
    /// on its plane. For edge contacts, this is the single midpoint of the closest points
    /// between both edges.
    pub points: Vec<Point<Real>>,
}

impl Contact {
    /// Is this a face contact?
    #[inline]
    pub fn is_face_contact(&self) -> bool {
        matches!(self.kind, ContactKind::Face { .. })
    }

    /// Is this an edge contact?
    #[inline]
    pub fn is_edge_contact(&self) -> bool {
        matches!(self.kind, ContactKind::Edge { .. })
    }
}

/// A contact between two convex parts of two colliders.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PartContact {
    /// The index of the part of the first collider.
    pub part1: usize,
    /// The index of the part of the second collider.
    pub part2: usize,
    /// The contact between both parts.
    pub contact: Contact,
}
