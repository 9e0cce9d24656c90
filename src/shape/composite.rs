//! Colliders made of several convex parts.

use crate::math::{Point, Real, Transform, Vector};
use crate::query::{Ray, RayHit};
use crate::shape::{ConvexPolytope, SupportMap};
use crate::utils::Projection;
use na::Unit;

/// Error returned when building an invalid [`CompositeCollider`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum CompositeError {
    /// A composite collider must have at least one child.
    #[error("a composite collider must have at least one child.")]
    Empty,
}

/// A collider: either a single convex polytope, or a composite of other colliders.
///
/// Every operation recurses into the children of composites. The separating axis tests only
/// operate on the convex parts, obtained with [`Collider::polytopes`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub enum Collider {
    /// A convex polytope.
    Convex(ConvexPolytope),
    /// A union of colliders.
    Composite(CompositeCollider),
}

/// A collider made of the union of several child colliders.
///
/// This is how concave shapes (an L-shaped block, a staircase) are represented. The children
/// are owned by value and the composite has no geometry of its own.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct CompositeCollider {
    children: Vec<Collider>,
}

impl CompositeCollider {
    /// Builds a composite collider from its children.
    ///
    /// Fails if `children` is empty.
    pub fn new(children: Vec<Collider>) -> Result<Self, CompositeError> {
        if children.is_empty() {
            return Err(CompositeError::Empty);
        }

        Ok(Self { children })
    }

    /// The children of this composite.
    #[inline]
    pub fn children(&self) -> &[Collider] {
        &self.children
    }

    /// Computes a new composite with all its children transformed by `transform`.
    pub fn transformed(&self, transform: &Transform<Real>) -> CompositeCollider {
        CompositeCollider {
            children: self
                .children
                .iter()
                .map(|child| child.transformed(transform))
                .collect(),
        }
    }
}

impl From<ConvexPolytope> for Collider {
    fn from(polytope: ConvexPolytope) -> Self {
        Collider::Convex(polytope)
    }
}

impl From<CompositeCollider> for Collider {
    fn from(composite: CompositeCollider) -> Self {
        Collider::Composite(composite)
    }
}

impl Collider {
    /// The polytope of this collider, if it is not a composite.
    #[inline]
    pub fn as_convex(&self) -> Option<&ConvexPolytope> {
        match self {
            Collider::Convex(polytope) => Some(polytope),
            Collider::Composite(_) => None,
        }
    }

    /// The composite of this collider, if it is one.
    #[inline]
    pub fn as_composite(&self) -> Option<&CompositeCollider> {
        match self {
            Collider::Convex(_) => None,
            Collider::Composite(composite) => Some(composite),
        }
    }

    /// Computes a new collider with all its parts transformed by `transform`.
    ///
    /// `self` is left untouched.
    pub fn transformed(&self, transform: &Transform<Real>) -> Collider {
        match self {
            Collider::Convex(polytope) => Collider::Convex(polytope.transformed(transform)),
            Collider::Composite(composite) => {
                Collider::Composite(composite.transformed(transform))
            }
        }
    }

    /// Iterates through all the convex parts of this collider, depth-first.
    ///
    /// The position of a part in this sequence is its part index, as reported by the contact
    /// and ray-casting queries.
    pub fn polytopes(&self) -> Polytopes<'_> {
        Polytopes { stack: vec![self] }
    }

    /// The number of convex parts of this collider.
    pub fn part_count(&self) -> usize {
        self.polytopes().count()
    }

    /// The face normals of all the parts of this collider, part after part.
    pub fn normals(&self) -> Vec<Unit<Vector<Real>>> {
        self.polytopes().flat_map(|p| p.normals()).collect()
    }

    /// The interval covered by all the parts of this collider projected on `axis`.
    pub fn projection(&self, axis: &Vector<Real>) -> Projection {
        self.polytopes()
            .map(|p| p.projection(axis))
            .reduce(|a, b| a.merged(&b))
            // Composites are never empty.
            .unwrap_or_else(|| Projection::point(0.0))
    }

    /// The vertices and the edges of all the parts of this collider.
    ///
    /// Each edge is a pair of indices into the returned vertex buffer. Every undirected edge
    /// of every part appears once.
    pub fn to_outline(&self) -> (Vec<Point<Real>>, Vec<[u32; 2]>) {
        let mut points = Vec::new();
        let mut indices = Vec::new();

        for polytope in self.polytopes() {
            let base = points.len() as u32;
            let mesh = polytope.mesh();
            points.extend(polytope.points().copied());
            indices.extend(mesh.undirected_edges().map(|edge| {
                let twin = mesh.half_edge(edge).twin;
                [
                    base + mesh.half_edge(edge).vertex,
                    base + mesh.half_edge(twin).vertex,
                ]
            }));
        }

        (points, indices)
    }

    /// Casts a ray on all the parts of this collider and returns the closest hit.
    ///
    /// The `part` field of the result identifies the part that was hit.
    pub fn cast_ray(&self, ray: &Ray) -> Option<RayHit> {
        let mut best: Option<RayHit> = None;

        for (part, polytope) in self.polytopes().enumerate() {
            if let Some(hit) = polytope.cast_ray(ray) {
                if best.map(|b| hit.distance < b.distance).unwrap_or(true) {
                    best = Some(RayHit { part, ..hit });
                }
            }
        }

        best
    }
}

impl SupportMap for Collider {
    /// The support point of the part reaching the furthest along `dir`.
    ///
    /// Ties are resolved in favor of the first part.
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut best: Option<(Real, Point<Real>)> = None;

        for polytope in self.polytopes() {
            let pt = polytope.support_point(dir);
            let dot = pt.coords.dot(dir);

            if best.map(|(best_dot, _)| dot > best_dot).unwrap_or(true) {
                best = Some((dot, pt));
            }
        }

        best.map(|(_, pt)| pt).unwrap_or_else(Point::origin)
    }
}

/// Depth-first iterator through the convex parts of a [`Collider`].
#[derive(Clone, Debug)]
pub struct Polytopes<'a> {
    stack: Vec<&'a Collider>,
}

impl<'a> Iterator for Polytopes<'a> {
    type Item = &'a ConvexPolytope;

    fn next(&mut self) -> Option<&'a ConvexPolytope> {
        loop {
            match self.stack.pop()? {
                Collider::Convex(polytope) => return Some(polytope),
                Collider::Composite(composite) => {
                    self.stack.extend(composite.children().iter().rev());
                }
            }
        }
    }
}
