use crate::math::{Point, Real, Transform, Vector};
use crate::shape::{Face, FaceDescriptor, HalfEdgeMesh, MeshBuilderError, SupportMap};
use crate::utils::{self, Projection};
use na::Unit;

/// A convex polyhedron described by a half-edge mesh and a reference origin.
///
/// The origin is a point inside the polytope (typically its center) used as the reference
/// for the support queries and for orienting the edge-edge separating axes.
///
/// A polytope is never modified in place: [`ConvexPolytope::transformed`] builds a new,
/// independent polytope.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use polysat3d::math::{Isometry, Point, Vector};
/// use polysat3d::shape::ConvexPolytope;
///
/// let cube = ConvexPolytope::cuboid(Vector::new(1.0, 1.0, 1.0)).unwrap();
/// let moved = cube.transformed(&Isometry::translation(5.0, 0.0, 0.0).to_homogeneous());
///
/// assert_eq!(moved.origin(), Point::new(5.0, 0.0, 0.0));
/// assert_eq!(moved.projection(&Vector::x()).min, 4.0);
/// assert_eq!(moved.projection(&Vector::x()).max, 6.0);
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexPolytope {
    mesh: HalfEdgeMesh,
    origin: Point<Real>,
}

impl ConvexPolytope {
    /// Builds a convex polytope from its vertices, the description of its faces, and its
    /// reference origin.
    ///
    /// See [`HalfEdgeMesh::new`] for the requirements on `points` and `faces`.
    pub fn new(
        points: Vec<Point<Real>>,
        faces: &[FaceDescriptor],
        origin: Point<Real>,
    ) -> Result<Self, MeshBuilderError> {
        let mesh = HalfEdgeMesh::new(points, faces)?;
        Ok(Self::from_mesh(mesh, origin))
    }

    /// Wraps an already built half-edge mesh.
    #[inline]
    pub fn from_mesh(mesh: HalfEdgeMesh, origin: Point<Real>) -> Self {
        Self { mesh, origin }
    }

    /// The half-edge mesh of this polytope.
    #[inline]
    pub fn mesh(&self) -> &HalfEdgeMesh {
        &self.mesh
    }

    /// The reference origin of this polytope.
    #[inline]
    pub fn origin(&self) -> Point<Real> {
        self.origin
    }

    /// The average of the vertices of this polytope.
    pub fn centroid(&self) -> Point<Real> {
        utils::center(self.points().copied()).unwrap_or(self.origin)
    }

    /// The positions of the vertices of this polytope.
    pub fn points(&self) -> impl ExactSizeIterator<Item = &Point<Real>> + '_ {
        self.mesh.vertices().iter().map(|v| &v.point)
    }

    /// The face with index `i`.
    #[inline]
    pub fn face(&self, i: u32) -> &Face {
        self.mesh.face(i)
    }

    /// The number of faces of this polytope.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.mesh.face_count()
    }

    /// The outward unit normals of the faces of this polytope, in face order.
    pub fn normals(&self) -> impl ExactSizeIterator<Item = Unit<Vector<Real>>> + '_ {
        self.mesh.faces().iter().map(|f| f.normal)
    }

    /// Computes a new polytope with its vertices, normals, and origin transformed by the
    /// affine transform `transform`.
    pub fn transformed(&self, transform: &Transform<Real>) -> ConvexPolytope {
        ConvexPolytope {
            mesh: self.mesh.transformed(transform),
            origin: transform.transform_point(&self.origin),
        }
    }

    /// The interval covered by this polytope projected on `axis`.
    ///
    /// This visits every vertex.
    #[inline]
    pub fn projection(&self, axis: &Vector<Real>) -> Projection {
        self.mesh.projection(axis)
    }

    /// The index of the vertex maximizing `dot(axis, vertex - origin)`.
    ///
    /// Ties are resolved in favor of the vertex with the smallest index.
    pub fn support_vertex(&self, axis: &Vector<Real>) -> u32 {
        let vertices = self.mesh.vertices();
        let mut best_id = 0;
        let mut best_dot = axis.dot(&(vertices[0].point - self.origin));

        for (i, vertex) in vertices.iter().enumerate().skip(1) {
            let dot = axis.dot(&(vertex.point - self.origin));

            if dot > best_dot {
                best_dot = dot;
                best_id = i;
            }
        }

        best_id as u32
    }
}

impl SupportMap for ConvexPolytope {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.mesh.vertex(self.support_vertex(dir)).point
    }
}
