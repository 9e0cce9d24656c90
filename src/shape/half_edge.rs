//! Index-based half-edge representation of a closed polyhedral surface.
//!
//! Each [`HalfEdgeMesh`] owns three arrays (vertices, half-edges, faces). All the references
//! between records are plain `u32` indices into the arrays of the same mesh, so copying or
//! transforming a mesh never invalidates them.

use crate::math::{Matrix, Point, Point2, Real, Transform, Vector, DEFAULT_EPSILON};
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::{self, Projection};
use na::Unit;

/// Indicates an inconsistency while building a half-edge mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshBuilderError {
    /// A mesh must contain at least one vertex.
    #[error("a half-edge mesh must contain at least one vertex.")]
    EmptyVertices,
    /// A mesh must contain at least one face.
    #[error("a half-edge mesh must contain at least one face.")]
    EmptyFaces,
    /// The mesh has more elements than what a `u32` index can address.
    #[error("the mesh has too many vertices, half-edges, or faces.")]
    TooManyElements,
    /// A face has less than three vertices, or twice the same vertex in a row.
    #[error("the face {face} has less than three distinct vertices.")]
    DegenerateFace {
        /// The offending face.
        face: u32,
    },
    /// A face references a vertex that does not exist.
    #[error("the face {face} references the vertex {index} which does not exist.")]
    VertexIndexOutOfBounds {
        /// The offending face.
        face: u32,
        /// The out-of-bounds vertex index.
        index: u32,
    },
    /// The normal given for a face has a zero length.
    #[error("the normal of the face {face} is zero.")]
    ZeroNormal {
        /// The offending face.
        face: u32,
    },
    /// The same directed edge appears twice, so the surface is not a manifold
    /// (or two adjacent faces have opposite windings).
    #[error("the directed edge {edge:?} of the face {face} already belongs to another face.")]
    DuplicateHalfEdge {
        /// The face where the duplicate was found.
        face: u32,
        /// The directed edge, as a pair of vertex indices.
        edge: (u32, u32),
    },
    /// A directed edge has no opposite edge, so the surface is not closed.
    #[error("the directed edge {edge:?} has no twin: the surface is not closed.")]
    OpenEdge {
        /// The directed edge without a twin.
        edge: (u32, u32),
    },
    /// An edge has a zero length.
    #[error("the edge {edge:?} has a zero length.")]
    DegenerateEdge {
        /// The degenerate edge, as a pair of vertex indices.
        edge: (u32, u32),
    },
    /// A vertex is not referenced by any face.
    #[error("the vertex {0} is not referenced by any face.")]
    IsolatedVertex(u32),
    /// The vertex loop of a face is not convex.
    #[error("the vertex loop of the face {face} is not convex.")]
    NonConvexFace {
        /// The offending face.
        face: u32,
    },
    /// The vertex loop of a face is not counter-clockwise when seen from the side its normal
    /// points to.
    #[error("the vertex loop of the face {face} winds clockwise around its normal.")]
    FaceOrientation {
        /// The offending face.
        face: u32,
    },
    /// A vertex lies in front of the plane of a face.
    #[error("the vertex {vertex} lies in front of the plane of the face {face}.")]
    NotConvex {
        /// The face whose plane is violated.
        face: u32,
        /// The vertex in front of that plane.
        vertex: u32,
    },
}

/// A vertex of a half-edge mesh.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Vertex {
    /// The position of this vertex.
    pub point: Point<Real>,
    /// One of the half-edges starting at this vertex.
    pub edge: u32,
}

/// One directed side of an edge of a half-edge mesh.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct HalfEdge {
    /// The vertex this half-edge starts from.
    pub vertex: u32,
    /// The half-edge going in the opposite direction, on the adjacent face.
    pub twin: u32,
    /// The next half-edge around the same face.
    pub next: u32,
    /// The face this half-edge bounds.
    pub face: u32,
}

/// A face of a half-edge mesh.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Face {
    /// The outward unit normal of this face.
    pub normal: Unit<Vector<Real>>,
    /// One of the half-edges bounding this face.
    pub edge: u32,
}

/// A plane, described by one of its points and its unit normal.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Plane {
    /// A point on the plane.
    pub point: Point<Real>,
    /// The unit normal of the plane.
    pub normal: Unit<Vector<Real>>,
}

impl Plane {
    /// The signed distance from `pt` to this plane, positive on the side the normal points to.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&(pt - self.point))
    }

    /// The orthogonal projection of `pt` on this plane.
    #[inline]
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt - *self.normal * self.signed_distance(pt)
    }
}

/// The description of one face, used to build a [`HalfEdgeMesh`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct FaceDescriptor {
    /// The outward normal of the face. It does not need to be normalized.
    pub normal: Vector<Real>,
    /// The vertex indices of the face, counter-clockwise when seen from outside.
    pub indices: Vec<u32>,
}

impl FaceDescriptor {
    /// Describes a face by its outward normal and its loop of vertex indices.
    pub fn new(normal: Vector<Real>, indices: impl Into<Vec<u32>>) -> Self {
        Self {
            normal,
            indices: indices.into(),
        }
    }
}

/// A closed polyhedral surface stored as a half-edge graph.
///
/// Every half-edge has a twin, the `next` half-edges of a face form a cycle visiting its
/// boundary head-to-tail, and every index stored in a record is valid for the arrays of the
/// mesh that owns it.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct HalfEdgeMesh {
    vertices: Vec<Vertex>,
    edges: Vec<HalfEdge>,
    faces: Vec<Face>,
}

impl HalfEdgeMesh {
    /// Builds a half-edge mesh from vertex positions and a description of each face.
    ///
    /// Half-edges are created face by face, in the order of `faces` and of their vertex loops,
    /// so the resulting indices are deterministic. The input must describe a closed convex
    /// polyhedron with counter-clockwise (seen from outside) face loops:
    /// every directed edge must appear exactly once, with its opposite in an adjacent face.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use polysat3d::math::{Point, Vector};
    /// use polysat3d::shape::{FaceDescriptor, HalfEdgeMesh};
    ///
    /// // A tetrahedron.
    /// let points = vec![
    ///     Point::new(0.0, 0.0, 0.0),
    ///     Point::new(1.0, 0.0, 0.0),
    ///     Point::new(0.0, 1.0, 0.0),
    ///     Point::new(0.0, 0.0, 1.0),
    /// ];
    /// let faces = [
    ///     FaceDescriptor::new(-Vector::z(), [0, 2, 1]),
    ///     FaceDescriptor::new(-Vector::y(), [0, 1, 3]),
    ///     FaceDescriptor::new(-Vector::x(), [0, 3, 2]),
    ///     FaceDescriptor::new(Vector::new(1.0, 1.0, 1.0), [1, 2, 3]),
    /// ];
    ///
    /// let mesh = HalfEdgeMesh::new(points, &faces).unwrap();
    /// assert_eq!(mesh.face_count(), 4);
    /// assert_eq!(mesh.half_edge_count(), 12);
    /// # }
    /// ```
    pub fn new(
        points: Vec<Point<Real>>,
        faces: &[FaceDescriptor],
    ) -> Result<Self, MeshBuilderError> {
        let result = Self::build_topology(points, faces).and_then(|mesh| {
            mesh.check_geometry()?;
            Ok(mesh)
        });

        if let Err(err) = &result {
            log::debug!("Rejected half-edge mesh: {err}");
        }

        result
    }

    fn build_topology(
        points: Vec<Point<Real>>,
        faces: &[FaceDescriptor],
    ) -> Result<Self, MeshBuilderError> {
        if points.is_empty() {
            return Err(MeshBuilderError::EmptyVertices);
        }

        if faces.is_empty() {
            return Err(MeshBuilderError::EmptyFaces);
        }

        let num_edges: usize = faces.iter().map(|f| f.indices.len()).sum();
        if points.len() >= u32::MAX as usize
            || faces.len() >= u32::MAX as usize
            || num_edges >= u32::MAX as usize
        {
            return Err(MeshBuilderError::TooManyElements);
        }

        let mut edges = Vec::<HalfEdge>::with_capacity(num_edges);
        let mut mesh_faces = Vec::<Face>::with_capacity(faces.len());
        // Directed vertex pair -> half-edge index.
        let mut edge_map = HashMap::<(u32, u32), u32>::default();

        for (face_id, desc) in faces.iter().enumerate() {
            let face_id = face_id as u32;
            let n = desc.indices.len();

            if n < 3 {
                return Err(MeshBuilderError::DegenerateFace { face: face_id });
            }

            if let Some(&index) = desc
                .indices
                .iter()
                .find(|i| **i as usize >= points.len())
            {
                return Err(MeshBuilderError::VertexIndexOutOfBounds {
                    face: face_id,
                    index,
                });
            }

            let normal = Unit::try_new(desc.normal, DEFAULT_EPSILON)
                .ok_or(MeshBuilderError::ZeroNormal { face: face_id })?;
            let first_edge = edges.len() as u32;

            for k in 0..n {
                let a = desc.indices[k];
                let b = desc.indices[(k + 1) % n];

                if a == b {
                    return Err(MeshBuilderError::DegenerateFace { face: face_id });
                }

                let edge_id = edges.len() as u32;
                match edge_map.entry((a, b)) {
                    Entry::Occupied(_) => {
                        return Err(MeshBuilderError::DuplicateHalfEdge {
                            face: face_id,
                            edge: (a, b),
                        })
                    }
                    Entry::Vacant(entry) => {
                        let _ = entry.insert(edge_id);
                    }
                }

                edges.push(HalfEdge {
                    vertex: a,
                    twin: u32::MAX,
                    next: first_edge + ((k + 1) % n) as u32,
                    face: face_id,
                });
            }

            mesh_faces.push(Face {
                normal,
                edge: first_edge,
            });
        }

        for edge_id in 0..edges.len() {
            let origin = edges[edge_id].vertex;
            let destination = edges[edges[edge_id].next as usize].vertex;

            match edge_map.get(&(destination, origin)) {
                Some(twin) => edges[edge_id].twin = *twin,
                None => {
                    return Err(MeshBuilderError::OpenEdge {
                        edge: (origin, destination),
                    })
                }
            }
        }

        let mut anchors = vec![u32::MAX; points.len()];
        for (edge_id, edge) in edges.iter().enumerate() {
            let anchor = &mut anchors[edge.vertex as usize];
            if *anchor == u32::MAX {
                *anchor = edge_id as u32;
            }
        }

        if let Some(isolated) = anchors.iter().position(|a| *a == u32::MAX) {
            return Err(MeshBuilderError::IsolatedVertex(isolated as u32));
        }

        let vertices = points
            .into_iter()
            .zip(anchors)
            .map(|(point, edge)| Vertex { point, edge })
            .collect();

        Ok(HalfEdgeMesh {
            vertices,
            edges,
            faces: mesh_faces,
        })
    }

    /// Checks that the faces are convex, wind counter-clockwise around their normals, and
    /// that no vertex lies in front of a face plane.
    fn check_geometry(&self) -> Result<(), MeshBuilderError> {
        let extent = self
            .vertices
            .iter()
            .map(|v| v.point.coords.amax())
            .fold(1.0, Real::max);
        let eps = DEFAULT_EPSILON.sqrt() * extent;

        for edge_id in 0..self.edges.len() as u32 {
            if self.edge_length(edge_id) <= eps {
                let twin = self.half_edge(edge_id).twin;
                return Err(MeshBuilderError::DegenerateEdge {
                    edge: (
                        self.half_edge(edge_id).vertex,
                        self.half_edge(twin).vertex,
                    ),
                });
            }
        }

        for face_id in 0..self.faces.len() as u32 {
            let normal = self.face(face_id).normal;
            let newell = self.edge_loop(face_id).fold(Vector::zeros(), |acc, edge_id| {
                let (a, b) = self.segment(edge_id);
                acc + a.coords.cross(&b.coords)
            });

            if normal.dot(&newell) <= 0.0 {
                return Err(MeshBuilderError::FaceOrientation { face: face_id });
            }

            for edge_id in self.edge_loop(face_id) {
                let e1 = self.edge_vector(edge_id);
                let e2 = self.edge_vector(self.half_edge(edge_id).next);

                if normal.dot(&e1.cross(&e2)) < -eps * e1.norm().max(e2.norm()) {
                    return Err(MeshBuilderError::NonConvexFace { face: face_id });
                }
            }

            let plane = self.plane(face_id);
            for (vertex_id, vertex) in self.vertices.iter().enumerate() {
                if plane.signed_distance(&vertex.point) > eps {
                    return Err(MeshBuilderError::NotConvex {
                        face: face_id,
                        vertex: vertex_id as u32,
                    });
                }
            }
        }

        Ok(())
    }

    /// The vertices of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The half-edges of this mesh.
    #[inline]
    pub fn half_edges(&self) -> &[HalfEdge] {
        &self.edges
    }

    /// The faces of this mesh.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The number of vertices of this mesh.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The number of half-edges of this mesh (twice its number of edges).
    #[inline]
    pub fn half_edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The number of faces of this mesh.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// The vertex with the index `id`.
    #[inline]
    pub fn vertex(&self, id: u32) -> &Vertex {
        &self.vertices[id as usize]
    }

    /// The half-edge with the index `id`.
    #[inline]
    pub fn half_edge(&self, id: u32) -> &HalfEdge {
        &self.edges[id as usize]
    }

    /// The face with the index `id`.
    #[inline]
    pub fn face(&self, id: u32) -> &Face {
        &self.faces[id as usize]
    }

    /// The vertex the half-edge `edge` starts from.
    #[inline]
    pub fn origin(&self, edge: u32) -> &Vertex {
        self.vertex(self.half_edge(edge).vertex)
    }

    /// The vertex the half-edge `edge` points to.
    #[inline]
    pub fn destination(&self, edge: u32) -> &Vertex {
        self.origin(self.half_edge(edge).next)
    }

    /// The opposite of the half-edge `edge`.
    #[inline]
    pub fn twin(&self, edge: u32) -> &HalfEdge {
        self.half_edge(self.half_edge(edge).twin)
    }

    /// The half-edge following `edge` around its face.
    #[inline]
    pub fn next(&self, edge: u32) -> &HalfEdge {
        self.half_edge(self.half_edge(edge).next)
    }

    /// The face bounded by the half-edge `edge`.
    #[inline]
    pub fn incident_face(&self, edge: u32) -> &Face {
        self.face(self.half_edge(edge).face)
    }

    /// The endpoints of the half-edge `edge`, in loop order.
    #[inline]
    pub fn segment(&self, edge: u32) -> (Point<Real>, Point<Real>) {
        (self.origin(edge).point, self.destination(edge).point)
    }

    /// The non-normalized vector from the origin to the destination of `edge`.
    #[inline]
    pub fn edge_vector(&self, edge: u32) -> Vector<Real> {
        self.destination(edge).point - self.origin(edge).point
    }

    /// The direction of the half-edge `edge`, pointing along its face loop
    /// (from its origin toward the origin of its next half-edge).
    ///
    /// The edge must not be degenerate, which is guaranteed for meshes built with
    /// [`HalfEdgeMesh::new`] and transformed by invertible matrices.
    #[inline]
    pub fn direction(&self, edge: u32) -> Unit<Vector<Real>> {
        Unit::new_normalize(self.edge_vector(edge))
    }

    /// The midpoint of `edge`.
    #[inline]
    pub fn edge_center(&self, edge: u32) -> Point<Real> {
        let (a, b) = self.segment(edge);
        na::center(&a, &b)
    }

    /// The length of `edge`.
    #[inline]
    pub fn edge_length(&self, edge: u32) -> Real {
        self.edge_vector(edge).norm()
    }

    /// The half-edges bounding `face`, starting with its anchor edge.
    #[inline]
    pub fn edge_loop(&self, face: u32) -> EdgeLoop<'_> {
        let start = self.face(face).edge;
        EdgeLoop {
            edges: &self.edges,
            start,
            current: Some(start),
        }
    }

    /// The vertices bounding `face`, in loop order.
    pub fn face_points(&self, face: u32) -> impl Iterator<Item = Point<Real>> + '_ {
        self.edge_loop(face).map(move |e| self.origin(e).point)
    }

    /// The centroid of the vertices of `face`.
    pub fn face_center(&self, face: u32) -> Point<Real> {
        // A face always has at least three vertices.
        utils::center(self.face_points(face)).unwrap_or_else(Point::origin)
    }

    /// The plane containing `face`, passing through the origin of its anchor edge.
    #[inline]
    pub fn plane(&self, face: u32) -> Plane {
        let face = self.face(face);
        Plane {
            point: self.origin(face.edge).point,
            normal: face.normal,
        }
    }

    /// Expresses the vertices of `face` and the point `pt` in a 2D basis of the face plane.
    ///
    /// The first axis is the direction of the anchor edge, the second is its cross product
    /// with the face normal.
    pub fn project_on_face_basis(
        &self,
        face: u32,
        pt: &Point<Real>,
    ) -> (Point2<Real>, Vec<Point2<Real>>) {
        let normal = self.face(face).normal;
        let x_axis = self.direction(self.face(face).edge);
        let y_axis = x_axis.cross(&*normal);
        let to_2d = |p: &Point<Real>| Point2::new(x_axis.dot(&p.coords), y_axis.dot(&p.coords));

        let polygon = self.face_points(face).map(|p| to_2d(&p)).collect();
        (to_2d(pt), polygon)
    }

    /// One half-edge per undirected edge: the one with the smallest index among each pair of
    /// twins.
    pub fn undirected_edges(&self) -> impl Iterator<Item = u32> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(id, edge)| (*id as u32) < edge.twin)
            .map(|(id, _)| id as u32)
    }

    /// The interval covered by the vertices of this mesh projected on `axis`.
    pub fn projection(&self, axis: &Vector<Real>) -> Projection {
        let mut result = Projection::point(self.vertices[0].point.coords.dot(axis));

        for vertex in &self.vertices[1..] {
            result.take_point(vertex.point.coords.dot(axis));
        }

        result
    }

    /// Computes a copy of this mesh with all its positions and normals transformed.
    ///
    /// Vertices are multiplied by `transform`. Normals are multiplied by the inverse-transpose
    /// of its linear part (which is its rotation part for rigid motions) and re-normalized.
    /// The connectivity is copied as-is.
    pub fn transformed(&self, transform: &Transform<Real>) -> HalfEdgeMesh {
        let normal_matrix = normal_matrix(transform);

        HalfEdgeMesh {
            vertices: self
                .vertices
                .iter()
                .map(|v| Vertex {
                    point: transform.transform_point(&v.point),
                    edge: v.edge,
                })
                .collect(),
            edges: self.edges.clone(),
            faces: self
                .faces
                .iter()
                .map(|f| Face {
                    normal: Unit::try_new(normal_matrix * f.normal.into_inner(), 0.0)
                        .unwrap_or(f.normal),
                    edge: f.edge,
                })
                .collect(),
        }
    }
}

/// The matrix transforming normals for the given affine transform.
fn normal_matrix(transform: &Transform<Real>) -> Matrix<Real> {
    let linear: Matrix<Real> = transform.fixed_view::<3, 3>(0, 0).into_owned();
    linear
        .try_inverse()
        .map(|inv| inv.transpose())
        .unwrap_or(linear)
}

/// Iterator over the half-edges bounding a face.
///
/// It starts at the anchor edge of the face and stops after the half-edge preceding it, so
/// the anchor edge is yielded exactly once. Clone it to restart the traversal.
#[derive(Clone, Debug)]
pub struct EdgeLoop<'a> {
    edges: &'a [HalfEdge],
    start: u32,
    current: Option<u32>,
}

impl Iterator for EdgeLoop<'_> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        let id = self.current?;
        let next = self.edges[id as usize].next;
        self.current = (next != self.start).then_some(next);
        Some(id)
    }
}
