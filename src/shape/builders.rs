//! Helpers to build common convex polytopes.

use crate::math::{Point, Real, Vector};
use crate::shape::{ConvexPolytope, FaceDescriptor, MeshBuilderError};
use crate::utils;

impl ConvexPolytope {
    /// Builds an axis-aligned box centered at the origin.
    ///
    /// The vertex `i` has the coordinate `+half_extents[k]` along the axis `k` if the bit `k`
    /// of `i` is set, and `-half_extents[k]` otherwise. The faces are ordered `+x`, `-x`,
    /// `+y`, `-y`, `+z`, `-z`.
    ///
    /// Fails if any half extent is not strictly positive.
    pub fn cuboid(half_extents: Vector<Real>) -> Result<Self, MeshBuilderError> {
        let points = (0..8u32)
            .map(|i| {
                Point::from(Vector::from_fn(|k, _| {
                    if i & (1 << k) != 0 {
                        half_extents[k]
                    } else {
                        -half_extents[k]
                    }
                }))
            })
            .collect();

        let faces = [
            FaceDescriptor::new(Vector::x(), [1, 3, 7, 5]),
            FaceDescriptor::new(-Vector::x(), [0, 4, 6, 2]),
            FaceDescriptor::new(Vector::y(), [2, 6, 7, 3]),
            FaceDescriptor::new(-Vector::y(), [0, 1, 5, 4]),
            FaceDescriptor::new(Vector::z(), [4, 5, 7, 6]),
            FaceDescriptor::new(-Vector::z(), [0, 2, 3, 1]),
        ];

        Self::new(points, &faces, Point::origin())
    }

    /// The box with unit side lengths, centered at the origin.
    pub fn unit_cube() -> Self {
        Self::cuboid(Vector::repeat(0.5)).expect("the unit cube is a valid polytope")
    }

    /// Builds a prism with an isosceles triangular cross-section.
    ///
    /// The triangle lies in the `xy` plane with its base at `y = -half_height` spanning
    /// `[-half_width, half_width]` and its apex at `(0, half_height)`. It is extruded along
    /// `z` over `[-half_depth, half_depth]`. The origin of the prism is the average of its
    /// six vertices.
    pub fn triangular_prism(
        half_width: Real,
        half_height: Real,
        half_depth: Real,
    ) -> Result<Self, MeshBuilderError> {
        let (hw, hh, hd) = (half_width, half_height, half_depth);
        let points = vec![
            Point::new(-hw, -hh, -hd),
            Point::new(hw, -hh, -hd),
            Point::new(0.0, hh, -hd),
            Point::new(-hw, -hh, hd),
            Point::new(hw, -hh, hd),
            Point::new(0.0, hh, hd),
        ];

        let faces = [
            FaceDescriptor::new(Vector::z(), [3, 4, 5]),
            FaceDescriptor::new(-Vector::z(), [0, 2, 1]),
            FaceDescriptor::new(-Vector::y(), [0, 1, 4, 3]),
            FaceDescriptor::new(Vector::new(2.0 * hh, hw, 0.0), [1, 2, 5, 4]),
            FaceDescriptor::new(Vector::new(-2.0 * hh, hw, 0.0), [2, 0, 3, 5]),
        ];

        let origin = utils::center(points.iter().copied()).unwrap_or_else(Point::origin);
        Self::new(points, &faces, origin)
    }
}
