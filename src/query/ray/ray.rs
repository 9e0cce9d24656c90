//! Structures needed to cast rays.

use crate::math::{Point, Real, Transform, Vector};

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at an origin point and extending
/// infinitely in a direction.
///
/// The direction does not need to be normalized, but the distances reported by ray-casting
/// queries are expressed in multiples of `dir`. They are actual lengths only if `dir` is a
/// unit vector.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use polysat3d::math::{Point, Vector};
/// use polysat3d::query::Ray;
/// use polysat3d::shape::ConvexPolytope;
///
/// let cube = ConvexPolytope::unit_cube();
/// let ray = Ray::new(Point::new(-5.0, 0.0, 0.0), Vector::x());
///
/// let hit = cube.cast_ray(&ray).unwrap();
/// assert_eq!(hit.distance, 4.5);
/// assert_eq!(hit.point, Point::new(-0.5, 0.0, 0.0));
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray starting from `origin` and with the direction `dir`.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Transforms this ray by the given affine transform.
    #[inline]
    pub fn transform_by(&self, m: &Transform<Real>) -> Self {
        Self::new(m.transform_point(&self.origin), m.transform_vector(&self.dir))
    }

    /// Computes the point at the given parameter on this ray.
    ///
    /// This is computed as `self.origin + self.dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}

/// The closest intersection between a ray and a collider.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RayHit {
    /// The ray parameter of the hit: the hit point is `ray.point_at(distance)`.
    pub distance: Real,
    /// The hit point.
    pub point: Point<Real>,
    /// The index of the face that was hit, within its polytope.
    pub face: u32,
    /// The index of the convex part that was hit, in the order of
    /// [`Collider::polytopes`](crate::shape::Collider::polytopes). Always zero for a
    /// single polytope.
    pub part: usize,
}
