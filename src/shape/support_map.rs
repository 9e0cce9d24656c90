//! Traits for support mapping based shapes.

use crate::math::{Point, Real, Vector};
use na::Unit;

/// Trait implemented by convex shapes representable by a support mapping function.
///
/// A support function associates a direction to the point of the shape that is the furthest
/// along that direction. It is the only geometric query the separating axis tests need from
/// the second shape of a pair.
pub trait SupportMap {
    /// Evaluates the support function of this shape.
    ///
    /// Returns a point of the shape maximizing its dot product with `dir`. `dir` does not
    /// need to be normalized.
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.support_point` except that `dir` is normalized.
    fn support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.support_point(dir.as_ref())
    }
}
