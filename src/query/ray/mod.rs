//! Ray-casting related definitions and implementations.

pub use self::ray::{Ray, RayHit};
pub use self::ray_halfspace::{line_toi_with_halfspace, ray_toi_with_halfspace};
pub use self::ray_polytope::cast_ray;

mod ray;
mod ray_halfspace;
mod ray_polytope;
