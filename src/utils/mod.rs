//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::point_in_poly2d::point_in_poly2d;
pub use self::projection::Projection;

mod center;
pub mod hashmap;
mod point_in_poly2d;
mod projection;
