/*!
polysat
========

**polysat** is a 3-dimensional narrow-phase collision detection library
written with the rust programming language.

It represents convex polytopes with an index-based half-edge mesh, finds the
axis of least penetration between two of them with the Separating Axis
Theorem (face normals and edge-edge cross products), and builds the contact
manifold of face contacts by clipping the incident face against the side
planes of the reference face.

Concave objects are described as composites of convex parts; every query runs
pair-wise over the convex parts.

```
# #[cfg(feature = "f32")] {
use polysat3d::math::{Isometry, Vector};
use polysat3d::query::{self, SatOptions};
use polysat3d::shape::{Collider, ConvexPolytope};

let cube = Collider::from(ConvexPolytope::unit_cube());
let pos1 = Isometry::identity().to_homogeneous();
let pos2 = Isometry::translation(0.0, 0.0, 0.5).to_homogeneous();

let contacts = query::contact(&pos1, &cube, &pos2, &cube, &SatOptions::default());
assert_eq!(contacts.len(), 1);
assert!((contacts[0].contact.penetration - 0.5).abs() < 1.0e-5);
assert!((contacts[0].contact.normal.into_inner() - Vector::z()).norm() < 1.0e-5);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{
        Isometry3, Matrix3, Matrix4, Point2, Point3, Translation3, UnitQuaternion, UnitVector3,
        Vector2, Vector3,
    };

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The rigid transformation type.
    ///
    /// Colliders are transformed with homogeneous matrices (see [`Transform`]);
    /// use `Isometry::to_homogeneous` to build one from a rigid motion.
    pub use Isometry3 as Isometry;

    /// The translation type.
    pub use Translation3 as Translation;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The affine transformation matrix type (rotation, translation, and scale).
    pub type Transform<N> = Matrix4<N>;
}
