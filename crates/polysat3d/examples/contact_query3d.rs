extern crate nalgebra as na;

use na::{Isometry3, Vector3};
use polysat3d::query::{self, SatOptions};
use polysat3d::shape::{Collider, ConvexPolytope};

fn main() {
    let cube = Collider::from(ConvexPolytope::unit_cube());
    let options = SatOptions::default();

    let cube_pos = Isometry3::identity().to_homogeneous();
    let cube_pos_penetrating = Isometry3::translation(0.0, 0.0, 0.5).to_homogeneous();
    let cube_pos_too_far = Isometry3::translation(0.0, 0.0, 1.5).to_homogeneous();

    let ctct_penetrating = query::contact(&cube_pos, &cube, &cube_pos_penetrating, &cube, &options);
    let ctct_too_far = query::contact(&cube_pos, &cube, &cube_pos_too_far, &cube, &options);

    assert_eq!(ctct_penetrating.len(), 1);
    let contact = &ctct_penetrating[0].contact;
    assert!(contact.is_face_contact());
    assert!((contact.penetration - 0.5).abs() < 1.0e-5);
    assert!((contact.normal.into_inner() - Vector3::z()).norm() < 1.0e-5);
    assert_eq!(contact.points.len(), 4);
    assert!(ctct_too_far.is_empty());

    println!("Penetrating: {contact:?}");
}
