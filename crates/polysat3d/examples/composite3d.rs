extern crate nalgebra as na;

use na::{Isometry3, Vector3};
use polysat3d::query::{self, SatOptions};
use polysat3d::shape::{Collider, CompositeCollider, ConvexPolytope};

fn main() {
    // A staircase of three steps, each one a box.
    let steps: Vec<Collider> = (0..3)
        .map(|i| {
            let height = 0.5 * (i + 1) as f32;
            ConvexPolytope::cuboid(Vector3::new(0.5, height / 2.0, 1.0))
                .unwrap()
                .transformed(&Isometry3::translation(i as f32, height / 2.0, 0.0).to_homogeneous())
                .into()
        })
        .collect();
    let stairs = Collider::from(CompositeCollider::new(steps).unwrap());
    let (points, edges) = stairs.to_outline();
    println!(
        "Staircase: {} parts, {} vertices, {} edges.",
        stairs.part_count(),
        points.len(),
        edges.len()
    );

    // A crate resting on the second step, slightly sunk into it.
    let crate_shape = Collider::from(ConvexPolytope::cuboid(Vector3::repeat(0.3)).unwrap());
    let stairs_pos = Isometry3::identity().to_homogeneous();
    let crate_pos = Isometry3::translation(1.0, 1.29, 0.0).to_homogeneous();

    let contacts = query::contact(
        &stairs_pos,
        &stairs,
        &crate_pos,
        &crate_shape,
        &SatOptions::default(),
    );

    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].part1, 1);

    for contact in &contacts {
        println!(
            "Step {} touches the crate: penetration {}, normal {:?}, {} points.",
            contact.part1,
            contact.contact.penetration,
            contact.contact.normal,
            contact.contact.points.len()
        );
    }
}
