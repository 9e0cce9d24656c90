use na::{Isometry3, Vector3};
use polysat3d::math::Real;
use polysat3d::query::{self, SatOptions};
use polysat3d::shape::{Collider, CompositeCollider, ConvexPolytope};

fn cube_at(x: Real, y: Real, z: Real) -> Collider {
    ConvexPolytope::unit_cube()
        .transformed(&Isometry3::translation(x, y, z).to_homogeneous())
        .into()
}

/// An L-shaped block made of three unit cubes, with its notch around `(1, 1, 0)`.
fn l_shape() -> Collider {
    CompositeCollider::new(vec![
        cube_at(0.0, 0.0, 0.0),
        cube_at(1.0, 0.0, 0.0),
        cube_at(0.0, 1.0, 0.0),
    ])
    .unwrap()
    .into()
}

fn small_box() -> Collider {
    ConvexPolytope::cuboid(Vector3::repeat(0.4)).unwrap().into()
}

#[test]
fn box_in_the_notch_does_not_touch() {
    let shape = l_shape();
    let identity = Isometry3::identity().to_homogeneous();
    let pos = Isometry3::translation(1.0, 1.0, 0.0).to_homogeneous();

    // The box overlaps the convex hull of the L, but none of its parts.
    assert!(!query::intersection_test(
        &identity,
        &shape,
        &pos,
        &small_box(),
        &SatOptions::default()
    ));
    assert!(query::contact(&identity, &shape, &pos, &small_box(), &SatOptions::default()).is_empty());
}

#[test]
fn box_touching_one_part() {
    let shape = l_shape();
    let identity = Isometry3::identity().to_homogeneous();
    let pos = Isometry3::translation(1.0, 0.85, 0.0).to_homogeneous();

    let contacts = query::contact(&identity, &shape, &pos, &small_box(), &SatOptions::default());
    assert_eq!(contacts.len(), 1);
    assert_eq!((contacts[0].part1, contacts[0].part2), (1, 0));

    let contact = &contacts[0].contact;
    assert!(contact.is_face_contact());
    assert_relative_eq!(contact.penetration, 0.05, epsilon = 1.0e-5);
    assert_relative_eq!(contact.normal.into_inner(), Vector3::y(), epsilon = 1.0e-5);
    assert_eq!(contact.points.len(), 4);
    for pt in &contact.points {
        assert_relative_eq!(pt.y, 0.5, epsilon = 1.0e-5);
    }
}

#[test]
fn box_against_the_inner_corner_touches_all_three_parts() {
    let shape = l_shape();
    let identity = Isometry3::identity().to_homogeneous();
    let pos = Isometry3::translation(0.85, 0.85, 0.0).to_homogeneous();

    let contacts = query::contact(&identity, &shape, &pos, &small_box(), &SatOptions::default());
    let mut parts: Vec<_> = contacts.iter().map(|c| c.part1).collect();
    parts.sort_unstable();
    assert_eq!(parts, vec![0, 1, 2]);

    // Two parts touch a side of the box; the corner cube of the L only touches its edge.
    for contact in &contacts {
        assert!(contact.contact.penetration > 0.0);
        assert!(contact.contact.penetration <= 0.05 + 1.0e-5);
    }
}

#[test]
fn moving_the_composite_moves_every_part() {
    let shape = l_shape();
    let pos1 = Isometry3::translation(10.0, 0.0, 0.0).to_homogeneous();
    let pos2 = Isometry3::translation(11.0, 0.85, 0.0).to_homogeneous();

    let contacts = query::contact(&pos1, &shape, &pos2, &small_box(), &SatOptions::default());
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].part1, 1);
    for pt in &contacts[0].contact.points {
        assert!(pt.x > 10.5);
    }
}

#[test]
fn nested_composites_report_depth_first_parts() {
    let nested: Collider = CompositeCollider::new(vec![
        cube_at(-5.0, 0.0, 0.0),
        CompositeCollider::new(vec![cube_at(0.0, 0.0, 0.0), cube_at(5.0, 0.0, 0.0)])
            .unwrap()
            .into(),
    ])
    .unwrap()
    .into();
    let identity = Isometry3::identity().to_homogeneous();
    let pos = Isometry3::translation(5.0, 0.0, 0.8).to_homogeneous();

    let contacts = query::contact(&identity, &nested, &pos, &small_box(), &SatOptions::default());
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].part1, 2);
    assert_relative_eq!(contacts[0].contact.penetration, 0.1, epsilon = 1.0e-5);
}
