use na::{Isometry3, Matrix4, Vector3};
use polysat3d::math::Real;
use polysat3d::shape::{Collider, CompositeCollider, ConvexPolytope};

fn random_vector(rng: &mut oorandom::Rand32) -> Vector3<Real> {
    Vector3::from_fn(|_, _| rng.rand_float() as Real * 2.0 - 1.0)
}

fn shapes() -> Vec<ConvexPolytope> {
    vec![
        ConvexPolytope::unit_cube(),
        ConvexPolytope::cuboid(Vector3::new(0.1, 2.0, 0.7)).unwrap(),
        ConvexPolytope::triangular_prism(1.0, 0.3, 2.0).unwrap(),
    ]
}

#[test]
fn projection_bounds_are_ordered() {
    let mut rng = oorandom::Rand32::new(42);

    for shape in shapes() {
        for _ in 0..100 {
            let pos = Isometry3::new(random_vector(&mut rng) * 5.0, random_vector(&mut rng) * 3.0);
            let moved = shape.transformed(&pos.to_homogeneous());
            let axis = random_vector(&mut rng);
            let proj = moved.projection(&axis);

            assert!(proj.min <= proj.max);
        }
    }
}

#[test]
fn identity_transform_changes_nothing() {
    for shape in shapes() {
        let same = shape.transformed(&Matrix4::identity());

        assert_relative_eq!(same.origin(), shape.origin(), epsilon = 1.0e-6);
        for (a, b) in shape.points().zip(same.points()) {
            assert_relative_eq!(*a, *b, epsilon = 1.0e-6);
        }
        for (a, b) in shape.normals().zip(same.normals()) {
            assert_relative_eq!(a.into_inner(), b.into_inner(), epsilon = 1.0e-6);
        }
        assert_eq!(shape.mesh().half_edges(), same.mesh().half_edges());
    }
}

#[test]
fn transform_round_trip() {
    let mut rng = oorandom::Rand32::new(3);

    for shape in shapes() {
        let pos = Isometry3::new(random_vector(&mut rng) * 5.0, random_vector(&mut rng) * 3.0);
        let back = shape
            .transformed(&pos.to_homogeneous())
            .transformed(&pos.inverse().to_homogeneous());

        assert_relative_eq!(back.origin(), shape.origin(), epsilon = 1.0e-4);
        for (a, b) in shape.points().zip(back.points()) {
            assert_relative_eq!(*a, *b, epsilon = 1.0e-4);
        }
        for (a, b) in shape.normals().zip(back.normals()) {
            assert_relative_eq!(a.into_inner(), b.into_inner(), epsilon = 1.0e-4);
        }
    }
}

#[test]
fn normals_stay_orthogonal_to_faces_under_scaling() {
    let scale = Matrix4::new_nonuniform_scaling(&Vector3::new(3.0, 0.5, 1.0));
    let prism = ConvexPolytope::triangular_prism(1.0, 0.5, 1.0)
        .unwrap()
        .transformed(&scale);
    let mesh = prism.mesh();

    for face in 0..mesh.face_count() as u32 {
        let normal = mesh.face(face).normal;
        assert_relative_eq!(normal.norm(), 1.0, epsilon = 1.0e-5);

        for edge in mesh.edge_loop(face) {
            assert_relative_eq!(normal.dot(&mesh.edge_vector(edge)), 0.0, epsilon = 1.0e-5);
        }

        // Still pointing outward.
        assert!(normal.dot(&(mesh.face_center(face) - prism.origin())) > 0.0);
    }
}

#[test]
fn composite_projection_covers_every_part() {
    let mut rng = oorandom::Rand32::new(11);
    let parts: Vec<Collider> = shapes()
        .into_iter()
        .map(|shape| {
            let pos = Isometry3::new(random_vector(&mut rng) * 5.0, random_vector(&mut rng));
            shape.transformed(&pos.to_homogeneous()).into()
        })
        .collect();
    let composite = Collider::from(CompositeCollider::new(parts).unwrap());

    for _ in 0..50 {
        let axis = random_vector(&mut rng);
        let proj = composite.projection(&axis);

        for part in composite.polytopes() {
            let part_proj = part.projection(&axis);
            assert!(proj.min <= part_proj.min);
            assert!(proj.max >= part_proj.max);
        }
    }
}
