use na::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};
use polysat3d::math::Real;
use polysat3d::query::{self, Ray};
use polysat3d::shape::{Collider, CompositeCollider, ConvexPolytope};

fn run_test(name: &str, shape: &ConvexPolytope) {
    let mut rng = oorandom::Rand32::new(42);
    let collider = Collider::from(shape.clone());

    for _ in 0..500 {
        let ray_origin =
            Point3::from(Vector3::from_fn(|_, _| rng.rand_float() as Real - 0.5).normalize() * 5.0);
        let ray = Ray::new(ray_origin, (Point3::origin() - ray_origin).normalize());

        let rotation = na::Unit::try_new(
            na::Quaternion::new(
                rng.rand_float() as Real,
                rng.rand_float() as Real,
                rng.rand_float() as Real,
                rng.rand_float() as Real,
            ),
            1.0e-5,
        )
        .unwrap_or(UnitQuaternion::identity());
        let position = Isometry3::from_parts(Translation3::identity(), rotation);

        let hit = query::cast_ray(&position.to_homogeneous(), &collider, &ray)
            .unwrap_or_else(|| panic!("Ray {ray:?} did not hit {name} rotated with {rotation:?}"));

        assert_relative_eq!(ray.point_at(hit.distance), hit.point, epsilon = 1.0e-4);
        assert!(hit.distance > 0.0 && hit.distance < 5.0);

        // The hit point lies on the boundary of the shape.
        let moved = shape.transformed(&position.to_homogeneous());
        let plane = moved.mesh().plane(hit.face);
        assert_relative_eq!(plane.signed_distance(&hit.point), 0.0, epsilon = 1.0e-4);
        for face in 0..moved.face_count() as u32 {
            assert!(moved.mesh().plane(face).signed_distance(&hit.point) <= 1.0e-4);
        }

        // Nothing was hit before.
        let point_before = ray.point_at(hit.distance - 1.0e-2);
        assert!((0..moved.face_count() as u32)
            .any(|face| moved.mesh().plane(face).signed_distance(&point_before) > 0.0));
    }
}

#[test]
fn cube_ray_cast() {
    run_test("unit cube", &ConvexPolytope::unit_cube());
}

#[test]
fn cuboid_ray_cast() {
    run_test(
        "cuboid",
        &ConvexPolytope::cuboid(Vector3::new(0.3, 1.0, 0.5)).unwrap(),
    );
}

#[test]
fn prism_ray_cast() {
    run_test(
        "prism",
        &ConvexPolytope::triangular_prism(1.0, 0.5, 0.3).unwrap(),
    );
}

#[test]
fn composite_ray_cast_reports_the_nearest_part() {
    let shape: Collider = CompositeCollider::new(vec![
        ConvexPolytope::unit_cube()
            .transformed(&Isometry3::translation(3.0, 0.0, 0.0).to_homogeneous())
            .into(),
        ConvexPolytope::unit_cube()
            .transformed(&Isometry3::translation(1.0, 0.0, 0.0).to_homogeneous())
            .into(),
    ])
    .unwrap()
    .into();

    let ray = Ray::new(Point3::new(5.0, 0.2, 0.1), -Vector3::x());
    let hit = shape.cast_ray(&ray).unwrap();
    assert_eq!(hit.part, 0);
    assert_relative_eq!(hit.distance, 1.5, epsilon = 1.0e-5);

    let ray = Ray::new(Point3::new(-5.0, 0.2, 0.1), Vector3::x());
    let hit = shape.cast_ray(&ray).unwrap();
    assert_eq!(hit.part, 1);
    assert_relative_eq!(hit.distance, 5.5, epsilon = 1.0e-5);
    assert_relative_eq!(hit.point, Point3::new(0.5, 0.2, 0.1), epsilon = 1.0e-5);

    let ray = Ray::new(Point3::new(-5.0, 2.0, 0.0), Vector3::x());
    assert!(shape.cast_ray(&ray).is_none());
}
