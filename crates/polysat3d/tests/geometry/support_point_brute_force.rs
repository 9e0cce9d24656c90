use na::{Isometry3, Vector3};
use polysat3d::math::Real;
use polysat3d::shape::{Collider, CompositeCollider, ConvexPolytope, SupportMap};

fn random_vector(rng: &mut oorandom::Rand32) -> Vector3<Real> {
    Vector3::from_fn(|_, _| rng.rand_float() as Real * 2.0 - 1.0)
}

fn random_box(rng: &mut oorandom::Rand32) -> ConvexPolytope {
    let half_extents = Vector3::from_fn(|_, _| 0.1 + rng.rand_float() as Real * 2.0);
    let pos = Isometry3::new(random_vector(rng) * 10.0, random_vector(rng) * 3.0);
    ConvexPolytope::cuboid(half_extents)
        .unwrap()
        .transformed(&pos.to_homogeneous())
}

#[test]
fn box_support_point_is_a_maximizing_vertex() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..200 {
        let cuboid = random_box(&mut rng);
        assert_eq!(cuboid.points().len(), 8);

        for _ in 0..20 {
            let axis = random_vector(&mut rng);
            let support = cuboid.support_point(&axis);

            assert!(cuboid.points().any(|p| *p == support));

            let best = cuboid
                .points()
                .map(|p| axis.dot(&(p - cuboid.origin())))
                .fold(Real::MIN, Real::max);
            assert_eq!(axis.dot(&(support - cuboid.origin())), best);
        }
    }
}

#[test]
fn composite_support_point_is_a_maximizing_vertex() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..50 {
        let parts = (0..3).map(|_| Collider::from(random_box(&mut rng))).collect();
        let composite = Collider::from(CompositeCollider::new(parts).unwrap());

        for _ in 0..20 {
            let axis = random_vector(&mut rng);
            let support = composite.support_point(&axis);
            let best = composite
                .polytopes()
                .flat_map(|p| p.points())
                .map(|p| axis.dot(&p.coords))
                .fold(Real::MIN, Real::max);

            assert!(composite
                .polytopes()
                .any(|poly| poly.points().any(|p| *p == support)));
            assert_relative_eq!(axis.dot(&support.coords), best, epsilon = 1.0e-4);
        }
    }
}
