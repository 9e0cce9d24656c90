use na::{Isometry3, Matrix4, Vector3};
use polysat3d::math::Real;
use polysat3d::query::details::contact_polytopes;
use polysat3d::query::{self, SatOptions};
use polysat3d::shape::{Collider, ConvexPolytope};

fn random_vector(rng: &mut oorandom::Rand32) -> Vector3<Real> {
    Vector3::from_fn(|_, _| rng.rand_float() as Real * 2.0 - 1.0)
}

fn random_placement(rng: &mut oorandom::Rand32, polytope: &ConvexPolytope) -> ConvexPolytope {
    let pos = Isometry3::new(random_vector(rng) * 0.9, random_vector(rng) * 3.2);
    polytope.transformed(&pos.to_homogeneous())
}

/// The smallest overlap of the projections of both polytopes over every face normal and every
/// cross product of two non-parallel edges.
fn min_overlap(poly1: &ConvexPolytope, poly2: &ConvexPolytope, parallel_epsilon: Real) -> Real {
    let mut axes: Vec<Vector3<Real>> = poly1
        .normals()
        .chain(poly2.normals())
        .map(|n| n.into_inner())
        .collect();

    for edge1 in poly1.mesh().undirected_edges() {
        let dir1 = poly1.mesh().edge_vector(edge1);
        for edge2 in poly2.mesh().undirected_edges() {
            let dir2 = poly2.mesh().edge_vector(edge2);
            let cross = dir1.cross(&dir2);
            if cross.norm() > parallel_epsilon * dir1.norm() * dir2.norm() {
                axes.push(cross.normalize());
            }
        }
    }

    axes.iter()
        .map(|axis| poly1.projection(axis).overlap(&poly2.projection(axis)))
        .fold(Real::MAX, Real::min)
}

fn run_test(name: &str, shape1: &ConvexPolytope, shape2: &ConvexPolytope, seed: u64) {
    let mut rng = oorandom::Rand32::new(seed);
    let options = SatOptions::default();
    let identity = Matrix4::identity();
    let (mut separated, mut intersecting) = (0, 0);

    for _ in 0..2000 {
        let poly1 = random_placement(&mut rng, shape1);
        let poly2 = random_placement(&mut rng, shape2);
        let expected = min_overlap(&poly1, &poly2, options.parallel_epsilon);

        // Grazing configurations are left to the tolerances.
        if expected.abs() < 1.0e-3 {
            continue;
        }

        let contact = contact_polytopes(&poly1, &poly2, &options);
        assert_eq!(
            contact.is_some(),
            expected > 0.0,
            "{name}: overlap {expected} but got {contact:?} for {poly1:?} and {poly2:?}"
        );

        if let Some(contact) = &contact {
            assert!(contact.penetration > 0.0);
            assert!(!contact.points.is_empty());
            intersecting += 1;
        } else {
            separated += 1;
        }

        let collider1 = Collider::from(poly1);
        let collider2 = Collider::from(poly2);
        assert_eq!(
            query::intersection_test(&identity, &collider1, &identity, &collider2, &options),
            expected > 0.0,
            "{name}: intersection test disagrees with overlap {expected}"
        );
    }

    // Both outcomes must actually be exercised.
    assert!(separated > 100, "{name}: only {separated} separated pairs");
    assert!(intersecting > 100, "{name}: only {intersecting} intersecting pairs");
}

#[test]
fn cube_cube_agrees_with_brute_force() {
    let cube = ConvexPolytope::unit_cube();
    run_test("cube/cube", &cube, &cube, 42);
}

#[test]
fn prism_cube_agrees_with_brute_force() {
    let prism = ConvexPolytope::triangular_prism(0.6, 0.5, 0.4).unwrap();
    let cube = ConvexPolytope::unit_cube();
    run_test("prism/cube", &prism, &cube, 1234);
}
