extern crate nalgebra as na;

use na::{Isometry3, Point3, Vector3};
use polysat3d::query::{self, Ray};
use polysat3d::shape::{Collider, ConvexPolytope};

fn main() {
    let prism = Collider::from(ConvexPolytope::triangular_prism(1.0, 1.0, 2.0).unwrap());
    let prism_pos = Isometry3::translation(0.0, 0.0, 10.0).to_homogeneous();

    let ray_hit = Ray::new(Point3::origin(), Vector3::z());
    let ray_miss = Ray::new(Point3::new(0.0, 5.0, 0.0), Vector3::z());

    let hit = query::cast_ray(&prism_pos, &prism, &ray_hit).unwrap();
    assert!((hit.distance - 8.0).abs() < 1.0e-5);
    assert_eq!(ray_hit.point_at(hit.distance), hit.point);
    assert!(query::cast_ray(&prism_pos, &prism, &ray_miss).is_none());

    println!("Hit face {} at {:?}, distance {}.", hit.face, hit.point, hit.distance);
}
