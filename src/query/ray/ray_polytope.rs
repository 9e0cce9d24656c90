use crate::math::{Real, Transform};
use crate::query::{self, Ray, RayHit};
use crate::shape::{Collider, ConvexPolytope};
use crate::utils;

impl ConvexPolytope {
    /// Computes the closest intersection between `ray` and the boundary of this polytope.
    ///
    /// Only the faces whose normal points against the ray direction are tested, so a ray
    /// starting inside of the polytope does not hit anything.
    pub fn cast_ray(&self, ray: &Ray) -> Option<RayHit> {
        let mesh = self.mesh();
        let mut best: Option<RayHit> = None;

        for face_id in 0..mesh.face_count() as u32 {
            let plane = mesh.plane(face_id);

            if plane.normal.dot(&ray.dir) >= 0.0 {
                continue;
            }

            let Some(toi) = query::details::ray_toi_with_halfspace(
                &plane.point,
                plane.normal.as_ref(),
                ray,
            ) else {
                continue;
            };

            if best.map(|b| toi >= b.distance).unwrap_or(false) {
                continue;
            }

            let point = ray.point_at(toi);
            let (point2d, polygon) = mesh.project_on_face_basis(face_id, &point);

            if utils::point_in_poly2d(&point2d, &polygon) {
                best = Some(RayHit {
                    distance: toi,
                    point,
                    face: face_id,
                    part: 0,
                });
            }
        }

        best
    }
}

/// Casts a ray on a collider placed in the world with the transform `pos`.
///
/// The ray is expressed in the world frame, and so is the returned hit.
pub fn cast_ray(pos: &Transform<Real>, collider: &Collider, ray: &Ray) -> Option<RayHit> {
    collider.transformed(pos).cast_ray(ray)
}
