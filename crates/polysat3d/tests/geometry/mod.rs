mod composite_contact;
mod polytope_properties;
mod polytope_ray_cast;
mod sat_brute_force;
mod support_point_brute_force;
