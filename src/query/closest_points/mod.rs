//! Closest points between lines and segments.

pub use self::closest_points_line_line::{
    closest_points_line_line, closest_points_line_line_parameters_eps,
};
pub use self::closest_points_segment_segment::{
    closest_points_segment_segment, closest_points_segment_segment_parameters,
};

mod closest_points_line_line;
mod closest_points_segment_segment;
