use crate::math::{Real, DEFAULT_EPSILON};

/// Tolerances of the separating axis tests and of the contact manifold generation.
///
/// All the lengths are expressed in the units of the colliders once transformed to the world
/// frame.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SatOptions {
    /// Edge pairs whose cross product has a norm smaller than this (relative to the product of
    /// the edge lengths) are considered parallel and do not generate a candidate axis.
    pub parallel_epsilon: Real,
    /// Slack allowed on the `[0, 1]` segment parameters of the closest points between two
    /// edges before their candidate axis is rejected.
    pub segment_tolerance: Real,
    /// Maximum distance, along a candidate edge axis, between an edge and the extreme
    /// projection of its polytope for the edge to be considered a supporting feature.
    pub support_tolerance: Real,
    /// An edge contact is only reported if its penetration is smaller than both face
    /// penetrations by more than this amount.
    pub edge_bias: Real,
    /// Slop applied to the side planes used for clipping, and to the reference plane when
    /// filtering the clipped points.
    pub clip_tolerance: Real,
}

impl Default for SatOptions {
    fn default() -> Self {
        Self {
            parallel_epsilon: DEFAULT_EPSILON.sqrt(),
            segment_tolerance: 1.0e-4,
            support_tolerance: 1.0e-4,
            edge_bias: 1.0e-4,
            clip_tolerance: 1.0e-4,
        }
    }
}
