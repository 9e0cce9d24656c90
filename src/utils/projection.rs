use crate::math::Real;

/// The interval covered by a shape projected onto an axis.
///
/// This is the "shadow" of the shape on the axis: `min` and `max` are the smallest and
/// largest values of `dot(point, axis)` over all the points of the shape.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Projection {
    /// The smallest projected value.
    pub min: Real,
    /// The largest projected value.
    pub max: Real,
}

impl Projection {
    /// Creates a projection interval.
    ///
    /// The bounds are swapped if `min > max`.
    #[inline]
    pub fn new(min: Real, max: Real) -> Self {
        if min > max {
            Projection { min: max, max: min }
        } else {
            Projection { min, max }
        }
    }

    /// An interval covering a single value.
    #[inline]
    pub fn point(value: Real) -> Self {
        Projection {
            min: value,
            max: value,
        }
    }

    /// The length of this interval.
    #[inline]
    pub fn width(&self) -> Real {
        self.max - self.min
    }

    /// Does this interval contain `value`?
    #[inline]
    pub fn contains(&self, value: Real) -> bool {
        value >= self.min && value <= self.max
    }

    /// Grows this interval so it contains `value`.
    #[inline]
    pub fn take_point(&mut self, value: Real) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// The smallest interval containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Projection) -> Projection {
        Projection {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// The signed overlap between two intervals.
    ///
    /// Positive if they intersect (the value is the length of the intersection),
    /// negative if they are disjoint (the value is minus the gap between them).
    #[inline]
    pub fn overlap(&self, other: &Projection) -> Real {
        self.max.min(other.max) - self.min.max(other.min)
    }
}
