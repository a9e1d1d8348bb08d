//! Structural segment: a beam plus the drivetrain at its joint.

use crate::config::SegmentSpec;
use crate::massive::Massive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One beam of the arm.
///
/// Mass and center of mass are derived from the [`SegmentSpec`] once, at
/// construction.
///
/// # Example
///
/// ```
/// use arm_types::{Massive, SegmentSpec, StructuralSegment};
///
/// let segment = StructuralSegment::new(24.0, &SegmentSpec::default());
/// assert_eq!(segment.length(), 24.0);
/// assert_eq!(segment.center_of_mass(), 22.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StructuralSegment {
    length: f64,
    mass: f64,
    center_of_mass: f64,
}

impl StructuralSegment {
    /// Create a segment of the given length.
    #[must_use]
    pub fn new(length: f64, spec: &SegmentSpec) -> Self {
        Self {
            length,
            mass: spec.mass(length),
            center_of_mass: spec.center_of_mass(length),
        }
    }
}

impl Massive for StructuralSegment {
    fn mass(&self) -> f64 {
        self.mass
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn center_of_mass(&self) -> f64 {
        self.center_of_mass
    }
}
