//! Composite arm: ordered segments followed by one end effector.

use crate::config::{EffectorSpec, SearchConfig, SegmentSpec};
use crate::effector::EndEffector;
use crate::massive::Massive;
use crate::segment::StructuralSegment;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance for treating two segment lengths as equal.
const LENGTH_TOLERANCE: f64 = 1e-9;

/// A single part of an [`Arm`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Component {
    /// A structural segment.
    Segment(StructuralSegment),
    /// The end effector.
    EndEffector(EndEffector),
}

impl Component {
    /// Short descriptor of the component kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Segment(_) => "segment",
            Self::EndEffector(_) => "end effector",
        }
    }

    /// Check if this component is a structural segment.
    #[must_use]
    pub const fn is_segment(&self) -> bool {
        matches!(self, Self::Segment(_))
    }
}

impl Massive for Component {
    fn mass(&self) -> f64 {
        match self {
            Self::Segment(s) => s.mass(),
            Self::EndEffector(e) => e.mass(),
        }
    }

    fn length(&self) -> f64 {
        match self {
            Self::Segment(s) => s.length(),
            Self::EndEffector(e) => e.length(),
        }
    }

    fn center_of_mass(&self) -> f64 {
        match self {
            Self::Segment(s) => s.center_of_mass(),
            Self::EndEffector(e) => e.center_of_mass(),
        }
    }
}

/// An ordered assembly of structural segments with the end effector last.
///
/// Component order is significant: each component sits at the cumulative
/// length of everything before it, which shifts the arm's center of mass.
///
/// # Example
///
/// ```
/// use arm_types::{Arm, Massive, SearchConfig};
///
/// let config = SearchConfig::default();
/// let short_first = Arm::from_config(&[12.0, 24.0, 36.0], &config);
/// let long_first = Arm::from_config(&[36.0, 24.0, 12.0], &config);
///
/// assert!((short_first.mass() - long_first.mass()).abs() < 1e-9);
/// // Drivetrain hardware sits at the distal end of each segment, so putting
/// // the short segments near the base keeps more of it close in.
/// assert!(short_first.torque_at_base() < long_first.torque_at_base());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arm {
    components: Vec<Component>,
    mass: f64,
    length: f64,
    center_of_mass: f64,
}

impl Arm {
    /// Build an arm with one segment per length, in order, plus the end effector.
    #[must_use]
    pub fn new(lengths: &[f64], segment: &SegmentSpec, effector: EffectorSpec) -> Self {
        let components = lengths
            .iter()
            .map(|&length| Component::Segment(StructuralSegment::new(length, segment)))
            .chain(std::iter::once(Component::EndEffector(EndEffector::new(
                effector,
            ))))
            .collect();
        Self::from_components(components)
    }

    /// Build an arm using the physical constants of a search configuration.
    #[must_use]
    pub fn from_config(lengths: &[f64], config: &SearchConfig) -> Self {
        Self::new(lengths, &config.segment, config.effector)
    }

    fn from_components(components: Vec<Component>) -> Self {
        let mut mass = 0.0;
        let mut length = 0.0;
        let mut moment = 0.0;

        for component in &components {
            let m = component.mass();
            moment += m * (length + component.center_of_mass());
            mass += m;
            length += component.length();
        }

        debug_assert!(mass > 0.0, "arm mass must be positive, got {mass}");

        Self {
            components,
            mass,
            length,
            center_of_mass: moment / mass,
        }
    }

    /// Components from base to tip.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Lengths of the structural segments from base to tip.
    #[must_use]
    pub fn segment_lengths(&self) -> Vec<f64> {
        self.components
            .iter()
            .filter(|c| c.is_segment())
            .map(Massive::length)
            .collect()
    }

    /// Number of structural segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.components.iter().filter(|c| c.is_segment()).count()
    }

    /// Check if all structural segments have the same length.
    ///
    /// An arm without segments is not symmetric.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        let lengths = self.segment_lengths();
        !lengths.is_empty()
            && lengths
                .windows(2)
                .all(|pair| (pair[0] - pair[1]).abs() <= LENGTH_TOLERANCE)
    }
}

impl Massive for Arm {
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

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arm(lengths: &[f64]) -> Arm {
        Arm::from_config(lengths, &SearchConfig::default())
    }

    #[test]
    fn test_components_follow_input_order() {
        let arm = arm(&[36.0, 12.0, 24.0]);
        let components = arm.components();

        assert_eq!(components.len(), 4);
        assert_eq!(components[0].length(), 36.0);
        assert_eq!(components[1].length(), 12.0);
        assert_eq!(components[2].length(), 24.0);
        assert_eq!(components[3].kind(), "end effector");
        assert_eq!(arm.segment_lengths(), vec![36.0, 12.0, 24.0]);
        assert_eq!(arm.segment_count(), 3);
    }

    #[test]
    fn test_aggregates_are_sums() {
        let arm = arm(&[12.0, 24.0, 36.0]);
        let mass: f64 = arm.components().iter().map(Massive::mass).sum();
        let length: f64 = arm.components().iter().map(Massive::length).sum();

        assert_relative_eq!(arm.mass(), mass, epsilon = 1e-12);
        assert_relative_eq!(arm.length(), 80.0, epsilon = 1e-12);
        assert_relative_eq!(arm.length(), length, epsilon = 1e-12);
    }

    #[test]
    fn test_center_of_mass_weighted_by_position() {
        let spec = SegmentSpec::default();
        let effector = EffectorSpec::default();
        let arm = Arm::new(&[20.0, 30.0], &spec, effector);

        let m0 = spec.mass(20.0);
        let m1 = spec.mass(30.0);
        let expected = (m0 * 18.0 + m1 * (20.0 + 28.0) + effector.mass * (50.0 + 3.0))
            / (m0 + m1 + effector.mass);

        assert_relative_eq!(arm.center_of_mass(), expected, epsilon = 1e-12);
        assert_relative_eq!(
            arm.torque_at_base(),
            arm.mass() * expected,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_torque_is_not_sum_of_component_torques() {
        let arm = arm(&[12.0, 24.0, 36.0]);
        let naive: f64 = arm.components().iter().map(Massive::torque_at_base).sum();
        assert!(arm.torque_at_base() > naive);
    }

    #[test]
    fn test_center_of_mass_inside_arm() {
        let arm = arm(&[12.0, 24.0, 36.0]);
        assert!(arm.center_of_mass() > 0.0);
        assert!(arm.center_of_mass() < arm.length());
    }

    #[test]
    fn test_lengthening_a_segment_increases_torque() {
        let base = arm(&[20.0, 20.0, 20.0]);
        for i in 0..3 {
            let mut lengths = [20.0, 20.0, 20.0];
            lengths[i] += 1.0;
            assert!(arm(&lengths).torque_at_base() > base.torque_at_base());
        }
    }

    #[test]
    fn test_symmetry() {
        assert!(arm(&[24.0, 24.0, 24.0]).is_symmetric());
        assert!(!arm(&[12.0, 24.0, 36.0]).is_symmetric());
        assert!(arm(&[30.0]).is_symmetric());
        assert!(!arm(&[]).is_symmetric());
    }

    #[test]
    fn test_effector_only_arm() {
        let arm = arm(&[]);
        assert_eq!(arm.mass(), 3.5);
        assert_eq!(arm.center_of_mass(), 3.0);
    }
}
