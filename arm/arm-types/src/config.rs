//! Configuration types for arm construction and search.
//!
//! Every physical constant and search bound used by the model and the search.
//!
//! Units are inches for lengths, pounds for masses and lb/in³ for density.
//!
//! # Example
//!
//! ```
//! use arm_types::SearchConfig;
//!
//! let config = SearchConfig::default()
//!     .with_segments(3)
//!     .with_total_length(72)
//!     .with_min_length(12);
//!
//! assert_eq!(config.domain(), 12..=48);
//! assert!(config.validate().is_ok());
//! ```

use std::ops::RangeInclusive;

use crate::error::{require_positive, ArmError};
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Material and drivetrain constants for one structural segment.
///
/// A segment is two mirrored plates plus a motor, a multi-stage gearbox and
/// a sprocket mounted at the joint.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentSpec {
    /// Plate width (in).
    pub width: f64,
    /// Plate thickness (in).
    pub thickness: f64,
    /// Plate material density (lb/in³).
    pub density: f64,
    /// Area removed by lightening holes (in²).
    pub hole_area: f64,
    /// Area lost to rounded corners (in²).
    pub rounded_corner_loss: f64,
    /// Extra plate length added at each end (in).
    pub edge_allowance: f64,
    /// Fraction of net plate volume left after pocketing.
    pub reduction_ratio: f64,
    /// Motor mass (lb).
    pub motor_mass: f64,
    /// Gearbox housing mass (lb).
    pub gearbox_base_mass: f64,
    /// Mass of a single gearbox stage (lb).
    pub gearbox_stage_mass: f64,
    /// Number of gearbox stages.
    pub gearbox_stages: u32,
    /// Sprocket mass (lb).
    pub sprocket_mass: f64,
    /// Distance from the distal end to the segment's center of mass (in).
    pub mass_offset: f64,
}

impl Default for SegmentSpec {
    fn default() -> Self {
        Self {
            width: 3.0,
            thickness: 0.125,
            density: 0.0975, // 6061 aluminum
            hole_area: 12.0,
            rounded_corner_loss: 0.86,
            edge_allowance: 1.5,
            reduction_ratio: 0.6,
            motor_mass: 0.94,
            gearbox_base_mass: 0.6,
            gearbox_stage_mass: 0.25,
            gearbox_stages: 3,
            sprocket_mass: 0.2,
            mass_offset: 2.0,
        }
    }
}

impl SegmentSpec {
    /// Mass of both plates for a segment of the given length.
    ///
    /// `((length + 2·edge) · width − (holes + corners)) · thickness · density · ratio · 2`
    #[must_use]
    pub fn plate_mass(&self, length: f64) -> f64 {
        let gross_area = 2.0f64.mul_add(self.edge_allowance, length) * self.width;
        let net_area = gross_area - (self.hole_area + self.rounded_corner_loss);
        net_area * self.thickness * self.density * self.reduction_ratio * 2.0
    }

    /// Mass of the motor, gearbox and sprocket. Independent of length.
    #[must_use]
    pub fn hardware_mass(&self) -> f64 {
        self.motor_mass
            + self.gearbox_base_mass
            + f64::from(self.gearbox_stages) * self.gearbox_stage_mass
            + self.sprocket_mass
    }

    /// Total segment mass for the given length.
    #[must_use]
    pub fn mass(&self, length: f64) -> f64 {
        self.plate_mass(length) + self.hardware_mass()
    }

    /// Center of mass measured from the segment's proximal end.
    #[must_use]
    pub fn center_of_mass(&self, length: f64) -> f64 {
        length - self.mass_offset
    }

    /// Validate the constants.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::InvalidPhysicalConstant`] for any dimension, density
    /// or hardware mass that is not positive and finite, and for cutout areas
    /// or offsets that are negative.
    pub fn validate(&self) -> Result<()> {
        require_positive("width", self.width)?;
        require_positive("thickness", self.thickness)?;
        require_positive("density", self.density)?;
        require_positive("reduction_ratio", self.reduction_ratio)?;
        require_positive("motor_mass", self.motor_mass)?;
        require_positive("gearbox_base_mass", self.gearbox_base_mass)?;
        require_positive("gearbox_stage_mass", self.gearbox_stage_mass)?;
        require_positive("sprocket_mass", self.sprocket_mass)?;

        for (name, value) in [
            ("hole_area", self.hole_area),
            ("rounded_corner_loss", self.rounded_corner_loss),
            ("edge_allowance", self.edge_allowance),
            ("mass_offset", self.mass_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ArmError::InvalidPhysicalConstant { name, value });
            }
        }
        Ok(())
    }
}

/// Fixed specification of the gripper mounted at the end of every arm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EffectorSpec {
    /// Mass (lb).
    pub mass: f64,
    /// Length (in).
    pub length: f64,
    /// Center of mass from the proximal end (in).
    pub center_of_mass: f64,
}

impl Default for EffectorSpec {
    fn default() -> Self {
        Self {
            mass: 3.5,
            length: 8.0,
            center_of_mass: 3.0,
        }
    }
}

impl EffectorSpec {
    /// Validate the constants.
    ///
    /// # Errors
    ///
    /// Returns an error if mass or length is not positive, or the center of
    /// mass lies outside `[0, length]`.
    pub fn validate(&self) -> Result<()> {
        require_positive("effector_mass", self.mass)?;
        require_positive("effector_length", self.length)?;
        if !(0.0..=self.length).contains(&self.center_of_mass) {
            return Err(ArmError::InvalidPhysicalConstant {
                name: "effector_center_of_mass",
                value: self.center_of_mass,
            });
        }
        Ok(())
    }
}

/// Parameters of an exhaustive arm search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Number of structural segments per arm.
    pub segments: usize,
    /// Sum of all segment lengths, excluding the end effector (in).
    pub total_length: u32,
    /// Minimum length of a single segment (in).
    pub min_length: u32,
    /// Constants used to build each segment.
    pub segment: SegmentSpec,
    /// Constants of the end effector.
    pub effector: EffectorSpec,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            segments: 3,
            total_length: 72,
            min_length: 12,
            segment: SegmentSpec::default(),
            effector: EffectorSpec::default(),
        }
    }
}

impl SearchConfig {
    /// Set the number of segments.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Set the total segment length.
    #[must_use]
    pub fn with_total_length(mut self, total_length: u32) -> Self {
        self.total_length = total_length;
        self
    }

    /// Set the minimum segment length.
    #[must_use]
    pub fn with_min_length(mut self, min_length: u32) -> Self {
        self.min_length = min_length;
        self
    }

    /// Set the segment constants.
    #[must_use]
    pub fn with_segment_spec(mut self, segment: SegmentSpec) -> Self {
        self.segment = segment;
        self
    }

    /// Set the end effector constants.
    #[must_use]
    pub fn with_effector_spec(mut self, effector: EffectorSpec) -> Self {
        self.effector = effector;
        self
    }

    /// Candidate lengths for a single segment.
    ///
    /// The upper bound leaves room for the remaining `segments - 1` segments
    /// to each be at least `min_length`. Returns an empty range when
    /// `total_length` cannot accommodate that.
    #[must_use]
    pub fn domain(&self) -> RangeInclusive<u32> {
        let others = u64::try_from(self.segments.saturating_sub(1)).unwrap_or(u64::MAX);
        let reserved = u64::from(self.min_length).saturating_mul(others);
        let upper = u64::from(self.total_length)
            .checked_sub(reserved)
            .and_then(|upper| u32::try_from(upper).ok());

        match upper {
            Some(upper) if upper >= self.min_length => self.min_length..=upper,
            _ => RangeInclusive::new(1, 0),
        }
    }

    /// Validate the configuration.
    ///
    /// An unreachable total length is not an error here: the search simply
    /// returns no configurations.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` or `min_length` is zero, if the
    /// segment's mass offset exceeds `min_length`, or if any physical
    /// constant is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.segments == 0 {
            return Err(ArmError::invalid_config("segments must be at least 1"));
        }
        if self.min_length == 0 {
            return Err(ArmError::invalid_config("min_length must be at least 1"));
        }
        self.segment.validate()?;
        self.effector.validate()?;
        if self.segment.mass_offset > f64::from(self.min_length) {
            return Err(ArmError::invalid_config(format!(
                "mass_offset {} exceeds min_length {}",
                self.segment.mass_offset, self.min_length
            )));
        }
        Ok(())
    }
}
