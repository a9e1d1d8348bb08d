//! End effector mounted at the distal end of the arm.

use crate::config::EffectorSpec;
use crate::massive::Massive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed gripper. Has no free parameters beyond its [`EffectorSpec`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EndEffector {
    spec: EffectorSpec,
}

impl EndEffector {
    /// Create an end effector from its specification.
    #[must_use]
    pub const fn new(spec: EffectorSpec) -> Self {
        Self { spec }
    }
}

impl Default for EndEffector {
    fn default() -> Self {
        Self::new(EffectorSpec::default())
    }
}

impl Massive for EndEffector {
    fn mass(&self) -> f64 {
        self.spec.mass
    }

    fn length(&self) -> f64 {
        self.spec.length
    }

    fn center_of_mass(&self) -> f64 {
        self.spec.center_of_mass
    }
}
