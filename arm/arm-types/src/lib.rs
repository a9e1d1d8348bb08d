//! Physical model for segmented robot arms.
//!
//! This crate provides the mass model used to compare arm designs:
//!
//! - [`Massive`] - Mass, length, center of mass and base torque capability
//! - [`StructuralSegment`] - A beam whose mass is derived from its length
//! - [`EndEffector`] - A fixed gripper at the tip
//! - [`Arm`] - Ordered segments plus the end effector
//! - [`SearchConfig`] - Physical constants and search bounds
//!
//! # Design Philosophy
//!
//! Every entity is an immutable value computed once at construction. There is
//! no formatting in this crate: callers read the numeric queries and the
//! ordered [`Component`] list and present them however they like.
//!
//! # Layer 0
//!
//! No rendering or engine dependencies. `serde` support is behind the
//! `serde` feature.
//!
//! # Units
//!
//! Lengths in inches, masses in pounds, torque in lb·in. All distances are
//! measured along the arm axis from the base.
//!
//! # Example
//!
//! ```
//! use arm_types::{Arm, Massive, SearchConfig};
//!
//! let arm = Arm::from_config(&[12.0, 24.0, 36.0], &SearchConfig::default());
//!
//! assert_eq!(arm.components().len(), 4);
//! assert_eq!(arm.length(), 80.0);
//! assert!(arm.center_of_mass() > 0.0 && arm.center_of_mass() < arm.length());
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::missing_errors_doc
)]

mod arm;
mod config;
mod effector;
mod error;
mod massive;
mod segment;

pub use arm::{Arm, Component};
pub use config::{EffectorSpec, SearchConfig, SegmentSpec};
pub use effector::EndEffector;
pub use error::ArmError;
pub use massive::Massive;
pub use segment::StructuralSegment;

/// Result type for arm configuration operations.
pub type Result<T> = std::result::Result<T, ArmError>;
