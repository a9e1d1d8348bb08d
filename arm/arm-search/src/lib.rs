//! Exhaustive search and torque ranking of segmented arm configurations.
//!
//! Given a total segment length, a segment count and a minimum segment
//! length, this crate enumerates every way to split the length into distinct
//! integer segments, tries every ordering of each split, and ranks the
//! resulting arms by the gravitational torque they put on the base joint.
//!
//! # Overview
//!
//! - **Partitions** ([`partition`]): distinct-value integer partitions over a
//!   bounded domain
//! - **Orderings** ([`permute`]): all `k!` orderings of a partition
//! - **Ranking** ([`rank`]): torque ranking, percent difference, symmetric lookup
//! - **Search** ([`ArmSearch`]): the full pipeline producing a [`SearchReport`]
//!
//! The search is single-threaded and deterministic. Only integer lengths are
//! considered; there is no continuous optimization.
//!
//! # Quick Start
//!
//! ```
//! use arm_search::ArmSearch;
//! use arm_types::{Massive, SearchConfig};
//!
//! let config = SearchConfig::default()
//!     .with_segments(3)
//!     .with_total_length(72)
//!     .with_min_length(12);
//! let report = ArmSearch::new(config).run();
//!
//! assert_eq!(report.len(), 648);
//! if let (Some(best), Some(worst)) = (report.best(), report.worst()) {
//!     assert!(best.torque_at_base() <= worst.torque_at_base());
//! }
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(clippy::missing_const_for_fn)]

pub mod partition;
pub mod permute;
pub mod rank;
mod search;

pub use search::{ArmSearch, SearchReport};
