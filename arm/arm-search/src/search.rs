//! Exhaustive configuration search.
//!
//! Runs the whole pipeline for one [`SearchConfig`]:
//!
//! 1. Find every partition of `total_length` into `segments` distinct lengths
//!    from the configured domain.
//! 2. Expand each partition into all of its orderings.
//! 3. Build one [`Arm`] per ordering.
//! 4. Rank the arms by base torque.
//!
//! # Example
//!
//! ```
//! use arm_search::ArmSearch;
//! use arm_types::{Massive, SearchConfig};
//!
//! let report = ArmSearch::new(SearchConfig::default()).run();
//!
//! let best = report.best().unwrap();
//! let worst = report.worst().unwrap();
//! assert!(best.torque_at_base() < worst.torque_at_base());
//! assert!(report.symmetric().is_none());
//! ```

use arm_types::{Arm, Massive, SearchConfig};
use tracing::{debug, info};

use crate::partition::find_partitions;
use crate::permute::permutations;
use crate::rank::{find_symmetric, percent_difference, rank_by_torque};

/// Exhaustive arm search over integer segment lengths.
#[derive(Debug, Clone, Default)]
pub struct ArmSearch {
    config: SearchConfig,
}

impl ArmSearch {
    /// Create a search for the given configuration.
    #[must_use]
    pub const fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The configuration this search runs with.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Partitions of the total length into the configured number of segments.
    #[must_use]
    pub fn partitions(&self) -> Vec<Vec<u32>> {
        let domain: Vec<u32> = self.config.domain().collect();
        find_partitions(&domain, self.config.total_length, self.config.segments)
    }

    /// Build one arm per ordering of each partition, in generated order.
    #[must_use]
    pub fn expand(&self, partitions: &[Vec<u32>]) -> Vec<Arm> {
        let mut arms = Vec::new();
        for partition in partitions {
            let lengths: Vec<f64> = partition.iter().copied().map(f64::from).collect();
            arms.extend(
                permutations(&lengths).map(|ordering| Arm::from_config(&ordering, &self.config)),
            );
        }
        arms
    }

    /// Run the full search.
    #[must_use]
    pub fn run(&self) -> SearchReport {
        info!(
            segments = self.config.segments,
            total_length = self.config.total_length,
            min_length = self.config.min_length,
            "Starting arm search"
        );

        let partitions = self.partitions();
        let arms = self.expand(&partitions);
        debug!(
            partitions = partitions.len(),
            arms = arms.len(),
            "Expanded partitions into arms"
        );

        let ranking = rank_by_torque(&arms);
        let report = SearchReport {
            partition_count: partitions.len(),
            arms,
            ranking,
        };

        info!(
            arms = report.len(),
            best_torque = report.best().map(Massive::torque_at_base),
            worst_torque = report.worst().map(Massive::torque_at_base),
            symmetric = report.symmetric().is_some(),
            "Arm search complete"
        );

        report
    }
}

/// Result of an [`ArmSearch`].
///
/// Keeps the arms in generated order alongside a torque ranking.
#[derive(Debug, Clone, Default)]
pub struct SearchReport {
    arms: Vec<Arm>,
    ranking: Vec<usize>,
    partition_count: usize,
}

impl SearchReport {
    /// All arms in generated order.
    #[must_use]
    pub fn arms(&self) -> &[Arm] {
        &self.arms
    }

    /// Arms from lowest to highest base torque.
    pub fn ranked(&self) -> impl Iterator<Item = &Arm> + '_ {
        self.ranking.iter().filter_map(|&i| self.arms.get(i))
    }

    /// Number of arms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arms.len()
    }

    /// Returns true if no configuration was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Number of partitions the arms were expanded from.
    #[must_use]
    pub fn partition_count(&self) -> usize {
        self.partition_count
    }

    /// Arm with the lowest base torque.
    #[must_use]
    pub fn best(&self) -> Option<&Arm> {
        self.ranking.first().and_then(|&i| self.arms.get(i))
    }

    /// Arm with the highest base torque.
    #[must_use]
    pub fn worst(&self) -> Option<&Arm> {
        self.ranking.last().and_then(|&i| self.arms.get(i))
    }

    /// Percent difference between the best and worst base torque.
    #[must_use]
    pub fn percent_difference(&self) -> Option<f64> {
        let best = self.best()?.torque_at_base();
        let worst = self.worst()?.torque_at_base();
        Some(percent_difference(best, worst))
    }

    /// First arm, in generated order, whose segments all have equal length.
    #[must_use]
    pub fn symmetric(&self) -> Option<&Arm> {
        find_symmetric(&self.arms)
    }
}
