//! Constrained integer partitions.
//!
//! Finds every set of distinct values from a bounded domain whose sum hits a
//! target exactly, using a depth-first search over a sorted domain.
//!
//! # Example
//!
//! ```
//! use arm_search::partition::find_partitions;
//!
//! let partitions = find_partitions(&[1, 2, 3, 4, 5], 6, 2);
//! assert_eq!(partitions, vec![vec![1, 5], vec![2, 4]]);
//! ```

use tracing::debug;

/// Depth-first partition search state.
///
/// `current` is a single scratch buffer: every push in [`Self::extend`] is
/// matched by a pop before the next candidate is tried.
struct PartitionSearch<'a> {
    domain: &'a [u32],
    max_len: usize,
    current: Vec<u32>,
    found: Vec<Vec<u32>>,
}

impl PartitionSearch<'_> {
    fn extend(&mut self, cursor: usize, remaining: u32) {
        if remaining == 0 {
            self.found.push(self.current.clone());
            return;
        }
        // Longer sequences are filtered out anyway.
        if self.current.len() >= self.max_len {
            return;
        }

        for index in cursor..self.domain.len() {
            let value = self.domain[index];
            if value > remaining {
                break;
            }
            self.current.push(value);
            self.extend(index + 1, remaining - value);
            self.current.pop();
        }
    }
}

/// Find all strictly ascending sequences of `required_count` distinct domain
/// values that sum to `target_sum`.
///
/// The domain is sorted and deduplicated first, so its order does not matter.
/// Results come out in lexicographic order. An unreachable target gives an
/// empty result.
#[must_use]
pub fn find_partitions(domain: &[u32], target_sum: u32, required_count: usize) -> Vec<Vec<u32>> {
    let mut sorted = domain.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut search = PartitionSearch {
        domain: &sorted,
        max_len: required_count,
        current: Vec::with_capacity(required_count),
        found: Vec::new(),
    };
    search.extend(0, target_sum);

    let raw = search.found.len();
    let mut partitions = search.found;
    partitions.retain(|p| p.len() == required_count);

    debug!(
        domain = sorted.len(),
        target_sum,
        required_count,
        raw,
        kept = partitions.len(),
        "Partition search complete"
    );

    partitions
}
