//! Orderings of a partition.
//!
//! Segment order changes an arm's center of mass, so every partition is
//! expanded into all of its orderings before arms are built.

/// Iterator over every ordering of a slice.
///
/// Orderings are produced in lexicographic order of element positions, so a
/// slice of `k` distinct elements yields exactly `k!` distinct orderings,
/// starting with the input order. An empty slice yields one empty ordering.
#[derive(Debug, Clone)]
pub struct Permutations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

impl<T: Clone> Iterator for Permutations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let ordering = self
            .indices
            .iter()
            .map(|&i| self.items[i].clone())
            .collect();
        self.done = !next_permutation(&mut self.indices);
        Some(ordering)
    }
}

/// Iterate over every ordering of `items`.
///
/// # Example
///
/// ```
/// use arm_search::permute::permutations;
///
/// let orderings: Vec<Vec<u32>> = permutations(&[1, 2, 3]).collect();
/// assert_eq!(orderings.len(), 6);
/// assert_eq!(orderings[0], vec![1, 2, 3]);
/// assert_eq!(orderings[5], vec![3, 2, 1]);
/// ```
#[must_use]
pub fn permutations<T: Clone>(items: &[T]) -> Permutations<'_, T> {
    Permutations {
        items,
        indices: (0..items.len()).collect(),
        done: false,
    }
}

/// Advance `indices` to the next lexicographic permutation.
///
/// Returns `false` once `indices` is in descending order.
fn next_permutation(indices: &mut [usize]) -> bool {
    let Some(pivot) = indices.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    // The suffix after the pivot is descending, so the last greater element
    // is the smallest one that still exceeds the pivot.
    let Some(successor) = indices.iter().rposition(|&i| i > indices[pivot]) else {
        return false;
    };
    indices.swap(pivot, successor);
    indices[pivot + 1..].reverse();
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_three_elements() {
        let orderings: Vec<Vec<u32>> = permutations(&[12, 24, 36]).collect();
        assert_eq!(
            orderings,
            vec![
                vec![12, 24, 36],
                vec![12, 36, 24],
                vec![24, 12, 36],
                vec![24, 36, 12],
                vec![36, 12, 24],
                vec![36, 24, 12],
            ]
        );
    }

    #[test]
    fn test_factorial_count_without_duplicates() {
        let items = [3, 1, 4, 5, 9];
        let orderings: Vec<Vec<u32>> = permutations(&items).collect();
        let unique: HashSet<Vec<u32>> = orderings.iter().cloned().collect();

        assert_eq!(orderings.len(), 120);
        assert_eq!(unique.len(), 120);
        for ordering in &orderings {
            let mut sorted = ordering.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![1, 3, 4, 5, 9]);
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        let empty: Vec<Vec<u32>> = permutations(&[]).collect();
        assert_eq!(empty, vec![Vec::<u32>::new()]);

        let single: Vec<Vec<u32>> = permutations(&[7]).collect();
        assert_eq!(single, vec![vec![7]]);
    }
}
