//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! A set of integers stored as disjoint ranges.

use crate::range::Range;
use crate::tree::{self, RangeTree};
use log::{debug, trace};
use std::fmt;

/// A `RangeContainer` tracks a set of `i32` values as disjoint, non-adjacent inclusive ranges.
///
/// Inserting a value next to a stored range extends that range, and inserting the single value
/// missing between two ranges merges them. Removing a value at the edge of a range shrinks it,
/// and removing an interior value splits it in two. Between operations no two stored ranges
/// overlap or touch: consecutive ranges are always separated by at least one missing integer.
///
/// Every operation is total. Inserting a member and removing a non-member leave the container
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use rangeset::RangeContainer;
///
/// let mut container = RangeContainer::new();
/// container.insert(40);
/// container.insert(41);
/// container.insert(43);
/// container.insert(44);
/// assert_eq!(container.list_contents(), vec!["[40 - 41]", "[43 - 44]"]);
///
/// // 42 closes the gap and merges both ranges
/// container.insert(42);
/// assert_eq!(container.list_contents(), vec!["[40 - 44]"]);
///
/// // Removing an interior value splits the range again
/// container.remove(42);
/// assert_eq!(container.list_contents(), vec!["[40 - 41]", "[43 - 44]"]);
/// ```
#[derive(Default)]
pub struct RangeContainer {
    ranges: RangeTree,
}

impl RangeContainer {
    /// Creates an empty `RangeContainer`.
    #[must_use]
    pub fn new() -> Self {
        RangeContainer {
            ranges: RangeTree::new(),
        }
    }

    /// Adds `n` to the set.
    ///
    /// A stored range ending at `n - 1` or starting at `n + 1` is extended to cover `n`. When both
    /// exist they are replaced by a single range. Otherwise `[n - n]` is stored on its own.
    pub fn insert(&mut self, n: i32) {
        trace!("insert {n}");
        let probe = Range::point(n);

        if self.ranges.is_empty() {
            self.ranges.insert(probe);
            return;
        }

        let lower = self.ranges.floor(&probe);
        let higher = self.ranges.ceiling(&probe);

        if lower.is_some_and(|range| range.contains(n)) {
            return;
        }

        // Neighbours past the ends of i32 do not exist
        let below = lower.filter(|range| n.checked_sub(1) == Some(range.end()));
        let above = higher.filter(|range| n.checked_add(1) == Some(range.start()));

        match (below, above) {
            (Some(below), Some(above)) => {
                self.ranges.remove(&below);
                self.ranges.remove(&above);
                let merged = Range::from_ordered(below.start(), above.end());
                debug!("merged {below} and {above} into {merged}");
                self.ranges.insert(merged);
            }
            (Some(below), None) => {
                self.ranges.remove(&below);
                self.ranges.insert(Range::from_ordered(below.start(), n));
            }
            (None, Some(above)) => {
                self.ranges.remove(&above);
                self.ranges.insert(Range::from_ordered(n, above.end()));
            }
            (None, None) => self.ranges.insert(probe),
        }
    }

    /// Removes `n` from the set.
    ///
    /// A range holding only `n` is dropped, a range starting or ending at `n` shrinks by one,
    /// and a range holding `n` in its interior is split around it.
    pub fn remove(&mut self, n: i32) {
        trace!("remove {n}");
        let Some(current) = self.find(n) else {
            return;
        };

        self.ranges.remove(&current);
        if current.is_point() {
            return;
        }

        // current holds n and at least one other value, so n +/- 1 stays inside current
        if current.start() == n {
            self.ranges.insert(Range::from_ordered(n + 1, current.end()));
        } else if current.end() == n {
            self.ranges.insert(Range::from_ordered(current.start(), n - 1));
        } else {
            let left = Range::from_ordered(current.start(), n - 1);
            let right = Range::from_ordered(n + 1, current.end());
            debug!("split {current} into {left} and {right}");
            self.ranges.insert(left);
            self.ranges.insert(right);
        }
    }

    /// Returns true if `n` is in the set.
    #[must_use]
    pub fn contains(&self, n: i32) -> bool {
        self.find(n).is_some()
    }

    /// The stored range holding `n`.
    fn find(&self, n: i32) -> Option<Range> {
        self.ranges
            .floor(&Range::point(n))
            .filter(|range| range.contains(n))
    }

    /// Every stored range rendered as `"[start - end]"`, in ascending order.
    ///
    /// An empty container yields an empty `Vec`.
    #[must_use]
    pub fn list_contents(&self) -> Vec<String> {
        self.iter().map(|range| range.to_string()).collect()
    }

    /// Every stored range rendered on its own line, each line terminated by `'\n'`.
    ///
    /// An empty container yields an empty string.
    #[must_use]
    pub fn contents(&self) -> String {
        self.to_string()
    }

    /// Iterates over copies of the stored ranges in ascending order.
    pub fn iter(&self) -> Ranges<'_> {
        Ranges {
            inner: self.ranges.iter(),
        }
    }

    /// Number of stored ranges, not the number of member integers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns true if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl fmt::Display for RangeContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for range in self.iter() {
            writeln!(f, "{range}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for RangeContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Extend<i32> for RangeContainer {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for n in iter {
            self.insert(n);
        }
    }
}

impl FromIterator<i32> for RangeContainer {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut container = RangeContainer::new();
        container.extend(iter);
        container
    }
}

impl<'a> IntoIterator for &'a RangeContainer {
    type Item = Range;
    type IntoIter = Ranges<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over the ranges of a [`RangeContainer`].
pub struct Ranges<'a> {
    inner: tree::Iter<'a>,
}

impl Iterator for Ranges<'_> {
    type Item = Range;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::BTreeSet;

    fn assert_invariants(container: &RangeContainer) {
        let ranges: Vec<Range> = container.iter().collect();
        for range in &ranges {
            assert!(range.start() <= range.end(), "inverted range {range}");
        }
        for pair in ranges.windows(2) {
            let gap = i64::from(pair[1].start()) - i64::from(pair[0].end());
            assert!(gap >= 2, "{} and {} overlap or touch", pair[0], pair[1]);
        }
        assert_eq!(ranges.len(), container.len());
    }

    fn expand(container: &RangeContainer) -> BTreeSet<i32> {
        container
            .iter()
            .flat_map(|range| range.start()..=range.end())
            .collect()
    }

    #[test]
    fn test_insert_single() {
        let mut container = RangeContainer::new();
        container.insert(5);
        assert!(container.contains(5));
        assert_eq!(container.list_contents(), vec!["[5 - 5]"]);
    }

    #[test]
    fn test_insert_ascending_then_descending() {
        let mut container = RangeContainer::new();
        for i in 5..=10 {
            container.insert(i);
            assert!(container.contains(i));
        }
        assert_eq!(container.list_contents(), vec!["[5 - 10]"]);

        for i in (0..=4).rev() {
            container.insert(i);
            assert!(container.contains(i));
        }
        assert_eq!(container.list_contents(), vec!["[0 - 10]"]);

        container.insert(20);
        container.insert(30);
        assert_eq!(
            container.list_contents(),
            vec!["[0 - 10]", "[20 - 20]", "[30 - 30]"]
        );
        assert!(container.contains(20) && !container.contains(21));
        assert!(container.contains(30) && !container.contains(29));
    }

    #[test]
    fn test_insert_existing_member_is_noop() {
        let mut container: RangeContainer = (0..=10).chain([20, 30]).collect();
        container.insert(7);
        container.insert(8);
        assert_eq!(
            container.list_contents(),
            vec!["[0 - 10]", "[20 - 20]", "[30 - 30]"]
        );
    }

    #[test]
    fn test_insert_extends_and_merges() {
        let mut container: RangeContainer = (0..=10).chain([20, 30]).collect();

        container.insert(11);
        container.insert(19);
        assert!(container.contains(19) && !container.contains(18));
        assert_eq!(
            container.list_contents(),
            vec!["[0 - 11]", "[19 - 20]", "[30 - 30]"]
        );

        container.insert(22);
        container.insert(21);
        assert!(container.contains(20) && container.contains(21) && container.contains(22));
        assert_eq!(
            container.list_contents(),
            vec!["[0 - 11]", "[19 - 22]", "[30 - 30]"]
        );
    }

    #[test]
    fn test_remove_edges_and_interior() {
        let mut container = RangeContainer::new();
        container.insert(5);
        container.remove(5);
        assert!(!container.contains(5));
        assert!(container.is_empty());

        container.extend(1..=10);
        container.remove(1);
        assert!(!container.contains(1));

        container.remove(5);
        assert_eq!(container.list_contents(), vec!["[2 - 4]", "[6 - 10]"]);
        assert!(!container.contains(5));

        container.remove(10);
        assert!(!container.contains(10));
        assert_eq!(container.list_contents(), vec!["[2 - 4]", "[6 - 9]"]);

        container.remove(50);
        assert_eq!(container.list_contents(), vec!["[2 - 4]", "[6 - 9]"]);
    }

    #[test]
    fn test_insert_then_remove_run() {
        let mut container = RangeContainer::new();
        container.extend(20..=30);
        for i in 20..=30 {
            container.remove(i);
            assert!(!container.contains(i));
        }
        assert!(container.is_empty());
    }

    #[test]
    fn test_merge_across_missing_value() {
        let mut container: RangeContainer = [40, 41, 43, 44].into_iter().collect();
        container.remove(42);
        assert_eq!(container.list_contents(), vec!["[40 - 41]", "[43 - 44]"]);

        container.insert(42);
        assert_eq!(container.list_contents(), vec!["[40 - 44]"]);

        container.extend(50..=80);
        container.remove(50);
        container.remove(80);
        assert_eq!(container.list_contents(), vec!["[40 - 44]", "[51 - 79]"]);
    }

    #[test]
    fn test_remove_everything() {
        let mut container = RangeContainer::new();
        container.extend(40..=100);
        container.remove(70);
        assert!(!container.contains(70));

        for i in 1..=100 {
            container.remove(i);
        }
        assert!(container.list_contents().is_empty());
        assert_eq!(container.contents(), "");
    }

    #[test]
    fn test_contains_small() {
        let container: RangeContainer = [5, 6].into_iter().collect();
        assert!(container.contains(5));
        assert!(container.contains(6));
        assert!(!container.contains(4));
        assert!(!container.contains(7));
    }

    #[test]
    fn test_contents_text() {
        let container: RangeContainer = [2, 3, 4, 6, 7].into_iter().collect();
        assert_eq!(container.contents(), "[2 - 4]\n[6 - 7]\n");
        assert_eq!(format!("{container}"), "[2 - 4]\n[6 - 7]\n");
        assert_eq!(
            format!("{container:?}"),
            "{Range { start: 2, end: 4 }, Range { start: 6, end: 7 }}"
        );
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut container: RangeContainer = [1, 2, 3, 9].into_iter().collect();
        let before = container.list_contents();
        container.insert(2);
        container.insert(9);
        assert_eq!(container.list_contents(), before);
    }

    #[test]
    fn test_insert_then_remove_isolated_restores() {
        let mut container: RangeContainer = [1, 2, 3, 9].into_iter().collect();
        let before = container.list_contents();
        container.insert(6);
        container.remove(6);
        assert_eq!(container.list_contents(), before);
    }

    #[test]
    fn test_bridge_then_remove_splits_again() {
        let mut container: RangeContainer = [1, 2, 4, 5].into_iter().collect();
        container.insert(3);
        assert_eq!(container.list_contents(), vec!["[1 - 5]"]);
        container.remove(3);
        assert_eq!(container.list_contents(), vec!["[1 - 2]", "[4 - 5]"]);
    }

    #[test]
    fn test_integer_extremes() {
        let mut container = RangeContainer::new();
        container.insert(i32::MAX);
        container.insert(i32::MIN);
        container.insert(i32::MAX - 1);
        container.insert(i32::MIN + 1);
        assert_eq!(
            container.list_contents(),
            vec![
                format!("[{} - {}]", i32::MIN, i32::MIN + 1),
                format!("[{} - {}]", i32::MAX - 1, i32::MAX),
            ]
        );

        container.remove(i32::MAX);
        container.remove(i32::MIN);
        assert!(!container.contains(i32::MAX));
        assert!(!container.contains(i32::MIN));
        assert!(container.contains(i32::MAX - 1));
        assert!(container.contains(i32::MIN + 1));
        assert_invariants(&container);
    }

    #[test]
    fn test_negative_values() {
        let container: RangeContainer = [-3, -2, -1, 0, 1, -10].into_iter().collect();
        assert_eq!(container.list_contents(), vec!["[-10 - -10]", "[-3 - 1]"]);
    }

    #[test]
    fn test_random_operations_match_model() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut container = RangeContainer::new();
        let mut model = BTreeSet::new();

        for _ in 0..5000 {
            let n = rng.random_range(-60..60);
            if rng.random_bool(0.55) {
                container.insert(n);
                model.insert(n);
            } else {
                container.remove(n);
                model.remove(&n);
            }
            assert_invariants(&container);
        }

        assert_eq!(expand(&container), model);
        for n in -70..70 {
            assert_eq!(container.contains(n), model.contains(&n), "membership of {n}");
        }
    }
}
