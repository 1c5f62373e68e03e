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

//! Inclusive integer ranges.

use crate::result::{RangesetError, RangesetResult};
use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;

/// A closed interval `[start, end]` of `i32` values.
///
/// Equality is exact: two ranges are equal only when both bounds match. Ordering for lookups goes
/// through [`Range::compare`], which is not exposed as `Ord`.
///
/// # Examples
///
/// ```rust
/// use rangeset::Range;
///
/// let range = Range::new(3, 7).unwrap();
/// assert!(range.contains(3));
/// assert!(range.contains(7));
/// assert!(!range.contains(8));
/// assert_eq!(range.to_string(), "[3 - 7]");
///
/// assert!(Range::new(7, 3).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Range {
    start: i32,
    end: i32,
}

impl Range {
    /// Creates the range `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`RangesetError::InvalidBounds`] when `start > end`.
    pub fn new(start: i32, end: i32) -> RangesetResult<Self> {
        if start > end {
            return Err(RangesetError::InvalidBounds { start, end });
        }
        Ok(Range { start, end })
    }

    /// Creates the single point range `[n, n]`.
    #[must_use]
    pub fn point(n: i32) -> Self {
        Range { start: n, end: n }
    }

    /// Bounds already known to satisfy `start <= end`.
    pub(crate) fn from_ordered(start: i32, end: i32) -> Self {
        debug_assert!(start <= end, "range [{start} - {end}] is inverted");
        Range { start, end }
    }

    /// Lower bound, inclusive.
    #[must_use]
    pub fn start(&self) -> i32 {
        self.start
    }

    /// Upper bound, inclusive.
    #[must_use]
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Number of integers covered by the range.
    #[must_use]
    pub fn size(&self) -> u64 {
        (i64::from(self.end) - i64::from(self.start) + 1).unsigned_abs()
    }

    /// True when the range covers exactly one integer.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `n` lies within `[start, end]`.
    #[must_use]
    pub fn contains(&self, n: i32) -> bool {
        self.start <= n && n <= self.end
    }

    /// Adjacency relation used to key ranges inside the container.
    ///
    /// Returns `Less` when `self` ends before `other` starts, `Greater` when `self` starts after
    /// `other` ends, and `Equal` whenever the two share at least one integer.
    ///
    /// This is not a total order over arbitrary ranges: `[1 - 5]` equals both `[0 - 1]` and
    /// `[5 - 9]` while those two are ordered. It only behaves as an order over a set of ranges that
    /// pairwise share no integer, which is the invariant the container maintains for everything it
    /// stores. A point probe `[n - n]` is then Equal to at most one stored range, the one holding
    /// `n`. Do not turn this into a lexicographic comparison: floor and ceiling lookups rely on the
    /// probe landing on the range that contains it.
    #[must_use]
    pub fn compare(&self, other: &Range) -> Ordering {
        if self.end < other.start {
            Ordering::Less
        } else if self.start > other.end {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.start, self.end)
    }
}

impl From<Range> for RangeInclusive<i32> {
    fn from(range: Range) -> Self {
        range.start..=range.end
    }
}
