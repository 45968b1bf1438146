//! `Vec`-backed time range group.

use super::{is_canonical, TimeRange, TimeRangeGroup};

/// Time range group stored in a contiguous, start-sorted `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayTimeRangeGroup {
    ranges: Vec<TimeRange>,
}

impl ArrayTimeRangeGroup {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimeRangeGroup for ArrayTimeRangeGroup {
    fn add_time_range(&mut self, range: TimeRange) {
        // Stored ranges have strictly increasing starts and ends, so the run
        // of ranges touching `range` is contiguous: from the first range not
        // ending before it to the last range not starting after it.
        let first = self.ranges.partition_point(|stored| stored.end() < range.start());
        let last = self.ranges.partition_point(|stored| stored.start() <= range.end());

        let merged = self.ranges[first..last]
            .iter()
            .fold(range, |acc, stored| acc.merge(stored));

        tracing::trace!(%range, %merged, absorbed = last - first, "add time range");
        self.ranges.splice(first..last, std::iter::once(merged));
        debug_assert!(is_canonical(&self.ranges));
    }

    fn delete_time_range(&mut self, range: TimeRange) {
        if range.is_empty() {
            return;
        }

        let mut kept = Vec::with_capacity(self.ranges.len() + 1);
        for stored in self.ranges.drain(..) {
            if !stored.overlaps(&range) {
                kept.push(stored);
                continue;
            }
            let (before, after) = stored.subtract(&range);
            kept.extend(before);
            kept.extend(after);
        }

        tracing::trace!(%range, remaining = kept.len(), "delete time range");
        self.ranges = kept;
        debug_assert!(is_canonical(&self.ranges));
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &TimeRange> + '_> {
        Box::new(self.ranges.iter())
    }

    fn len(&self) -> usize {
        self.ranges.len()
    }
}

impl FromIterator<TimeRange> for ArrayTimeRangeGroup {
    fn from_iter<I: IntoIterator<Item = TimeRange>>(iter: I) -> Self {
        let mut group = Self::new();
        for range in iter {
            group.add_time_range(range);
        }
        group
    }
}
