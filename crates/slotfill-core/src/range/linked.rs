//! Linked-node time range group.
//!
//! Every mutation is a single walk over the nodes: the list is detached from
//! `head`, and nodes are relinked one by one behind a tail cursor. Nodes that
//! survive a mutation are moved, never reallocated.

use super::{TimeRange, TimeRangeGroup};

#[derive(Debug)]
struct Node {
    range: TimeRange,
    next: Option<Box<Node>>,
}

impl Node {
    fn boxed(range: TimeRange) -> Box<Self> {
        Box::new(Self { range, next: None })
    }
}

/// Time range group stored as a singly linked list sorted by start.
#[derive(Debug, Default)]
pub struct LinkedTimeRangeGroup {
    head: Option<Box<Node>>,
    len: usize,
}

impl LinkedTimeRangeGroup {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimeRangeGroup for LinkedTimeRangeGroup {
    fn add_time_range(&mut self, range: TimeRange) {
        let mut remaining = self.head.take();
        let mut tail = &mut self.head;
        let mut len = 0;
        // Merged range still waiting for its slot.
        let mut pending = Some(range);

        while let Some(mut node) = remaining {
            remaining = node.next.take();

            if let Some(acc) = pending {
                if acc.can_merge_with(&node.range) {
                    pending = Some(acc.merge(&node.range));
                    continue;
                }
                if acc.end() < node.range.start() {
                    tail = &mut tail.insert(Node::boxed(acc)).next;
                    len += 1;
                    pending = None;
                }
            }

            tail = &mut tail.insert(node).next;
            len += 1;
        }

        if let Some(acc) = pending {
            *tail = Some(Node::boxed(acc));
            len += 1;
        }

        tracing::trace!(%range, len, "add time range");
        self.len = len;
    }

    fn delete_time_range(&mut self, range: TimeRange) {
        if range.is_empty() {
            return;
        }

        let mut remaining = self.head.take();
        let mut tail = &mut self.head;
        let mut len = 0;

        while let Some(mut node) = remaining {
            remaining = node.next.take();

            if !node.range.overlaps(&range) {
                tail = &mut tail.insert(node).next;
                len += 1;
                continue;
            }

            let (before, after) = node.range.subtract(&range);
            for residual in before.into_iter().chain(after) {
                tail = &mut tail.insert(Node::boxed(residual)).next;
                len += 1;
            }
        }

        tracing::trace!(%range, len, "delete time range");
        self.len = len;
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &TimeRange> + '_> {
        Box::new(Iter {
            next: self.head.as_deref(),
        })
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl FromIterator<TimeRange> for LinkedTimeRangeGroup {
    fn from_iter<I: IntoIterator<Item = TimeRange>>(iter: I) -> Self {
        let mut group = Self::new();
        for range in iter {
            group.add_time_range(range);
        }
        group
    }
}

impl Drop for LinkedTimeRangeGroup {
    // Iterative, so long lists do not recurse.
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TimeRange;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.range
        })
    }
}
