//! Behavioural tests shared by every [`TimeRangeGroup`](super::TimeRangeGroup)
//! backing. Each backing instantiates the suite in its own test module.

/// Expands to the shared group tests for the given group type.
///
/// The type must implement `TimeRangeGroup` and `FromIterator<TimeRange>`.
#[macro_export]
#[doc(hidden)]
macro_rules! time_range_group_suite {
    ($group:ty) => {
        mod suite {
            use chrono::{DateTime, TimeZone, Utc};

            use $crate::range::{is_canonical, merge_two_time_ranges, TimeRange, TimeRangeGroup};

            type Group = $group;

            fn at(seconds: i64) -> DateTime<Utc> {
                Utc.timestamp_opt(1_593_072_000 + seconds, 0).unwrap()
            }

            fn range(start: i64, end: i64) -> TimeRange {
                TimeRange::from_start_end(at(start), at(end)).unwrap()
            }

            fn group_of(ranges: &[(i64, i64)]) -> Group {
                ranges.iter().map(|&(s, e)| range(s, e)).collect()
            }

            fn assert_ranges(group: &Group, expected: &[(i64, i64)]) {
                let expected: Vec<TimeRange> = expected.iter().map(|&(s, e)| range(s, e)).collect();
                assert_eq!(group.ranges(), expected);
                assert_eq!(group.len(), expected.len());
                assert!(is_canonical(&group.ranges()));
            }

            #[test]
            fn empty_group_stores_first_range() {
                let mut group = Group::default();
                assert!(group.is_empty());
                group.add_time_range(range(0, 1000));
                assert_ranges(&group, &[(0, 1000)]);
            }

            #[test]
            fn has_time_range_requires_single_range_containment() {
                // |--A----|   |---B---|
                //   |-C-|   |---D---|   |--E--|
                let group = group_of(&[(0, 1000), (1500, 2500)]);
                assert!(group.has_time_range(&range(0, 1000)));
                assert!(group.has_time_range(&range(1500, 2500)));
                assert!(group.has_time_range(&range(200, 400)));
                assert!(!group.has_time_range(&range(1200, 1700)));
                assert!(!group.has_time_range(&range(2700, 2900)));
                // Spans the gap, so no single range covers it.
                assert!(!group.has_time_range(&range(900, 1600)));
            }

            #[test]
            fn merge_two_overlapping_ranges() {
                assert_eq!(merge_two_time_ranges(&range(0, 1000), &range(500, 1500)), range(0, 1500));
            }

            #[test]
            fn merge_two_continuous_ranges() {
                assert_eq!(merge_two_time_ranges(&range(0, 1000), &range(1000, 2000)), range(0, 2000));
            }

            #[test]
            fn adjacent_ranges_coalesce() {
                let mut group = Group::default();
                group.add_time_range(range(0, 1000));
                group.add_time_range(range(1000, 2000));
                assert_ranges(&group, &[(0, 2000)]);
            }

            #[test]
            fn add_non_overlapping_range_keeps_order() {
                // |--A--|                |--C--|
                //          |----B----|
                let mut group = group_of(&[(0, 1000), (4000, 5000)]);
                group.add_time_range(range(1500, 2500));
                assert_ranges(&group, &[(0, 1000), (1500, 2500), (4000, 5000)]);
            }

            #[test]
            fn add_before_and_after_all_ranges() {
                let mut group = group_of(&[(1000, 2000)]);
                group.add_time_range(range(5000, 6000));
                group.add_time_range(range(0, 500));
                assert_ranges(&group, &[(0, 500), (1000, 2000), (5000, 6000)]);
            }

            #[test]
            fn add_overlapping_range_merges() {
                // |--A--|
                //     |----B----|
                let mut group = group_of(&[(0, 1000)]);
                group.add_time_range(range(500, 1500));
                assert_ranges(&group, &[(0, 1500)]);
            }

            #[test]
            fn add_range_bridging_several_ranges() {
                // |-A-|  |-B-|  |-C-|     |-D-|
                //   |--------E------|
                let mut group = group_of(&[(0, 100), (200, 300), (400, 500), (800, 900)]);
                group.add_time_range(range(50, 450));
                assert_ranges(&group, &[(0, 500), (800, 900)]);
            }

            #[test]
            fn add_range_subsuming_existing_ranges() {
                let mut group = group_of(&[(100, 200), (300, 400)]);
                group.add_time_range(range(0, 1000));
                assert_ranges(&group, &[(0, 1000)]);
            }

            #[test]
            fn add_contained_range_is_absorbed() {
                let mut group = group_of(&[(0, 1000)]);
                group.add_time_range(range(200, 300));
                group.add_time_range(range(0, 1000));
                assert_ranges(&group, &[(0, 1000)]);
            }

            #[test]
            fn add_range_touching_both_neighbours() {
                let mut group = group_of(&[(0, 100), (200, 300)]);
                group.add_time_range(range(100, 200));
                assert_ranges(&group, &[(0, 300)]);
            }

            #[test]
            fn construction_from_unsorted_overlapping_input() {
                let group = group_of(&[(900, 1000), (0, 100), (50, 300), (1000, 1100), (500, 600)]);
                assert_ranges(&group, &[(0, 300), (500, 600), (900, 1100)]);
            }

            #[test]
            fn delete_splits_range() {
                let mut group = group_of(&[(0, 1000)]);
                group.delete_time_range(range(300, 600));
                assert_ranges(&group, &[(0, 300), (600, 1000)]);
            }

            #[test]
            fn delete_across_two_ranges() {
                // |----A----|   |----B----|
                //       |-----C-----|
                let mut group = group_of(&[(0, 1000), (1500, 2500)]);
                group.delete_time_range(range(500, 2000));
                assert_ranges(&group, &[(0, 500), (2000, 2500)]);
            }

            #[test]
            fn delete_prefix_and_whole_range() {
                let mut group = group_of(&[(0, 1000), (1500, 2500)]);
                group.delete_time_range(range(0, 400));
                assert_ranges(&group, &[(400, 1000), (1500, 2500)]);
                group.delete_time_range(range(1500, 2500));
                assert_ranges(&group, &[(400, 1000)]);
            }

            #[test]
            fn delete_without_overlap_is_noop() {
                let mut group = group_of(&[(0, 1000), (2000, 3000)]);
                group.delete_time_range(range(1200, 1800));
                group.delete_time_range(range(1000, 2000));
                assert_ranges(&group, &[(0, 1000), (2000, 3000)]);
            }

            #[test]
            fn delete_zero_length_range_is_noop() {
                let mut group = group_of(&[(0, 1000)]);
                group.delete_time_range(range(500, 500));
                assert_ranges(&group, &[(0, 1000)]);
            }

            #[test]
            fn delete_everything_empties_group() {
                let mut group = group_of(&[(0, 100), (200, 300)]);
                group.delete_time_range(range(-100, 1000));
                assert!(group.is_empty());
                assert_eq!(group.ranges(), Vec::<TimeRange>::new());
            }

            #[test]
            fn re_adding_deleted_range_restores_group() {
                let mut group = group_of(&[(0, 1000)]);
                group.delete_time_range(range(300, 600));
                group.add_time_range(range(300, 600));
                assert_ranges(&group, &[(0, 1000)]);
            }

            #[test]
            fn iteration_is_restartable() {
                let group = group_of(&[(400, 500), (0, 100)]);
                let first: Vec<_> = group.iter().copied().collect();
                let second: Vec<_> = group.iter().copied().collect();
                assert_eq!(first, second);
                assert_eq!(first, vec![range(0, 100), range(400, 500)]);
            }

            #[test]
            fn total_duration_sums_ranges() {
                let group = group_of(&[(0, 100), (200, 260)]);
                assert_eq!(group.total_duration(), chrono::Duration::seconds(160));
            }
        }
    };
}
