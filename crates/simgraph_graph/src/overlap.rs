//! Common date coverage of two series.

use simgraph_core::types::{Date, TimeSeries};

/// Closed date interval `[start, end]` covered by both series of a pair.
///
/// Always satisfies `start < end`; a single shared day is not an overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlapRange {
    /// Later of the two first dates
    pub start: Date,
    /// Earlier of the two last dates
    pub end: Date,
}

impl OverlapRange {
    /// Returns whether `date` lies inside the range (bounds included).
    #[inline]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Calendar days from `start` to `end`.
    #[inline]
    pub fn days(&self) -> i64 {
        self.end - self.start
    }
}

/// Resolves the overlap of two series from their first and last dates.
///
/// Interior dates are not inspected. Returns `None` when the later start is
/// not strictly before the earlier end, which includes touching ranges.
///
/// # Examples
///
/// ```
/// use simgraph_core::types::{Date, TimeSeries};
/// use simgraph_graph::overlap;
///
/// let d = |day| Date::from_ymd(2024, 1, day).unwrap();
/// let a = TimeSeries::new("a", vec![d(2), d(9)], vec![1.0, 1.0]).unwrap();
/// let b = TimeSeries::new("b", vec![d(5), d(20)], vec![1.0, 1.0]).unwrap();
/// let c = TimeSeries::new("c", vec![d(9), d(12)], vec![1.0, 1.0]).unwrap();
///
/// let range = overlap(&a, &b).unwrap();
/// assert_eq!((range.start, range.end), (d(5), d(9)));
///
/// // a ends on the day c starts
/// assert!(overlap(&a, &c).is_none());
/// ```
pub fn overlap(a: &TimeSeries, b: &TimeSeries) -> Option<OverlapRange> {
    let start = a.first_date().max(b.first_date());
    let end = a.last_date().min(b.last_date());
    if start < end {
        Some(OverlapRange { start, end })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> Date {
        Date::from_ymd(2021, 3, day).unwrap()
    }

    fn series(dates: &[u32]) -> TimeSeries {
        let dates: Vec<Date> = dates.iter().map(|&day| d(day)).collect();
        let values = vec![1.0; dates.len()];
        TimeSeries::new("s", dates, values).unwrap()
    }

    #[test]
    fn test_nested_ranges() {
        let outer = series(&[1, 10, 30]);
        let inner = series(&[5, 6, 7]);
        assert_eq!(
            overlap(&outer, &inner),
            Some(OverlapRange {
                start: d(5),
                end: d(7)
            })
        );
    }

    #[test]
    fn test_disjoint_ranges() {
        let early = series(&[1, 2, 3]);
        let late = series(&[10, 11]);
        assert_eq!(overlap(&early, &late), None);
        assert_eq!(overlap(&late, &early), None);
    }

    #[test]
    fn test_touching_ranges_are_empty() {
        let a = series(&[1, 5]);
        let b = series(&[5, 9]);
        assert_eq!(overlap(&a, &b), None);
    }

    #[test]
    fn test_single_sample_series_never_overlaps() {
        let single = series(&[4]);
        let wide = series(&[1, 9]);
        assert_eq!(overlap(&single, &wide), None);
        assert_eq!(overlap(&single, &single), None);
    }

    #[test]
    fn test_ignores_interior_dates() {
        // No interior dates coincide, the range is still reported
        let a = series(&[1, 3, 5, 7]);
        let b = series(&[2, 4, 6, 8]);
        let range = overlap(&a, &b).unwrap();
        assert_eq!(range.start, d(2));
        assert_eq!(range.end, d(7));
        assert_eq!(range.days(), 5);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = OverlapRange {
            start: d(2),
            end: d(4),
        };
        assert!(range.contains(d(2)));
        assert!(range.contains(d(4)));
        assert!(!range.contains(d(1)));
        assert!(!range.contains(d(5)));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn day_lists() -> impl Strategy<Value = Vec<u32>> {
            proptest::collection::vec(1u32..29, 1..12).prop_map(|mut days| {
                days.sort_unstable();
                days
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_overlap_is_symmetric(a in day_lists(), b in day_lists()) {
                let a = series(&a);
                let b = series(&b);
                prop_assert_eq!(overlap(&a, &b), overlap(&b, &a));
            }

            #[test]
            fn test_overlap_within_both_ranges(a in day_lists(), b in day_lists()) {
                let a = series(&a);
                let b = series(&b);
                if let Some(range) = overlap(&a, &b) {
                    prop_assert!(range.start < range.end);
                    prop_assert!(range.start >= a.first_date() && range.start >= b.first_date());
                    prop_assert!(range.end <= a.last_date() && range.end <= b.last_date());
                }
            }
        }
    }
}
