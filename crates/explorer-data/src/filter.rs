//! Month/day narrowing of a loaded dataset.

use explorer_core::models::{Dataset, FilterSpec};
use tracing::debug;

/// Return the subsequence of `dataset` matching both filter axes.
///
/// The two predicates are independent, so they commute and the operation is
/// idempotent. An empty result is valid output, not an error; the
/// aggregators decide how to treat zero records.
pub fn apply_filters(dataset: &Dataset, spec: &FilterSpec) -> Dataset {
    let records = dataset
        .records
        .iter()
        .filter(|r| spec.month.matches(r.month) && spec.day.matches(r.weekday))
        .cloned()
        .collect::<Vec<_>>();

    debug!(
        "filter kept {} of {} records (month: {:?}, day: {:?})",
        records.len(),
        dataset.len(),
        spec.month,
        spec.day,
    );

    Dataset::new(dataset.city, dataset.carries_rider_profile, records)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};
    use explorer_core::models::{City, DayFilter, Month, MonthFilter, TripRecord};

    /// A one-hour trip starting at the given date/hour.
    fn trip(y: i32, mo: u32, d: u32, h: u32) -> TripRecord {
        let start = NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap();
        TripRecord::new(
            start,
            start + chrono::Duration::hours(1),
            "A".to_string(),
            "B".to_string(),
            3600.0,
            Some("Subscriber".to_string()),
            None,
            None,
        )
    }

    fn sample_dataset() -> Dataset {
        Dataset::new(
            City::Chicago,
            true,
            vec![
                trip(2017, 1, 2, 8),  // Monday, January
                trip(2017, 1, 7, 9),  // Saturday, January
                trip(2017, 3, 6, 10), // Monday, March
                trip(2017, 3, 7, 11), // Tuesday, March
                trip(2017, 6, 5, 12), // Monday, June
            ],
        )
    }

    fn spec(month: MonthFilter, day: DayFilter) -> FilterSpec {
        FilterSpec {
            city: City::Chicago,
            month,
            day,
        }
    }

    // ── Identity ──────────────────────────────────────────────────────────────

    #[test]
    fn test_all_all_is_identity() {
        let ds = sample_dataset();
        let out = apply_filters(&ds, &spec(MonthFilter::All, DayFilter::All));
        assert_eq!(out.records, ds.records);
    }

    // ── Single axes ───────────────────────────────────────────────────────────

    #[test]
    fn test_month_axis_only() {
        let ds = sample_dataset();
        let out = apply_filters(&ds, &spec(MonthFilter::Only(Month::March), DayFilter::All));
        assert_eq!(out.len(), 2);
        assert!(out.records.iter().all(|r| r.month == 3));
    }

    #[test]
    fn test_day_axis_only() {
        let ds = sample_dataset();
        let out = apply_filters(&ds, &spec(MonthFilter::All, DayFilter::Only(Weekday::Mon)));
        assert_eq!(out.len(), 3);
        assert!(out.records.iter().all(|r| r.weekday == Weekday::Mon));
    }

    #[test]
    fn test_both_axes() {
        let ds = sample_dataset();
        let out = apply_filters(
            &ds,
            &spec(MonthFilter::Only(Month::March), DayFilter::Only(Weekday::Mon)),
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out.records[0].month, 3);
        assert_eq!(out.records[0].weekday, Weekday::Mon);
    }

    // ── Algebraic properties ──────────────────────────────────────────────────

    #[test]
    fn test_axes_commute() {
        let ds = sample_dataset();
        let month_first = apply_filters(
            &apply_filters(&ds, &spec(MonthFilter::Only(Month::March), DayFilter::All)),
            &spec(MonthFilter::All, DayFilter::Only(Weekday::Mon)),
        );
        let day_first = apply_filters(
            &apply_filters(&ds, &spec(MonthFilter::All, DayFilter::Only(Weekday::Mon))),
            &spec(MonthFilter::Only(Month::March), DayFilter::All),
        );
        assert_eq!(month_first.records, day_first.records);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let ds = sample_dataset();
        let s = spec(MonthFilter::Only(Month::January), DayFilter::Only(Weekday::Sat));
        let once = apply_filters(&ds, &s);
        let twice = apply_filters(&once, &s);
        assert_eq!(once.records, twice.records);
    }

    // ── Empty results ─────────────────────────────────────────────────────────

    #[test]
    fn test_no_match_yields_empty_not_error() {
        let ds = sample_dataset();
        // No June Saturdays in the sample.
        let out = apply_filters(
            &ds,
            &spec(MonthFilter::Only(Month::June), DayFilter::Only(Weekday::Sat)),
        );
        assert!(out.is_empty());
        assert_eq!(out.city, City::Chicago);
    }

    #[test]
    fn test_profile_flag_carried_through() {
        let ds = Dataset::new(City::Washington, false, vec![trip(2017, 1, 2, 8)]);
        let out = apply_filters(&ds, &spec(MonthFilter::All, DayFilter::All));
        assert!(!out.carries_rider_profile);
    }
}
