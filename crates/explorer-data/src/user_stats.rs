//! Rider demographics: user types, genders and birth years.

use explorer_core::error::{ExplorerError, Result};
use explorer_core::models::Dataset;

use crate::freq::{most_frequent, value_counts};

/// Birth-year aggregates over the records that carry one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    /// Oldest rider.
    pub earliest: i32,
    /// Youngest rider.
    pub most_recent: i32,
    /// Most common birth year and how many trips carried it.
    pub most_common: (i32, u64),
}

/// Gender/birth-year breakdown, or an explicit marker that the city does not
/// publish those columns at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiderProfile {
    /// The city's dataset structurally lacks the profile columns. This is a
    /// reportable outcome, not an error and not a row of fabricated zeros.
    Unavailable,
    Available {
        genders: Vec<(String, u64)>,
        /// `None` when every record's birth year is missing.
        birth_years: Option<BirthYearStats>,
    },
}

/// Demographics over the filtered records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Occurrence count per user type, most frequent first. Records with a
    /// missing user type are excluded from the breakdown.
    pub user_types: Vec<(String, u64)>,
    pub profile: RiderProfile,
}

/// Compute the demographics breakdown.
///
/// Whether the profile section is populated is decided by the dataset's
/// structural flag, fixed at load time, never by probing individual rows.
/// Empty input is [`ExplorerError::EmptyDataset`].
pub fn user_breakdown(dataset: &Dataset) -> Result<UserStats> {
    if dataset.is_empty() {
        return Err(ExplorerError::EmptyDataset);
    }

    let user_types = value_counts(
        dataset
            .records
            .iter()
            .filter_map(|r| r.user_type.as_deref())
            .map(str::to_string),
    );

    if !dataset.carries_rider_profile {
        return Ok(UserStats {
            user_types,
            profile: RiderProfile::Unavailable,
        });
    }

    let genders = value_counts(
        dataset
            .records
            .iter()
            .filter_map(|r| r.gender.as_deref())
            .map(str::to_string),
    );

    // Missing birth years are excluded from min/max/mode.
    let birth_years: Vec<i32> = dataset.records.iter().filter_map(|r| r.birth_year).collect();
    let birth_years = match (
        birth_years.iter().min(),
        birth_years.iter().max(),
        most_frequent(birth_years.iter().copied()),
    ) {
        (Some(&earliest), Some(&most_recent), Some(most_common)) => Some(BirthYearStats {
            earliest,
            most_recent,
            most_common,
        }),
        _ => None,
    };

    Ok(UserStats {
        user_types,
        profile: RiderProfile::Available {
            genders,
            birth_years,
        },
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use explorer_core::models::{City, TripRecord};

    fn trip(user_type: Option<&str>, gender: Option<&str>, birth_year: Option<i32>) -> TripRecord {
        let start = NaiveDate::from_ymd_opt(2017, 5, 10)
            .unwrap()
            .and_hms_opt(7, 30, 0)
            .unwrap();
        TripRecord::new(
            start,
            start + chrono::Duration::minutes(15),
            "A".to_string(),
            "B".to_string(),
            900.0,
            user_type.map(str::to_string),
            gender.map(str::to_string),
            birth_year,
        )
    }

    // ── User types ────────────────────────────────────────────────────────────

    #[test]
    fn test_user_type_counts_descending() {
        let ds = Dataset::new(
            City::Chicago,
            true,
            vec![
                trip(Some("Subscriber"), Some("Male"), Some(1980)),
                trip(Some("Customer"), Some("Female"), Some(1990)),
                trip(Some("Subscriber"), Some("Male"), Some(1980)),
            ],
        );

        let stats = user_breakdown(&ds).unwrap();
        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 2), ("Customer".to_string(), 1)]
        );
    }

    #[test]
    fn test_missing_user_types_excluded() {
        let ds = Dataset::new(
            City::Washington,
            false,
            vec![trip(Some("Registered"), None, None), trip(None, None, None)],
        );

        let stats = user_breakdown(&ds).unwrap();
        assert_eq!(stats.user_types, vec![("Registered".to_string(), 1)]);
    }

    // ── Structural gap ────────────────────────────────────────────────────────

    #[test]
    fn test_profile_unavailable_for_structurally_bare_dataset() {
        let ds = Dataset::new(
            City::Washington,
            false,
            vec![trip(Some("Registered"), None, None)],
        );

        let stats = user_breakdown(&ds).unwrap();
        assert_eq!(stats.profile, RiderProfile::Unavailable);
    }

    // ── Profile breakdown ─────────────────────────────────────────────────────

    #[test]
    fn test_profile_gender_and_birth_years() {
        let ds = Dataset::new(
            City::NewYorkCity,
            true,
            vec![
                trip(Some("Subscriber"), Some("Male"), Some(1965)),
                trip(Some("Subscriber"), Some("Female"), Some(1989)),
                trip(Some("Customer"), Some("Female"), Some(1989)),
                trip(Some("Subscriber"), Some("Female"), Some(2001)),
            ],
        );

        let stats = user_breakdown(&ds).unwrap();
        match stats.profile {
            RiderProfile::Available {
                genders,
                birth_years,
            } => {
                assert_eq!(
                    genders,
                    vec![("Female".to_string(), 3), ("Male".to_string(), 1)]
                );
                let by = birth_years.unwrap();
                assert_eq!(by.earliest, 1965);
                assert_eq!(by.most_recent, 2001);
                assert_eq!(by.most_common, (1989, 2));
            }
            RiderProfile::Unavailable => panic!("profile should be available"),
        }
    }

    #[test]
    fn test_missing_birth_years_excluded_from_aggregates() {
        let ds = Dataset::new(
            City::Chicago,
            true,
            vec![
                trip(Some("Subscriber"), Some("Male"), Some(1975)),
                trip(Some("Subscriber"), None, None),
                trip(Some("Customer"), Some("Female"), Some(1975)),
            ],
        );

        let stats = user_breakdown(&ds).unwrap();
        match stats.profile {
            RiderProfile::Available { birth_years, .. } => {
                let by = birth_years.unwrap();
                assert_eq!(by.earliest, 1975);
                assert_eq!(by.most_recent, 1975);
                assert_eq!(by.most_common, (1975, 2));
            }
            RiderProfile::Unavailable => panic!("profile should be available"),
        }
    }

    #[test]
    fn test_all_birth_years_missing_yields_none_not_crash() {
        let ds = Dataset::new(
            City::Chicago,
            true,
            vec![
                trip(Some("Subscriber"), Some("Male"), None),
                trip(Some("Customer"), None, None),
            ],
        );

        let stats = user_breakdown(&ds).unwrap();
        match stats.profile {
            RiderProfile::Available { birth_years, .. } => assert!(birth_years.is_none()),
            RiderProfile::Unavailable => panic!("profile should be available"),
        }
    }

    // ── Empty input ───────────────────────────────────────────────────────────

    #[test]
    fn test_empty_dataset_is_error() {
        let ds = Dataset::new(City::Chicago, true, vec![]);
        assert!(matches!(
            user_breakdown(&ds).unwrap_err(),
            ExplorerError::EmptyDataset
        ));
    }
}
