//! Synthetic profile generation.
//!
//! Builds the catalog profiles with a fresh daily history on every call.
//! Values are random but always inside the documented ranges; pass a seeded
//! RNG to get reproducible output.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::{DateTime, Days, Utc};
use rand::Rng;
use thiserror::Error;

use crate::catalog::{CATALOG, PersonaSeed};
use crate::model::{BehaviorData, CustomerProfile, HistoryPoint, PersonaData, TimeRange};

/// Daily page views are drawn from this range.
pub const VIEWS_RANGE: RangeInclusive<u32> = 20..=119;

/// Daily session duration (seconds) is drawn from this range.
pub const DURATION_RANGE: RangeInclusive<u32> = 100..=699;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("history date {days_back} days before {now} is out of range")]
    DateOutOfRange { now: DateTime<Utc>, days_back: u32 },
}

/// Generate `days` history points walking backward from `now`.
///
/// Point `i` is dated `now - i` days, so dates are strictly decreasing and
/// the first point is `now` itself.
pub fn generate_history<R: Rng>(
    days: u32,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<Vec<HistoryPoint>, GeneratorError> {
    (0..days)
        .map(|days_back| {
            let date = now
                .checked_sub_days(Days::new(u64::from(days_back)))
                .ok_or(GeneratorError::DateOutOfRange { now, days_back })?;

            Ok(HistoryPoint {
                date,
                views: rng.gen_range(VIEWS_RANGE),
                duration: rng.gen_range(DURATION_RANGE),
            })
        })
        .collect()
}

/// Generate the full catalog of profiles for a time range.
///
/// Always returns one profile per catalog entry, in catalog order.
pub fn generate_profiles<R: Rng>(
    range: TimeRange,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<Vec<CustomerProfile>, GeneratorError> {
    CATALOG
        .iter()
        .map(|seed| build_profile(seed, range.days(), now, rng))
        .collect()
}

fn build_profile<R: Rng>(
    seed: &PersonaSeed,
    days: u32,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<CustomerProfile, GeneratorError> {
    let history = generate_history(days, now, rng)?;

    let preferences = BTreeMap::from([
        ("communication".to_string(), seed.communication.to_string()),
        ("frequency".to_string(), seed.frequency.to_string()),
    ]);

    Ok(CustomerProfile {
        id: seed.id.to_string(),
        name: seed.name.to_string(),
        email: seed.email.to_string(),
        behavior: BehaviorData {
            last_active: now,
            page_views: seed.page_views,
            time_on_site: seed.time_on_site,
            interactions: seed.interactions.iter().map(|s| s.to_string()).collect(),
            history,
        },
        persona: PersonaData {
            persona_type: seed.persona_type.to_string(),
            interests: seed.interests.iter().map(|s| s.to_string()).collect(),
            preferences,
            last_updated: now,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG_SIZE;
    use chrono::Duration;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_history_length_per_range() {
        let now = Utc::now();
        for (range, expected) in [
            (TimeRange::SevenDays, 7),
            (TimeRange::ThirtyDays, 30),
            (TimeRange::NinetyDays, 90),
        ] {
            let profiles = generate_profiles(range, now, &mut rng()).unwrap();
            assert_eq!(profiles.len(), CATALOG_SIZE);
            for profile in &profiles {
                assert_eq!(profile.behavior.history.len(), expected);
            }
        }
    }

    #[test]
    fn test_history_values_in_range() {
        let history = generate_history(90, Utc::now(), &mut rng()).unwrap();

        for point in &history {
            assert!(VIEWS_RANGE.contains(&point.views), "views {}", point.views);
            assert!(
                DURATION_RANGE.contains(&point.duration),
                "duration {}",
                point.duration
            );
        }
    }

    #[test]
    fn test_history_dates_walk_back_one_day() {
        let now = Utc::now();
        let history = generate_history(30, now, &mut rng()).unwrap();

        assert_eq!(history[0].date, now);
        for pair in history.windows(2) {
            assert!(pair[0].date > pair[1].date);
            assert_eq!(pair[0].date - pair[1].date, Duration::days(1));
        }
        assert_eq!(history[29].date, now - Duration::days(29));
    }

    #[test]
    fn test_empty_history() {
        let history = generate_history(0, Utc::now(), &mut rng()).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_history_before_min_date_fails() {
        let now = DateTime::<Utc>::MIN_UTC;
        let err = generate_history(2, now, &mut rng()).unwrap_err();

        assert!(matches!(
            err,
            GeneratorError::DateOutOfRange { days_back: 1, .. }
        ));
    }

    #[test]
    fn test_profile_shape() {
        let now = Utc::now();
        let profiles = generate_profiles(TimeRange::SevenDays, now, &mut rng()).unwrap();

        let ids: HashSet<_> = profiles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), profiles.len());

        for profile in &profiles {
            assert_eq!(profile.behavior.interactions.len(), 3);
            assert_eq!(profile.persona.interests.len(), 3);
            assert_eq!(profile.persona.preferences.len(), 2);
            assert!(profile.persona.preferences.contains_key("communication"));
            assert!(profile.persona.preferences.contains_key("frequency"));
            assert_eq!(profile.behavior.last_active, now);
            assert_eq!(profile.persona.last_updated, now);
        }
    }

    #[test]
    fn test_catalog_order_preserved() {
        let profiles = generate_profiles(TimeRange::SevenDays, Utc::now(), &mut rng()).unwrap();

        assert_eq!(profiles[0].name, "Emma Thompson");
        assert_eq!(profiles[0].persona.persona_type, "Fashion Enthusiast");
        assert_eq!(profiles[19].id, "20");
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let now = Utc::now();
        let a = generate_profiles(TimeRange::ThirtyDays, now, &mut rng()).unwrap();
        let b = generate_profiles(TimeRange::ThirtyDays, now, &mut rng()).unwrap();

        assert_eq!(a, b);
    }
}
