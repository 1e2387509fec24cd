//! Data models for Customer Insights.
//!
//! These types are the JSON contract between the profile API and the
//! dashboard. Field names are serialized in camelCase to match the wire
//! format consumed by the front end.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A synthetic customer record combining behavioral metrics and a persona.
///
/// Profiles are regenerated on every request; only `id` is stable across
/// fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    /// Catalog identifier, unique within a response.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Behavioral metrics and daily history.
    pub behavior: BehaviorData,

    /// Persona classification.
    pub persona: PersonaData,
}

/// Behavioral metrics attached to a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorData {
    /// Set to generation time.
    pub last_active: DateTime<Utc>,

    /// Total page views.
    pub page_views: u32,

    /// Time on site, in seconds.
    pub time_on_site: u32,

    /// Recent interaction tags (always three).
    pub interactions: Vec<String>,

    /// One point per day, most recent first.
    pub history: Vec<HistoryPoint>,
}

/// One day's page-view and duration sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: DateTime<Utc>,

    /// Page views on that day, in `[20, 119]`.
    pub views: u32,

    /// Session duration in seconds, in `[100, 699]`.
    pub duration: u32,
}

/// Persona classification attached to a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaData {
    /// Persona label, e.g. "Fashion Enthusiast".
    #[serde(rename = "type")]
    pub persona_type: String,

    /// Interests (always three).
    pub interests: Vec<String>,

    /// Communication preferences keyed by `communication` and `frequency`.
    pub preferences: BTreeMap<String, String>,

    /// Set to generation time.
    pub last_updated: DateTime<Utc>,
}

/// The UI-selectable window controlling history length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "90d")]
    NinetyDays,
}

impl TimeRange {
    /// Map a raw `timeRange` query value to a range.
    ///
    /// This is total: `"90d"` and `"30d"` are recognized, anything else
    /// (including a missing value) falls back to seven days.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("90d") => TimeRange::NinetyDays,
            Some("30d") => TimeRange::ThirtyDays,
            _ => TimeRange::SevenDays,
        }
    }

    /// Number of daily history points for this range.
    pub fn days(self) -> u32 {
        match self {
            TimeRange::SevenDays => 7,
            TimeRange::ThirtyDays => 30,
            TimeRange::NinetyDays => 90,
        }
    }

    /// The query-string value for this range.
    pub fn as_param(self) -> &'static str {
        match self {
            TimeRange::SevenDays => "7d",
            TimeRange::ThirtyDays => "30d",
            TimeRange::NinetyDays => "90d",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Query parameters for GET /api/user_behavior.
///
/// `timeRange` is kept as a raw string so unrecognized values are normalized
/// instead of rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct ProfilesQuery {
    #[serde(rename = "timeRange")]
    pub time_range: Option<String>,
}

impl ProfilesQuery {
    /// Build from decoded query pairs. When `timeRange` is repeated, the
    /// first occurrence wins.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            time_range: pairs
                .iter()
                .find(|(key, _)| key == "timeRange")
                .map(|(_, value)| value.clone()),
        }
    }

    pub fn time_range(&self) -> TimeRange {
        TimeRange::from_param(self.time_range.as_deref())
    }
}

/// Response for GET /api/user_behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilesResponse {
    pub profiles: Vec<CustomerProfile>,
}

/// Body of every failed response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
