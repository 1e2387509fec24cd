//! Derived views over a single profile.
//!
//! Everything the dashboard charts and detail panels render is computed here
//! from the selected profile's data. Nothing in this module mutates state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{CustomerProfile, HistoryPoint};

/// The chart tabs offered by the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Page views per day.
    #[default]
    Activity,
    /// Session duration per day.
    Engagement,
    /// Views and duration together.
    History,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::Activity,
        ChartKind::Engagement,
        ChartKind::History,
    ];

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Activity => "Activity",
            ChartKind::Engagement => "Engagement",
            ChartKind::History => "History",
        }
    }

    fn plots_views(self) -> bool {
        matches!(self, ChartKind::Activity | ChartKind::History)
    }

    fn plots_duration(self) -> bool {
        matches!(self, ChartKind::Engagement | ChartKind::History)
    }
}

/// One x-axis point of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: DateTime<Utc>,

    /// Axis tick label, e.g. "Oct 18".
    pub label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

/// Build the series for `kind` from a profile's history, in history order.
pub fn chart_series(profile: &CustomerProfile, kind: ChartKind) -> Vec<ChartPoint> {
    profile
        .behavior
        .history
        .iter()
        .map(|point| ChartPoint {
            date: point.date,
            label: axis_label(point.date),
            views: kind.plots_views().then_some(point.views),
            duration: kind.plots_duration().then_some(point.duration),
        })
        .collect()
}

/// Format a date as a short axis label ("Oct 5").
pub fn axis_label(date: DateTime<Utc>) -> String {
    date.format("%b %-d").to_string()
}

/// Format a date for a chart tooltip ("Oct 5, 2024").
pub fn tooltip_label(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a profile's last-active time for the profile list ("Oct 5, 08:30").
pub fn last_active_label(profile: &CustomerProfile) -> String {
    profile.behavior.last_active.format("%b %-d, %H:%M").to_string()
}

/// Aggregate figures over a profile's history.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistorySummary {
    pub days: usize,
    pub total_views: u64,
    pub total_duration: u64,
    pub average_views: f64,
    pub average_duration: f64,

    /// Date of the day with the most views (earliest such day on ties).
    pub peak_day: Option<DateTime<Utc>>,
}

impl HistorySummary {
    /// Compute summary figures from a history.
    pub fn from_history(history: &[HistoryPoint]) -> Self {
        if history.is_empty() {
            return Self::default();
        }

        let total_views: u64 = history.iter().map(|p| u64::from(p.views)).sum();
        let total_duration: u64 = history.iter().map(|p| u64::from(p.duration)).sum();
        let days = history.len();

        // max_by_key keeps the last maximum; history is most-recent-first.
        let peak_day = history.iter().max_by_key(|p| p.views).map(|p| p.date);

        Self {
            days,
            total_views,
            total_duration,
            average_views: total_views as f64 / days as f64,
            average_duration: total_duration as f64 / days as f64,
            peak_day,
        }
    }
}

/// Human-readable form of an interaction tag.
///
/// The first underscore becomes a space and the first letter is capitalized:
/// `cart_add` -> `Cart add`.
pub fn interaction_label(tag: &str) -> String {
    let spaced = tag.replacen('_', " ", 1);
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
