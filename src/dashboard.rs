//! Dashboard controller.
//!
//! Composition root for the client side: owns the [`ProfileClient`], the
//! [`ProfileStore`] and the view state (time range, search query, chart tab),
//! and sequences fetches the way the dashboard page does.
//!
//! # Usage
//!
//! ```ignore
//! let mut dashboard = Dashboard::new(ProfileClient::new("http://127.0.0.1:3000"));
//! dashboard.mount().await?;
//! dashboard.set_search_query("developer");
//! let visible = dashboard.visible_profiles();
//! ```

use tracing::{info, warn};

use crate::client::{ClientError, ProfileClient};
use crate::model::{CustomerProfile, TimeRange};
use crate::store::ProfileStore;
use crate::views::{ChartKind, ChartPoint, HistorySummary, chart_series};

pub struct Dashboard {
    client: ProfileClient,
    store: ProfileStore,
    time_range: TimeRange,
    search_query: String,
    chart: ChartKind,
}

impl Dashboard {
    pub fn new(client: ProfileClient) -> Self {
        Self::with_store(client, ProfileStore::new())
    }

    /// Create a dashboard around an existing store.
    pub fn with_store(client: ProfileClient, store: ProfileStore) -> Self {
        Self {
            client,
            store,
            time_range: TimeRange::default(),
            search_query: String::new(),
            chart: ChartKind::default(),
        }
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn chart_kind(&self) -> ChartKind {
        self.chart
    }

    /// Initial load with the current time range.
    pub async fn mount(&mut self) -> Result<(), ClientError> {
        self.refresh().await
    }

    /// Switch the time range and refetch.
    pub async fn set_time_range(&mut self, range: TimeRange) -> Result<(), ClientError> {
        self.time_range = range;
        self.refresh().await
    }

    /// Fetch profiles for the current time range into the store.
    ///
    /// On failure the store keeps its previous profiles and selection.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        self.store.set_loading(true);
        let result = self.client.fetch_profiles(self.time_range).await;
        self.store.set_loading(false);

        match result {
            Ok(profiles) => {
                info!(
                    time_range = %self.time_range,
                    profile_count = profiles.len(),
                    "Profiles loaded"
                );
                self.store.apply_fetch(profiles);
                Ok(())
            }
            Err(e) => {
                warn!(time_range = %self.time_range, error = %e, "Error fetching profiles");
                Err(e)
            }
        }
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    /// Profiles matching the current search query.
    pub fn visible_profiles(&self) -> Vec<&CustomerProfile> {
        self.store.filter(&self.search_query)
    }

    /// Select a held profile by id.
    pub fn select(&mut self, id: &str) -> bool {
        self.store.select_by_id(id)
    }

    pub fn selected(&self) -> Option<&CustomerProfile> {
        self.store.selected_profile()
    }

    pub fn set_chart(&mut self, kind: ChartKind) {
        self.chart = kind;
    }

    /// Series for the active chart tab, if a profile is selected.
    pub fn chart(&self) -> Option<Vec<ChartPoint>> {
        self.selected().map(|profile| chart_series(profile, self.chart))
    }

    /// Summary figures for the selected profile.
    pub fn summary(&self) -> Option<HistorySummary> {
        self.selected().map(|profile| HistorySummary::from_history(&profile.behavior.history))
    }
}
