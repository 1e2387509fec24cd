//! Client-side profile state.
//!
//! [`ProfileStore`] is an explicit state container owned by whoever composes
//! the dashboard. It holds the last fetched profile set, the selected profile
//! and a cosmetic loading flag. Writes replace state wholesale; nothing is
//! merged or patched.

use crate::model::CustomerProfile;

#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profiles: Vec<CustomerProfile>,
    selected: Option<CustomerProfile>,
    loading: bool,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held profile collection.
    pub fn set_profiles(&mut self, profiles: Vec<CustomerProfile>) {
        self.profiles = profiles;
    }

    /// Replace (or clear) the selected profile.
    pub fn set_selected_profile(&mut self, profile: Option<CustomerProfile>) {
        self.selected = profile;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn profiles(&self) -> &[CustomerProfile] {
        &self.profiles
    }

    pub fn selected_profile(&self) -> Option<&CustomerProfile> {
        self.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Install a freshly fetched profile set and reconcile the selection.
    ///
    /// With nothing selected, the first profile becomes selected. An existing
    /// selection is re-resolved by id against the new set so it never points
    /// at a stale object; if the id is gone, the first profile is selected
    /// instead (or nothing, when the set is empty).
    pub fn apply_fetch(&mut self, profiles: Vec<CustomerProfile>) {
        let resolved = self
            .selected
            .as_ref()
            .and_then(|current| profiles.iter().find(|p| p.id == current.id))
            .or_else(|| profiles.first())
            .cloned();

        self.profiles = profiles;
        self.selected = resolved;
    }

    /// Select a held profile by id. Returns `false` if no profile matches,
    /// leaving the selection unchanged.
    pub fn select_by_id(&mut self, id: &str) -> bool {
        match self.profiles.iter().find(|p| p.id == id) {
            Some(profile) => {
                self.selected = Some(profile.clone());
                true
            }
            None => false,
        }
    }

    /// Profiles whose name or persona type contains `query`, ignoring case.
    ///
    /// An empty query matches everything. Input order is preserved.
    pub fn filter(&self, query: &str) -> Vec<&CustomerProfile> {
        let needle = query.to_lowercase();

        self.profiles
            .iter()
            .filter(|profile| {
                profile.name.to_lowercase().contains(&needle)
                    || profile.persona.persona_type.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_profiles;
    use crate::model::TimeRange;
    use chrono::Utc;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn profiles(range: TimeRange, seed: u64) -> Vec<CustomerProfile> {
        generate_profiles(range, Utc::now(), &mut StdRng::seed_from_u64(seed)).unwrap()
    }

    fn loaded_store() -> ProfileStore {
        let mut store = ProfileStore::new();
        store.set_profiles(profiles(TimeRange::SevenDays, 1));
        store
    }

    fn names<'a>(matches: &[&'a CustomerProfile]) -> Vec<&'a str> {
        matches.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ProfileStore::new();

        assert!(store.profiles().is_empty());
        assert!(store.selected_profile().is_none());
        assert!(!store.is_loading());
        assert!(store.filter("").is_empty());
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let store = loaded_store();
        let all = store.filter("");

        assert_eq!(all.len(), store.profiles().len());
        for (found, held) in all.iter().zip(store.profiles()) {
            assert_eq!(found.id, held.id);
        }
    }

    #[test]
    fn test_filter_by_name_ignores_case() {
        let store = loaded_store();

        assert_eq!(names(&store.filter("emma")), vec!["Emma Thompson"]);
        assert_eq!(names(&store.filter("WILSON")), vec!["James Wilson", "Henry Wilson"]);
    }

    #[test]
    fn test_filter_by_persona_type() {
        let store = loaded_store();

        let enthusiasts = store.filter("enthusiast");
        assert_eq!(
            names(&enthusiasts),
            vec!["Emma Thompson", "Michael Rodriguez", "Ava Johnson"]
        );
    }

    #[test]
    fn test_filter_no_match() {
        let store = loaded_store();
        assert!(store.filter("zzz-nobody").is_empty());
    }

    #[test]
    fn test_set_profiles_does_not_touch_selection() {
        let mut store = ProfileStore::new();
        store.set_profiles(profiles(TimeRange::SevenDays, 1));

        assert!(store.selected_profile().is_none());
    }

    #[test]
    fn test_first_fetch_selects_first_profile() {
        let mut store = ProfileStore::new();
        let fetched = profiles(TimeRange::SevenDays, 1);
        let first = fetched[0].clone();

        store.apply_fetch(fetched);

        assert_eq!(store.selected_profile(), Some(&first));
    }

    #[test]
    fn test_empty_fetch_selects_nothing() {
        let mut store = ProfileStore::new();
        store.apply_fetch(vec![]);

        assert!(store.selected_profile().is_none());
    }

    #[test]
    fn test_refetch_keeps_selection_by_id_with_fresh_data() {
        let mut store = ProfileStore::new();
        store.apply_fetch(profiles(TimeRange::SevenDays, 1));
        assert!(store.select_by_id("5"));

        store.apply_fetch(profiles(TimeRange::ThirtyDays, 2));

        let selected = store.selected_profile().unwrap();
        assert_eq!(selected.id, "5");
        assert_eq!(selected.behavior.history.len(), 30);
        assert_eq!(selected, &store.profiles()[4]);
    }

    #[test]
    fn test_refetch_without_selected_id_falls_back_to_first() {
        let mut store = loaded_store();
        let mut stranger = store.profiles()[0].clone();
        stranger.id = "unknown".to_string();
        store.set_selected_profile(Some(stranger));

        store.apply_fetch(profiles(TimeRange::SevenDays, 3));

        assert_eq!(store.selected_profile().unwrap().id, "1");
    }

    #[test]
    fn test_select_unknown_id_keeps_selection() {
        let mut store = ProfileStore::new();
        store.apply_fetch(profiles(TimeRange::SevenDays, 1));

        assert!(!store.select_by_id("999"));
        assert_eq!(store.selected_profile().unwrap().id, "1");
    }

    #[test]
    fn test_clear_selection_and_loading_flag() {
        let mut store = ProfileStore::new();
        store.apply_fetch(profiles(TimeRange::SevenDays, 1));

        store.set_selected_profile(None);
        store.set_loading(true);

        assert!(store.selected_profile().is_none());
        assert!(store.is_loading());
        assert_eq!(store.profiles().len(), 20);
    }
}
