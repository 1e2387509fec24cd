//! HTTP API handlers for Customer Insights.
//!
//! - **GET /api/user_behavior**: returns the synthetic profile catalog with
//!   a daily history sized by `timeRange`.
//! - **GET /health**: liveness check.
//!
//! Profiles are regenerated on every request; nothing is cached or stored.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::generator::generate_profiles;
use crate::model::{ProfilesQuery, ProfilesResponse};

/// Path of the profile endpoint.
pub const USER_BEHAVIOR_PATH: &str = "/api/user_behavior";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of the generation timestamp.
    pub clock: fn() -> DateTime<Utc>,
}

impl Default for AppState {
    fn default() -> Self {
        Self { clock: Utc::now }
    }
}

impl AppState {
    /// State with a fixed time source (for testing).
    pub fn with_clock(clock: fn() -> DateTime<Utc>) -> Self {
        Self { clock }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(USER_BEHAVIOR_PATH, get(get_user_behavior))
        .route("/health", get(health_check))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// GET /api/user_behavior - Generate customer profiles.
///
/// # Query Parameters
///
/// - `timeRange` (optional): `7d`, `30d` or `90d`. Anything else, or a
///   missing value, is treated as `7d`.
///
/// # Response
///
/// ```json
/// {
///     "profiles": [
///         {
///             "id": "1",
///             "name": "Emma Thompson",
///             "email": "emma@example.com",
///             "behavior": { "lastActive": "...", "pageViews": 145, "timeOnSite": 450,
///                           "interactions": [...], "history": [...] },
///             "persona": { "type": "Fashion Enthusiast", "interests": [...],
///                          "preferences": {...}, "lastUpdated": "..." }
///         }
///     ]
/// }
/// ```
///
/// Returns `500` with `{ "error": "Failed to fetch profiles" }` on any
/// internal fault. A repeated `timeRange` uses its first value; a query
/// string that fails to parse is treated like a missing one, so there is no
/// bad-request path.
#[instrument(skip(state))]
pub async fn get_user_behavior(
    State(state): State<AppState>,
    pairs: Option<Query<Vec<(String, String)>>>,
) -> Result<Json<ProfilesResponse>, ApiError> {
    let query = pairs
        .map(|Query(pairs)| ProfilesQuery::from_pairs(&pairs))
        .unwrap_or_default();
    let range = query.time_range();
    let now = (state.clock)();
    let mut rng = StdRng::from_entropy();

    let profiles = generate_profiles(range, now, &mut rng)?;

    info!(
        time_range = %range,
        profile_count = profiles.len(),
        history_days = range.days(),
        "Profiles generated"
    );

    Ok(Json(ProfilesResponse { profiles }))
}

/// GET /health - Simple health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router(AppState::default())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_ninety_day_range() {
        let (status, body) = get_json("/api/user_behavior?timeRange=90d").await;

        assert_eq!(status, StatusCode::OK);
        for profile in body["profiles"].as_array().unwrap() {
            assert_eq!(profile["behavior"]["history"].as_array().unwrap().len(), 90);
        }
    }

    #[tokio::test]
    async fn test_empty_time_range_falls_back() {
        let (status, body) = get_json("/api/user_behavior?timeRange=").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["profiles"][0]["behavior"]["history"]
                .as_array()
                .unwrap()
                .len(),
            7
        );
    }

    #[tokio::test]
    async fn test_repeated_time_range_uses_first_value() {
        let (status, body) = get_json("/api/user_behavior?timeRange=30d&timeRange=90d").await;

        assert_eq!(status, StatusCode::OK);
        let profiles = body["profiles"].as_array().unwrap();
        assert_eq!(profiles.len(), 20);
        for profile in profiles {
            assert_eq!(profile["behavior"]["history"].as_array().unwrap().len(), 30);
        }
    }
}
