use crate::{error::AppError, AppState};
use analytics::feeds::{self, PerformanceSnapshot, SummarySnapshot};
use analytics::AnalyticsPayload;
use axum::{extract::State, http::StatusCode, Json};
use core_types::ActivityEntry;
use std::sync::Arc;

/// # GET /api/activity-feed
/// Returns the operational activity feed, falling back to the baseline feed
/// when no live entries have been published.
pub async fn get_activity_feed(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AnalyticsPayload<Vec<ActivityEntry>>>, AppError> {
    let payload = feeds::activity_feed(&state.activity)?;
    Ok(Json(payload))
}

/// # POST /api/activity-feed
/// Publishes a live activity feed. Entries replace the previous snapshot
/// wholesale.
pub async fn ingest_activity_feed(
    State(state): State<Arc<AppState>>,
    Json(entries): Json<Vec<ActivityEntry>>,
) -> Result<StatusCode, AppError> {
    for entry in &entries {
        entry.validate()?;
    }
    state.activity.publish(entries);
    Ok(StatusCode::NO_CONTENT)
}

/// # DELETE /api/activity-feed
/// Drops the live feed; subsequent reads serve the baseline again.
pub async fn clear_activity_feed(State(state): State<Arc<AppState>>) -> StatusCode {
    state.activity.clear();
    StatusCode::NO_CONTENT
}

/// # GET /api/summary
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AnalyticsPayload<SummarySnapshot>>, AppError> {
    let payload = feeds::analytics_summary(&state.summary)?;
    Ok(Json(payload))
}

/// # POST /api/summary
pub async fn ingest_summary(
    State(state): State<Arc<AppState>>,
    Json(snapshot): Json<SummarySnapshot>,
) -> Result<StatusCode, AppError> {
    for kpi in &snapshot.kpis {
        kpi.validate()?;
    }
    state.summary.publish(snapshot);
    Ok(StatusCode::NO_CONTENT)
}

/// # DELETE /api/summary
pub async fn clear_summary(State(state): State<Arc<AppState>>) -> StatusCode {
    state.summary.clear();
    StatusCode::NO_CONTENT
}

/// # GET /api/performance
pub async fn get_performance(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AnalyticsPayload<PerformanceSnapshot>>, AppError> {
    let payload = feeds::performance_kpis(&state.performance)?;
    Ok(Json(payload))
}

/// # POST /api/performance
pub async fn ingest_performance(
    State(state): State<Arc<AppState>>,
    Json(snapshot): Json<PerformanceSnapshot>,
) -> Result<StatusCode, AppError> {
    for kpi in &snapshot.kpis {
        kpi.validate()?;
    }
    state.performance.publish(snapshot);
    Ok(StatusCode::NO_CONTENT)
}

/// # DELETE /api/performance
pub async fn clear_performance(State(state): State<Arc<AppState>>) -> StatusCode {
    state.performance.clear();
    StatusCode::NO_CONTENT
}
