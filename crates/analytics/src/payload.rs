use crate::error::AnalyticsError;
use crate::source::DataState;
use core_types::{AlertSignal, Kpi, Recommendation, TrendPoint};
use serde::{Deserialize, Serialize};

/// The normalized bundle every dashboard panel consumes.
///
/// Constructed fresh per request and never mutated afterwards; a refresh
/// produces a new payload. `is_baseline` tells the consumer whether the
/// derived collections were shaped from live data or from the static
/// fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsPayload<T> {
    /// The raw domain value the derived collections were built from.
    pub data: T,
    pub kpis: Vec<Kpi>,
    pub trends: Vec<TrendPoint>,
    pub alerts: Vec<AlertSignal>,
    pub recommendations: Vec<Recommendation>,
    pub is_baseline: bool,
}

/// The four pure shaping functions a feed supplies to the normalizer.
///
/// Plain function pointers rather than boxed closures: the builders are fixed
/// per feed, carry no state, and static dispatch keeps them trivially
/// testable in isolation.
pub struct PayloadBuilders<T> {
    pub kpis: fn(&T) -> Result<Vec<Kpi>, AnalyticsError>,
    pub trends: fn(&T) -> Result<Vec<TrendPoint>, AnalyticsError>,
    pub alerts: fn(&T) -> Result<Vec<AlertSignal>, AnalyticsError>,
    pub recommendations: fn(&T) -> Result<Vec<Recommendation>, AnalyticsError>,
}

/// The main entry point for shaping a payload.
///
/// If `state` carries a live value the builders are applied to it and
/// `is_baseline` is `false`; otherwise the same builders are applied to
/// `baseline` and `is_baseline` is `true`. Either way the four builders are
/// applied uniformly, so the payload shape never depends on the source.
///
/// Builder failures indicate a bug in the shaping logic, not an expected
/// runtime condition; they propagate unmodified rather than degrading to the
/// baseline.
pub fn normalize<T: Clone>(
    state: DataState<T>,
    baseline: &T,
    builders: &PayloadBuilders<T>,
) -> Result<AnalyticsPayload<T>, AnalyticsError> {
    let (data, is_baseline) = match state {
        DataState::Live(value) => (value, false),
        DataState::Unavailable => (baseline.clone(), true),
    };
    tracing::debug!(is_baseline, "Building analytics payload.");

    Ok(AnalyticsPayload {
        kpis: (builders.kpis)(&data)?,
        trends: (builders.trends)(&data)?,
        alerts: (builders.alerts)(&data)?,
        recommendations: (builders.recommendations)(&data)?,
        data,
        is_baseline,
    })
}
