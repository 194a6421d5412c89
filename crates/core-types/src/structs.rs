use crate::enums::{AlertSeverity, ImpactLevel, KpiFormat, KpiStatus, TrendDirection};
use crate::error::CoreError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single key performance indicator as rendered on a dashboard card.
///
/// The `format` field controls rendering only; the stored `value` is always
/// the raw number regardless of how it is displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub id: String,
    pub label: String,
    pub value: Decimal,
    pub format: KpiFormat,
    /// Period-over-period change, in the same unit as `value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<KpiStatus>,
}

impl Kpi {
    /// Creates a KPI with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        value: Decimal,
        format: KpiFormat,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value,
            format,
            delta: None,
            trend: None,
            status: None,
        }
    }

    /// Attaches a delta and derives the matching trend direction.
    pub fn with_delta(mut self, delta: Decimal) -> Self {
        self.trend = Some(TrendDirection::from_delta(delta));
        self.delta = Some(delta);
        self
    }

    pub fn with_status(mut self, status: KpiStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Rejects KPIs that could not be keyed or labelled on a dashboard.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "Kpi.id".to_string(),
                "identifier must not be empty".to_string(),
            ));
        }
        if self.label.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "Kpi.label".to_string(),
                "label must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// One sample on a trend line. Sequence order is meaningful: callers supply
/// points in chronological (or categorical) order and consumers must not
/// re-sort them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub value: Decimal,
}

impl TrendPoint {
    pub fn new(label: impl Into<String>, value: Decimal) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A signal surfaced in the dashboard's alert panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSignal {
    pub id: String,
    pub severity: AlertSeverity,
    pub title: String,
    pub description: String,
}

impl AlertSignal {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "AlertSignal.id".to_string(),
                "identifier must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// A suggested action shown in the recommendations panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<ImpactLevel>,
}

impl Recommendation {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "Recommendation.id".to_string(),
                "identifier must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// One row of the operational activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    /// Who or what produced the event (a user, an import job, the system).
    pub actor: String,
    pub action: String,
}

impl ActivityEntry {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "ActivityEntry.id".to_string(),
                "identifier must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn with_delta_derives_trend_direction() {
        let kpi = Kpi::new("rev", "Revenue", dec!(100), KpiFormat::Currency);
        assert_eq!(
            kpi.clone().with_delta(dec!(4.2)).trend,
            Some(TrendDirection::Up)
        );
        assert_eq!(
            kpi.clone().with_delta(dec!(-1)).trend,
            Some(TrendDirection::Down)
        );
        assert_eq!(kpi.with_delta(dec!(0)).trend, Some(TrendDirection::Flat));
    }

    #[test]
    fn validate_rejects_blank_identifiers() {
        let kpi = Kpi::new("  ", "Revenue", dec!(1), KpiFormat::Number);
        assert!(kpi.validate().is_err());

        let ok = Kpi::new("rev", "Revenue", dec!(1), KpiFormat::Number);
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&KpiFormat::Currency).unwrap(),
            "\"currency\""
        );
        assert_eq!(
            serde_json::to_string(&AlertSeverity::Risk).unwrap(),
            "\"risk\""
        );
        assert_eq!(
            serde_json::to_string(&TrendDirection::Flat).unwrap(),
            "\"flat\""
        );
    }
}
