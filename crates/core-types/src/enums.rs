use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a KPI value should be rendered by the dashboard.
///
/// This is display metadata only. It never alters the stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiFormat {
    Currency,
    Percent,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    /// Derives a direction from a period-over-period delta.
    pub fn from_delta(delta: Decimal) -> Self {
        if delta > Decimal::ZERO {
            TrendDirection::Up
        } else if delta < Decimal::ZERO {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiStatus {
    Success,
    Warning,
    Risk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Risk,
}

impl AlertSeverity {
    /// Whether the alert warrants operator attention.
    pub fn is_actionable(&self) -> bool {
        matches!(self, AlertSeverity::Warning | AlertSeverity::Risk)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}
