use chrono::{DateTime, TimeZone, Utc};
use core_types::{
    ActivityEntry, AlertSeverity, AlertSignal, ImpactLevel, Kpi, KpiFormat, KpiStatus,
    Recommendation, TrendPoint,
};
use rust_decimal_macros::dec;
use std::sync::LazyLock;

static KPIS: LazyLock<Vec<Kpi>> = LazyLock::new(|| {
    vec![
        Kpi::new("total-revenue", "Total Revenue", dec!(1284500), KpiFormat::Currency)
            .with_delta(dec!(42300))
            .with_status(KpiStatus::Success),
        Kpi::new("operating-expenses", "Operating Expenses", dec!(917200), KpiFormat::Currency)
            .with_delta(dec!(18750))
            .with_status(KpiStatus::Warning),
        Kpi::new("budget-variance", "Budget Variance", dec!(-3.4), KpiFormat::Percent)
            .with_delta(dec!(-1.1))
            .with_status(KpiStatus::Warning),
        Kpi::new("forecast-accuracy", "Forecast Accuracy", dec!(92.6), KpiFormat::Percent)
            .with_delta(dec!(0))
            .with_status(KpiStatus::Success),
    ]
});

static TRENDS: LazyLock<Vec<TrendPoint>> = LazyLock::new(|| {
    vec![
        TrendPoint::new("Jan", dec!(96400)),
        TrendPoint::new("Feb", dec!(101250)),
        TrendPoint::new("Mar", dec!(98100)),
        TrendPoint::new("Apr", dec!(104800)),
        TrendPoint::new("May", dec!(109300)),
        TrendPoint::new("Jun", dec!(107950)),
    ]
});

static ALERTS: LazyLock<Vec<AlertSignal>> = LazyLock::new(|| {
    vec![
        AlertSignal {
            id: "marketing-overspend".to_string(),
            severity: AlertSeverity::Warning,
            title: "Marketing spend over budget".to_string(),
            description: "Marketing is tracking 12% over its quarterly budget line.".to_string(),
        },
        AlertSignal {
            id: "q3-revenue-below-plan".to_string(),
            severity: AlertSeverity::Risk,
            title: "Q3 revenue below plan".to_string(),
            description: "Quarter-to-date revenue is 6% under the planned trajectory.".to_string(),
        },
        AlertSignal {
            id: "cost-centers-imported".to_string(),
            severity: AlertSeverity::Info,
            title: "New cost centers imported".to_string(),
            description: "5 cost centers were added from the latest operational import."
                .to_string(),
        },
    ]
});

static RECOMMENDATIONS: LazyLock<Vec<Recommendation>> = LazyLock::new(|| {
    vec![
        Recommendation {
            id: "rebalance-marketing".to_string(),
            title: "Rebalance marketing budget".to_string(),
            description: "Shift remaining Q3 campaign spend toward channels beating their \
                          cost-per-acquisition targets."
                .to_string(),
            impact: Some(ImpactLevel::High),
        },
        Recommendation {
            id: "review-vendor-contracts".to_string(),
            title: "Review vendor contracts".to_string(),
            description: "Three software vendors renew next quarter at above-market rates."
                .to_string(),
            impact: Some(ImpactLevel::Medium),
        },
        Recommendation {
            id: "automate-invoice-matching".to_string(),
            title: "Automate invoice matching".to_string(),
            description: "Manual invoice matching accounts for most close-cycle delays."
                .to_string(),
            impact: Some(ImpactLevel::Low),
        },
    ]
});

static ACTIVITY_FEED: LazyLock<Vec<ActivityEntry>> = LazyLock::new(|| {
    vec![
        ActivityEntry {
            id: "act-001".to_string(),
            timestamp: ts(2026, 8, 12, 9, 5),
            actor: "ops-import".to_string(),
            action: "Imported July operational actuals (2,431 rows)".to_string(),
        },
        ActivityEntry {
            id: "act-002".to_string(),
            timestamp: ts(2026, 8, 12, 10, 40),
            actor: "m.keller".to_string(),
            action: "Adjusted Q3 marketing budget allocation".to_string(),
        },
        ActivityEntry {
            id: "act-003".to_string(),
            timestamp: ts(2026, 8, 13, 8, 15),
            actor: "system".to_string(),
            action: "Recalculated budget variance after actuals import".to_string(),
        },
    ]
});

// Literal dates are known-valid; the expect can only fire on a bad constant.
fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .expect("valid baseline timestamp")
}

/// The fallback KPI cards shown before any live snapshot arrives.
pub fn kpis() -> &'static [Kpi] {
    &KPIS
}

/// The fallback monthly net cash flow trend line.
pub fn trends() -> &'static [TrendPoint] {
    &TRENDS
}

/// The fallback alert panel contents.
pub fn alerts() -> &'static [AlertSignal] {
    &ALERTS
}

/// The fallback recommendations panel contents.
pub fn recommendations() -> &'static [Recommendation] {
    &RECOMMENDATIONS
}

/// The fallback operational activity feed.
pub fn activity_feed() -> &'static [ActivityEntry] {
    &ACTIVITY_FEED
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_ids<'a>(ids: impl Iterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate baseline id: {id}");
        }
    }

    #[test]
    fn datasets_are_populated() {
        assert!(!kpis().is_empty());
        assert!(!trends().is_empty());
        assert!(!alerts().is_empty());
        assert!(!recommendations().is_empty());
        assert!(!activity_feed().is_empty());
    }

    #[test]
    fn ids_are_unique_within_each_dataset() {
        assert_unique_ids(kpis().iter().map(|k| k.id.as_str()));
        assert_unique_ids(alerts().iter().map(|a| a.id.as_str()));
        assert_unique_ids(recommendations().iter().map(|r| r.id.as_str()));
        assert_unique_ids(activity_feed().iter().map(|e| e.id.as_str()));
    }

    #[test]
    fn baseline_entries_pass_validation() {
        for kpi in kpis() {
            kpi.validate().unwrap();
        }
        for alert in alerts() {
            alert.validate().unwrap();
        }
        for rec in recommendations() {
            rec.validate().unwrap();
        }
        for entry in activity_feed() {
            entry.validate().unwrap();
        }
    }

    #[test]
    fn trend_points_stay_in_supplied_order() {
        let labels: Vec<&str> = trends().iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
    }
}
