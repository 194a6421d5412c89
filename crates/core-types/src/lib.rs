pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{AlertSeverity, ImpactLevel, KpiFormat, KpiStatus, TrendDirection};
pub use error::CoreError;
pub use structs::{ActivityEntry, AlertSignal, Kpi, Recommendation, TrendPoint};
