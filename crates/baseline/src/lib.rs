//! # Pulseboard Baseline Data Provider
//!
//! This crate supplies the static fallback datasets the dashboard falls back
//! to whenever a live data source has nothing to offer. It is a Layer 0
//! crate: pure constant data, no knowledge of external systems, depending
//! only on `core-types`.
//!
//! The datasets are process-wide constants, created on first access and
//! immutable for the lifetime of the process. Accessors hand out `'static`
//! slice references; callers clone what they need. Absence of data is always
//! represented by an empty sequence, never by an error.

// Declare the modules that constitute this crate.
pub mod data;

// Re-export the key components to create a clean, public-facing API.
pub use data::{activity_feed, alerts, kpis, recommendations, trends};
