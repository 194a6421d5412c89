//! # Pulseboard Analytics Payload Normalizer
//!
//! This crate turns raw domain snapshots into the uniform payload shape every
//! dashboard panel consumes: KPIs, trend lines, alert signals and
//! recommendations, plus a flag saying whether the data is live or the static
//! baseline.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   HTTP, storage or any other external system. It depends only on
//!   `core-types` and `baseline` (Layer 0).
//! - **Stateless Normalization:** `normalize` is a pure function. It takes a
//!   `DataState` plus a baseline value and a set of builder functions, and
//!   produces a fresh `AnalyticsPayload`. Nothing is cached or mutated, which
//!   makes it highly reliable and easy to test.
//! - **Uniform shaping:** the same four builder functions transform either
//!   the live or the baseline value, so the payload shape is identical
//!   regardless of where the data came from.
//!
//! ## Public API
//!
//! - `normalize` / `PayloadBuilders` / `AnalyticsPayload`: the generic core.
//! - `DataState` / `LiveSource` / `SharedSource`: the live-data collaborator
//!   contract and its in-memory implementation.
//! - `feeds`: the three fixed instantiations backing the dashboard pages.
//! - `AnalyticsError`: the specific error types that can be returned from
//!   this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod feeds;
pub mod payload;
pub mod source;

// Re-export the key components to create a clean, public-facing API.
pub use error::AnalyticsError;
pub use payload::{normalize, AnalyticsPayload, PayloadBuilders};
pub use source::{DataState, LiveSource, SharedSource};
