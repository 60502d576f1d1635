//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by panel (`workspace`, `campaign`, `analytics`, etc.) so
//! each model stays small and testable; `dashboard` composes them into the
//! single page-level container provided via context.

pub mod analytics;
pub mod campaign;
pub mod campaigns;
pub mod dashboard;
pub mod generator;
pub mod prospects;
pub mod ui;
pub mod workspace;
