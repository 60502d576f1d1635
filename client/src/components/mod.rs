//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each panel reads and writes the shared `DashboardState` from Leptos
//! context and issues at most one backend request per user action.

pub mod analytics_panel;
pub mod campaign_builder;
pub mod campaign_list;
pub mod generator_panel;
pub mod prospect_panel;
pub mod status_message;
pub mod tab_bar;
pub mod workspace_panel;
