//! Page chrome state: the active tab and the status banner.
//!
//! DESIGN
//! ======
//! The banner is the only place request outcomes surface. Every submit sets it
//! to pending, then success or error once the single request resolves.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use payloads::ApiError;

/// Top-level dashboard tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    /// Workspace and prospect forms.
    #[default]
    Setup,
    /// Email copy generator.
    Copy,
    /// Campaign builder and campaign list.
    Campaigns,
    /// Demo analytics events.
    Analytics,
}

impl DashboardTab {
    pub const ALL: [Self; 4] = [Self::Setup, Self::Copy, Self::Campaigns, Self::Analytics];

    pub fn label(self) -> &'static str {
        match self {
            Self::Setup => "Setup",
            Self::Copy => "Copy",
            Self::Campaigns => "Campaigns",
            Self::Analytics => "Analytics",
        }
    }
}

/// Visual tone of the status banner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

/// Single page-level status message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusBanner {
    pub kind: StatusKind,
    pub message: String,
}

impl StatusBanner {
    pub fn pending(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Pending, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, message: message.into() }
    }

    /// Error banner for a failed request, e.g. `"Create workspace failed: HTTP 500: boom"`.
    pub fn from_error(action: &str, err: &ApiError) -> Self {
        Self { kind: StatusKind::Error, message: format!("{action} failed: {err}") }
    }

    pub fn is_visible(&self) -> bool {
        self.kind != StatusKind::Idle && !self.message.is_empty()
    }

    /// BEM modifier class for the banner element.
    pub fn css_modifier(&self) -> &'static str {
        match self.kind {
            StatusKind::Idle => "status-banner--idle",
            StatusKind::Pending => "status-banner--pending",
            StatusKind::Success => "status-banner--success",
            StatusKind::Error => "status-banner--error",
        }
    }
}

/// UI state for tab selection and the status banner.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub tab: DashboardTab,
    pub status: StatusBanner,
}
