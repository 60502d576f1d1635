//! Page-level state container for the dashboard.
//!
//! DESIGN
//! ======
//! Each panel owns a focused state model; this container wires the
//! cross-panel transitions (a created workspace feeds the campaign draft,
//! a created campaign lands in the list, every outcome drives the banner).
//! Every `begin_*` returns the request body only when no request of that kind
//! is outstanding, so each action issues at most one request.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use payloads::{
    ApiError, Campaign, EventKind, EventRequest, GenerateRequest, GeneratedEmail, NewCampaign, NewProspect,
    NewWorkspace, Prospect, Workspace,
};

use super::analytics::AnalyticsState;
use super::campaign::CampaignDraftState;
use super::campaigns::CampaignsState;
use super::generator::GeneratorState;
use super::prospects::ProspectsState;
use super::ui::{DashboardTab, StatusBanner, UiState};
use super::workspace::WorkspaceState;

/// Identifies which backend call failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    CreateWorkspace,
    CreateProspect,
    GenerateCopy,
    CreateCampaign,
    LoadCampaigns,
    SendEvent,
}

impl RequestKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::CreateWorkspace => "Create workspace",
            Self::CreateProspect => "Add prospect",
            Self::GenerateCopy => "Generate copy",
            Self::CreateCampaign => "Create campaign",
            Self::LoadCampaigns => "Load campaigns",
            Self::SendEvent => "Send event",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub ui: UiState,
    pub workspace: WorkspaceState,
    pub prospects: ProspectsState,
    pub generator: GeneratorState,
    pub campaign: CampaignDraftState,
    pub campaigns: CampaignsState,
    pub analytics: AnalyticsState,
}

impl DashboardState {
    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.ui.tab = tab;
    }

    /// Campaigns load lazily the first time their tab opens.
    pub fn needs_campaign_load(&self) -> bool {
        self.ui.tab == DashboardTab::Campaigns
            && !self.campaigns.loaded
            && !self.campaigns.loading
            && self.campaigns.error.is_none()
    }

    // ---------------------------------------------------------
    // Workspace
    // ---------------------------------------------------------

    pub fn begin_workspace_submit(&mut self) -> Option<NewWorkspace> {
        let body = self.workspace.begin_submit()?;
        self.ui.status = StatusBanner::pending("Creating workspace...");
        Some(body)
    }

    pub fn workspace_created(&mut self, workspace: Workspace) {
        self.campaign.link_workspace(&workspace);
        self.ui.status = StatusBanner::success(format!("Workspace created ({})", workspace.id));
        self.workspace.record_created(workspace);
    }

    // ---------------------------------------------------------
    // Prospects
    // ---------------------------------------------------------

    pub fn begin_prospect_submit(&mut self) -> Option<NewProspect> {
        let body = self.prospects.begin_submit()?;
        self.ui.status = StatusBanner::pending("Adding prospect...");
        Some(body)
    }

    pub fn prospect_created(&mut self, prospect: Prospect) {
        self.ui.status = StatusBanner::success(format!("Prospect added: {}", prospect.label()));
        self.prospects.record_created(prospect);
    }

    // ---------------------------------------------------------
    // Copy generation
    // ---------------------------------------------------------

    pub fn begin_generate(&mut self) -> Option<GenerateRequest> {
        let body = self.generator.begin_submit()?;
        self.ui.status = StatusBanner::pending("Generating copy...");
        Some(body)
    }

    pub fn copy_generated(&mut self, email: GeneratedEmail) {
        self.generator.record_generated(email);
        self.ui.status = StatusBanner::success("Copy generated");
    }

    /// Append the latest generated copy to the draft and jump to the builder.
    /// Returns `false` when nothing has been generated yet.
    pub fn use_generated_copy(&mut self) -> bool {
        let Some(email) = self.generator.result.as_ref() else {
            return false;
        };
        let index = self.campaign.add_generated(email);
        self.ui.tab = DashboardTab::Campaigns;
        self.ui.status = StatusBanner::success(format!("Generated copy added as step {}", index + 1));
        true
    }

    // ---------------------------------------------------------
    // Campaigns
    // ---------------------------------------------------------

    pub fn begin_campaign_submit(&mut self) -> Option<NewCampaign> {
        let body = self.campaign.begin_submit()?;
        self.ui.status = StatusBanner::pending("Creating campaign...");
        Some(body)
    }

    pub fn campaign_created(&mut self, campaign: Campaign) {
        self.ui.status = StatusBanner::success(format!("Campaign created ({})", campaign.id));
        self.campaigns.upsert(campaign.clone());
        self.campaign.record_created(campaign);
    }

    pub fn begin_campaigns_load(&mut self) -> bool {
        self.campaigns.begin_load()
    }

    /// Returns `true` when a reload queued during this load must be issued.
    pub fn campaigns_loaded(&mut self, items: Vec<Campaign>) -> bool {
        self.campaigns.finish_load(items)
    }

    // ---------------------------------------------------------
    // Analytics
    // ---------------------------------------------------------

    pub fn begin_event(&mut self, kind: EventKind) -> Option<EventRequest> {
        if !self.analytics.begin(kind) {
            return None;
        }
        self.ui.status = StatusBanner::pending(format!("Sending {kind}..."));
        let campaign_id = self.campaign.last_created.as_ref().map(|c| c.id.as_str());
        Some(EventRequest::demo(kind, self.workspace.created_id(), campaign_id))
    }

    pub fn event_acked(&mut self, kind: EventKind, ack: serde_json::Value) {
        self.analytics.record_ack(kind, ack);
        self.ui.status = StatusBanner::success(format!("Event {kind} recorded"));
    }

    // ---------------------------------------------------------
    // Failures
    // ---------------------------------------------------------

    /// Clear the in-flight flag for `request` and surface `err` in the banner.
    pub fn request_failed(&mut self, request: RequestKind, err: &ApiError) {
        match request {
            RequestKind::CreateWorkspace => self.workspace.fail(),
            RequestKind::CreateProspect => self.prospects.fail(),
            RequestKind::GenerateCopy => self.generator.fail(),
            RequestKind::CreateCampaign => self.campaign.fail(),
            RequestKind::LoadCampaigns => self.campaigns.fail_load(err.to_string()),
            RequestKind::SendEvent => self.analytics.fail(),
        }
        self.ui.status = StatusBanner::from_error(request.label(), err);
    }
}
