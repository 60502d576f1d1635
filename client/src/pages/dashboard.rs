//! Dashboard page: tab bar, status banner, and the active panel group.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It restores the saved campaign draft after
//! hydration, persists draft edits, and lazily loads the campaign list the
//! first time the Campaigns tab opens.

use leptos::prelude::*;

use crate::components::analytics_panel::AnalyticsPanel;
use crate::components::campaign_builder::CampaignBuilder;
use crate::components::campaign_list::{CampaignList, load_campaigns};
use crate::components::generator_panel::GeneratorPanel;
use crate::components::prospect_panel::ProspectPanel;
use crate::components::status_message::StatusMessage;
use crate::components::tab_bar::TabBar;
use crate::components::workspace_panel::WorkspacePanel;
use crate::net::api::api_base;
use crate::state::dashboard::DashboardState;
use crate::state::ui::DashboardTab;
use crate::util::ui_persistence::{load_campaign_draft, save_campaign_draft};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();

    // Effects only run in the browser, after hydration.
    Effect::new(move |_| {
        if let Some(draft) = load_campaign_draft() {
            state.update(|s| s.campaign.restore(draft));
        }
    });

    let draft = Memo::new(move |_| state.with(|s| s.campaign.draft.clone()));
    Effect::new(move |prev: Option<()>| {
        let current = draft.get();
        if prev.is_some() {
            save_campaign_draft(&current);
        }
    });

    Effect::new(move |_| {
        if state.with(DashboardState::needs_campaign_load) {
            load_campaigns(state);
        }
    });

    let tab = Memo::new(move |_| state.with(|s| s.ui.tab));
    let workspace_label = move || {
        state.with(|s| s.workspace.created.as_ref().map(|ws| ws.name.clone().unwrap_or_else(|| ws.id.clone())))
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Outreach"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <span class="toolbar__workspace">
                    {move || workspace_label().unwrap_or_else(|| "No workspace".to_owned())}
                </span>
                <span class="toolbar__spacer"></span>
                <code class="toolbar__api" title="Backend base URL">{api_base()}</code>
            </header>
            <TabBar/>
            <StatusMessage/>
            <main class="dashboard-page__body">
                {move || match tab.get() {
                    DashboardTab::Setup => {
                        view! {
                            <div class="dashboard-page__grid">
                                <WorkspacePanel/>
                                <ProspectPanel/>
                            </div>
                        }
                            .into_any()
                    }
                    DashboardTab::Copy => view! { <GeneratorPanel/> }.into_any(),
                    DashboardTab::Campaigns => {
                        view! {
                            <div class="dashboard-page__grid">
                                <CampaignBuilder/>
                                <CampaignList/>
                            </div>
                        }
                            .into_any()
                    }
                    DashboardTab::Analytics => view! { <AnalyticsPanel/> }.into_any(),
                }}
            </main>
        </div>
    }
}
