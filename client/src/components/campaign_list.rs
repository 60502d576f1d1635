//! Existing campaigns fetched from the backend.

use leptos::prelude::*;
use payloads::Campaign;

use crate::net::{api, dispatch};
use crate::state::dashboard::{DashboardState, RequestKind};

/// Fetch `GET /campaigns`. A call made while a load is in flight queues one
/// follow-up load instead of overlapping it.
pub fn load_campaigns(state: RwSignal<DashboardState>) {
    if state.try_update(DashboardState::begin_campaigns_load).unwrap_or(false) {
        fetch_campaigns(state);
    }
}

fn fetch_campaigns(state: RwSignal<DashboardState>) {
    dispatch(async move {
        match api::list_campaigns().await {
            Ok(items) => {
                if state.try_update(|s| s.campaigns_loaded(items)).unwrap_or(false) {
                    fetch_campaigns(state);
                }
            }
            Err(err) => state.update(|s| s.request_failed(RequestKind::LoadCampaigns, &err)),
        }
    });
}

#[component]
pub fn CampaignList() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let loading = move || state.with(|s| s.campaigns.loading);
    let error = Memo::new(move |_| state.with(|s| s.campaigns.error.clone()));
    let items = Memo::new(move |_| state.with(|s| s.campaigns.items.clone()));

    view! {
        <section class="panel campaign-list">
            <header class="panel__header">
                <h2 class="panel__title">"Campaigns"</h2>
                <button class="btn" on:click=move |_| load_campaigns(state) disabled=loading>
                    {move || if loading() { "Loading..." } else { "Refresh" }}
                </button>
            </header>
            <Show when=move || error.with(Option::is_some)>
                <p class="panel__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || items.with(|list| !list.is_empty())
                fallback=move || {
                    view! {
                        <p class="panel__empty">
                            {move || if loading() { "Loading campaigns..." } else { "No campaigns yet." }}
                        </p>
                    }
                }
            >
                <ul class="campaign-list__items">
                    {move || items.get().into_iter().map(|campaign| view! { <CampaignCard campaign=campaign/> }).collect_view()}
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn CampaignCard(campaign: Campaign) -> impl IntoView {
    let name = if campaign.name.trim().is_empty() { "Untitled campaign".to_owned() } else { campaign.name.clone() };
    let workspace = campaign.workspace_id.clone().unwrap_or_else(|| "no workspace".to_owned());
    let steps = campaign
        .sequence
        .steps()
        .iter()
        .map(|step| format!("Day {}: {}", step.day_offset, step.subject))
        .collect::<Vec<_>>();
    let step_summary = format!("{} step{}", steps.len(), if steps.len() == 1 { "" } else { "s" });

    view! {
        <li class="campaign-card">
            <div class="campaign-card__header">
                <span class="campaign-card__name">{name}</span>
                <code class="campaign-card__id">{campaign.id}</code>
            </div>
            <div class="campaign-card__meta">
                <span>{workspace}</span>
                " · "
                <span>{step_summary}</span>
            </div>
            <ol class="campaign-card__steps">
                {steps.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ol>
        </li>
    }
}
