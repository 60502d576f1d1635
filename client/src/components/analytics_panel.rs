//! Demo analytics event buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fires `POST /events` with a demo payload; aggregation happens on the
//! backend, so the panel only counts acknowledged sends for this session.

use leptos::prelude::*;
use payloads::EventKind;

use crate::net::{api, dispatch};
use crate::state::dashboard::{DashboardState, RequestKind};

fn fire_event(state: RwSignal<DashboardState>, kind: EventKind) {
    let Some(body) = state.try_update(|s| s.begin_event(kind)).flatten() else {
        return;
    };
    dispatch(async move {
        match api::send_event(&body).await {
            Ok(ack) => state.update(|s| s.event_acked(kind, ack)),
            Err(err) => state.update(|s| s.request_failed(RequestKind::SendEvent, &err)),
        }
    });
}

#[component]
pub fn AnalyticsPanel() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let busy = move || state.with(|s| s.analytics.pending.is_some());
    let last_ack = Memo::new(move |_| {
        state.with(|s| {
            s.analytics
                .last_ack
                .as_ref()
                .map(|(kind, ack)| (*kind, serde_json::to_string_pretty(ack).unwrap_or_default()))
        })
    });

    view! {
        <section class="panel analytics-panel">
            <h2 class="panel__title">"Demo analytics"</h2>
            <p class="panel__note">
                {move || format!("{} events acknowledged this session", state.with(|s| s.analytics.total()))}
            </p>
            <div class="analytics-panel__buttons">
                {EventKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button class="btn analytics-panel__event" disabled=busy on:click=move |_| fire_event(state, kind)>
                                <span>{kind.label()}</span>
                                <span class="analytics-panel__count">
                                    {move || state.with(|s| s.analytics.count(kind))}
                                </span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=move || last_ack.with(Option::is_some)>
                <div class="analytics-panel__ack">
                    <h3>{move || last_ack.get().map(|(kind, _)| format!("Last ack: {kind}")).unwrap_or_default()}</h3>
                    <pre>{move || last_ack.get().map(|(_, body)| body).unwrap_or_default()}</pre>
                </div>
            </Show>
        </section>
    }
}
