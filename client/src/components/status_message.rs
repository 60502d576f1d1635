//! Page-level status banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the outcome of the most recent request. Failures show the plain
//! error string, which includes the HTTP status code.

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;

#[component]
pub fn StatusMessage() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let banner = Memo::new(move |_| state.with(|s| s.ui.status.clone()));

    view! {
        <Show when=move || banner.with(|b| b.is_visible())>
            <div class=move || format!("status-banner {}", banner.with(|b| b.css_modifier())) role="status">
                <span class="status-banner__message">{move || banner.with(|b| b.message.clone())}</span>
                <button
                    class="status-banner__dismiss"
                    title="Dismiss"
                    on:click=move |_| state.update(|s| s.ui.status = crate::state::ui::StatusBanner::default())
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
