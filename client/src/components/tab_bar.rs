//! Tab strip switching between dashboard panels.

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;
use crate::state::ui::DashboardTab;

#[component]
pub fn TabBar() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();

    view! {
        <nav class="tab-bar" role="tablist">
            {DashboardTab::ALL
                .into_iter()
                .map(|tab| {
                    let active = move || state.with(|s| s.ui.tab == tab);
                    view! {
                        <button
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=active
                            role="tab"
                            aria-selected=move || active().to_string()
                            on:click=move |_| state.update(|s| s.select_tab(tab))
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
