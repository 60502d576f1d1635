//! Workspace creation form.

use leptos::prelude::*;

use crate::net::{api, dispatch};
use crate::state::dashboard::{DashboardState, RequestKind};

#[component]
pub fn WorkspacePanel() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let pending = move || state.with(|s| s.workspace.pending);
    let created_id = Memo::new(move |_| state.with(|s| s.workspace.created_id().map(str::to_owned)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(body) = state.try_update(DashboardState::begin_workspace_submit).flatten() else {
            return;
        };
        dispatch(async move {
            match api::create_workspace(&body).await {
                Ok(workspace) => state.update(|s| s.workspace_created(workspace)),
                Err(err) => state.update(|s| s.request_failed(RequestKind::CreateWorkspace, &err)),
            }
        });
    };

    view! {
        <section class="panel workspace-panel">
            <h2 class="panel__title">"Workspace"</h2>
            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Name"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || state.with(|s| s.workspace.form.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.workspace.form.name = value);
                        }
                    />
                </label>
                <label class="form__label">
                    "Owner email"
                    <input
                        class="form__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || state.with(|s| s.workspace.form.owner_email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.workspace.form.owner_email = value);
                        }
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=pending>
                    {move || if pending() { "Creating..." } else { "Create workspace" }}
                </button>
            </form>
            <Show when=move || created_id.with(Option::is_some)>
                <p class="panel__note">
                    "Active workspace: "
                    <code>{move || created_id.get().unwrap_or_default()}</code>
                </p>
            </Show>
        </section>
    }
}
