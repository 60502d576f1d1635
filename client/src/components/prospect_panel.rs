//! Prospect entry form and the prospects added this session.

use leptos::prelude::*;

use crate::net::{api, dispatch};
use crate::state::dashboard::{DashboardState, RequestKind};
use crate::state::prospects::ProspectField;

const FIELDS: [(ProspectField, &str, &str); 5] = [
    (ProspectField::Email, "Email", "email"),
    (ProspectField::FirstName, "First name", "text"),
    (ProspectField::LastName, "Last name", "text"),
    (ProspectField::Company, "Company", "text"),
    (ProspectField::Title, "Title", "text"),
];

#[component]
pub fn ProspectPanel() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let pending = move || state.with(|s| s.prospects.pending);
    let created = Memo::new(move |_| state.with(|s| s.prospects.created.clone()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(body) = state.try_update(DashboardState::begin_prospect_submit).flatten() else {
            return;
        };
        dispatch(async move {
            match api::create_prospect(&body).await {
                Ok(prospect) => state.update(|s| s.prospect_created(prospect)),
                Err(err) => state.update(|s| s.request_failed(RequestKind::CreateProspect, &err)),
            }
        });
    };

    view! {
        <section class="panel prospect-panel">
            <h2 class="panel__title">"Prospects"</h2>
            <form class="form" on:submit=on_submit>
                {FIELDS
                    .into_iter()
                    .map(|(field, label, input_type)| {
                        view! {
                            <label class="form__label">
                                {label}
                                <input
                                    class="form__input"
                                    type=input_type
                                    prop:value=move || state.with(|s| s.prospects.form.get(field).to_owned())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|s| s.prospects.form.set(field, value));
                                    }
                                />
                            </label>
                        }
                    })
                    .collect_view()}
                <button class="btn btn--primary" type="submit" disabled=pending>
                    {move || if pending() { "Adding..." } else { "Add prospect" }}
                </button>
            </form>
            <Show
                when=move || created.with(|items| !items.is_empty())
                fallback=|| view! { <p class="panel__empty">"No prospects added yet."</p> }
            >
                <ul class="prospect-panel__list">
                    {move || {
                        created
                            .get()
                            .into_iter()
                            .map(|prospect| {
                                let company = prospect.company.clone().unwrap_or_default();
                                view! {
                                    <li class="prospect-panel__item">
                                        <span class="prospect-panel__name">{prospect.label()}</span>
                                        <span class="prospect-panel__company">{company}</span>
                                        <code class="prospect-panel__id">{prospect.id}</code>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}
