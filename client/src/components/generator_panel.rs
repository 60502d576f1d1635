//! Email copy generator form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Generation happens entirely on the backend; this panel only collects the
//! brief, shows the returned subject/body, and can hand the copy to the
//! campaign builder as a new step.

use leptos::prelude::*;

use crate::net::{api, dispatch};
use crate::state::dashboard::{DashboardState, RequestKind};
use crate::state::generator::GeneratorField;

const FIELDS: [(GeneratorField, &str, &str); 4] = [
    (GeneratorField::Product, "Product", "What are you selling?"),
    (GeneratorField::Audience, "Audience", "Who is it for?"),
    (GeneratorField::Tone, "Tone", "friendly"),
    (GeneratorField::CallToAction, "Call to action", "Book a 15-minute call"),
];

#[component]
pub fn GeneratorPanel() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let pending = move || state.with(|s| s.generator.pending);
    let result = Memo::new(move |_| state.with(|s| s.generator.result.clone()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(body) = state.try_update(DashboardState::begin_generate).flatten() else {
            return;
        };
        dispatch(async move {
            match api::generate_copy(&body).await {
                Ok(email) => state.update(|s| s.copy_generated(email)),
                Err(err) => state.update(|s| s.request_failed(RequestKind::GenerateCopy, &err)),
            }
        });
    };

    let on_use = move |_| {
        state.update(|s| {
            s.use_generated_copy();
        });
    };

    view! {
        <section class="panel generator-panel">
            <h2 class="panel__title">"Generate copy"</h2>
            <form class="form" on:submit=on_submit>
                {FIELDS
                    .into_iter()
                    .map(|(field, label, placeholder)| {
                        view! {
                            <label class="form__label">
                                {label}
                                <input
                                    class="form__input"
                                    type="text"
                                    placeholder=placeholder
                                    prop:value=move || state.with(|s| s.generator.form.get(field).to_owned())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|s| s.generator.form.set(field, value));
                                    }
                                />
                            </label>
                        }
                    })
                    .collect_view()}
                <button class="btn btn--primary" type="submit" disabled=pending>
                    {move || if pending() { "Generating..." } else { "Generate" }}
                </button>
            </form>
            <Show when=move || result.with(Option::is_some)>
                <article class="generator-panel__result">
                    <h3 class="generator-panel__subject">
                        {move || result.with(|r| r.as_ref().map(|e| e.subject.clone()).unwrap_or_default())}
                    </h3>
                    <pre class="generator-panel__body">
                        {move || result.with(|r| r.as_ref().map(|e| e.body.clone()).unwrap_or_default())}
                    </pre>
                    <button class="btn" on:click=on_use>
                        "Add to campaign"
                    </button>
                </article>
            </Show>
        </section>
    }
}
