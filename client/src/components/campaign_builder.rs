//! Campaign builder: name, workspace reference, and the step sequence.
//!
//! DESIGN
//! ======
//! Rows are keyed by client-only ids so removing a step does not rebuild the
//! inputs of the others. Each row resolves its current index from its key
//! whenever it reads or writes the draft.

use leptos::prelude::*;
use payloads::StepEdit;

use crate::components::campaign_list::load_campaigns;
use crate::net::{api, dispatch};
use crate::state::campaign::parse_day_offset;
use crate::state::dashboard::{DashboardState, RequestKind};

#[component]
pub fn CampaignBuilder() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let pending = move || state.with(|s| s.campaign.pending);
    let step_count = move || state.with(|s| s.campaign.steps().len());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(body) = state.try_update(DashboardState::begin_campaign_submit).flatten() else {
            return;
        };
        dispatch(async move {
            match api::create_campaign(&body).await {
                Ok(campaign) => {
                    state.update(|s| s.campaign_created(campaign));
                    load_campaigns(state);
                }
                Err(err) => state.update(|s| s.request_failed(RequestKind::CreateCampaign, &err)),
            }
        });
    };

    view! {
        <section class="panel campaign-builder">
            <h2 class="panel__title">"Campaign builder"</h2>
            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Campaign name"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || state.with(|s| s.campaign.draft.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.campaign.draft.name = value);
                        }
                    />
                </label>
                <label class="form__label">
                    "Workspace ID"
                    <input
                        class="form__input form__input--mono"
                        type="text"
                        placeholder="Create a workspace first"
                        prop:value=move || state.with(|s| s.campaign.draft.workspace_id.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            let value = (!value.trim().is_empty()).then_some(value);
                            state.update(|s| s.campaign.draft.workspace_id = value);
                        }
                    />
                </label>

                <div class="campaign-builder__steps">
                    <For
                        each=move || state.with(|s| s.campaign.row_keys().to_vec())
                        key=|row_key: &String| row_key.clone()
                        children=move |row_key: String| view! { <StepRow row_key=row_key/> }
                    />
                </div>
                <Show when=move || step_count() == 0>
                    <p class="panel__empty">"No steps. Add one to build a sequence."</p>
                </Show>

                <div class="form__actions">
                    <button
                        class="btn"
                        type="button"
                        on:click=move |_| {
                            state.update(|s| {
                                s.campaign.add_step();
                            });
                        }
                    >
                        "+ Add step"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=pending>
                        {move || if pending() { "Creating..." } else { "Create campaign" }}
                    </button>
                </div>
            </form>
        </section>
    }
}

/// One editable sequence step.
#[component]
fn StepRow(row_key: String) -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let row_key = StoredValue::new(row_key);

    let step = move || {
        row_key
            .with_value(|key| state.with(|s| s.campaign.step_by_key(key).cloned()))
            .unwrap_or_default()
    };
    let position = move || {
        row_key
            .with_value(|key| state.with(|s| s.campaign.index_of(key)))
            .map_or(0, |index| index + 1)
    };
    let edit = move |change: StepEdit| {
        row_key.with_value(|key| {
            state.update(|s| {
                s.campaign.update_by_key(key, change);
            });
        });
    };

    view! {
        <fieldset class="campaign-step">
            <legend class="campaign-step__title">{move || format!("Step {}", position())}</legend>
            <label class="form__label form__label--inline">
                "Day"
                <input
                    class="form__input campaign-step__day"
                    type="number"
                    min="0"
                    prop:value=move || step().day_offset.to_string()
                    on:input=move |ev| {
                        if let Some(day) = parse_day_offset(&event_target_value(&ev)) {
                            edit(StepEdit::DayOffset(day));
                        }
                    }
                />
            </label>
            <label class="form__label">
                "Subject"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || step().subject
                    on:input=move |ev| edit(StepEdit::Subject(event_target_value(&ev)))
                />
            </label>
            <label class="form__label">
                "Body"
                <textarea
                    class="form__input campaign-step__body"
                    rows="5"
                    prop:value=move || step().body
                    on:input=move |ev| edit(StepEdit::Body(event_target_value(&ev)))
                ></textarea>
            </label>
            <button
                class="btn btn--danger campaign-step__remove"
                type="button"
                on:click=move |_| {
                    row_key.with_value(|key| {
                        state.update(|s| {
                            s.campaign.remove_by_key(key);
                        });
                    });
                }
            >
                "Remove"
            </button>
        </fieldset>
    }
}
