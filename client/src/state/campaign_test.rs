use super::*;

fn workspace(id: &str) -> Workspace {
    serde_json::from_value(serde_json::json!({ "id": id })).expect("workspace")
}

fn offsets(state: &CampaignDraftState) -> Vec<u32> {
    state.steps().iter().map(|s| s.day_offset).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_draft_has_starter_step_and_no_workspace() {
    let state = CampaignDraftState::default();
    assert_eq!(state.draft.name, DEFAULT_CAMPAIGN_NAME);
    assert!(state.draft.workspace_id.is_none());
    assert_eq!(offsets(&state), vec![0]);
    assert_eq!(state.row_keys().len(), 1);
}

// =============================================================
// Step edits
// =============================================================

#[test]
fn add_step_appends_two_days_after_last() {
    let mut state = CampaignDraftState::default();
    state.add_step();
    state.update_step(1, StepEdit::DayOffset(5));
    state.add_step();
    assert_eq!(offsets(&state), vec![0, 5, 7]);
    assert_eq!(state.row_keys().len(), 3);
}

#[test]
fn add_step_to_emptied_draft_starts_at_zero() {
    let mut state = CampaignDraftState::default();
    state.remove_step(0);
    state.add_step();
    assert_eq!(offsets(&state), vec![0]);
}

#[test]
fn remove_by_key_keeps_other_rows_and_keys() {
    let mut state = CampaignDraftState::default();
    state.add_step();
    state.add_step();
    let keys = state.row_keys().to_vec();

    let removed = state.remove_by_key(&keys[1]).expect("removed");
    assert_eq!(removed.day_offset, 2);
    assert_eq!(offsets(&state), vec![0, 4]);
    assert_eq!(state.row_keys(), &[keys[0].clone(), keys[2].clone()]);
    assert_eq!(state.index_of(&keys[2]), Some(1));
}

#[test]
fn row_keys_are_unique() {
    let mut state = CampaignDraftState::default();
    state.add_step();
    state.add_step();
    let keys = state.row_keys();
    assert_ne!(keys[0], keys[1]);
    assert_ne!(keys[1], keys[2]);
    assert_ne!(keys[0], keys[2]);
}

#[test]
fn update_by_key_edits_the_keyed_row_after_removal() {
    let mut state = CampaignDraftState::default();
    state.add_step();
    state.add_step();
    let last = state.row_keys()[2].clone();
    state.remove_step(0);
    assert!(state.update_by_key(&last, StepEdit::Subject("Breakup".to_owned())));
    assert_eq!(state.steps()[1].subject, "Breakup");
    assert_eq!(state.step_by_key(&last).map(|s| s.subject.as_str()), Some("Breakup"));
}

#[test]
fn unknown_key_is_noop() {
    let mut state = CampaignDraftState::default();
    assert!(!state.update_by_key("missing", StepEdit::Body("x".to_owned())));
    assert!(state.remove_by_key("missing").is_none());
    assert_eq!(state.steps().len(), 1);
}

#[test]
fn add_generated_appends_generated_copy() {
    let mut state = CampaignDraftState::default();
    let email = GeneratedEmail { subject: "Saw your launch".to_owned(), body: "Congrats!".to_owned() };
    let index = state.add_generated(&email);
    assert_eq!(index, 1);
    assert_eq!(state.steps()[1].subject, "Saw your launch");
    assert_eq!(state.steps()[1].body, "Congrats!");
    assert_eq!(state.steps()[1].day_offset, 2);
}

// =============================================================
// Workspace link and submit
// =============================================================

#[test]
fn link_workspace_sets_reference() {
    let mut state = CampaignDraftState::default();
    state.link_workspace(&workspace("w-42"));
    assert_eq!(state.draft.workspace_id.as_deref(), Some("w-42"));
    assert_eq!(state.draft.to_request().workspace_id.as_deref(), Some("w-42"));
}

#[test]
fn begin_submit_snapshots_draft_once() {
    let mut state = CampaignDraftState::default();
    let body = state.begin_submit().expect("body");
    assert_eq!(body.name, DEFAULT_CAMPAIGN_NAME);
    assert_eq!(body.sequence.len(), 1);
    assert!(state.begin_submit().is_none());
    state.fail();
    assert!(state.begin_submit().is_some());
}

#[test]
fn restore_regenerates_keys_and_keeps_bookkeeping() {
    let mut state = CampaignDraftState::default();
    state.begin_submit();
    let mut draft = CampaignDraft::default();
    draft.sequence.add_step();
    state.restore(draft.clone());
    assert_eq!(state.draft, draft);
    assert_eq!(state.row_keys().len(), 2);
    assert!(state.pending);
}

#[test]
fn draft_serializes_for_storage() {
    let draft = CampaignDraft::default();
    let raw = serde_json::to_string(&draft).expect("serialize");
    let back: CampaignDraft = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back, draft);
}

// =============================================================
// Input parsing
// =============================================================

#[test]
fn parse_day_offset_rejects_invalid_input() {
    assert_eq!(parse_day_offset(" 3 "), Some(3));
    assert_eq!(parse_day_offset(""), None);
    assert_eq!(parse_day_offset("-1"), None);
    assert_eq!(parse_day_offset("2.5"), None);
}
