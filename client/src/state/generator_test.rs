use super::*;

#[test]
fn form_defaults_to_friendly_tone() {
    let form = GeneratorForm::default();
    assert_eq!(form.tone, "friendly");
    assert!(form.product.is_empty());
    assert!(form.call_to_action.is_empty());
}

#[test]
fn set_updates_request_fields() {
    let mut form = GeneratorForm::default();
    form.set(GeneratorField::Product, "Ledger".to_owned());
    form.set(GeneratorField::Audience, "CFOs".to_owned());
    form.set(GeneratorField::Tone, "direct".to_owned());
    form.set(GeneratorField::CallToAction, "Book a demo".to_owned());
    assert_eq!(form.get(GeneratorField::Audience), "CFOs");
    assert_eq!(
        form.to_request(),
        GenerateRequest {
            product: "Ledger".to_owned(),
            audience: "CFOs".to_owned(),
            tone: "direct".to_owned(),
            call_to_action: "Book a demo".to_owned(),
        }
    );
}

#[test]
fn record_generated_replaces_result() {
    let mut state = GeneratorState::default();
    state.begin_submit();
    state.record_generated(GeneratedEmail { subject: "One".to_owned(), body: "A".to_owned() });
    state.begin_submit();
    state.record_generated(GeneratedEmail { subject: "Two".to_owned(), body: "B".to_owned() });
    assert!(!state.pending);
    assert_eq!(state.result.as_ref().map(|r| r.subject.as_str()), Some("Two"));
}

#[test]
fn fail_keeps_last_result() {
    let mut state = GeneratorState::default();
    state.record_generated(GeneratedEmail { subject: "One".to_owned(), body: String::new() });
    state.begin_submit();
    state.fail();
    assert!(state.result.is_some());
    assert!(!state.pending);
}
