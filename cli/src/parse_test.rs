use super::*;

// =============================================================
// parse_step
// =============================================================

#[test]
fn parse_step_reads_all_three_parts() {
    let step = parse_step("3:Following up:Any thoughts?").unwrap();
    assert_eq!(step.day_offset, 3);
    assert_eq!(step.subject, "Following up");
    assert_eq!(step.body, "Any thoughts?");
}

#[test]
fn parse_step_keeps_colons_in_body() {
    let step = parse_step("0:Hi:Meeting at 10:30?").unwrap();
    assert_eq!(step.body, "Meeting at 10:30?");
}

#[test]
fn parse_step_allows_empty_subject_and_body() {
    let step = parse_step("7::").unwrap();
    assert_eq!(step.day_offset, 7);
    assert!(step.subject.is_empty());
    assert!(step.body.is_empty());
}

#[test]
fn parse_step_rejects_missing_parts() {
    assert_eq!(
        parse_step("2:Only subject"),
        Err(ParseError::StepShape("2:Only subject".to_owned()))
    );
}

#[test]
fn parse_step_rejects_negative_day() {
    assert_eq!(parse_step("-1:a:b"), Err(ParseError::DayOffset("-1".to_owned())));
}

// =============================================================
// parse_property
// =============================================================

#[test]
fn parse_property_keeps_json_types() {
    assert_eq!(parse_property("count=3").unwrap(), ("count".to_owned(), Value::from(3)));
    assert_eq!(parse_property("demo=true").unwrap(), ("demo".to_owned(), Value::Bool(true)));
}

#[test]
fn parse_property_falls_back_to_string() {
    assert_eq!(
        parse_property("campaign_id=abc-123").unwrap(),
        ("campaign_id".to_owned(), Value::String("abc-123".to_owned()))
    );
}

#[test]
fn parse_property_splits_on_first_equals() {
    let (key, value) = parse_property("url=https://x.io/?a=b").unwrap();
    assert_eq!(key, "url");
    assert_eq!(value, Value::String("https://x.io/?a=b".to_owned()));
}

#[test]
fn parse_property_rejects_missing_key() {
    assert!(parse_property("=1").is_err());
    assert!(parse_property("novalue").is_err());
}
