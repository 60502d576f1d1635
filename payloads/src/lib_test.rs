use super::*;

// =============================================================
// Base URL handling
// =============================================================

#[test]
fn normalize_base_url_trims_trailing_slashes() {
    assert_eq!(normalize_base_url(" https://api.example.test// "), "https://api.example.test");
}

#[test]
fn normalize_base_url_falls_back_to_default() {
    assert_eq!(normalize_base_url(""), DEFAULT_API_BASE);
    assert_eq!(normalize_base_url("/"), DEFAULT_API_BASE);
}

#[test]
fn endpoint_url_joins_path() {
    assert_eq!(endpoint_url("http://h:1/", endpoints::CAMPAIGNS), "http://h:1/campaigns");
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn status_error_display_includes_code_and_body() {
    let err = ApiError::Status { status: 502, body: "upstream down\n".to_owned() };
    assert_eq!(err.to_string(), "HTTP 502: upstream down");
    assert_eq!(err.status(), Some(502));
}

#[test]
fn status_error_display_without_body() {
    let err = ApiError::Status { status: 404, body: "  ".to_owned() };
    assert_eq!(err.to_string(), "HTTP 404");
}

#[test]
fn network_error_has_no_status() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.status(), None);
    assert_eq!(err.to_string(), "network error: connection refused");
}

// =============================================================
// Response decoding
// =============================================================

#[test]
fn decode_ack_handles_json_text_and_empty_bodies() {
    assert_eq!(decode_ack("{\"ok\":true}"), serde_json::json!({ "ok": true }));
    assert_eq!(decode_ack("  "), Value::Null);
    assert_eq!(decode_ack("accepted\n"), serde_json::json!("accepted"));
}

#[test]
fn workspace_accepts_numeric_id_and_keeps_extra_fields() {
    let ws: Workspace = serde_json::from_value(serde_json::json!({
        "id": 42,
        "name": "Acme",
        "created_at": "2024-01-01T00:00:00Z"
    }))
    .expect("decode");
    assert_eq!(ws.id, "42");
    assert_eq!(ws.name.as_deref(), Some("Acme"));
    assert_eq!(ws.owner_email, None);
    assert_eq!(ws.extra.get("created_at"), Some(&serde_json::json!("2024-01-01T00:00:00Z")));
}

#[test]
fn workspace_rejects_missing_id() {
    let result = serde_json::from_value::<Workspace>(serde_json::json!({ "name": "Acme" }));
    assert!(result.is_err());
}

#[test]
fn campaign_list_tolerates_sparse_items() {
    let campaigns: Vec<Campaign> = serde_json::from_value(serde_json::json!([
        { "id": "c-1", "name": "Launch", "workspace_id": 7, "sequence": [
            { "day_offset": 0, "subject": "Hi", "body": "Hello" },
            { "day_offset": 2, "subject": "Bump", "body": "" }
        ]},
        { "id": 2 }
    ]))
    .expect("decode");
    assert_eq!(campaigns.len(), 2);
    assert_eq!(campaigns[0].workspace_id.as_deref(), Some("7"));
    assert_eq!(campaigns[0].sequence.len(), 2);
    assert_eq!(campaigns[1].id, "2");
    assert_eq!(campaigns[1].name, "");
    assert!(campaigns[1].workspace_id.is_none());
    assert!(campaigns[1].sequence.is_empty());
}

#[test]
fn campaign_list_tolerates_step_without_day_offset() {
    let campaigns: Vec<Campaign> = serde_json::from_value(serde_json::json!([
        { "id": "c1" },
        { "id": "c2", "sequence": [{ "subject": "hi", "body": "" }] }
    ]))
    .expect("decode");
    assert_eq!(campaigns.len(), 2);
    assert_eq!(campaigns[1].sequence.steps()[0].day_offset, 0);
    assert_eq!(campaigns[1].sequence.steps()[0].subject, "hi");
}

#[test]
fn prospect_decodes_echoed_title() {
    let prospect: Prospect = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "email": "ada@example.com",
        "title": "CTO",
        "score": 9
    }))
    .expect("decode");
    assert_eq!(prospect.title.as_deref(), Some("CTO"));
    assert!(!prospect.extra.contains_key("title"));
    assert_eq!(prospect.extra.get("score"), Some(&serde_json::json!(9)));
}

#[test]
fn prospect_label_prefers_name_then_email_then_id() {
    let mut prospect: Prospect = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "email": "ada@example.com",
        "first_name": "Ada",
        "last_name": " Lovelace "
    }))
    .expect("decode");
    assert_eq!(prospect.label(), "Ada Lovelace");
    prospect.first_name = None;
    prospect.last_name = Some(String::new());
    assert_eq!(prospect.label(), "ada@example.com");
    prospect.email = None;
    assert_eq!(prospect.label(), "p-1");
}

// =============================================================
// Request encoding
// =============================================================

#[test]
fn new_campaign_serializes_wire_fields() {
    let body = NewCampaign {
        name: "Launch".to_owned(),
        workspace_id: Some("w-1".to_owned()),
        sequence: Sequence::starter(),
    };
    let value = serde_json::to_value(&body).expect("serialize");
    assert_eq!(value["name"], "Launch");
    assert_eq!(value["workspace_id"], "w-1");
    assert_eq!(value["sequence"][0]["day_offset"], 0);
}

#[test]
fn event_request_uses_type_key() {
    let event = EventRequest::demo(EventKind::EmailOpened, Some("w-1"), None);
    let value = serde_json::to_value(&event).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "type": "email_opened",
            "properties": { "demo": true, "workspace_id": "w-1" }
        })
    );
}

// =============================================================
// EventKind
// =============================================================

#[test]
fn event_kind_parses_wire_names() {
    for kind in EventKind::ALL {
        assert_eq!(kind.as_str().parse::<EventKind>(), Ok(kind));
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn event_kind_rejects_unknown_name() {
    assert_eq!(
        "email_bounced".parse::<EventKind>(),
        Err(UnknownEventKind("email_bounced".to_owned()))
    );
}

#[test]
fn event_kind_serde_matches_as_str() {
    for kind in EventKind::ALL {
        assert_eq!(serde_json::to_value(kind).expect("serialize"), serde_json::json!(kind.as_str()));
    }
}
