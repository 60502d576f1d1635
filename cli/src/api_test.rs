use super::*;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use serde_json::json;

async fn spawn_stub(router: Router) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ApiClient::new(&format!("http://{addr}/"), Duration::from_secs(5)).unwrap()
}

fn workspace_body() -> NewWorkspace {
    NewWorkspace { name: "Acme".to_owned(), owner_email: "owner@acme.test".to_owned() }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_trims_trailing_slash() {
    let client = ApiClient::new("http://api.test/", Duration::from_secs(1)).unwrap();
    assert_eq!(client.base_url(), "http://api.test");
}

// =============================================================
// Success paths
// =============================================================

#[tokio::test]
async fn create_workspace_decodes_numeric_id() {
    let client = spawn_stub(Router::new().route(
        "/workspaces",
        post(|axum::Json(body): axum::Json<Value>| async move {
            axum::Json(json!({ "id": 42, "name": body["name"], "plan": "free" }))
        }),
    ))
    .await;

    let ws = client.create_workspace(&workspace_body()).await.unwrap();
    assert_eq!(ws.id, "42");
    assert_eq!(ws.name.as_deref(), Some("Acme"));
    assert_eq!(ws.extra.get("plan"), Some(&json!("free")));
}

#[tokio::test]
async fn list_campaigns_tolerates_sparse_items() {
    let client = spawn_stub(Router::new().route(
        "/campaigns",
        get(|| async { axum::Json(json!([{ "id": "c1", "name": "Launch" }, { "id": 2 }])) }),
    ))
    .await;

    let campaigns = client.list_campaigns().await.unwrap();
    assert_eq!(campaigns.len(), 2);
    assert_eq!(campaigns[0].name, "Launch");
    assert!(campaigns[1].sequence.is_empty());
    assert_eq!(campaigns[1].workspace_id, None);
}

#[tokio::test]
async fn send_event_posts_type_key_and_keeps_text_ack() {
    let client = spawn_stub(Router::new().route(
        "/events",
        post(|axum::Json(body): axum::Json<Value>| async move {
            assert_eq!(body["type"], "email_opened");
            assert_eq!(body["properties"]["demo"], true);
            "accepted"
        }),
    ))
    .await;

    let ack = client
        .send_event(&EventRequest::demo(payloads::EventKind::EmailOpened, None, None))
        .await
        .unwrap();
    assert_eq!(ack, Value::String("accepted".to_owned()));
}

#[tokio::test]
async fn ping_accepts_healthz() {
    let client = spawn_stub(Router::new().route("/healthz", get(|| async { "ok" }))).await;
    client.ping().await.unwrap();
}

// =============================================================
// Failure paths
// =============================================================

#[tokio::test]
async fn non_2xx_status_surfaces_code_and_body() {
    let client = spawn_stub(Router::new().route(
        "/workspaces",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database offline") }),
    ))
    .await;

    let err = client.create_workspace(&workspace_body()).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("500"));
    assert!(err.to_string().contains("database offline"));
}

#[tokio::test]
async fn missing_route_is_a_404_status_error() {
    let client = spawn_stub(Router::new()).await;
    let err = client.list_campaigns().await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let client = spawn_stub(Router::new().route("/generate", post(|| async { "not json" }))).await;
    let request = GenerateRequest {
        product: "CRM".to_owned(),
        audience: "founders".to_owned(),
        tone: payloads::DEFAULT_TONE.to_owned(),
        call_to_action: "book a call".to_owned(),
    };
    let err = client.generate_copy(&request).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{addr}"), Duration::from_secs(2)).unwrap();
    let err = client.ping().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
