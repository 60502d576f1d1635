//! REST API helpers for the outreach backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. A non-2xx status becomes
//! `ApiError::Status` carrying the code and raw body so the status banner can
//! show both. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use payloads::{
    ApiError, Campaign, DEFAULT_API_BASE, EventRequest, GenerateRequest, GeneratedEmail, NewCampaign,
    NewProspect, NewWorkspace, Prospect, Workspace, endpoints,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Backend base URL, configured at build time through `OUTREACH_API_BASE`.
pub fn api_base() -> String {
    payloads::normalize_base_url(option_env!("OUTREACH_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

fn endpoint(path: &str) -> String {
    payloads::endpoint_url(&api_base(), path)
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: String) -> ApiError {
    ApiError::Status { status, body }
}

#[cfg(feature = "hydrate")]
async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("{} {} failed with HTTP {status}", resp.url(), resp.status_text());
    Err(status_error(status, body))
}

#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    let resp = request.send().await.map_err(|e| {
        log::warn!("request failed: {e}");
        ApiError::Network(e.to_string())
    })?;
    check_status(resp).await
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(path);
        log::debug!("GET {url}");
        let request = gloo_net::http::Request::get(&url)
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let resp = send(request).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint(path);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

async fn post_raw<B: Serialize>(path: &str, body: &B) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(path);
        log::debug!("POST {url}");
        let request = gloo_net::http::Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let resp = send(request).await?;
        resp.text().await.map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint(path), body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let raw = post_raw(path, body).await?;
    serde_json::from_str(&raw).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Create a workspace via `POST /workspaces`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or an undecodable body.
pub async fn create_workspace(body: &NewWorkspace) -> Result<Workspace, ApiError> {
    post_json(endpoints::WORKSPACES, body).await
}

/// Create a prospect via `POST /prospects`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or an undecodable body.
pub async fn create_prospect(body: &NewProspect) -> Result<Prospect, ApiError> {
    post_json(endpoints::PROSPECTS, body).await
}

/// Generate a subject/body pair via `POST /generate`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or an undecodable body.
pub async fn generate_copy(body: &GenerateRequest) -> Result<GeneratedEmail, ApiError> {
    post_json(endpoints::GENERATE, body).await
}

/// Create a campaign via `POST /campaigns`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or an undecodable body.
pub async fn create_campaign(body: &NewCampaign) -> Result<Campaign, ApiError> {
    post_json(endpoints::CAMPAIGNS, body).await
}

/// List campaigns via `GET /campaigns`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or an undecodable body.
pub async fn list_campaigns() -> Result<Vec<Campaign>, ApiError> {
    get_json(endpoints::CAMPAIGNS).await
}

/// Fire an analytics event via `POST /events` and return the backend's ack.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or non-2xx status.
pub async fn send_event(body: &EventRequest) -> Result<serde_json::Value, ApiError> {
    post_raw(endpoints::EVENTS, body).await.map(|raw| payloads::decode_ack(&raw))
}
