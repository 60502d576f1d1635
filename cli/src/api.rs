//! Blocking-free REST client for the outreach backend.
//!
//! ERROR HANDLING
//! ==============
//! Mirrors the dashboard: every call yields `payloads::ApiError`, with
//! non-2xx responses carrying the status code and raw body. No retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use payloads::{
    ApiError, Campaign, EventRequest, GenerateRequest, GeneratedEmail, NewCampaign, NewProspect, NewWorkspace,
    Prospect, Workspace, endpoints,
};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns the underlying `reqwest` error if the TLS backend cannot initialize.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url: payloads::normalize_base_url(base_url) })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = payloads::endpoint_url(&self.base_url, path);
        tracing::debug!(%method, %url, "request");
        self.http.request(method, url)
    }

    /// Send and return the raw body of a 2xx response.
    async fn send_raw(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "request failed");
            ApiError::Network(e.to_string())
        })?;
        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "backend returned error status");
            return Err(ApiError::Status { status: status.as_u16(), body });
        }
        Ok(body)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send_raw(request).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.send_json(self.request(Method::POST, path).json(body)).await
    }

    pub async fn create_workspace(&self, body: &NewWorkspace) -> Result<Workspace, ApiError> {
        self.post(endpoints::WORKSPACES, body).await
    }

    pub async fn create_prospect(&self, body: &NewProspect) -> Result<Prospect, ApiError> {
        self.post(endpoints::PROSPECTS, body).await
    }

    pub async fn generate_copy(&self, body: &GenerateRequest) -> Result<GeneratedEmail, ApiError> {
        self.post(endpoints::GENERATE, body).await
    }

    pub async fn create_campaign(&self, body: &NewCampaign) -> Result<Campaign, ApiError> {
        self.post(endpoints::CAMPAIGNS, body).await
    }

    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        self.send_json(self.request(Method::GET, endpoints::CAMPAIGNS)).await
    }

    /// Fire an event; the ack body is returned as-is (see `payloads::decode_ack`).
    pub async fn send_event(&self, body: &EventRequest) -> Result<Value, ApiError> {
        let raw = self.send_raw(self.request(Method::POST, endpoints::EVENTS).json(body)).await?;
        Ok(payloads::decode_ack(&raw))
    }

    /// `GET /healthz` on the backend; any 2xx counts as healthy.
    pub async fn ping(&self) -> Result<(), ApiError> {
        self.send_raw(self.request(Method::GET, endpoints::HEALTHZ)).await.map(|_| ())
    }
}
