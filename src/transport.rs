use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use uuid::Uuid;

use crate::auth::RoomAuth;
use crate::config::ClientConfig;
use crate::errors::RoomServiceError;

/// Raw HTTP response handed back by a transport: status code plus body,
/// untouched. Decoding happens in the client.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status_code: u16,
    pub body: String,
}

/// The seam between `RoomServiceClient` and the wire.
///
/// Implementations must be safe for concurrent use; the client issues every
/// operation as an independent request/response exchange through this trait.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Session/correlation identifier assigned when the transport was built
    fn session_id(&self) -> &str;

    /// Submit one signed POST request and return the response verbatim
    async fn send(&self, path: &str, body: String) -> Result<RawResponse, RoomServiceError>;
}

/// Default transport backed by `reqwest`
///
/// Owns a single HTTP client for its lifetime and signs every request with
/// the configured API key and secret. Carries no per-request state, so one
/// instance serves any number of concurrent callers.
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
    session_id: String,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            session_id: Uuid::new_v4().to_string(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn session_id(&self) -> &str {
        &self.session_id
    }

    async fn send(&self, path: &str, body: String) -> Result<RawResponse, RoomServiceError> {
        let url = format!("{}{}", self.config.server_url.trim_end_matches('/'), path);

        let timestamp = RoomAuth::get_timestamp();
        let nonce = RoomAuth::generate_nonce();
        let signature = RoomAuth::generate_signature(
            &self.config.api_key,
            &self.config.api_secret,
            "POST",
            path,
            timestamp,
            &nonce,
            &body,
        );

        info!("Issuing request to {}", path);
        debug!("API URL: {}", url);

        // Build the request with all required headers
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("API-KEY", &self.config.api_key)
            .header("API-TIMESTAMP", timestamp.to_string())
            .header("API-NONCE", &nonce)
            .header("API-SIGNATURE", signature)
            .body(body)
            .send()
            .await?;

        let status_code = response.status().as_u16();
        info!("Response received with status: {}", status_code);

        let body = response.text().await?;

        Ok(RawResponse { status_code, body })
    }
}
