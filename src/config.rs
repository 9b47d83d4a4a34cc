use dotenv::dotenv;
use std::env;
use std::fmt;

/// Connection configuration for the room service API
///
/// Immutable after construction. The API secret is sensitive: it is used
/// only for request signing and is redacted from `Debug` output.
#[derive(Clone)]
pub struct ClientConfig {
    pub server_url: String,
    pub api_key: String,
    pub api_secret: String,
}

impl ClientConfig {
    pub fn new(server_url: String, api_key: String, api_secret: String) -> Self {
        Self {
            server_url,
            api_key,
            api_secret,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_url: env::var("ROOM_SERVICE_URL")
                .expect("ROOM_SERVICE_URL must be set in environment"),
            api_key: env::var("ROOM_SERVICE_API_KEY")
                .expect("ROOM_SERVICE_API_KEY must be set in environment"),
            api_secret: env::var("ROOM_SERVICE_API_SECRET")
                .expect("ROOM_SERVICE_API_SECRET must be set in environment"),
        }
    }
}

// Manual Debug so the secret cannot leak through log formatting
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("server_url", &self.server_url)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
