use base64::engine::{general_purpose, Engine};
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;
use tracing::debug;

// Type alias for HMAC-SHA256
type HmacSha256 = Hmac<Sha256>;

/// Authentication utilities for the room service API
pub struct RoomAuth;

impl RoomAuth {
    /// Generate a random nonce for API requests
    pub fn generate_nonce() -> String {
        rand::thread_rng().gen_range(10000000..99999999).to_string()
    }

    /// Get current timestamp for API requests
    pub fn get_timestamp() -> i64 {
        Utc::now().timestamp()
    }

    /// Generate the request signature expected by the room service API
    pub fn generate_signature(
        api_key: &str,
        api_secret: &str,
        method: &str,
        path: &str,
        timestamp: i64,
        nonce: &str,
        body: &str,
    ) -> String {
        // Format the auth header string part as required by the API
        let header_string = format!(
            "API-KEY={}&API-NONCE={}&API-TIMESTAMP={}",
            api_key, nonce, timestamp
        );

        // Format the full string to sign
        let content = format!("{}\n{}\n{}\n{}", method, header_string, path, body);

        debug!("String to sign: {}", content);

        // Generate HMAC-SHA256
        let mut mac = HmacSha256::new_from_slice(api_secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(content.as_bytes());

        // Convert to hex string
        let hex_hash = hex::encode(mac.finalize().into_bytes());

        // Base64 encode the hex string
        general_purpose::STANDARD.encode(hex_hash.as_bytes())
    }
}
