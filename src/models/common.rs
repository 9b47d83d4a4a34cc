use serde::{Deserialize, Serialize};

/// Envelope carried by every room service response
///
/// `status` is the remote success flag; a `false` value means the API
/// processed the request but rejected it, with the reason in `msg`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope {
    pub status: bool,
    pub msg: String,
}
