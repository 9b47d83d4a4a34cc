//! Room Service API Client
//!
//! This library provides a Rust client facade for a video-conferencing
//! room-management service: create rooms, issue join tokens, end rooms,
//! and fetch or delete recordings. Each operation validates its input,
//! marshals a JSON request body, and submits it through a swappable
//! transport. Retry and backoff policy is left to the caller.
//!
//! # Modules
//!
//! - `client`: RoomServiceClient with one method per remote operation
//! - `transport`: the Transport trait and the reqwest-backed HttpTransport
//! - `auth`: authentication utilities for the room service API
//! - `config`: connection configuration
//! - `models`: request and response value types
//! - `errors`: the RoomServiceError taxonomy
//!
//! # Authentication
//!
//! The library signs every request with HMAC-SHA256 over the method, auth
//! headers, path, and body, using the configured API key and secret. The
//! signing logic is encapsulated in the `auth` module; the secret never
//! appears in logs.

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod transport;

#[cfg(test)]
mod client_mock;

// Re-export the main API types for ease of use
pub use auth::RoomAuth;
pub use client::RoomServiceClient;
pub use config::ClientConfig;
pub use errors::RoomServiceError;
pub use models::common::ApiEnvelope;
pub use models::recording::{
    DeleteRecordingResponse, DownloadLinkResponse, RecordingInfo, RecordingQuery, RecordingsPage,
    RecordingsResponse,
};
pub use models::room::{
    ChatFeatures, CreateRoomRequest, CreateRoomResponse, EndRoomResponse, JoinTokenRequest,
    JoinTokenResponse, LockSettings, RoomActiveResponse, RoomFeatures, RoomInfo, RoomMetadata,
};
pub use transport::{HttpTransport, RawResponse, Transport};
