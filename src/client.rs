use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::errors::RoomServiceError;
use crate::models::common::ApiEnvelope;
use crate::models::recording::{
    DeleteRecordingBody, DeleteRecordingResponse, DownloadLinkResponse, RecordingDownloadBody,
    RecordingQuery, RecordingsResponse,
};
use crate::models::room::{
    CreateRoomBody, CreateRoomRequest, CreateRoomResponse, EndRoomBody, EndRoomResponse,
    IsRoomActiveBody, JoinTokenBody, JoinTokenRequest, JoinTokenResponse, RoomActiveResponse,
    UserInfoBody,
};
use crate::transport::{HttpTransport, RawResponse, Transport};

// Endpoint paths, one per remote operation
mod paths {
    pub const IS_ROOM_ACTIVE: &str = "/api/room/isRoomActive";
    pub const CREATE_ROOM: &str = "/api/room/create";
    pub const GET_JOIN_TOKEN: &str = "/api/room/getJoinToken";
    pub const END_ROOM: &str = "/api/room/endRoom";
    pub const FETCH_RECORDINGS: &str = "/api/recording/fetch";
    pub const RECORDING_DOWNLOAD_LINK: &str = "/api/recording/getDownloadLink";
    pub const DELETE_RECORDING: &str = "/api/recording/delete";
}

/// Client for the room service API
///
/// Thin facade over a [`Transport`]: each operation validates its input,
/// marshals the request body, issues one POST, and decodes the response.
/// Holds no state beyond the transport handle, so a single instance can be
/// shared freely between tasks.
pub struct RoomServiceClient {
    transport: Arc<dyn Transport>,
}

impl RoomServiceClient {
    /// Create a client with the default HTTP transport
    pub fn new(config: ClientConfig) -> Self {
        Self {
            transport: Arc::new(HttpTransport::new(config)),
        }
    }

    /// Create a client configured from environment variables
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// Create a client over a caller-supplied transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Session/correlation identifier assigned by the transport
    pub fn uuid(&self) -> &str {
        self.transport.session_id()
    }

    /// Check whether a room is currently active
    pub async fn is_room_active(
        &self,
        room_id: &str,
    ) -> Result<RoomActiveResponse, RoomServiceError> {
        require_non_empty(room_id, "room_id")?;

        info!("Checking whether room {} is active", room_id);
        let body = serde_json::to_string(&IsRoomActiveBody {
            room_id: room_id.to_string(),
        })?;

        let raw = self.transport.send(paths::IS_ROOM_ACTIVE, body).await?;
        decode_response(raw)
    }

    /// Create a room from the supplied configuration
    pub async fn create_room(
        &self,
        request: &CreateRoomRequest,
    ) -> Result<CreateRoomResponse, RoomServiceError> {
        require_non_empty(&request.room_id, "room_id")?;

        info!("Creating room {}", request.room_id);
        let body = serde_json::to_string(&CreateRoomBody::from_request(request))?;
        debug!("Create room body: {}", body);

        let raw = self.transport.send(paths::CREATE_ROOM, body).await?;
        decode_response(raw)
    }

    /// Issue a join token for a named participant
    pub async fn get_join_token(
        &self,
        request: &JoinTokenRequest,
    ) -> Result<JoinTokenResponse, RoomServiceError> {
        require_non_empty(&request.room_id, "room_id")?;
        require_non_empty(&request.user_id, "user_id")?;
        require_non_empty(&request.name, "name")?;

        info!(
            "Requesting join token for user {} in room {}",
            request.user_id, request.room_id
        );
        let body = serde_json::to_string(&JoinTokenBody {
            room_id: request.room_id.clone(),
            user_info: UserInfoBody {
                name: request.name.clone(),
                user_id: request.user_id.clone(),
                is_admin: request.is_admin,
            },
        })?;

        let raw = self.transport.send(paths::GET_JOIN_TOKEN, body).await?;
        decode_response(raw)
    }

    /// Terminate a running room
    ///
    /// Ending a room that has already ended surfaces whatever the remote
    /// reports; there is no local special case.
    pub async fn end_room(&self, room_id: &str) -> Result<EndRoomResponse, RoomServiceError> {
        require_non_empty(room_id, "room_id")?;

        info!("Ending room {}", room_id);
        let body = serde_json::to_string(&EndRoomBody {
            room_id: room_id.to_string(),
        })?;

        let raw = self.transport.send(paths::END_ROOM, body).await?;
        decode_response(raw)
    }

    /// Fetch a page of recordings
    pub async fn get_recordings(
        &self,
        query: &RecordingQuery,
    ) -> Result<RecordingsResponse, RoomServiceError> {
        if query.order_by.is_empty() {
            return Err(RoomServiceError::validation("order_by", "must not be empty"));
        }
        if query.limit <= 0 {
            return Err(RoomServiceError::validation("limit", "must be positive"));
        }
        if query.from < 0 {
            return Err(RoomServiceError::validation("from", "must not be negative"));
        }

        info!(
            "Fetching recordings (from={}, limit={}, rooms={})",
            query.from,
            query.limit,
            query.room_ids.len()
        );
        let body = serde_json::to_string(query)?;

        let raw = self.transport.send(paths::FETCH_RECORDINGS, body).await?;
        decode_response(raw)
    }

    /// Issue a time-limited download link token for a recording
    pub async fn get_recording_download_link(
        &self,
        record_id: &str,
    ) -> Result<DownloadLinkResponse, RoomServiceError> {
        require_non_empty(record_id, "record_id")?;

        info!("Requesting download link for recording {}", record_id);
        let body = serde_json::to_string(&RecordingDownloadBody {
            record_id: record_id.to_string(),
        })?;

        let raw = self
            .transport
            .send(paths::RECORDING_DOWNLOAD_LINK, body)
            .await?;
        decode_response(raw)
    }

    /// Delete a recording. This is a single irreversible remote call.
    pub async fn delete_recording(
        &self,
        record_id: &str,
    ) -> Result<DeleteRecordingResponse, RoomServiceError> {
        require_non_empty(record_id, "record_id")?;

        info!("Deleting recording {}", record_id);
        let body = serde_json::to_string(&DeleteRecordingBody {
            record_id: record_id.to_string(),
        })?;

        let raw = self.transport.send(paths::DELETE_RECORDING, body).await?;
        decode_response(raw)
    }
}

fn require_non_empty(value: &str, field: &'static str) -> Result<(), RoomServiceError> {
    if value.is_empty() {
        return Err(RoomServiceError::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Decode a raw transport response into a typed result
///
/// Every response carries the `{status, msg}` envelope. A non-2xx HTTP
/// status or a `status: false` flag becomes a `Remote` error with the remote
/// message untranslated; a 2xx body that does not match the expected schema
/// is a `Decode` error.
fn decode_response<T: DeserializeOwned>(raw: RawResponse) -> Result<T, RoomServiceError> {
    if !(200..300).contains(&raw.status_code) {
        let message = match serde_json::from_str::<ApiEnvelope>(&raw.body) {
            Ok(envelope) => envelope.msg,
            Err(_) => raw.body,
        };
        return Err(RoomServiceError::Remote {
            code: raw.status_code,
            message,
        });
    }

    let envelope: ApiEnvelope =
        serde_json::from_str(&raw.body).map_err(|err| RoomServiceError::Decode {
            message: format!("missing response envelope: {}", err),
        })?;

    if !envelope.status {
        return Err(RoomServiceError::Remote {
            code: raw.status_code,
            message: envelope.msg,
        });
    }

    Ok(serde_json::from_str(&raw.body)?)
}
