use serde::{Deserialize, Serialize};

// Chat permission flags for a room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatFeatures {
    pub allow_chat: bool,
    pub allow_file_upload: bool,
}

// Feature flags controlling what participants may do in a room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomFeatures {
    pub allow_webcams: bool,
    pub mute_on_start: bool,
    pub allow_screen_share: bool,
    pub allow_recording: bool,
    pub allow_rtmp: bool,
    pub allow_view_other_webcams: bool,
    pub allow_view_other_participants: bool,
    pub admin_only_webcams: bool,
}

// Default per-participant lock flags applied when a room is created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockSettings {
    pub lock_microphone: bool,
    pub lock_webcam: bool,
    pub lock_screen_sharing: bool,
    pub lock_chat: bool,
    pub lock_chat_send_message: bool,
    pub lock_chat_file_share: bool,
}

/// Room configuration supplied by the caller when creating a room
///
/// Every group and every flag is required; a JSON document missing any of
/// them fails at deserialization time rather than defaulting silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomMetadata {
    pub chat_features: ChatFeatures,
    pub room_features: RoomFeatures,
    pub default_lock_settings: LockSettings,
}

/// Caller-facing request to create a room
///
/// `max_participants` of 0 or below means "unlimited" and keeps the field
/// out of the outgoing request entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub room_id: String,
    pub room_title: String,
    pub welcome_message: String,
    pub webhook_url: String,
    #[serde(default)]
    pub max_participants: i32,
    pub metadata: RoomMetadata,
}

/// Caller-facing request for a join token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinTokenRequest {
    pub room_id: String,
    pub name: String,
    pub user_id: String,
    pub is_admin: bool,
}

// ---------------------------------------------------------------------------
// Wire bodies: what actually goes over the network. The caller-facing types
// above are regrouped into the shape the remote API expects.
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct IsRoomActiveBody {
    pub room_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct EndRoomBody {
    pub room_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateRoomBody {
    pub room_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    pub metadata: RoomMetadataBody,
}

#[derive(Debug, Serialize)]
pub(crate) struct RoomMetadataBody {
    pub room_title: String,
    pub welcome_message: String,
    pub webhook_url: String,
    pub room_features: RoomFeaturesBody,
    pub default_lock_settings: LockSettings,
}

// On the wire the chat flags ride inside the feature group
#[derive(Debug, Serialize)]
pub(crate) struct RoomFeaturesBody {
    pub allow_webcams: bool,
    pub mute_on_start: bool,
    pub allow_screen_share: bool,
    pub allow_recording: bool,
    pub allow_rtmp: bool,
    pub allow_view_other_webcams: bool,
    pub allow_view_other_participants: bool,
    pub admin_only_webcams: bool,
    pub chat_features: ChatFeatures,
}

#[derive(Debug, Serialize)]
pub(crate) struct JoinTokenBody {
    pub room_id: String,
    pub user_info: UserInfoBody,
}

#[derive(Debug, Serialize)]
pub(crate) struct UserInfoBody {
    pub name: String,
    pub user_id: String,
    pub is_admin: bool,
}

impl CreateRoomBody {
    /// Build the outgoing create-room body field by field
    pub(crate) fn from_request(request: &CreateRoomRequest) -> Self {
        let features = &request.metadata.room_features;
        let chat = &request.metadata.chat_features;

        // Only a strictly positive cap is sent; 0 or below means unlimited
        // and the field is omitted from the request
        let max_participants = if request.max_participants > 0 {
            Some(request.max_participants as u32)
        } else {
            None
        };

        Self {
            room_id: request.room_id.clone(),
            max_participants,
            metadata: RoomMetadataBody {
                room_title: request.room_title.clone(),
                welcome_message: request.welcome_message.clone(),
                webhook_url: request.webhook_url.clone(),
                room_features: RoomFeaturesBody {
                    allow_webcams: features.allow_webcams,
                    mute_on_start: features.mute_on_start,
                    allow_screen_share: features.allow_screen_share,
                    allow_recording: features.allow_recording,
                    allow_rtmp: features.allow_rtmp,
                    allow_view_other_webcams: features.allow_view_other_webcams,
                    allow_view_other_participants: features.allow_view_other_participants,
                    admin_only_webcams: features.admin_only_webcams,
                    chat_features: ChatFeatures {
                        allow_chat: chat.allow_chat,
                        allow_file_upload: chat.allow_file_upload,
                    },
                },
                default_lock_settings: LockSettings {
                    lock_microphone: request.metadata.default_lock_settings.lock_microphone,
                    lock_webcam: request.metadata.default_lock_settings.lock_webcam,
                    lock_screen_sharing: request.metadata.default_lock_settings.lock_screen_sharing,
                    lock_chat: request.metadata.default_lock_settings.lock_chat,
                    lock_chat_send_message: request
                        .metadata
                        .default_lock_settings
                        .lock_chat_send_message,
                    lock_chat_file_share: request
                        .metadata
                        .default_lock_settings
                        .lock_chat_file_share,
                },
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

// Room descriptor assigned by the remote service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomInfo {
    pub room_id: String,
    pub sid: String,
    pub room_title: String,
    pub is_running: bool,
    pub creation_time: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomActiveResponse {
    pub msg: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomResponse {
    pub msg: String,
    pub room_info: RoomInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinTokenResponse {
    pub msg: String,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndRoomResponse {
    pub msg: String,
}
