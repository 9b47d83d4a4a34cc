use serde::{Deserialize, Serialize};

/// Query for a page of recordings
///
/// An empty `room_ids` list means all rooms. `order_by` has no default and
/// must be supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingQuery {
    pub room_ids: Vec<String>,
    #[serde(default = "default_from")]
    pub from: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub order_by: String,
}

pub fn default_from() -> i64 {
    0
}

pub fn default_limit() -> i64 {
    20
}

#[derive(Debug, Serialize)]
pub(crate) struct RecordingDownloadBody {
    pub record_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeleteRecordingBody {
    pub record_id: String,
}

// Recording descriptor returned by the remote service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingInfo {
    pub record_id: String,
    pub room_id: String,
    pub room_sid: String,
    pub file_path: String,
    pub file_size: f64,
    pub creation_time: i64,
    pub room_creation_time: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingsPage {
    pub total_recordings: i64,
    pub from: i64,
    pub limit: i64,
    pub order_by: String,
    pub recordings_list: Vec<RecordingInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingsResponse {
    pub msg: String,
    pub result: RecordingsPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadLinkResponse {
    pub msg: String,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRecordingResponse {
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_query_defaults() {
        let query: RecordingQuery =
            serde_json::from_str(r#"{"room_ids": [], "order_by": "desc"}"#).unwrap();

        assert_eq!(query.from, 0);
        assert_eq!(query.limit, 20);
        assert_eq!(query.order_by, "desc");
        assert!(query.room_ids.is_empty());
    }

    #[test]
    fn test_query_requires_order_by() {
        let result = serde_json::from_str::<RecordingQuery>(r#"{"room_ids": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_query_serializes_all_fields() {
        let query = RecordingQuery {
            room_ids: vec!["room-1".to_string(), "room-2".to_string()],
            from: 40,
            limit: 20,
            order_by: "asc".to_string(),
        };

        let json: Value = serde_json::to_value(&query).unwrap();
        assert_eq!(json["room_ids"], serde_json::json!(["room-1", "room-2"]));
        assert_eq!(json["from"], 40);
        assert_eq!(json["limit"], 20);
        assert_eq!(json["order_by"], "asc");
    }
}
