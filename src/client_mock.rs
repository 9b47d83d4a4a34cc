use mockall::mock;

use crate::errors::RoomServiceError;
use crate::transport::{RawResponse, Transport};

// Define a mock transport for exercising the client without a network
mock! {
    pub ApiTransport {}

    #[async_trait::async_trait]
    impl Transport for ApiTransport {
        fn session_id(&self) -> &str;

        async fn send(&self, path: &str, body: String) -> Result<RawResponse, RoomServiceError>;
    }
}

/// Canned 200 response with the given body
pub fn ok_response(body: &str) -> RawResponse {
    RawResponse {
        status_code: 200,
        body: body.to_string(),
    }
}

/// Canned failure response carrying the remote envelope
pub fn remote_error_response(status_code: u16, msg: &str) -> RawResponse {
    RawResponse {
        status_code,
        body: format!(r#"{{"status": false, "msg": "{}"}}"#, msg),
    }
}

/// Set up a transport that must see no traffic at all
///
/// Used by validation tests: any call to `send` fails the test.
pub fn setup_offline_transport() -> MockApiTransport {
    let mut mock_transport = MockApiTransport::new();
    mock_transport.expect_send().times(0);
    mock_transport
}
