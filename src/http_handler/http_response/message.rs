use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Acknowledgement body used by action endpoints (cancel, return, status and
/// role updates, deletes) that answer with a short JSON message.
#[derive(serde::Deserialize, Debug, Default)]
pub struct MessageResponse {
    #[serde(default)]
    message: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for MessageResponse {}

impl MessageResponse {
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }
}
