use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug)]
pub struct AvailabilityResponse {
    available: bool,
    #[serde(default)]
    message: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for AvailabilityResponse {}

impl AvailabilityResponse {
    pub fn is_available(&self) -> bool { self.available }
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }
}
