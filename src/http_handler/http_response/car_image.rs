use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CarImageResponse {
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for CarImageResponse {}

impl CarImageResponse {
    pub fn image_url(&self) -> Option<&str> { self.image_url.as_deref() }
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }
}
