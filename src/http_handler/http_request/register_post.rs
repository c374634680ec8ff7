use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_response::auth::AuthResponse;

/// Request type for the /auth/register endpoint.
#[derive(serde::Serialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl JSONBodyHTTPRequestType for RegisterRequest {
    type Body = RegisterRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for RegisterRequest {
    type Response = AuthResponse;
    fn endpoint(&self) -> String { String::from("/auth/register") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
