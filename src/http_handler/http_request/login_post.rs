use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_response::auth::AuthResponse;

/// Request type for the /auth/login endpoint.
#[derive(serde::Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl JSONBodyHTTPRequestType for LoginRequest {
    type Body = LoginRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for LoginRequest {
    type Response = AuthResponse;
    fn endpoint(&self) -> String { String::from("/auth/login") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
