use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::message::MessageResponse;

#[derive(Debug)]
pub struct UserDeleteRequest {
    pub id: usize,
}

impl NoBodyHTTPRequestType for UserDeleteRequest {}

impl HTTPRequestType for UserDeleteRequest {
    type Response = MessageResponse;
    fn endpoint(&self) -> String { format!("/users/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
}
