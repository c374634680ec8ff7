use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::message::MessageResponse;

#[derive(Debug)]
pub struct CarDeleteRequest {
    pub id: usize,
}

impl NoBodyHTTPRequestType for CarDeleteRequest {}

impl HTTPRequestType for CarDeleteRequest {
    type Response = MessageResponse;
    fn endpoint(&self) -> String { format!("/admin/cars/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
}
