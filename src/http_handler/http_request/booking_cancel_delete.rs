use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::message::MessageResponse;

#[derive(Debug)]
pub struct BookingCancelRequest {
    pub id: usize,
}

impl NoBodyHTTPRequestType for BookingCancelRequest {}

impl HTTPRequestType for BookingCancelRequest {
    type Response = MessageResponse;
    fn endpoint(&self) -> String { format!("/bookings/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
}
