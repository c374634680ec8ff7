use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::common::BookingStatus;
use crate::http_handler::http_response::message::MessageResponse;

#[derive(serde::Serialize, Debug)]
pub struct StatusBody {
    status: BookingStatus,
}

#[derive(Debug)]
pub struct BookingStatusRequest {
    id: usize,
    body: StatusBody,
}

impl BookingStatusRequest {
    pub fn new(id: usize, status: BookingStatus) -> Self {
        Self { id, body: StatusBody { status } }
    }
}

impl JSONBodyHTTPRequestType for BookingStatusRequest {
    type Body = StatusBody;
    fn body(&self) -> &Self::Body { &self.body }
}

impl HTTPRequestType for BookingStatusRequest {
    type Response = MessageResponse;
    fn endpoint(&self) -> String { format!("/bookings/{}/status", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
