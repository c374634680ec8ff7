use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::message::MessageResponse;

/// Marks a rented car as returned, completing the booking.
#[derive(Debug)]
pub struct BookingReturnRequest {
    pub id: usize,
}

impl NoBodyHTTPRequestType for BookingReturnRequest {}

impl HTTPRequestType for BookingReturnRequest {
    type Response = MessageResponse;
    fn endpoint(&self) -> String { format!("/bookings/{}/return", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
