use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::common::Booking;

#[derive(Debug)]
pub struct BookingRequest {
    pub id: usize,
}

impl NoBodyHTTPRequestType for BookingRequest {}

impl HTTPRequestType for BookingRequest {
    type Response = Booking;
    fn endpoint(&self) -> String { format!("/bookings/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
