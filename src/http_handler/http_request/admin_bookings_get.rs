use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::booking_list::BookingListResponse;

/// Privileged listing of every booking in the system.
#[derive(Debug)]
pub struct AdminBookingsRequest {}

impl NoBodyHTTPRequestType for AdminBookingsRequest {}

impl HTTPRequestType for AdminBookingsRequest {
    type Response = BookingListResponse;
    fn endpoint(&self) -> String { String::from("/admin/bookings") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
