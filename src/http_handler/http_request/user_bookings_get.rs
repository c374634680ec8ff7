use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::booking_list::BookingListResponse;

#[derive(Debug)]
pub struct UserBookingsRequest {
    pub user_id: usize,
}

impl NoBodyHTTPRequestType for UserBookingsRequest {}

impl HTTPRequestType for UserBookingsRequest {
    type Response = BookingListResponse;
    fn endpoint(&self) -> String { format!("/users/{}/bookings", self.user_id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
