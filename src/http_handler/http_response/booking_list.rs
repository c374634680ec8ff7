use crate::http_handler::common::Booking;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// The booking listing endpoints answer with a bare JSON array.
#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub struct BookingListResponse {
    bookings: Vec<Booking>,
}

impl SerdeJSONBodyHTTPResponseType for BookingListResponse {}

impl BookingListResponse {
    pub fn bookings(&self) -> &[Booking] { &self.bookings }
    pub fn into_bookings(self) -> Vec<Booking> { self.bookings }
}
