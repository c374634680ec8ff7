use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_response::booking_confirmation::BookingConfirmationResponse;
use chrono::{DateTime, Utc};

/// Request type for booking creation: the selected car and date range plus
/// the renter details collected on the booking form.
#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreateRequest {
    pub car_id: usize,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub driver_license: String,
    pub pickup_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

impl JSONBodyHTTPRequestType for BookingCreateRequest {
    type Body = BookingCreateRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for BookingCreateRequest {
    type Response = BookingConfirmationResponse;
    fn endpoint(&self) -> String { String::from("/bookings") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
