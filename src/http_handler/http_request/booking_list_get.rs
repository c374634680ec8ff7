use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::booking_list::BookingListResponse;

#[derive(Debug, Default)]
pub struct BookingListRequest {
    pub car_id: Option<usize>,
    pub status: Option<String>,
}

impl NoBodyHTTPRequestType for BookingListRequest {}

impl HTTPRequestType for BookingListRequest {
    type Response = BookingListResponse;
    fn endpoint(&self) -> String { String::from("/bookings") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(car_id) = self.car_id {
            query.push((String::from("carId"), car_id.to_string()));
        }
        if let Some(status) = &self.status {
            query.push((String::from("status"), status.clone()));
        }
        query
    }
}
