use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::availability::AvailabilityResponse;
use chrono::NaiveDate;

/// Asks whether a car is free for the given date range. Gates the
/// proceed-to-booking step on the car page.
#[derive(Debug)]
pub struct CarAvailabilityRequest {
    pub car_id: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NoBodyHTTPRequestType for CarAvailabilityRequest {}

impl HTTPRequestType for CarAvailabilityRequest {
    type Response = AvailabilityResponse;
    fn endpoint(&self) -> String { format!("/cars/{}/availability", self.car_id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(String, String)> {
        vec![
            (String::from("startDate"), self.start_date.format("%Y-%m-%d").to_string()),
            (String::from("endDate"), self.end_date.format("%Y-%m-%d").to_string()),
        ]
    }
}
