use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::common::Car;

/// Writable car fields for the admin create and update operations.
#[derive(serde::Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CarPayload {
    pub brand: String,
    pub model: String,
    pub fuel_type: String,
    pub registration_number: String,
    pub price_per_day: f64,
    pub transmission: String,
    pub color: String,
    pub year: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub air_conditioning: bool,
    pub bluetooth: bool,
    pub gps_navigation: bool,
    pub leather_seats: bool,
    pub sunroof: bool,
    pub backup_camera: bool,
    pub parking_sensors: bool,
    pub keyless_entry: bool,
    pub heated_seats: bool,
    pub apple_car_play: bool,
    pub android_auto: bool,
}

#[derive(Debug)]
pub struct CarCreateRequest {
    pub car: CarPayload,
}

impl JSONBodyHTTPRequestType for CarCreateRequest {
    type Body = CarPayload;
    fn body(&self) -> &Self::Body { &self.car }
}

impl HTTPRequestType for CarCreateRequest {
    type Response = Car;
    fn endpoint(&self) -> String { String::from("/admin/cars") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
