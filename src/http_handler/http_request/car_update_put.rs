use super::car_create_post::CarPayload;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::common::Car;

#[derive(Debug)]
pub struct CarUpdateRequest {
    pub id: usize,
    pub car: CarPayload,
}

impl JSONBodyHTTPRequestType for CarUpdateRequest {
    type Body = CarPayload;
    fn body(&self) -> &Self::Body { &self.car }
}

impl HTTPRequestType for CarUpdateRequest {
    type Response = Car;
    fn endpoint(&self) -> String { format!("/admin/cars/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
