use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::common::Car;

#[derive(Debug)]
pub struct CarRequest {
    pub id: usize,
}

impl NoBodyHTTPRequestType for CarRequest {}

impl HTTPRequestType for CarRequest {
    type Response = Car;
    fn endpoint(&self) -> String { format!("/cars/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
