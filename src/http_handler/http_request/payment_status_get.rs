use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::payment_status::PaymentStatusResponse;

#[derive(Debug)]
pub struct PaymentStatusRequest {
    pub booking_id: usize,
}

impl NoBodyHTTPRequestType for PaymentStatusRequest {}

impl HTTPRequestType for PaymentStatusRequest {
    type Response = PaymentStatusResponse;
    fn endpoint(&self) -> String { format!("/payments/booking/{}/status", self.booking_id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
