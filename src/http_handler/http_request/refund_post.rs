use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::refund::RefundResponse;

/// Triggers a refund for a cancelled booking's payment.
#[derive(Debug)]
pub struct RefundRequest {
    pub booking_id: usize,
}

impl NoBodyHTTPRequestType for RefundRequest {}

impl HTTPRequestType for RefundRequest {
    type Response = RefundResponse;
    fn endpoint(&self) -> String { format!("/payments/booking/{}/refund", self.booking_id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
