use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_response::payment::PaymentConfirmation;

/// Request type for the /payments/upi endpoint.
#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpiPaymentRequest {
    pub booking_id: usize,
    pub amount: f64,
    pub payment_mode: &'static str,
    pub currency: &'static str,
    pub receipt_email: String,
    pub upi_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<usize>,
}

impl UpiPaymentRequest {
    pub const PAYMENT_MODE: &'static str = "UPI";
    pub const CURRENCY: &'static str = "USD";
}

impl JSONBodyHTTPRequestType for UpiPaymentRequest {
    type Body = UpiPaymentRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for UpiPaymentRequest {
    type Response = PaymentConfirmation;
    fn endpoint(&self) -> String { String::from("/payments/upi") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
