use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_response::payment::PaymentConfirmation;

/// Request type for the /payments/card endpoint.
#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CardPaymentRequest {
    pub booking_id: usize,
    pub amount: f64,
    /// Fixed payment mode discriminator the gateway expects.
    pub payment_mode: &'static str,
    pub currency: &'static str,
    pub receipt_email: String,
    pub card_number: String,
    pub card_expiry: String,
    pub card_cvc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<usize>,
}

impl CardPaymentRequest {
    pub const PAYMENT_MODE: &'static str = "CREDIT_CARD";
    pub const CURRENCY: &'static str = "USD";
}

impl JSONBodyHTTPRequestType for CardPaymentRequest {
    type Body = CardPaymentRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for CardPaymentRequest {
    type Response = PaymentConfirmation;
    fn endpoint(&self) -> String { String::from("/payments/card") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
