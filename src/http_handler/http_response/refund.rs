use crate::http_handler::common::PaymentStatus;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RefundResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    status: Option<PaymentStatus>,
    #[serde(default)]
    refund_transaction_id: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for RefundResponse {}

impl RefundResponse {
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(false) || self.status == Some(PaymentStatus::Refunded)
    }

    pub fn refund_transaction_id(&self) -> Option<&str> {
        self.refund_transaction_id.as_deref()
    }

    pub fn message(&self) -> Option<&str> { self.message.as_deref() }
}
