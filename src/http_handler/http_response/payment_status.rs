use crate::http_handler::common::PaymentStatus;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusResponse {
    #[serde(default)]
    booking_id: Option<usize>,
    #[serde(default)]
    status: Option<PaymentStatus>,
    #[serde(default)]
    transaction_id: Option<String>,
    #[serde(default)]
    amount: Option<f64>,
}

impl SerdeJSONBodyHTTPResponseType for PaymentStatusResponse {}

impl PaymentStatusResponse {
    pub fn booking_id(&self) -> Option<usize> { self.booking_id }
    pub fn status(&self) -> Option<PaymentStatus> { self.status }
    pub fn transaction_id(&self) -> Option<&str> { self.transaction_id.as_deref() }
    pub fn amount(&self) -> Option<f64> { self.amount }
}
