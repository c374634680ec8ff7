use crate::http_handler::common::PaymentRecord;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub struct PaymentListResponse {
    payments: Vec<PaymentRecord>,
}

impl SerdeJSONBodyHTTPResponseType for PaymentListResponse {}

impl PaymentListResponse {
    pub fn payments(&self) -> &[PaymentRecord] { &self.payments }
}
