use crate::http_handler::common::PaymentStatus;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;
use chrono::{DateTime, Utc};

/// Body returned by the card and UPI payment endpoints.
#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    status: Option<PaymentStatus>,
    #[serde(default)]
    transaction_id: Option<String>,
    #[serde(default)]
    payment_date: Option<DateTime<Utc>>,
    #[serde(default)]
    amount: Option<f64>,
    #[serde(default)]
    message: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for PaymentConfirmation {}

impl PaymentConfirmation {
    /// Whether the gateway reported the payment as settled.
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(false) || self.status == Some(PaymentStatus::Success)
    }

    pub fn status(&self) -> Option<PaymentStatus> { self.status }
    pub fn transaction_id(&self) -> Option<&str> { self.transaction_id.as_deref() }
    pub fn payment_date(&self) -> Option<DateTime<Utc>> { self.payment_date }
    pub fn amount(&self) -> Option<f64> { self.amount }
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_read_from_either_field() {
        let by_flag: PaymentConfirmation =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(by_flag.is_success());

        let by_status: PaymentConfirmation =
            serde_json::from_str(r#"{"status": "SUCCESS", "transactionId": "TXN000123"}"#).unwrap();
        assert!(by_status.is_success());
        assert_eq!(by_status.transaction_id(), Some("TXN000123"));

        let failed: PaymentConfirmation =
            serde_json::from_str(r#"{"status": "FAILED"}"#).unwrap();
        assert!(!failed.is_success());
    }
}
