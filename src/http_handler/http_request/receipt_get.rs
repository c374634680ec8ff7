use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::common::Receipt;

#[derive(Debug)]
pub struct ReceiptRequest {
    pub id: usize,
}

impl NoBodyHTTPRequestType for ReceiptRequest {}

impl HTTPRequestType for ReceiptRequest {
    type Response = Receipt;
    fn endpoint(&self) -> String { format!("/receipts/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
