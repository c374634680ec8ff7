use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::receipt_download::ReceiptDownloadResponse;

/// Downloads the rendered receipt document as a byte stream.
#[derive(Debug)]
pub struct ReceiptDownloadRequest {
    pub id: usize,
}

impl NoBodyHTTPRequestType for ReceiptDownloadRequest {}

impl HTTPRequestType for ReceiptDownloadRequest {
    type Response = ReceiptDownloadResponse;
    fn endpoint(&self) -> String { format!("/receipts/download/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
