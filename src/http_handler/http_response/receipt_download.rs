use crate::http_handler::http_response::response_common::{
    ByteStreamResponseType, HTTPResponseType, ResponseError,
};

/// Receipt PDFs come back as a raw byte stream rather than JSON.
pub struct ReceiptDownloadResponse {}

impl ByteStreamResponseType for ReceiptDownloadResponse {}

impl HTTPResponseType for ReceiptDownloadResponse {
    type ParsedResponseType =
        std::pin::Pin<Box<dyn futures::Stream<Item = reqwest::Result<bytes::Bytes>> + Send>>;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let response = Self::unwrap_return_code(response).await?;
        Ok(Box::pin(response.bytes_stream()))
    }
}
