use super::super::http_client::HTTPClient;
use super::super::http_response::response_common::{HTTPResponseType, ResponseError};
use strum_macros::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Error raised while assembling a request payload, before anything is sent.
#[derive(Debug, Display)]
pub enum RequestError {
    InvalidPayload(String),
}

impl std::error::Error for RequestError {}

/// Common shape of every API operation: the endpoint path, the HTTP method
/// and the typed response the backend answers with.
///
/// The InstaDrive API addresses resources through path parameters
/// (`/cars/{id}`), so `endpoint` returns an owned `String`; `?key=value`
/// parameters go through `query_params`.
pub trait HTTPRequestType {
    type Response: HTTPResponseType;
    fn endpoint(&self) -> String;
    fn request_method(&self) -> HTTPRequestMethod;
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::default()
    }
    fn query_params(&self) -> Vec<(String, String)> { Vec::new() }
}

/// Builds the `reqwest` request for `req`, attaching headers, query
/// parameters and, when the client holds one, the session bearer token.
async fn base_request<T: HTTPRequestType + ?Sized>(
    client: &HTTPClient,
    req: &T,
) -> reqwest::RequestBuilder {
    let url = format!("{}{}", client.url(), req.endpoint());
    let mut builder = match req.request_method() {
        HTTPRequestMethod::Get => client.client().get(&url),
        HTTPRequestMethod::Post => client.client().post(&url),
        HTTPRequestMethod::Put => client.client().put(&url),
        HTTPRequestMethod::Delete => client.client().delete(&url),
    };
    builder = builder.headers(req.header_params());
    let query = req.query_params();
    if !query.is_empty() {
        builder = builder.query(&query);
    }
    if let Some(token) = client.bearer_token().await {
        builder = builder.bearer_auth(token);
    }
    builder
}

/// Operations that go out without a request body.
pub trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, ResponseError> {
        let response = base_request(client, self).await.send().await?;
        Self::Response::read_response(response).await
    }
}

/// Operations carrying a JSON body.
pub trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, ResponseError> {
        let response = base_request(client, self).await.json(self.body()).send().await?;
        Self::Response::read_response(response).await
    }
}

/// Operations carrying a multipart form body (file uploads).
pub trait MultipartBodyHTTPRequestType: HTTPRequestType {
    fn multipart_body(&self) -> reqwest::multipart::Form;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, ResponseError> {
        let response =
            base_request(client, self).await.multipart(self.multipart_body()).send().await?;
        Self::Response::read_response(response).await
    }
}
