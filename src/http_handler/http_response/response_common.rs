use strum_macros::Display;

pub trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

/// Marker trait for response types that deserialize 1:1 from the JSON body.
pub trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}

pub trait ByteStreamResponseType: HTTPResponseType {}

pub trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(match status {
            reqwest::StatusCode::BAD_REQUEST => {
                ResponseError::BadRequest(response.json().await.unwrap_or_default())
            }
            reqwest::StatusCode::UNAUTHORIZED => ResponseError::Unauthorized,
            reqwest::StatusCode::FORBIDDEN => ResponseError::Forbidden,
            reqwest::StatusCode::NOT_FOUND => ResponseError::NotFound,
            s if s.is_server_error() => ResponseError::InternalServer,
            _ => ResponseError::Unknown,
        })
    }
}

/// Error body the backend attaches to 400 responses. Both fields are
/// optional since not every handler fills them.
#[derive(Debug, Default, serde::Deserialize)]
pub struct BadRequestReturn {
    message: Option<String>,
    error: Option<String>,
}

impl BadRequestReturn {
    pub fn detail(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    NoConnection,
    BadRequest(BadRequestReturn),
    Unauthorized,
    Forbidden,
    NotFound,
    InternalServer,
    Unknown,
}

impl ResponseError {
    /// Stable message suitable for surfacing to the user verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ResponseError::NoConnection => {
                String::from("Network error. Please check your internet connection.")
            }
            ResponseError::BadRequest(body) => body
                .detail()
                .map_or_else(
                    || String::from("Invalid request. Please check your input."),
                    String::from,
                ),
            ResponseError::Unauthorized => {
                String::from("You are not authorized to perform this action.")
            }
            ResponseError::Forbidden => {
                String::from("Access denied. You do not have permission.")
            }
            ResponseError::NotFound => String::from("The requested resource was not found."),
            ResponseError::InternalServer => String::from("Server error. Please try again later."),
            ResponseError::Unknown => {
                String::from("An unexpected error occurred. Please try again.")
            }
        }
    }

    /// `true` for the 401 category, which callers may treat as a stale session.
    pub fn is_unauthorized(&self) -> bool { matches!(self, ResponseError::Unauthorized) }
}

impl std::error::Error for ResponseError {}
impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_connect() || value.is_timeout() {
            ResponseError::NoConnection
        } else if value.is_request() {
            ResponseError::BadRequest(BadRequestReturn::default())
        } else {
            ResponseError::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_detail_prefers_message() {
        let body = BadRequestReturn {
            message: Some(String::from("Car not found.")),
            error: Some(String::from("NOT_FOUND")),
        };
        assert_eq!(body.detail(), Some("Car not found."));
        let error_only = BadRequestReturn {
            message: None,
            error: Some(String::from("NOT_FOUND")),
        };
        assert_eq!(error_only.detail(), Some("NOT_FOUND"));
    }

    #[test]
    fn user_messages_are_stable() {
        assert_eq!(
            ResponseError::NoConnection.user_message(),
            "Network error. Please check your internet connection."
        );
        assert_eq!(
            ResponseError::BadRequest(BadRequestReturn::default()).user_message(),
            "Invalid request. Please check your input."
        );
        assert!(ResponseError::Unauthorized.is_unauthorized());
        assert!(!ResponseError::NotFound.is_unauthorized());
    }
}
