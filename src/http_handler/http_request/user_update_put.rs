use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::common::UserProfile;

/// Editable account fields.
#[derive(serde::Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug)]
pub struct UserUpdateRequest {
    pub id: usize,
    pub user: UserPayload,
}

impl JSONBodyHTTPRequestType for UserUpdateRequest {
    type Body = UserPayload;
    fn body(&self) -> &Self::Body { &self.user }
}

impl HTTPRequestType for UserUpdateRequest {
    type Response = UserProfile;
    fn endpoint(&self) -> String { format!("/users/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
