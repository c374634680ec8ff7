use crate::http_handler::common::UserProfile;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub struct UserListResponse {
    users: Vec<UserProfile>,
}

impl SerdeJSONBodyHTTPResponseType for UserListResponse {}

impl UserListResponse {
    pub fn users(&self) -> &[UserProfile] { &self.users }
}
