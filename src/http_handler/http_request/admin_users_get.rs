use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::user_list::UserListResponse;

/// Privileged listing of every registered account.
#[derive(Debug)]
pub struct AdminUsersRequest {}

impl NoBodyHTTPRequestType for AdminUsersRequest {}

impl HTTPRequestType for AdminUsersRequest {
    type Response = UserListResponse;
    fn endpoint(&self) -> String { String::from("/admin/users") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
