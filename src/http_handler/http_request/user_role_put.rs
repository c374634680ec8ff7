use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::common::Role;
use crate::http_handler::http_response::message::MessageResponse;

/// Admin operation switching an account between the admin and user roles.
#[derive(Debug)]
pub struct UserRoleRequest {
    pub user_id: usize,
    pub role: Role,
}

impl NoBodyHTTPRequestType for UserRoleRequest {}

impl HTTPRequestType for UserRoleRequest {
    type Response = MessageResponse;
    fn endpoint(&self) -> String { format!("/admin/users/{}/role", self.user_id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
    fn query_params(&self) -> Vec<(String, String)> {
        vec![(String::from("role"), String::from(self.role))]
    }
}
