use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::common::UserProfile;

/// Fetches the profile of the account the bearer token belongs to.
#[derive(Debug)]
pub struct ProfileRequest {}

impl NoBodyHTTPRequestType for ProfileRequest {}

impl HTTPRequestType for ProfileRequest {
    type Response = UserProfile;
    fn endpoint(&self) -> String { String::from("/users/profile") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
