use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::admin_dashboard::AdminDashboardResponse;

#[derive(Debug)]
pub struct AdminDashboardRequest {}

impl NoBodyHTTPRequestType for AdminDashboardRequest {}

impl HTTPRequestType for AdminDashboardRequest {
    type Response = AdminDashboardResponse;
    fn endpoint(&self) -> String { String::from("/admin/dashboard") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
