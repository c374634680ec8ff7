use crate::http_handler::common::Booking;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Aggregates shown on the admin landing page.
#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardResponse {
    #[serde(default)]
    total_cars: Option<usize>,
    #[serde(default)]
    total_bookings: Option<usize>,
    #[serde(default)]
    total_users: Option<usize>,
    #[serde(default)]
    total_revenue: Option<f64>,
    #[serde(default)]
    latest_bookings: Vec<Booking>,
}

impl SerdeJSONBodyHTTPResponseType for AdminDashboardResponse {}

impl AdminDashboardResponse {
    pub fn total_cars(&self) -> Option<usize> { self.total_cars }
    pub fn total_bookings(&self) -> Option<usize> { self.total_bookings }
    pub fn total_users(&self) -> Option<usize> { self.total_users }
    pub fn total_revenue(&self) -> Option<f64> { self.total_revenue }
    pub fn latest_bookings(&self) -> &[Booking] { &self.latest_bookings }
}
