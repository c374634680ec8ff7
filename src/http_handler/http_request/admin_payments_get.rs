use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::payment_list::PaymentListResponse;

/// Privileged listing of stored payment records, optionally narrowed to one
/// booking or user.
#[derive(Debug, Default)]
pub struct AdminPaymentsRequest {
    pub booking_id: Option<usize>,
    pub user_id: Option<usize>,
}

impl NoBodyHTTPRequestType for AdminPaymentsRequest {}

impl HTTPRequestType for AdminPaymentsRequest {
    type Response = PaymentListResponse;
    fn endpoint(&self) -> String {
        match (self.booking_id, self.user_id) {
            (Some(booking_id), _) => format!("/admin/payments/booking/{booking_id}"),
            (None, Some(user_id)) => format!("/admin/payments/user/{user_id}"),
            (None, None) => String::from("/admin/payments"),
        }
    }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_narrows_by_booking_before_user() {
        assert_eq!(AdminPaymentsRequest::default().endpoint(), "/admin/payments");
        let by_booking = AdminPaymentsRequest { booking_id: Some(12), user_id: None };
        assert_eq!(by_booking.endpoint(), "/admin/payments/booking/12");
        let by_user = AdminPaymentsRequest { booking_id: None, user_id: Some(7) };
        assert_eq!(by_user.endpoint(), "/admin/payments/user/7");
    }
}
