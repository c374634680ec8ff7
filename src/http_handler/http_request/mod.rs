pub mod admin_bookings_get;
pub mod admin_dashboard_get;
pub mod admin_payments_get;
pub mod admin_users_get;
pub mod booking_cancel_delete;
pub mod booking_create_post;
pub mod booking_get;
pub mod booking_list_get;
pub mod booking_return_put;
pub mod booking_status_put;
pub mod car_availability_get;
pub mod car_create_post;
pub mod car_delete_delete;
pub mod car_get;
pub mod car_image_post;
pub mod car_list_get;
pub mod car_update_put;
pub mod login_post;
pub mod payment_card_post;
pub mod payment_status_get;
pub mod payment_upi_post;
pub mod profile_get;
pub mod receipt_download_get;
pub mod receipt_get;
pub mod refund_post;
pub mod register_post;
pub mod request_common;
pub mod user_bookings_get;
pub mod user_delete_delete;
pub mod user_role_put;
pub mod user_update_put;
