pub mod admin_dashboard;
pub mod auth;
pub mod availability;
pub mod booking_confirmation;
pub mod booking_list;
pub mod car_image;
pub mod car_list;
pub mod message;
pub mod payment;
pub mod payment_list;
pub mod payment_status;
pub mod receipt_download;
pub mod refund;
pub mod response_common;
pub mod user_list;
