use super::http_request::request_common::RequestError;
use super::http_response::response_common::{ResponseError, SerdeJSONBodyHTTPResponseType};
use chrono::{NaiveDate, NaiveDateTime};
use strum_macros::Display;

/// Role attached to an authenticated account. Anything the backend sends
/// that is not recognized as an admin role is treated as a standard user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    User,
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "admin" | "role_admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self { Role::from(value.as_str()) }
}

impl From<Role> for &'static str {
    fn from(value: Role) -> Self {
        match value {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self { String::from(<&'static str>::from(value)) }
}

/// Booking lifecycle states the client is allowed to request transitions to.
/// The `status` field on a [`Booking`] stays a plain string since the server
/// owns that vocabulary.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
    Expired,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Pending,
    Success,
    Failed,
    Refunded,
    Cancelled,
}

/// A vehicle as the fleet endpoints return it. All pricing and availability
/// authority stays server-side; this is a display snapshot.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    id: usize,
    brand: String,
    model: String,
    #[serde(default)]
    fuel_type: Option<String>,
    #[serde(default)]
    registration_number: Option<String>,
    price_per_day: f64,
    #[serde(default)]
    transmission: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    year: Option<u16>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    air_conditioning: bool,
    #[serde(default)]
    bluetooth: bool,
    #[serde(default)]
    gps_navigation: bool,
    #[serde(default)]
    leather_seats: bool,
    #[serde(default)]
    sunroof: bool,
    #[serde(default)]
    backup_camera: bool,
    #[serde(default)]
    parking_sensors: bool,
    #[serde(default)]
    keyless_entry: bool,
    #[serde(default)]
    heated_seats: bool,
    #[serde(default)]
    apple_car_play: bool,
    #[serde(default)]
    android_auto: bool,
}

impl SerdeJSONBodyHTTPResponseType for Car {}

impl Car {
    pub fn id(&self) -> usize { self.id }
    pub fn brand(&self) -> &str { &self.brand }
    pub fn model(&self) -> &str { &self.model }
    pub fn price_per_day(&self) -> f64 { self.price_per_day }
    pub fn fuel_type(&self) -> Option<&str> { self.fuel_type.as_deref() }
    pub fn registration_number(&self) -> Option<&str> { self.registration_number.as_deref() }
    pub fn transmission(&self) -> Option<&str> { self.transmission.as_deref() }
    pub fn year(&self) -> Option<u16> { self.year }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn image_url(&self) -> Option<&str> { self.image_url.as_deref() }

    /// Display name in the "brand model" form the listing pages use.
    pub fn display_name(&self) -> String { format!("{} {}", self.brand, self.model) }

    /// Labels of the equipment flags that are set.
    pub fn feature_labels(&self) -> Vec<&'static str> {
        let flags = [
            (self.air_conditioning, "Air Conditioning"),
            (self.bluetooth, "Bluetooth"),
            (self.gps_navigation, "GPS Navigation"),
            (self.leather_seats, "Leather Seats"),
            (self.sunroof, "Sunroof"),
            (self.backup_camera, "Backup Camera"),
            (self.parking_sensors, "Parking Sensors"),
            (self.keyless_entry, "Keyless Entry"),
            (self.heated_seats, "Heated Seats"),
            (self.apple_car_play, "Apple CarPlay"),
            (self.android_auto, "Android Auto"),
        ];
        flags.iter().filter(|(set, _)| *set).map(|(_, label)| *label).collect()
    }

    #[cfg(test)]
    pub(crate) fn test(id: usize, brand: &str, model: &str, price_per_day: f64) -> Self {
        Self {
            id,
            brand: String::from(brand),
            model: String::from(model),
            fuel_type: None,
            registration_number: None,
            price_per_day,
            transmission: None,
            color: None,
            year: None,
            description: None,
            image_url: None,
            air_conditioning: false,
            bluetooth: false,
            gps_navigation: false,
            leather_seats: false,
            sunroof: false,
            backup_camera: false,
            parking_sensors: false,
            keyless_entry: false,
            heated_seats: false,
            apple_car_play: false,
            android_auto: false,
        }
    }
}

/// A booking row as the booking endpoints return it, denormalized with the
/// owning user and the booked car.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    id: usize,
    #[serde(default)]
    reference_id: Option<String>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    total_amount: f64,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    user_id: Option<usize>,
    #[serde(default)]
    user_name: Option<String>,
    #[serde(default)]
    user_email: Option<String>,
    #[serde(default)]
    car_id: Option<usize>,
    #[serde(default)]
    car_brand: Option<String>,
    #[serde(default)]
    car_model: Option<String>,
    #[serde(default)]
    car_registration_number: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for Booking {}

impl Booking {
    pub fn id(&self) -> usize { self.id }
    pub fn reference_id(&self) -> Option<&str> { self.reference_id.as_deref() }
    pub fn start_date(&self) -> NaiveDate { self.start_date }
    pub fn end_date(&self) -> NaiveDate { self.end_date }
    pub fn total_amount(&self) -> f64 { self.total_amount }
    pub fn status(&self) -> Option<&str> { self.status.as_deref() }
    pub fn is_active(&self) -> bool { self.active }
    pub fn user_id(&self) -> Option<usize> { self.user_id }
    pub fn car_id(&self) -> Option<usize> { self.car_id }
    pub fn car_brand(&self) -> Option<&str> { self.car_brand.as_deref() }
    pub fn car_model(&self) -> Option<&str> { self.car_model.as_deref() }

    pub fn ends_on_or_after(&self, date: NaiveDate) -> bool { self.end_date >= date }
}

/// Profile of the authenticated account as `/users/profile` returns it.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    id: Option<usize>,
    name: String,
    email: String,
    #[serde(default)]
    phone: Option<String>,
    role: Role,
}

impl SerdeJSONBodyHTTPResponseType for UserProfile {}

impl UserProfile {
    pub fn id(&self) -> Option<usize> { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn email(&self) -> &str { &self.email }
    pub fn phone(&self) -> Option<&str> { self.phone.as_deref() }
    pub fn role(&self) -> Role { self.role }
    pub fn is_admin(&self) -> bool { self.role == Role::Admin }
}

/// A stored payment record, surfaced by the admin payment endpoints.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    id: usize,
    #[serde(default)]
    payment_mode: Option<String>,
    #[serde(default)]
    status: Option<PaymentStatus>,
    amount: f64,
    #[serde(default)]
    transaction_id: Option<String>,
    #[serde(default)]
    timestamp: Option<NaiveDateTime>,
    #[serde(default)]
    booking_id: Option<usize>,
    #[serde(default)]
    user_id: Option<usize>,
}

impl SerdeJSONBodyHTTPResponseType for PaymentRecord {}

impl PaymentRecord {
    pub fn id(&self) -> usize { self.id }
    pub fn payment_mode(&self) -> Option<&str> { self.payment_mode.as_deref() }
    pub fn status(&self) -> Option<PaymentStatus> { self.status }
    pub fn amount(&self) -> f64 { self.amount }
    pub fn transaction_id(&self) -> Option<&str> { self.transaction_id.as_deref() }
    pub fn booking_id(&self) -> Option<usize> { self.booking_id }
}

/// A receipt row, denormalized with user and car details for rendering.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    id: usize,
    #[serde(default)]
    booking_id: Option<usize>,
    #[serde(default)]
    user_id: Option<usize>,
    #[serde(default)]
    car_id: Option<usize>,
    #[serde(default)]
    transaction_id: Option<String>,
    #[serde(default)]
    transaction_date: Option<NaiveDateTime>,
    amount: f64,
    #[serde(default)]
    payment_method: Option<String>,
    #[serde(default)]
    receipt_path: Option<String>,
    #[serde(default)]
    user_name: Option<String>,
    #[serde(default)]
    user_email: Option<String>,
    #[serde(default)]
    car_brand: Option<String>,
    #[serde(default)]
    car_model: Option<String>,
    #[serde(default)]
    car_registration_number: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for Receipt {}

impl Receipt {
    pub fn id(&self) -> usize { self.id }
    pub fn booking_id(&self) -> Option<usize> { self.booking_id }
    pub fn transaction_id(&self) -> Option<&str> { self.transaction_id.as_deref() }
    pub fn amount(&self) -> f64 { self.amount }
    pub fn payment_method(&self) -> Option<&str> { self.payment_method.as_deref() }
}

#[derive(Debug, Display)]
pub enum HTTPError {
    HTTPRequestError(RequestError),
    HTTPResponseError(ResponseError),
}

impl HTTPError {
    /// The message to surface to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            HTTPError::HTTPRequestError(e) => match e {
                RequestError::InvalidPayload(msg) => msg.clone(),
            },
            HTTPError::HTTPResponseError(e) => e.user_message(),
        }
    }
}

impl std::error::Error for HTTPError {}

impl From<RequestError> for HTTPError {
    fn from(value: RequestError) -> Self { HTTPError::HTTPRequestError(value) }
}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self { HTTPError::HTTPResponseError(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parsing_defaults_to_user() {
        assert_eq!(Role::from("ADMIN"), Role::Admin);
        assert_eq!(Role::from("admin"), Role::Admin);
        assert_eq!(Role::from("USER"), Role::User);
        assert_eq!(Role::from("anything-else"), Role::User);
    }

    #[test]
    fn car_feature_labels_only_list_set_flags() {
        let json = r#"{
            "id": 4,
            "brand": "Toyota",
            "model": "Corolla",
            "pricePerDay": 55.0,
            "bluetooth": true,
            "backupCamera": true
        }"#;
        let car: Car = serde_json::from_str(json).unwrap();
        assert_eq!(car.feature_labels(), vec!["Bluetooth", "Backup Camera"]);
        assert_eq!(car.display_name(), "Toyota Corolla");
    }

    #[test]
    fn booking_deserializes_with_sparse_fields() {
        let json = r#"{
            "id": 12,
            "startDate": "2026-08-01",
            "endDate": "2026-08-04",
            "totalAmount": 165.0,
            "status": "CONFIRMED",
            "carId": 4
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.id(), 12);
        assert_eq!(booking.car_id(), Some(4));
        assert_eq!(booking.status(), Some("CONFIRMED"));
        assert!(booking.ends_on_or_after(NaiveDate::from_ymd_opt(2026, 8, 4).unwrap()));
        assert!(!booking.ends_on_or_after(NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()));
    }
}
