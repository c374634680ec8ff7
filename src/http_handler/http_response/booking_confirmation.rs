use crate::http_handler::common::Booking;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Body returned by booking creation. The backend has answered with several
/// shapes over time (a bare id, a nested booking, or both), so every field
/// is optional and `booking_id` coalesces across them.
#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmationResponse {
    #[serde(default)]
    booking_id: Option<usize>,
    #[serde(default)]
    id: Option<usize>,
    #[serde(default)]
    reference_id: Option<String>,
    #[serde(default)]
    booking: Option<Booking>,
    #[serde(default)]
    message: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for BookingConfirmationResponse {}

impl BookingConfirmationResponse {
    /// The created booking's id, whichever field the backend put it in.
    pub fn booking_id(&self) -> Option<usize> {
        self.booking_id.or_else(|| self.booking.as_ref().map(Booking::id)).or(self.id)
    }

    pub fn reference_id(&self) -> Option<&str> {
        self.reference_id
            .as_deref()
            .or_else(|| self.booking.as_ref().and_then(Booking::reference_id))
    }

    pub fn booking(&self) -> Option<&Booking> { self.booking.as_ref() }
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_id_coalesces_across_response_shapes() {
        let nested: BookingConfirmationResponse = serde_json::from_str(
            r#"{"booking": {"id": 7, "startDate": "2026-08-01", "endDate": "2026-08-02", "totalAmount": 80.0}}"#,
        )
        .unwrap();
        assert_eq!(nested.booking_id(), Some(7));

        let flat: BookingConfirmationResponse =
            serde_json::from_str(r#"{"bookingId": 9}"#).unwrap();
        assert_eq!(flat.booking_id(), Some(9));

        let bare: BookingConfirmationResponse = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(bare.booking_id(), Some(3));

        let empty: BookingConfirmationResponse = serde_json::from_str(r"{}").unwrap();
        assert_eq!(empty.booking_id(), None);
    }
}
