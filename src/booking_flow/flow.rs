use super::draft::BookingDraft;
use super::payment::PaymentMethod;
use super::routes::Route;
use crate::http_handler::common::{Car, HTTPError};
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::{
    booking_create_post::BookingCreateRequest,
    booking_get::BookingRequest,
    car_availability_get::CarAvailabilityRequest,
    car_get::CarRequest,
    payment_card_post::CardPaymentRequest,
    payment_upi_post::UpiPaymentRequest,
    request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType, RequestError},
};
use crate::http_handler::http_response::response_common::ResponseError;
use crate::persist::fallback_store::{FallbackBooking, FallbackStore};
use chrono::{DateTime, Utc};
use rand::Rng;

/// Why a flow step could not continue: either the user has to be sent
/// somewhere else (entering a step without its prerequisites, or losing the
/// underlying resource), the gateway declined the payment, or a request
/// failed outright.
#[derive(Debug)]
pub enum FlowInterrupt {
    Redirect { target: Route, notice: String },
    PaymentDeclined(String),
    Failed(HTTPError),
}

impl FlowInterrupt {
    pub fn user_message(&self) -> String {
        match self {
            FlowInterrupt::Redirect { notice, .. } => notice.clone(),
            FlowInterrupt::PaymentDeclined(message) => message.clone(),
            FlowInterrupt::Failed(e) => e.user_message(),
        }
    }
}

impl From<ResponseError> for FlowInterrupt {
    fn from(value: ResponseError) -> Self { FlowInterrupt::Failed(value.into()) }
}

/// Renter details collected on the booking form.
#[derive(Debug, Clone)]
pub struct RenterDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub driver_license: String,
    pub pickup_location: String,
    pub special_requests: Option<String>,
}

/// First hop of the booking chain: the car page. Loads the car, previews
/// prices for a date range and gates the handover to the booking form on a
/// successful availability check.
#[derive(Debug)]
pub struct CarPage {
    car: Car,
}

impl CarPage {
    /// Loads the car. When it cannot be fetched the user is sent back to
    /// the dashboard instead of being shown fabricated data.
    pub async fn load(client: &HTTPClient, car_id: usize) -> Result<Self, FlowInterrupt> {
        match (CarRequest { id: car_id }).send_request(client).await {
            Ok(car) => Ok(Self { car }),
            Err(e) => {
                crate::warn!("Car {car_id} could not be loaded: {}", e.user_message());
                Err(FlowInterrupt::Redirect {
                    target: Route::UserDashboard,
                    notice: String::from("Car information is currently unavailable."),
                })
            }
        }
    }

    pub fn car(&self) -> &Car { &self.car }

    /// Price preview for a date range, without any availability gate.
    pub fn quote(&self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> BookingDraft {
        BookingDraft::new(self.car.clone(), start_date, end_date)
    }

    /// Availability gate for the proceed-to-booking step. `Ok(None)` means
    /// the car is taken for the range; the user picks other dates.
    pub async fn check_availability(
        &self,
        client: &HTTPClient,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Option<BookingDraft>, FlowInterrupt> {
        let availability = CarAvailabilityRequest {
            car_id: self.car.id(),
            start_date: start_date.date_naive(),
            end_date: end_date.date_naive(),
        }
        .send_request(client)
        .await?;
        if availability.is_available() {
            Ok(Some(self.quote(start_date, end_date)))
        } else {
            crate::event!("Car {} unavailable for the selected range", self.car.id());
            Ok(None)
        }
    }
}

/// Second hop: the booking form. Exists only with a draft from the car
/// page; entering without one redirects back there.
#[derive(Debug)]
pub struct BookingForm {
    draft: BookingDraft,
}

impl BookingForm {
    /// Entry guard. Fails closed: no draft, no form.
    pub fn enter(draft: Option<BookingDraft>, car_id: usize) -> Result<Self, FlowInterrupt> {
        match draft {
            Some(draft) => Ok(Self { draft }),
            None => Err(FlowInterrupt::Redirect {
                target: Route::CarDetails(car_id),
                notice: String::from("Please select your rental dates first."),
            }),
        }
    }

    pub fn draft(&self) -> &BookingDraft { &self.draft }

    /// Creates the booking and forwards the draft to the payment step
    /// together with the created booking's identifiers.
    pub async fn submit(
        self,
        client: &HTTPClient,
        renter: RenterDetails,
    ) -> Result<PaymentPage, FlowInterrupt> {
        let confirmation = BookingCreateRequest {
            car_id: self.draft.car().id(),
            start_date: self.draft.start_date(),
            end_date: self.draft.end_date(),
            name: renter.name,
            email: renter.email,
            phone: renter.phone,
            driver_license: renter.driver_license,
            pickup_location: renter.pickup_location,
            special_requests: renter.special_requests,
        }
        .send_request(client)
        .await?;

        let Some(booking_id) = confirmation.booking_id() else {
            return Err(FlowInterrupt::Failed(HTTPError::HTTPRequestError(
                RequestError::InvalidPayload(String::from("No booking ID received from server")),
            )));
        };
        crate::info!("Booking {booking_id} created, forwarding to payment");

        let amount = self.draft.total_price();
        let reference_id = confirmation.reference_id().map(String::from);
        let (start_date, end_date) = (self.draft.start_date(), self.draft.end_date());
        Ok(PaymentPage {
            booking_id,
            reference_id,
            car: self.draft.into_car(),
            start_date,
            end_date,
            amount,
        })
    }
}

/// Third hop: the payment step. Normally carries the snapshot forwarded by
/// the booking form; `restore` backfills it from the server when the step
/// is entered with nothing but a booking id.
#[derive(Debug)]
pub struct PaymentPage {
    booking_id: usize,
    reference_id: Option<String>,
    car: Car,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    amount: f64,
}

impl PaymentPage {
    /// Backfill path: re-fetch booking and car by id. The server's total
    /// replaces the client-side preview. Any miss sends the user back to
    /// the dashboard.
    pub async fn restore(client: &HTTPClient, booking_id: usize) -> Result<Self, FlowInterrupt> {
        let dashboard = |notice: &str| FlowInterrupt::Redirect {
            target: Route::UserDashboard,
            notice: String::from(notice),
        };
        let booking = (BookingRequest { id: booking_id })
            .send_request(client)
            .await
            .map_err(|e| {
                crate::warn!("Booking {booking_id} could not be loaded: {}", e.user_message());
                dashboard("Failed to load booking information.")
            })?;
        let Some(car_id) = booking.car_id() else {
            return Err(dashboard("Failed to load booking information."));
        };
        let car = (CarRequest { id: car_id }).send_request(client).await.map_err(|e| {
            crate::warn!("Car {car_id} could not be loaded: {}", e.user_message());
            dashboard("Failed to load booking information.")
        })?;
        let start_date = booking
            .start_date()
            .and_hms_opt(0, 0, 0)
            .map_or_else(Utc::now, |dt| dt.and_utc());
        let end_date = booking
            .end_date()
            .and_hms_opt(0, 0, 0)
            .map_or_else(Utc::now, |dt| dt.and_utc());
        Ok(Self {
            booking_id,
            reference_id: booking.reference_id().map(String::from),
            car,
            start_date,
            end_date,
            amount: booking.total_amount(),
        })
    }

    pub fn booking_id(&self) -> usize { self.booking_id }
    pub fn car(&self) -> &Car { &self.car }
    pub fn amount(&self) -> f64 { self.amount }

    /// Submits the payment and finishes the chain. Consumes the page: after
    /// this the booking-session data is gone, whether the payment settled
    /// or not. A settled payment is recorded in the local fallback list and
    /// yields the confirmation-page payload; anything else surfaces as an
    /// error.
    pub async fn pay(
        self,
        client: &HTTPClient,
        fallback: &FallbackStore,
        method: PaymentMethod,
        receipt_email: &str,
    ) -> Result<BookingReceipt, FlowInterrupt> {
        let confirmation = match &method {
            PaymentMethod::Card(card) => {
                CardPaymentRequest {
                    booking_id: self.booking_id,
                    amount: self.amount,
                    payment_mode: CardPaymentRequest::PAYMENT_MODE,
                    currency: CardPaymentRequest::CURRENCY,
                    receipt_email: String::from(receipt_email),
                    card_number: String::from(card.card_number()),
                    card_expiry: String::from(card.expiry()),
                    card_cvc: String::from(card.cvc()),
                    user_id: None,
                }
                .send_request(client)
                .await?
            }
            PaymentMethod::Upi(upi) => {
                UpiPaymentRequest {
                    booking_id: self.booking_id,
                    amount: self.amount,
                    payment_mode: UpiPaymentRequest::PAYMENT_MODE,
                    currency: UpiPaymentRequest::CURRENCY,
                    receipt_email: String::from(receipt_email),
                    upi_id: String::from(upi.upi_id()),
                    user_id: None,
                }
                .send_request(client)
                .await?
            }
        };

        if !confirmation.is_success() {
            let message = confirmation
                .message()
                .map_or_else(|| String::from("Payment failed. Please try again."), String::from);
            return Err(FlowInterrupt::PaymentDeclined(message));
        }

        let transaction_id = confirmation
            .transaction_id()
            .map_or_else(fallback_transaction_id, String::from);
        let payment_date = confirmation.payment_date().unwrap_or_else(Utc::now);
        let reference =
            self.reference_id.clone().unwrap_or_else(|| self.booking_id.to_string());

        let record = FallbackBooking::new(
            self.booking_id.to_string(),
            self.reference_id,
            self.car,
            (self.start_date, self.end_date),
            self.amount,
            String::from(method.label()),
            transaction_id.clone(),
            payment_date,
        );
        if let Err(e) = fallback.append(record).await {
            crate::warn!("Could not cache the confirmed booking locally: {e}");
        }

        crate::info!("Payment for booking {} settled via {}", self.booking_id, method.label());
        Ok(BookingReceipt {
            booking_id: self.booking_id,
            reference,
            transaction_id,
            payment_date,
            amount: self.amount,
            payment_method: method.label(),
        })
    }
}

/// Transaction reference used when the gateway's confirmation carries none.
fn fallback_transaction_id() -> String {
    format!("TXN{:06}", rand::rng().random_range(0..1_000_000))
}

/// Payload of the confirmation page: everything it renders, handed over by
/// the payment step.
#[derive(Debug, Clone)]
pub struct BookingReceipt {
    booking_id: usize,
    reference: String,
    transaction_id: String,
    payment_date: DateTime<Utc>,
    amount: f64,
    payment_method: &'static str,
}

impl BookingReceipt {
    pub fn booking_id(&self) -> usize { self.booking_id }
    pub fn reference(&self) -> &str { &self.reference }
    pub fn transaction_id(&self) -> &str { &self.transaction_id }
    pub fn payment_date(&self) -> DateTime<Utc> { self.payment_date }
    pub fn amount(&self) -> f64 { self.amount }
    pub fn payment_method(&self) -> &'static str { self.payment_method }

    pub fn success_route(&self) -> Route { Route::BookingSuccess(self.reference.clone()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn sample_draft() -> BookingDraft {
        let start = Utc::now();
        BookingDraft::new(Car::test(4, "Toyota", "Corolla", 100.0), start, start + TimeDelta::days(3))
    }

    #[test]
    fn booking_form_redirects_without_a_draft() {
        let result = BookingForm::enter(None, 4);
        match result {
            Err(FlowInterrupt::Redirect { target, .. }) => {
                assert_eq!(target, Route::CarDetails(4));
                assert_eq!(target.path(), "/user/cars/4");
            }
            _ => panic!("expected a redirect back to the car page"),
        }
    }

    #[test]
    fn booking_form_opens_with_a_draft() {
        let form = BookingForm::enter(Some(sample_draft()), 4).unwrap();
        assert_eq!(form.draft().car().id(), 4);
        assert_eq!(form.draft().chargeable_days(), 3);
    }

    #[test]
    fn fallback_transaction_ids_have_the_txn_shape() {
        let id = fallback_transaction_id();
        assert!(id.starts_with("TXN"));
        assert_eq!(id.len(), 9);
        assert!(id[3..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn receipt_routes_to_the_success_page() {
        let receipt = BookingReceipt {
            booking_id: 12,
            reference: String::from("REF-12"),
            transaction_id: String::from("TXN000123"),
            payment_date: Utc::now(),
            amount: 300.0,
            payment_method: "CARD",
        };
        assert_eq!(receipt.success_route().path(), "/user/booking-success/REF-12");
    }
}
