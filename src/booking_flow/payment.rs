use regex::Regex;
use std::sync::LazyLock;
use strum_macros::Display;

static CARD_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{13,19}$").unwrap());
static CARD_EXPIRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").unwrap());
static CARD_CVC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3,4}$").unwrap());
static UPI_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]{2,}@[A-Za-z]{2,}$").unwrap());

#[derive(Debug, Display, PartialEq, Eq)]
pub enum PaymentValidationError {
    InvalidCardNumber,
    InvalidCardExpiry,
    InvalidCardCvc,
    InvalidUpiId,
}

impl std::error::Error for PaymentValidationError {}

impl PaymentValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            PaymentValidationError::InvalidCardNumber => "Please enter a valid card number.",
            PaymentValidationError::InvalidCardExpiry => {
                "Please enter the expiry date as MM/YY."
            }
            PaymentValidationError::InvalidCardCvc => "Please enter a valid security code.",
            PaymentValidationError::InvalidUpiId => {
                "Please enter a valid UPI ID (e.g. name@bank)."
            }
        }
    }
}

/// Validated card details. Spaces in the number are stripped before the
/// format check, matching how the payment form normalizes input.
#[derive(Debug, Clone)]
pub struct CardDetails {
    card_name: String,
    card_number: String,
    expiry: String,
    cvc: String,
}

impl CardDetails {
    pub fn new(
        card_name: &str,
        card_number: &str,
        expiry: &str,
        cvc: &str,
    ) -> Result<Self, PaymentValidationError> {
        let number: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();
        if !CARD_NUMBER.is_match(&number) {
            return Err(PaymentValidationError::InvalidCardNumber);
        }
        if !CARD_EXPIRY.is_match(expiry) {
            return Err(PaymentValidationError::InvalidCardExpiry);
        }
        if !CARD_CVC.is_match(cvc) {
            return Err(PaymentValidationError::InvalidCardCvc);
        }
        Ok(Self {
            card_name: String::from(card_name),
            card_number: number,
            expiry: String::from(expiry),
            cvc: String::from(cvc),
        })
    }

    pub fn card_name(&self) -> &str { &self.card_name }
    pub fn card_number(&self) -> &str { &self.card_number }
    pub fn expiry(&self) -> &str { &self.expiry }
    pub fn cvc(&self) -> &str { &self.cvc }
}

/// Validated UPI details.
#[derive(Debug, Clone)]
pub struct UpiDetails {
    upi_id: String,
}

impl UpiDetails {
    pub fn new(upi_id: &str) -> Result<Self, PaymentValidationError> {
        if !UPI_ID.is_match(upi_id) {
            return Err(PaymentValidationError::InvalidUpiId);
        }
        Ok(Self { upi_id: String::from(upi_id) })
    }

    pub fn upi_id(&self) -> &str { &self.upi_id }
}

/// The payment instrument the user picked on the payment step. Construction
/// goes through the validated detail types, so a malformed instrument never
/// reaches the wire.
#[derive(Debug, Clone)]
pub enum PaymentMethod {
    Card(CardDetails),
    Upi(UpiDetails),
}

impl PaymentMethod {
    /// Label stored alongside fallback records and shown on receipts.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card(_) => "CARD",
            PaymentMethod::Upi(_) => "UPI",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_numbers_accept_spaced_input() {
        let card = CardDetails::new("J Doe", "4242 4242 4242 4242", "08/27", "123").unwrap();
        assert_eq!(card.card_number(), "4242424242424242");
    }

    #[test]
    fn malformed_card_details_are_rejected() {
        assert_eq!(
            CardDetails::new("J Doe", "4242", "08/27", "123").unwrap_err(),
            PaymentValidationError::InvalidCardNumber
        );
        assert_eq!(
            CardDetails::new("J Doe", "4242424242424242", "13/27", "123").unwrap_err(),
            PaymentValidationError::InvalidCardExpiry
        );
        assert_eq!(
            CardDetails::new("J Doe", "4242424242424242", "08/27", "12").unwrap_err(),
            PaymentValidationError::InvalidCardCvc
        );
    }

    #[test]
    fn upi_ids_need_a_handle_and_bank() {
        assert!(UpiDetails::new("jdoe@okbank").is_ok());
        assert_eq!(
            UpiDetails::new("not-an-upi-id").unwrap_err(),
            PaymentValidationError::InvalidUpiId
        );
    }

    #[test]
    fn method_labels_match_the_stored_vocabulary() {
        let card = CardDetails::new("J Doe", "4242424242424242", "08/27", "123").unwrap();
        assert_eq!(PaymentMethod::Card(card).label(), "CARD");
        let upi = UpiDetails::new("jdoe@okbank").unwrap();
        assert_eq!(PaymentMethod::Upi(upi).label(), "UPI");
    }
}
