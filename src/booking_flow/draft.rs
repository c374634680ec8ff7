use crate::http_handler::common::Car;
use chrono::{DateTime, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// The booking-in-progress carried from the car page through the booking
/// form to the payment step: the selected car snapshot and the date range.
///
/// The price shown along the way is a client-side preview; the server
/// remains the pricing authority when the booking is created.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    car: Car,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

impl BookingDraft {
    pub fn new(car: Car, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self { car, start_date, end_date }
    }

    pub fn car(&self) -> &Car { &self.car }
    pub fn start_date(&self) -> DateTime<Utc> { self.start_date }
    pub fn end_date(&self) -> DateTime<Utc> { self.end_date }

    /// Days charged for the range: the duration rounded up to whole days,
    /// never less than one.
    pub fn chargeable_days(&self) -> i64 {
        let seconds = (self.end_date - self.start_date).num_seconds();
        let days = seconds.div_euclid(SECONDS_PER_DAY)
            + i64::from(seconds.rem_euclid(SECONDS_PER_DAY) > 0);
        days.max(1)
    }

    /// Price preview for the selected range.
    pub fn total_price(&self) -> f64 {
        self.car.price_per_day() * self.chargeable_days() as f64
    }

    pub fn into_car(self) -> Car { self.car }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn draft_with_duration(price_per_day: f64, duration: TimeDelta) -> BookingDraft {
        let start = Utc::now();
        BookingDraft::new(Car::test(4, "Toyota", "Corolla", price_per_day), start, start + duration)
    }

    #[test]
    fn three_days_cost_three_daily_rates() {
        let draft = draft_with_duration(100.0, TimeDelta::days(3));
        assert_eq!(draft.chargeable_days(), 3);
        assert!((draft.total_price() - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn less_than_a_day_charges_the_daily_minimum() {
        let zero = draft_with_duration(100.0, TimeDelta::days(0));
        assert_eq!(zero.chargeable_days(), 1);
        assert!((zero.total_price() - 100.0).abs() < f64::EPSILON);

        let few_hours = draft_with_duration(100.0, TimeDelta::hours(5));
        assert_eq!(few_hours.chargeable_days(), 1);
    }

    #[test]
    fn partial_days_round_up() {
        let draft = draft_with_duration(100.0, TimeDelta::hours(36));
        assert_eq!(draft.chargeable_days(), 2);
        assert!((draft.total_price() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn price_is_monotonic_in_duration() {
        let mut last = 0.0;
        for hours in (0..=240).step_by(12) {
            let price = draft_with_duration(55.0, TimeDelta::hours(hours)).total_price();
            assert!(price >= last, "price dropped at {hours}h");
            last = price;
        }
    }
}
