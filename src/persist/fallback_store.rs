use crate::http_handler::common::{Booking, Car};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use std::cmp::Reverse;
use std::path::{Path, PathBuf};
use tokio::fs;

const FALLBACK_FILE: &str = "test_bookings.json";
/// Records beyond this bound are dropped oldest-first on append.
const DEFAULT_CAPACITY: usize = 32;

/// A locally persisted record of a completed booking and its payment.
///
/// This is a display cache, not a source of truth: the authoritative record
/// lives server-side. Booking ids are strings because demo flows use
/// synthetic ids like `TEST-999` that never existed on the server.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FallbackBooking {
    booking_id: String,
    #[serde(default)]
    reference_id: Option<String>,
    car: Car,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    total_amount: f64,
    payment_method: String,
    transaction_id: String,
    payment_date: DateTime<Utc>,
    status: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    is_test_booking: bool,
    #[serde(default)]
    is_mock_booking: bool,
}

impl FallbackBooking {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        booking_id: String,
        reference_id: Option<String>,
        car: Car,
        (start_date, end_date): (DateTime<Utc>, DateTime<Utc>),
        total_amount: f64,
        payment_method: String,
        transaction_id: String,
        payment_date: DateTime<Utc>,
    ) -> Self {
        Self {
            booking_id,
            reference_id,
            car,
            start_date,
            end_date,
            total_amount,
            payment_method,
            transaction_id,
            payment_date,
            status: String::from("CONFIRMED"),
            created_at: Utc::now(),
            is_test_booking: false,
            is_mock_booking: false,
        }
    }

    /// Marks the record as created by a demo/test flow so listings can label
    /// it instead of presenting it as a server booking.
    pub fn into_test_booking(mut self) -> Self {
        self.is_test_booking = true;
        self
    }

    pub fn booking_id(&self) -> &str { &self.booking_id }
    pub fn reference_id(&self) -> Option<&str> { self.reference_id.as_deref() }
    pub fn car(&self) -> &Car { &self.car }
    pub fn start_date(&self) -> DateTime<Utc> { self.start_date }
    pub fn end_date(&self) -> DateTime<Utc> { self.end_date }
    pub fn total_amount(&self) -> f64 { self.total_amount }
    pub fn payment_method(&self) -> &str { &self.payment_method }
    pub fn transaction_id(&self) -> &str { &self.transaction_id }
    pub fn payment_date(&self) -> DateTime<Utc> { self.payment_date }
    pub fn status(&self) -> &str { &self.status }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn is_local_only(&self) -> bool { self.is_test_booking || self.is_mock_booking }

    fn matches_server_booking(&self, booking: &Booking) -> bool {
        booking.id().to_string() == self.booking_id
            || booking.reference_id().is_some_and(|r| r == self.booking_id)
    }
}

/// One entry of a merged booking listing: either the authoritative server
/// row or a locally cached fallback record with no server counterpart.
#[derive(Debug, Clone)]
pub enum MergedBooking {
    Server(Booking),
    Local(FallbackBooking),
}

impl MergedBooking {
    pub fn total_amount(&self) -> f64 {
        match self {
            MergedBooking::Server(b) => b.total_amount(),
            MergedBooking::Local(r) => r.total_amount(),
        }
    }

    pub fn is_local(&self) -> bool { matches!(self, MergedBooking::Local(_)) }

    fn sort_timestamp(&self) -> DateTime<Utc> {
        match self {
            MergedBooking::Server(b) => b
                .start_date()
                .and_hms_opt(0, 0, 0)
                .map_or_else(Utc::now, |dt| dt.and_utc()),
            MergedBooking::Local(r) => r.created_at(),
        }
    }
}

/// Append-only list of fallback booking records under a fixed file name.
///
/// Writes are read-modify-write on the whole file; two concurrent writers
/// lose one update silently, which matches the storage it replaces. The
/// list is bounded and reconciled against the server listing before
/// display, never shown as the authoritative record.
#[derive(Debug, Clone)]
pub struct FallbackStore {
    base_path: PathBuf,
    capacity: usize,
}

impl FallbackStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self { base_path: base_path.as_ref().to_path_buf(), capacity: DEFAULT_CAPACITY }
    }

    pub fn with_capacity<P: AsRef<Path>>(base_path: P, capacity: usize) -> Self {
        Self { base_path: base_path.as_ref().to_path_buf(), capacity: capacity.max(1) }
    }

    fn list_path(&self) -> PathBuf { self.base_path.join(FALLBACK_FILE) }

    /// Returns all stored records in insertion order. An absent file is an
    /// empty list; an unreadable one is discarded with a warning rather
    /// than poisoning every later append.
    pub async fn read_all(&self) -> Vec<FallbackBooking> {
        let Ok(content) = fs::read_to_string(self.list_path()).await else {
            return Vec::new();
        };
        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                crate::warn!("Discarding unreadable fallback booking list: {e}");
                Vec::new()
            }
        }
    }

    /// Appends a record, dropping the oldest entries once the list exceeds
    /// its capacity.
    pub async fn append(&self, record: FallbackBooking) -> Result<(), std::io::Error> {
        let mut records = self.read_all().await;
        records.push(record);
        if records.len() > self.capacity {
            let excess = records.len() - self.capacity;
            records.drain(..excess);
        }
        self.write_back(&records).await
    }

    /// Removes every stored record.
    pub async fn clear(&self) -> Result<(), std::io::Error> {
        match fs::remove_file(self.list_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Merges the server booking listing with the locally cached records.
    /// Server rows win on id collision; surviving local rows stay labeled
    /// as local. Newest first.
    pub async fn merge_with_server(&self, server: &[Booking]) -> Vec<MergedBooking> {
        let local = self.read_all().await;
        let local_only = local
            .into_iter()
            .filter(|record| !server.iter().any(|b| record.matches_server_booking(b)));
        server
            .iter()
            .cloned()
            .map(MergedBooking::Server)
            .chain(local_only.map(MergedBooking::Local))
            .sorted_by_key(|entry| Reverse(entry.sort_timestamp()))
            .collect()
    }

    async fn write_back(&self, records: &[FallbackBooking]) -> Result<(), std::io::Error> {
        fs::create_dir_all(&self.base_path).await?;
        let encoded = serde_json::to_string(records)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(self.list_path(), encoded).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn record(id: &str, amount: f64) -> FallbackBooking {
        let now = Utc::now();
        FallbackBooking::new(
            String::from(id),
            Some(format!("REF-{id}")),
            Car::test(4, "Toyota", "Corolla", 55.0),
            (now, now + TimeDelta::days(2)),
            amount,
            String::from("CARD"),
            format!("TXN-{id}"),
            now,
        )
    }

    #[tokio::test]
    async fn append_preserves_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = FallbackStore::new(dir.path());
        store.append(record("1", 100.0)).await.unwrap();
        store.append(record("2", 200.0)).await.unwrap();
        let all = store.read_all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].booking_id(), "1");
        assert_eq!(all[1].booking_id(), "2");
    }

    #[tokio::test]
    async fn clear_empties_the_list_unconditionally() {
        let dir = tempfile::tempdir().unwrap();
        let store = FallbackStore::new(dir.path());
        store.clear().await.unwrap();
        store.append(record("1", 100.0)).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.read_all().await.is_empty());
    }

    #[tokio::test]
    async fn capacity_drops_oldest_records_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = FallbackStore::with_capacity(dir.path(), 2);
        store.append(record("1", 100.0)).await.unwrap();
        store.append(record("2", 200.0)).await.unwrap();
        store.append(record("3", 300.0)).await.unwrap();
        let all = store.read_all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].booking_id(), "2");
        assert_eq!(all[1].booking_id(), "3");
    }

    #[tokio::test]
    async fn unreadable_list_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FallbackStore::new(dir.path());
        tokio::fs::write(dir.path().join(super::FALLBACK_FILE), "not-json")
            .await
            .unwrap();
        assert!(store.read_all().await.is_empty());
    }

    #[tokio::test]
    async fn merge_prefers_server_rows_on_collision() {
        let dir = tempfile::tempdir().unwrap();
        let store = FallbackStore::new(dir.path());
        store.append(record("12", 165.0)).await.unwrap();
        store.append(record("TEST-999", 450.0).into_test_booking()).await.unwrap();

        let server: Booking = serde_json::from_str(
            r#"{"id": 12, "startDate": "2026-08-01", "endDate": "2026-08-04", "totalAmount": 165.0}"#,
        )
        .unwrap();
        let merged = store.merge_with_server(std::slice::from_ref(&server)).await;
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.iter().filter(|entry| entry.is_local()).count(), 1);
        let local = merged.iter().find(|entry| entry.is_local()).unwrap();
        match local {
            MergedBooking::Local(r) => assert_eq!(r.booking_id(), "TEST-999"),
            MergedBooking::Server(_) => unreachable!(),
        }
    }
}
