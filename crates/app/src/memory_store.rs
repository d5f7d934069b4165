//! In-process reservation store backed by a `Vec`.

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use reservas_domain::error::ReservasError;
use reservas_domain::reservation::Reservation;

use crate::ports::ReservationStore;

/// Keeps the collection in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Mutex<Vec<Reservation>>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `records`.
    #[must_use]
    pub fn with_records(records: Vec<Reservation>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Copy of the current collection.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Reservation> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ReservationStore for InMemoryStore {
    fn load_all(&self) -> impl Future<Output = Result<Vec<Reservation>, ReservasError>> + Send {
        let records = self.snapshot();
        async { Ok(records) }
    }

    fn save_all(
        &self,
        records: &[Reservation],
    ) -> impl Future<Output = Result<(), ReservasError>> + Send {
        *self.records.lock().unwrap_or_else(PoisonError::into_inner) = records.to_vec();
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reservas_domain::id::ReservationId;
    use reservas_domain::reservation::ReservationFields;

    fn reservation(id: &str) -> Reservation {
        Reservation::new(
            ReservationId::from(id),
            ReservationFields::default().hotel("Plaza"),
        )
    }

    #[tokio::test]
    async fn should_start_empty() {
        let store = InMemoryStore::new();
        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_seeded_records_in_order() {
        let store = InMemoryStore::with_records(vec![reservation("b"), reservation("a")]);
        let ids: Vec<String> = store
            .load_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[tokio::test]
    async fn should_replace_collection_on_save() {
        let store = InMemoryStore::with_records(vec![reservation("a")]);
        store.save_all(&[reservation("c")]).await.unwrap();
        assert_eq!(store.snapshot(), vec![reservation("c")]);
    }
}
