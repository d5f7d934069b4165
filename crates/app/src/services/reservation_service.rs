//! Reservation service: use-cases for managing reservations.

use chrono::NaiveDate;
use tokio::sync::Mutex;

use reservas_domain::error::{NotFoundError, ReservasError};
use reservas_domain::id::ReservationId;
use reservas_domain::reservation::{Reservation, ReservationFields};

use crate::ports::ReservationStore;

/// Application service for reservation CRUD and filter queries.
///
/// Every operation loads the whole collection from the store, works on it in
/// memory and, for mutations, saves the whole collection back. All of this
/// happens while holding `guard`, so two requests in the same process never
/// interleave their load and save.
pub struct ReservationService<S> {
    store: S,
    guard: Mutex<()>,
}

impl<S: ReservationStore> ReservationService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            guard: Mutex::new(()),
        }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a reservation with a freshly generated identifier and append it
    /// to the collection.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn create(&self, fields: ReservationFields) -> Result<Reservation, ReservasError> {
        let _guard = self.guard.lock().await;
        let mut records = self.store.load_all().await?;

        let reservation = Reservation::new(fresh_id(&records), fields);
        records.push(reservation.clone());
        self.store.save_all(&records).await?;

        tracing::info!(id = %reservation.id, total = records.len(), "reservation created");
        Ok(reservation)
    }

    /// List every reservation in stored order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn get_all(&self) -> Result<Vec<Reservation>, ReservasError> {
        let _guard = self.guard.lock().await;
        self.store.load_all().await
    }

    /// Look up a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns [`ReservasError::NotFound`] when no reservation has `id`,
    /// or a storage error from the store.
    pub async fn get_by_id(&self, id: &ReservationId) -> Result<Reservation, ReservasError> {
        let _guard = self.guard.lock().await;
        self.store
            .load_all()
            .await?
            .into_iter()
            .find(|reservation| &reservation.id == id)
            .ok_or_else(|| NotFoundError::Reservation(id.clone()).into())
    }

    /// Merge `patch` onto an existing reservation, keeping its position in
    /// the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ReservasError::NotFound`] when no reservation has `id`,
    /// or a storage error from the store.
    pub async fn update(
        &self,
        id: &ReservationId,
        patch: ReservationFields,
    ) -> Result<Reservation, ReservasError> {
        let _guard = self.guard.lock().await;
        let mut records = self.store.load_all().await?;

        let reservation = records
            .iter_mut()
            .find(|reservation| &reservation.id == id)
            .ok_or_else(|| NotFoundError::Reservation(id.clone()))?;
        reservation.apply(patch);
        let updated = reservation.clone();

        self.store.save_all(&records).await?;

        tracing::info!(%id, "reservation updated");
        Ok(updated)
    }

    /// Remove a reservation. Removing an unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn delete(&self, id: &ReservationId) -> Result<(), ReservasError> {
        let _guard = self.guard.lock().await;
        let mut records = self.store.load_all().await?;

        let before = records.len();
        records.retain(|reservation| &reservation.id != id);
        self.store.save_all(&records).await?;

        if records.len() < before {
            tracing::info!(%id, "reservation deleted");
        } else {
            tracing::debug!(%id, "delete of unknown reservation ignored");
        }
        Ok(())
    }

    /// Reservations whose hotel equals `hotel`, ignoring case. An empty
    /// result is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn filter_by_hotel(&self, hotel: &str) -> Result<Vec<Reservation>, ReservasError> {
        self.select(|reservation| reservation.is_at_hotel(hotel))
            .await
    }

    /// Reservations for exactly `count` guests.
    ///
    /// # Errors
    ///
    /// Returns [`ReservasError::NotFound`] when nothing matches, or a storage
    /// error from the store.
    pub async fn filter_by_guest_count(
        &self,
        count: u32,
    ) -> Result<Vec<Reservation>, ReservasError> {
        let matches = self
            .select(|reservation| reservation.has_guest_count(count))
            .await?;
        non_empty(matches, || NotFoundError::GuestCount(count))
    }

    /// Reservations whose room type equals `room_type`, ignoring case. An
    /// empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn filter_by_room_type(
        &self,
        room_type: &str,
    ) -> Result<Vec<Reservation>, ReservasError> {
        self.select(|reservation| reservation.has_room_type(room_type))
            .await
    }

    /// Reservations whose start and end dates both fall within
    /// `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`ReservasError::NotFound`] when nothing matches, or a storage
    /// error from the store.
    pub async fn filter_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Reservation>, ReservasError> {
        let matches = self
            .select(|reservation| reservation.stays_within(start, end))
            .await?;
        non_empty(matches, || NotFoundError::DateRange { start, end })
    }

    async fn select<P>(&self, predicate: P) -> Result<Vec<Reservation>, ReservasError>
    where
        P: Fn(&Reservation) -> bool,
    {
        let _guard = self.guard.lock().await;
        let mut records = self.store.load_all().await?;
        records.retain(predicate);
        Ok(records)
    }
}

// TODO: guest-count and date-range misses are errors while hotel and room-type
// misses are empty successes; align once API clients stop relying on the 404.
fn non_empty<F>(matches: Vec<Reservation>, miss: F) -> Result<Vec<Reservation>, ReservasError>
where
    F: FnOnce() -> NotFoundError,
{
    if matches.is_empty() {
        Err(miss().into())
    } else {
        Ok(matches)
    }
}

fn fresh_id(records: &[Reservation]) -> ReservationId {
    loop {
        let id = ReservationId::new();
        if records.iter().all(|reservation| reservation.id != id) {
            return id;
        }
    }
}
