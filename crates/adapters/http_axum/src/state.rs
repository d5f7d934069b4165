//! Shared application state for axum handlers.

use std::sync::Arc;

use reservas_app::ports::ReservationStore;
use reservas_app::services::reservation_service::ReservationService;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the store itself does not need to be `Clone`;
/// only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Reservation CRUD and query service.
    pub reservation_service: Arc<ReservationService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            reservation_service: Arc::clone(&self.reservation_service),
        }
    }
}

impl<S> AppState<S>
where
    S: ReservationStore + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(reservation_service: ReservationService<S>) -> Self {
        Self {
            reservation_service: Arc::new(reservation_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is also held elsewhere, e.g. by tests that
    /// inspect the store after driving requests.
    pub fn from_arc(reservation_service: Arc<ReservationService<S>>) -> Self {
        Self {
            reservation_service,
        }
    }
}
