//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod reservations;

use axum::Router;
use axum::routing::get;

use reservas_app::ports::ReservationStore;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: ReservationStore + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/reservas",
            get(reservations::list::<S>).post(reservations::create::<S>),
        )
        .route(
            "/reservas/{id}",
            get(reservations::get::<S>)
                .put(reservations::update::<S>)
                .delete(reservations::delete::<S>),
        )
        // Filters
        .route(
            "/reservas/filtrar/{hotel}",
            get(reservations::filter_by_hotel::<S>),
        )
        .route(
            "/reservas/filtrarPorNumHuespedes/{num_huespedes}",
            get(reservations::filter_by_guest_count::<S>),
        )
        .route(
            "/reservas/filtrarPorTipoHabitacion/{tipo_habitacion}",
            get(reservations::filter_by_room_type::<S>),
        )
        .route(
            "/reservas/filtrarPorFechas",
            get(reservations::filter_by_date_range::<S>),
        )
}
