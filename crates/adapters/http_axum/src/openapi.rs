//! OpenAPI 3 document for the reservation API, generated with utoipa.
//!
//! The schema structs below only describe the wire format; handlers work with
//! the domain types directly.

use axum::Json;
use utoipa::{OpenApi, ToSchema};

/// A stored reservation.
#[derive(ToSchema)]
#[schema(as = Reservation, example = json!({
    "id": "3f2b8c1e-6a0d-4d53-9a43-2f1c0c8d7e11",
    "hotel": "Plaza",
    "tipo_habitacion": "Doble",
    "num_huespedes": 2,
    "fecha_inicio": "2024-01-01",
    "fecha_fin": "2024-01-05"
}))]
pub struct ReservationDoc {
    /// Unique reservation identifier, assigned by the server.
    pub id: String,
    /// Hotel name.
    pub hotel: Option<String>,
    /// Booked room type.
    pub tipo_habitacion: Option<String>,
    /// Number of guests.
    pub num_huespedes: Option<u32>,
    /// Start date (`YYYY-MM-DD`).
    pub fecha_inicio: Option<String>,
    /// End date (`YYYY-MM-DD`).
    pub fecha_fin: Option<String>,
}

/// Reservation fields sent on create, or the subset to change on update.
/// Any other keys are stored as-is.
#[derive(ToSchema)]
#[schema(as = ReservationFields)]
pub struct ReservationFieldsDoc {
    /// Hotel name.
    pub hotel: Option<String>,
    /// Booked room type.
    pub tipo_habitacion: Option<String>,
    /// Number of guests.
    pub num_huespedes: Option<u32>,
    /// Start date (`YYYY-MM-DD`).
    pub fecha_inicio: Option<String>,
    /// End date (`YYYY-MM-DD`).
    pub fecha_fin: Option<String>,
}

/// Error payload.
#[derive(ToSchema)]
#[schema(as = ErrorBody)]
pub struct ErrorBodyDoc {
    /// Human-readable reason.
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de Reservas Hoteleras",
        version = "1.0.0",
        description = "Una API para gestionar reservas en hoteles"
    ),
    paths(
        crate::api::reservations::create,
        crate::api::reservations::list,
        crate::api::reservations::get,
        crate::api::reservations::update,
        crate::api::reservations::delete,
        crate::api::reservations::filter_by_hotel,
        crate::api::reservations::filter_by_guest_count,
        crate::api::reservations::filter_by_room_type,
        crate::api::reservations::filter_by_date_range,
    ),
    components(schemas(ReservationDoc, ReservationFieldsDoc, ErrorBodyDoc)),
    tags((name = "reservas", description = "Operaciones relacionadas con las reservas hoteleras"))
)]
pub struct ApiDoc;

/// `GET /api-docs/openapi.json`
pub async fn serve() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
