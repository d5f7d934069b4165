//! JSON REST handlers for reservations.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use utoipa::IntoParams;

use reservas_app::ports::ReservationStore;
use reservas_domain::error::ValidationError;
use reservas_domain::id::ReservationId;
use reservas_domain::reservation::{Reservation, ReservationFields};
use reservas_domain::stay_date::parse_calendar_date;

use crate::error::ApiError;
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::openapi::{ErrorBodyDoc, ReservationDoc, ReservationFieldsDoc};
use crate::state::AppState;

/// Query string of the date-range filter.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateRangeQuery {
    /// First day of the range, inclusive (`YYYY-MM-DD`).
    pub fecha_inicio: Option<String>,
    /// Last day of the range, inclusive (`YYYY-MM-DD`).
    pub fecha_fin: Option<String>,
}

/// Possible responses from the list and filter endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Reservation>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Reservation>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Reservation>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `POST /api/reservas`
#[utoipa::path(
    post, path = "/api/reservas", tag = "reservas",
    request_body = ReservationFieldsDoc,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDoc),
        (status = 400, description = "Body is not a JSON object", body = ErrorBodyDoc)
    )
)]
pub async fn create<S>(
    State(state): State<AppState<S>>,
    JsonBody(fields): JsonBody<ReservationFields>,
) -> Result<CreateResponse, ApiError>
where
    S: ReservationStore + Send + Sync + 'static,
{
    let created = state.reservation_service.create(fields).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /api/reservas`
#[utoipa::path(
    get, path = "/api/reservas", tag = "reservas",
    responses(
        (status = 200, description = "Every reservation", body = [ReservationDoc])
    )
)]
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: ReservationStore + Send + Sync + 'static,
{
    let reservations = state.reservation_service.get_all().await?;
    Ok(ListResponse::Ok(Json(reservations)))
}

/// `GET /api/reservas/{id}`
#[utoipa::path(
    get, path = "/api/reservas/{id}", tag = "reservas",
    params(("id" = String, Path, description = "Reservation identifier")),
    responses(
        (status = 200, description = "The reservation", body = ReservationDoc),
        (status = 404, description = "Reservation not found", body = ErrorBodyDoc)
    )
)]
pub async fn get<S>(
    State(state): State<AppState<S>>,
    PathParam(id): PathParam<String>,
) -> Result<GetResponse, ApiError>
where
    S: ReservationStore + Send + Sync + 'static,
{
    let reservation = state
        .reservation_service
        .get_by_id(&ReservationId::from(id))
        .await?;
    Ok(GetResponse::Ok(Json(reservation)))
}

/// `PUT /api/reservas/{id}`
#[utoipa::path(
    put, path = "/api/reservas/{id}", tag = "reservas",
    params(("id" = String, Path, description = "Reservation identifier")),
    request_body = ReservationFieldsDoc,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationDoc),
        (status = 400, description = "Body is not a JSON object", body = ErrorBodyDoc),
        (status = 404, description = "Reservation not found", body = ErrorBodyDoc)
    )
)]
pub async fn update<S>(
    State(state): State<AppState<S>>,
    PathParam(id): PathParam<String>,
    JsonBody(patch): JsonBody<ReservationFields>,
) -> Result<GetResponse, ApiError>
where
    S: ReservationStore + Send + Sync + 'static,
{
    let updated = state
        .reservation_service
        .update(&ReservationId::from(id), patch)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/reservas/{id}`
#[utoipa::path(
    delete, path = "/api/reservas/{id}", tag = "reservas",
    params(("id" = String, Path, description = "Reservation identifier")),
    responses(
        (status = 204, description = "Reservation deleted (or already absent)")
    )
)]
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    PathParam(id): PathParam<String>,
) -> Result<DeleteResponse, ApiError>
where
    S: ReservationStore + Send + Sync + 'static,
{
    state
        .reservation_service
        .delete(&ReservationId::from(id))
        .await?;
    Ok(DeleteResponse::NoContent)
}

/// `GET /api/reservas/filtrar/{hotel}`
#[utoipa::path(
    get, path = "/api/reservas/filtrar/{hotel}", tag = "reservas",
    params(("hotel" = String, Path, description = "Hotel name, matched ignoring case")),
    responses(
        (status = 200, description = "Reservations at the hotel, possibly none", body = [ReservationDoc])
    )
)]
pub async fn filter_by_hotel<S>(
    State(state): State<AppState<S>>,
    PathParam(hotel): PathParam<String>,
) -> Result<ListResponse, ApiError>
where
    S: ReservationStore + Send + Sync + 'static,
{
    let reservations = state.reservation_service.filter_by_hotel(&hotel).await?;
    Ok(ListResponse::Ok(Json(reservations)))
}

/// `GET /api/reservas/filtrarPorNumHuespedes/{num_huespedes}`
#[utoipa::path(
    get, path = "/api/reservas/filtrarPorNumHuespedes/{num_huespedes}", tag = "reservas",
    params(("num_huespedes" = u32, Path, description = "Exact number of guests")),
    responses(
        (status = 200, description = "Reservations for that many guests", body = [ReservationDoc]),
        (status = 400, description = "Guest count is not an integer", body = ErrorBodyDoc),
        (status = 404, description = "No reservation matches", body = ErrorBodyDoc)
    )
)]
pub async fn filter_by_guest_count<S>(
    State(state): State<AppState<S>>,
    PathParam(num_huespedes): PathParam<String>,
) -> Result<ListResponse, ApiError>
where
    S: ReservationStore + Send + Sync + 'static,
{
    let count = num_huespedes
        .trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidGuestCount(num_huespedes.clone()))?;
    let reservations = state
        .reservation_service
        .filter_by_guest_count(count)
        .await?;
    Ok(ListResponse::Ok(Json(reservations)))
}

/// `GET /api/reservas/filtrarPorTipoHabitacion/{tipo_habitacion}`
#[utoipa::path(
    get, path = "/api/reservas/filtrarPorTipoHabitacion/{tipo_habitacion}", tag = "reservas",
    params(("tipo_habitacion" = String, Path, description = "Room type, matched ignoring case")),
    responses(
        (status = 200, description = "Reservations for the room type, possibly none", body = [ReservationDoc])
    )
)]
pub async fn filter_by_room_type<S>(
    State(state): State<AppState<S>>,
    PathParam(tipo_habitacion): PathParam<String>,
) -> Result<ListResponse, ApiError>
where
    S: ReservationStore + Send + Sync + 'static,
{
    let reservations = state
        .reservation_service
        .filter_by_room_type(&tipo_habitacion)
        .await?;
    Ok(ListResponse::Ok(Json(reservations)))
}

/// `GET /api/reservas/filtrarPorFechas?fecha_inicio=…&fecha_fin=…`
#[utoipa::path(
    get, path = "/api/reservas/filtrarPorFechas", tag = "reservas",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Reservations whose start and end both fall in the range", body = [ReservationDoc]),
        (status = 400, description = "A bound is missing or not a date", body = ErrorBodyDoc),
        (status = 404, description = "No reservation matches", body = ErrorBodyDoc)
    )
)]
pub async fn filter_by_date_range<S>(
    State(state): State<AppState<S>>,
    QueryParams(query): QueryParams<DateRangeQuery>,
) -> Result<ListResponse, ApiError>
where
    S: ReservationStore + Send + Sync + 'static,
{
    let start = query
        .fecha_inicio
        .as_deref()
        .ok_or(ValidationError::MissingParameter("fecha_inicio"))?;
    let end = query
        .fecha_fin
        .as_deref()
        .ok_or(ValidationError::MissingParameter("fecha_fin"))?;

    let reservations = state
        .reservation_service
        .filter_by_date_range(parse_calendar_date(start)?, parse_calendar_date(end)?)
        .await?;
    Ok(ListResponse::Ok(Json(reservations)))
}
