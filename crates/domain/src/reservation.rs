//! A hotel booking record and the field patch that shapes it.
//!
//! Records carry no schema beyond their `id`. Every other key is kept as the
//! caller sent it; the filter predicates read the well-known keys and treat
//! a value of the wrong JSON type as a non-match.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::ReservationId;
use crate::stay_date::StayDate;

const ID_KEY: &str = "id";
const HOTEL_KEY: &str = "hotel";
const ROOM_TYPE_KEY: &str = "tipo_habitacion";
const GUEST_COUNT_KEY: &str = "num_huespedes";
const START_DATE_KEY: &str = "fecha_inicio";
const END_DATE_KEY: &str = "fecha_fin";

/// A hotel booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    /// Every other key of the record, verbatim and in stored order.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Reservation {
    /// Build a reservation from caller-supplied fields.
    ///
    /// Any `id` the caller smuggled into the fields is dropped; identity
    /// always comes from `id`.
    #[must_use]
    pub fn new(id: ReservationId, fields: ReservationFields) -> Self {
        let mut fields = fields.0;
        fields.retain(|key, _| key != ID_KEY);
        Self { id, fields }
    }

    /// Shallow-merge `patch` onto this reservation.
    ///
    /// Every supplied key replaces the current value, `null` included.
    /// Omitted keys are kept. The identifier never changes.
    pub fn apply(&mut self, patch: ReservationFields) {
        for (key, value) in patch.0 {
            if key != ID_KEY {
                self.fields.insert(key, value);
            }
        }
    }

    /// Raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[must_use]
    pub fn hotel(&self) -> Option<&str> {
        self.text(HOTEL_KEY)
    }

    #[must_use]
    pub fn tipo_habitacion(&self) -> Option<&str> {
        self.text(ROOM_TYPE_KEY)
    }

    /// Guest count, when stored as a non-negative integer.
    #[must_use]
    pub fn num_huespedes(&self) -> Option<u64> {
        self.get(GUEST_COUNT_KEY).and_then(Value::as_u64)
    }

    #[must_use]
    pub fn fecha_inicio(&self) -> Option<StayDate> {
        self.text(START_DATE_KEY).map(StayDate::new)
    }

    #[must_use]
    pub fn fecha_fin(&self) -> Option<StayDate> {
        self.text(END_DATE_KEY).map(StayDate::new)
    }

    /// Whether the hotel name equals `name`, ignoring case.
    #[must_use]
    pub fn is_at_hotel(&self, name: &str) -> bool {
        self.hotel().is_some_and(|hotel| eq_ignore_case(hotel, name))
    }

    /// Whether the room type equals `room_type`, ignoring case.
    #[must_use]
    pub fn has_room_type(&self, room_type: &str) -> bool {
        self.tipo_habitacion()
            .is_some_and(|tipo| eq_ignore_case(tipo, room_type))
    }

    /// Whether the reservation is for exactly `count` guests.
    #[must_use]
    pub fn has_guest_count(&self, count: u32) -> bool {
        self.num_huespedes() == Some(u64::from(count))
    }

    /// Whether both the start and the end date lie inside `[start, end]`.
    ///
    /// This is a containment test, not an overlap test: a stay that begins
    /// before `start` is excluded even if it ends inside the range.
    /// Reservations with a missing or unreadable date never match.
    #[must_use]
    pub fn stays_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        let inside = |date: Option<StayDate>| {
            date.as_ref()
                .and_then(StayDate::calendar_date)
                .is_some_and(|day| start <= day && day <= end)
        };
        inside(self.fecha_inicio()) && inside(self.fecha_fin())
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Caller-supplied reservation fields: any JSON object.
///
/// Used as the whole body on creation and as the patch on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationFields(Map<String, Value>);

impl ReservationFields {
    #[must_use]
    pub fn hotel(self, hotel: impl Into<String>) -> Self {
        self.field(HOTEL_KEY, Value::String(hotel.into()))
    }

    #[must_use]
    pub fn tipo_habitacion(self, tipo_habitacion: impl Into<String>) -> Self {
        self.field(ROOM_TYPE_KEY, Value::String(tipo_habitacion.into()))
    }

    #[must_use]
    pub fn num_huespedes(self, num_huespedes: u32) -> Self {
        self.field(GUEST_COUNT_KEY, Value::from(num_huespedes))
    }

    #[must_use]
    pub fn fecha_inicio(self, fecha_inicio: impl Into<String>) -> Self {
        self.field(START_DATE_KEY, Value::String(fecha_inicio.into()))
    }

    #[must_use]
    pub fn fecha_fin(self, fecha_fin: impl Into<String>) -> Self {
        self.field(END_DATE_KEY, Value::String(fecha_fin.into()))
    }

    /// Set an arbitrary key.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }
}

impl From<Map<String, Value>> for ReservationFields {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
