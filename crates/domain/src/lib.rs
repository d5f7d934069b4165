//! # reservas-domain
//!
//! Pure domain model for the hotel reservation service.
//!
//! ## Responsibilities
//! - Foundational types: reservation identifiers, stay dates, error conventions
//! - Define the **Reservation** record and the **field patch** used to create
//!   and partially update it
//! - Contain the matching rules used by filter queries (hotel, room type,
//!   guest count, date range)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Persistence is expressed as a trait in the `app` crate (port).

pub mod error;
pub mod id;
pub mod stay_date;

pub mod reservation;
