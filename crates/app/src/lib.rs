//! # reservas-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **storage port** adapters must implement:
//!   - `ReservationStore`: load and save the whole reservation collection
//! - Define the **driving port** as a use-case struct:
//!   - `ReservationService`: create, read, update, delete, filter
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (an in-memory store)
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `reservas-domain` only (plus `tokio::sync` for the write guard).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod memory_store;
pub mod ports;
pub mod services;
