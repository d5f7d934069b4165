//! # reservas-adapter-storage-json
//!
//! Flat-file persistence adapter: the whole reservation collection lives in
//! a single JSON array document.
//!
//! ## Responsibilities
//! - Implement the `ReservationStore` port defined in `reservas-app::ports::storage`
//! - Bootstrap the document (create it as an empty array when missing)
//! - Replace the document atomically on every save
//! - Map IO and JSON failures onto the domain error kinds
//!
//! ## Dependency rule
//! Depends on `reservas-app` (for the port trait) and `reservas-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

mod error;
mod file_store;

pub use error::StorageError;
pub use file_store::JsonFileStore;
