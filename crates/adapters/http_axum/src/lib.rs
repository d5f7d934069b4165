//! # reservas-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** under `/api/reservas`
//! - Serve the **OpenAPI document** at `/api-docs/openapi.json`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `reservas-app` (for the port trait and service) and
//! `reservas-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod openapi;
pub mod router;
pub mod state;
