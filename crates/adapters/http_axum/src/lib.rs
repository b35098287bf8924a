//! # hearth-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON REST API** with one collection and one item route per
//!   kind (`/users`, `/houses`, `/rooms`, `/devices`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and [`HearthError`](hearth_domain::error::HearthError)s
//!   into HTTP responses
//! - Check email format before it reaches the application layer
//!
//! ## Dependency rule
//! Depends on `hearth-app` (for the service) and `hearth-domain` (for domain
//! types used in request/response mapping). Never leaks axum types into the
//! domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
