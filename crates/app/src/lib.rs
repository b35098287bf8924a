//! # hearth-app
//!
//! Application layer — use-cases over the hierarchy store.
//!
//! ## Responsibilities
//! - Expose the **driving port** `HierarchyService`: create, read, update and
//!   delete for users, houses, rooms and devices
//! - Define the **driven port** `HierarchyRepository` the service stores
//!   through; the domain's in-memory `HierarchyStore` implements it
//! - Serialize access to the store so each call, cascades included, runs as
//!   one critical section
//! - Trace every use-case and log the outcome of cascade deletes
//!
//! ## Dependency rule
//! Depends on `hearth-domain` only (plus `tokio::sync` for the lock and
//! `tracing`). Never imports adapter crates. Adapters depend on *this*
//! crate, not the reverse.

pub mod ports;
pub mod services;
