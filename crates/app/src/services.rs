//! Application services — use-case implementations.
//!
//! Services own their state and are shared with adapters behind an `Arc`.

pub mod hierarchy_service;
