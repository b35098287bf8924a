//! # hearth-domain
//!
//! Pure domain model for the hearth smart-home hierarchy.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and the error taxonomy
//! - Define **Users** (owners of houses)
//! - Define **Houses** (owned by a user, containing rooms)
//! - Define **Rooms** (inside a house, containing devices)
//! - Define **Devices** (sensors inside a room reporting an integer value)
//! - Own the [`HierarchyStore`](hierarchy::HierarchyStore), which enforces the
//!   parent/child links between the four kinds and performs cascade deletes
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod error;
pub mod id;

pub mod device;
pub mod hierarchy;
pub mod house;
pub mod room;
pub mod user;
