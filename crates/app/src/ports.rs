//! Port definitions — traits that storage backends implement.
//!
//! Ports live in `app` so the use-case layer depends on an abstraction and
//! backends plug in from the outside.

pub mod hierarchy_repository;

pub use hierarchy_repository::HierarchyRepository;
