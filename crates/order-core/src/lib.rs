//! Business logic for the order API.
//!
//! This crate composes the payload validator, the workflow guard and the
//! order store into the five order use cases: list, get, create, update
//! and delete. HTTP concerns stay in the server crate; everything here
//! speaks in domain types and classified errors.

/// Status-based mutation rules for orders.
pub mod guard;
/// The order service orchestrating validation, guard and store.
pub mod service;
/// Field-level validation of incoming payloads.
pub mod validation;

pub use service::OrderService;
