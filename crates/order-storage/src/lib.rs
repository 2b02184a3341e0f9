//! Storage module for the order API.
//!
//! This module provides the abstraction over the order data source,
//! supporting different backend implementations. The bundled in-memory
//! backend stands in for the external system of record.

use async_trait::async_trait;
use order_types::{ApiError, Order, OrderUpdate};
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod memory;
}

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
	/// Error that occurs when a requested order is not found.
	#[error("Not found")]
	NotFound,
	/// Error that occurs in the storage backend.
	#[error("Backend error: {0}")]
	Backend(String),
	/// Error that occurs during configuration validation.
	#[error("Configuration error: {0}")]
	Configuration(String),
}

impl From<StoreError> for ApiError {
	fn from(err: StoreError) -> Self {
		match err {
			StoreError::NotFound => {
				ApiError::not_found(order_types::codes::ORDER_NOT_FOUND_BY_ORDER_NUMBER)
			},
			other => ApiError::internal(other.to_string()),
		}
	}
}

/// Trait defining the interface for order store backends.
///
/// Callers are responsible for the business preconditions: `insert` assumes
/// uniqueness of the order number has been verified, and `update`/`delete`
/// assume the order exists and mutation is permitted. Backends only enforce
/// the raw existence checks.
#[async_trait]
pub trait OrderStore: Send + Sync {
	/// Retrieves all orders. Ordering is not guaranteed.
	async fn fetch_all(&self) -> Result<Vec<Order>, StoreError>;

	/// Retrieves the order with the given number, or `None` when absent.
	///
	/// Absence is a regular outcome, not an error; callers must distinguish
	/// "not found" from a failed lookup.
	async fn fetch_by_number(&self, order_number: &str) -> Result<Option<Order>, StoreError>;

	/// Inserts a new order.
	async fn insert(&self, order: Order) -> Result<(), StoreError>;

	/// Overwrites the mutable fields of an existing order.
	async fn update(&self, order_number: &str, update: OrderUpdate) -> Result<(), StoreError>;

	/// Removes the order with the given number.
	async fn delete(&self, order_number: &str) -> Result<(), StoreError>;
}

/// Type alias for store factory functions.
///
/// This is the function signature that all store implementations must
/// provide to create instances of their backend from configuration.
pub type StoreFactory = fn(&toml::Value) -> Result<Box<dyn OrderStore>, StoreError>;

/// Get all registered store implementations.
///
/// Returns a vector of (name, factory) tuples for all available backends.
/// The binary uses this to wire the backend named by `storage.primary`.
pub fn get_all_implementations() -> Vec<(&'static str, StoreFactory)> {
	use implementations::memory;

	vec![(memory::NAME, memory::create_store as StoreFactory)]
}
