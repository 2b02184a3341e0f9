//! The order service orchestrating validation, guard and store.
//!
//! Each use case validates its input before touching the store, checks the
//! workflow guard where a mutation is requested, and returns either a
//! success value or exactly one classified error. Store failures are
//! surfaced to the caller unchanged; nothing is retried or swallowed.

use crate::guard::{self, Transition};
use crate::validation;
use order_storage::OrderStore;
use order_types::{codes, ApiError, CreateOrderRequest, Order, UpdateOrderRequest};
use std::sync::Arc;

/// Implements the five order use cases on top of an [`OrderStore`].
pub struct OrderService {
	store: Arc<dyn OrderStore>,
}

impl OrderService {
	/// Creates a new service backed by the given store.
	pub fn new(store: Arc<dyn OrderStore>) -> Self {
		Self { store }
	}

	/// Returns all orders.
	pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
		Ok(self.store.fetch_all().await?)
	}

	/// Returns the order with the given number, or `None` when absent.
	///
	/// Absence is not an error at this layer; the HTTP adapter decides how
	/// to represent it.
	pub async fn get_order(&self, order_number: &str) -> Result<Option<Order>, ApiError> {
		Ok(self.store.fetch_by_number(order_number).await?)
	}

	/// Creates a new order with status forced to `Created`.
	///
	/// # Errors
	///
	/// Returns the first validation violation, a conflict when an order
	/// with the same number already exists, or the store failure.
	pub async fn create_order(&self, request: CreateOrderRequest) -> Result<(), ApiError> {
		validation::validate_create(&request)?;

		if self
			.store
			.fetch_by_number(&request.order_number)
			.await?
			.is_some()
		{
			return Err(ApiError::conflict(codes::SAME_ORDER_FOUND_BY_UNIQUE_ID));
		}

		tracing::debug!("Creating order {}", request.order_number);
		self.store.insert(request.into_order()).await?;
		Ok(())
	}

	/// Overwrites the mutable fields of an existing order.
	///
	/// # Errors
	///
	/// Returns the first validation violation, not-found when no order has
	/// the given number, the guard error when the status blocks updates,
	/// or the store failure.
	pub async fn update_order(
		&self,
		order_number: &str,
		request: UpdateOrderRequest,
	) -> Result<(), ApiError> {
		validation::validate_update(&request)?;

		let order = self
			.store
			.fetch_by_number(order_number)
			.await?
			.ok_or_else(|| ApiError::not_found(codes::ORDER_NOT_FOUND_BY_ORDER_NUMBER))?;

		guard::ensure_permitted(order.status, Transition::Update)?;

		tracing::debug!("Updating order {}", order_number);
		self.store.update(order_number, request.into()).await?;
		Ok(())
	}

	/// Removes an existing order.
	///
	/// # Errors
	///
	/// Returns not-found when no order has the given number, the guard
	/// error when the status blocks deletion, or the store failure.
	pub async fn delete_order(&self, order_number: &str) -> Result<(), ApiError> {
		let order = self
			.store
			.fetch_by_number(order_number)
			.await?
			.ok_or_else(|| ApiError::not_found(codes::ORDER_NOT_FOUND_BY_ORDER_NUMBER))?;

		guard::ensure_permitted(order.status, Transition::Delete)?;

		tracing::debug!("Deleting order {}", order_number);
		self.store.delete(order_number).await?;
		Ok(())
	}
}
