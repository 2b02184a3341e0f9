//! In-memory order store implementation.
//!
//! This module provides a memory-based implementation of the OrderStore
//! trait. It stands in for the external order data source and is the
//! backend used in tests and local development. Mutations take the write
//! lock, serializing create/update/delete against the same store; reads
//! proceed concurrently under the read lock.

use crate::{OrderStore, StoreError};
use async_trait::async_trait;
use order_types::{Field, FieldType, Order, OrderStatus, OrderUpdate, Schema};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Name under which this implementation is registered.
pub const NAME: &str = "memory";

/// In-memory order store.
pub struct MemoryStore {
	/// Orders keyed by order number, protected by a read-write lock.
	orders: Arc<RwLock<HashMap<String, Order>>>,
}

impl MemoryStore {
	/// Creates an empty MemoryStore instance.
	pub fn new() -> Self {
		Self {
			orders: Arc::new(RwLock::new(HashMap::new())),
		}
	}

	/// Creates a MemoryStore preloaded with the reference dataset.
	pub fn seeded() -> Self {
		let orders = reference_orders()
			.into_iter()
			.map(|order| (order.order_number.clone(), order))
			.collect();
		Self {
			orders: Arc::new(RwLock::new(orders)),
		}
	}
}

impl Default for MemoryStore {
	fn default() -> Self {
		Self::new()
	}
}

/// Reference dataset standing in for the external data source.
fn reference_orders() -> Vec<Order> {
	vec![
		Order {
			order_number: "1".to_string(),
			first_name: "Ahmet".to_string(),
			last_name: "Ata".to_string(),
			total_amount: Decimal::new(12113, 2),
			address: "Lorem ipsum dolor sit amet".to_string(),
			city: "İstanbul".to_string(),
			district: "Silivri".to_string(),
			currency_code: "TR".to_string(),
			status: OrderStatus::Approved,
		},
		Order {
			order_number: "2".to_string(),
			first_name: "Hans".to_string(),
			last_name: "Schengen".to_string(),
			total_amount: Decimal::new(34599, 2),
			address: "Sed ut perspiciatis unde omnis iste natus".to_string(),
			city: "Berlin".to_string(),
			district: "Berlin Square".to_string(),
			currency_code: "EUR".to_string(),
			status: OrderStatus::Transferred,
		},
		Order {
			order_number: "3".to_string(),
			first_name: "George".to_string(),
			last_name: "White".to_string(),
			total_amount: Decimal::new(16399, 2),
			address: "Ut enim ad minima veniam, quis nostrum".to_string(),
			city: "London".to_string(),
			district: "Birmingham".to_string(),
			currency_code: "EUR".to_string(),
			status: OrderStatus::Shipped,
		},
	]
}

#[async_trait]
impl OrderStore for MemoryStore {
	async fn fetch_all(&self) -> Result<Vec<Order>, StoreError> {
		let orders = self.orders.read().await;
		Ok(orders.values().cloned().collect())
	}

	async fn fetch_by_number(&self, order_number: &str) -> Result<Option<Order>, StoreError> {
		let orders = self.orders.read().await;
		Ok(orders.get(order_number).cloned())
	}

	async fn insert(&self, order: Order) -> Result<(), StoreError> {
		let mut orders = self.orders.write().await;
		orders.insert(order.order_number.clone(), order);
		Ok(())
	}

	async fn update(&self, order_number: &str, update: OrderUpdate) -> Result<(), StoreError> {
		let mut orders = self.orders.write().await;
		let order = orders.get_mut(order_number).ok_or(StoreError::NotFound)?;
		order.apply(update);
		Ok(())
	}

	async fn delete(&self, order_number: &str) -> Result<(), StoreError> {
		let mut orders = self.orders.write().await;
		orders.remove(order_number).ok_or(StoreError::NotFound)?;
		Ok(())
	}
}

/// Factory function to create a memory store from configuration.
///
/// Configuration parameters:
/// - `seed` (boolean, optional): preload the reference dataset. Defaults
///   to true to mirror the external data source.
pub fn create_store(config: &toml::Value) -> Result<Box<dyn OrderStore>, StoreError> {
	let schema = Schema::new(vec![], vec![Field::new("seed", FieldType::Boolean)]);
	schema
		.validate(config)
		.map_err(|e| StoreError::Configuration(e.to_string()))?;

	let seed = config
		.get("seed")
		.and_then(|v| v.as_bool())
		.unwrap_or(true);

	if seed {
		Ok(Box::new(MemoryStore::seeded()))
	} else {
		Ok(Box::new(MemoryStore::new()))
	}
}
