//! The order entity and its lifecycle status.
//!
//! This module defines the central `Order` record managed by the API,
//! the fixed `OrderStatus` enumeration and the set of fields that remain
//! mutable after creation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle stage of an order.
///
/// Statuses are serialized as their integer codes (`statusId` on the wire).
/// An order is created as `Created` and is never transitioned by this
/// system; the codes mirror the upstream data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OrderStatus {
	/// Order has been created but not yet approved.
	Created = 1,
	/// Order has been approved for fulfilment.
	Approved = 2,
	/// Order has been handed over to the carrier.
	Transferred = 3,
	/// Order is on its way to the customer.
	Shipped = 4,
	/// Order has reached the customer.
	Delivered = 5,
}

impl OrderStatus {
	/// Returns the integer code used on the wire for this status.
	pub const fn code(self) -> u8 {
		self as u8
	}
}

impl From<OrderStatus> for u8 {
	fn from(status: OrderStatus) -> Self {
		status as u8
	}
}

impl TryFrom<u8> for OrderStatus {
	type Error = String;

	fn try_from(code: u8) -> Result<Self, Self::Error> {
		match code {
			1 => Ok(OrderStatus::Created),
			2 => Ok(OrderStatus::Approved),
			3 => Ok(OrderStatus::Transferred),
			4 => Ok(OrderStatus::Shipped),
			5 => Ok(OrderStatus::Delivered),
			other => Err(format!("unknown order status code: {}", other)),
		}
	}
}

impl fmt::Display for OrderStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			OrderStatus::Created => write!(f, "Created"),
			OrderStatus::Approved => write!(f, "Approved"),
			OrderStatus::Transferred => write!(f, "Transferred"),
			OrderStatus::Shipped => write!(f, "Shipped"),
			OrderStatus::Delivered => write!(f, "Delivered"),
		}
	}
}

/// The order record managed by the API.
///
/// `order_number` uniquely identifies an order and is immutable after
/// creation; `status` is assigned by the system and never changed through
/// the public endpoints. Everything else can be overwritten by an update
/// as long as the status permits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
	/// Unique identifier for this order.
	pub order_number: String,
	/// Customer first name.
	pub first_name: String,
	/// Customer last name.
	pub last_name: String,
	/// Total amount of the order, strictly positive.
	pub total_amount: Decimal,
	/// Delivery address line.
	pub address: String,
	/// Delivery city.
	pub city: String,
	/// Delivery district within the city.
	pub district: String,
	/// Currency the total amount is denominated in.
	pub currency_code: String,
	/// Current lifecycle status.
	#[serde(rename = "statusId")]
	pub status: OrderStatus,
}

/// The mutable subset of an order's fields.
///
/// Applied by the store when an update is permitted; the order number and
/// status are deliberately absent.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderUpdate {
	pub first_name: String,
	pub last_name: String,
	pub total_amount: Decimal,
	pub address: String,
	pub city: String,
	pub district: String,
	pub currency_code: String,
}

impl Order {
	/// Overwrites the mutable fields of this order in place.
	pub fn apply(&mut self, update: OrderUpdate) {
		self.first_name = update.first_name;
		self.last_name = update.last_name;
		self.total_amount = update.total_amount;
		self.address = update.address;
		self.city = update.city;
		self.district = update.district;
		self.currency_code = update.currency_code;
	}
}
