//! Request payloads accepted by the HTTP endpoints.

use crate::order::{Order, OrderStatus, OrderUpdate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payload for creating a new order.
///
/// Carries the order number chosen by the caller; the status is not part
/// of the payload and is always forced to `Created` by the service.
/// Missing fields decode to their empty defaults so that the validator
/// reports the per-field message key instead of a generic decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOrderRequest {
	pub order_number: String,
	pub first_name: String,
	pub last_name: String,
	pub total_amount: Decimal,
	pub address: String,
	pub city: String,
	pub district: String,
	pub currency_code: String,
}

/// Payload for updating an existing order.
///
/// The order number is taken from the request path and is immutable, so
/// the update shape omits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateOrderRequest {
	pub first_name: String,
	pub last_name: String,
	pub total_amount: Decimal,
	pub address: String,
	pub city: String,
	pub district: String,
	pub currency_code: String,
}

impl CreateOrderRequest {
	/// Converts the payload into a new order with status `Created`.
	pub fn into_order(self) -> Order {
		Order {
			order_number: self.order_number,
			first_name: self.first_name,
			last_name: self.last_name,
			total_amount: self.total_amount,
			address: self.address,
			city: self.city,
			district: self.district,
			currency_code: self.currency_code,
			status: OrderStatus::Created,
		}
	}
}

impl From<UpdateOrderRequest> for OrderUpdate {
	fn from(request: UpdateOrderRequest) -> Self {
		OrderUpdate {
			first_name: request.first_name,
			last_name: request.last_name,
			total_amount: request.total_amount,
			address: request.address,
			city: request.city,
			district: request.district,
			currency_code: request.currency_code,
		}
	}
}
