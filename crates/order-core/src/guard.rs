//! Status-based mutation rules for orders.
//!
//! An order that has been handed to the carrier can no longer be changed
//! or deleted through the API. The guard is a pure function over the
//! current status; it never touches the store.

use order_types::{codes, ApiError, OrderStatus};

/// The mutation an order is about to undergo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
	/// Overwrite the mutable fields of the order.
	Update,
	/// Remove the order.
	Delete,
}

/// Checks whether the given transition is permitted for an order in the
/// given status.
///
/// Orders with status `Transferred`, `Shipped` or `Delivered` reject both
/// transitions. The error keeps the internal-error classification of the
/// upstream contract.
///
/// # Errors
///
/// Returns an [`ApiError`] carrying the transition-specific message key
/// when the status blocks the mutation.
pub fn ensure_permitted(status: OrderStatus, transition: Transition) -> Result<(), ApiError> {
	match status {
		OrderStatus::Transferred | OrderStatus::Shipped | OrderStatus::Delivered => {
			let code = match transition {
				Transition::Update => codes::ORDER_UPDATE_NOT_PERMITTED_BECAUSE_OF_STATUS,
				Transition::Delete => codes::ORDER_DELETION_NOT_PERMITTED_BECAUSE_OF_STATUS,
			};
			Err(ApiError::internal(code))
		},
		OrderStatus::Created | OrderStatus::Approved => Ok(()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn created_and_approved_orders_are_mutable() {
		for status in [OrderStatus::Created, OrderStatus::Approved] {
			assert!(ensure_permitted(status, Transition::Update).is_ok());
			assert!(ensure_permitted(status, Transition::Delete).is_ok());
		}
	}

	#[test]
	fn blocked_statuses_reject_delete_with_the_deletion_key() {
		for status in [
			OrderStatus::Transferred,
			OrderStatus::Shipped,
			OrderStatus::Delivered,
		] {
			let err = ensure_permitted(status, Transition::Delete).unwrap_err();
			assert_eq!(
				err.message(),
				codes::ORDER_DELETION_NOT_PERMITTED_BECAUSE_OF_STATUS
			);
			assert_eq!(err.status_code(), 500);
		}
	}

	#[test]
	fn blocked_statuses_reject_update_with_the_update_key() {
		for status in [
			OrderStatus::Transferred,
			OrderStatus::Shipped,
			OrderStatus::Delivered,
		] {
			let err = ensure_permitted(status, Transition::Update).unwrap_err();
			assert_eq!(
				err.message(),
				codes::ORDER_UPDATE_NOT_PERMITTED_BECAUSE_OF_STATUS
			);
			assert_eq!(err.status_code(), 500);
		}
	}
}
