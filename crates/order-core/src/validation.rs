//! Field-level validation of incoming order payloads.
//!
//! Checks run in a fixed order and short-circuit on the first violation:
//! orderNumber (create only), firstName, lastName, totalAmount, address,
//! city, district, currencyCode. String fields must be non-empty after
//! trimming surrounding whitespace; the total amount must be strictly
//! positive. The reported error carries the violated field's message key.

use order_types::{codes, ApiError, CreateOrderRequest, UpdateOrderRequest};
use rust_decimal::Decimal;

/// Validates a create payload.
///
/// # Errors
///
/// Returns a bad-request [`ApiError`] with the first violated field's
/// message key.
pub fn validate_create(request: &CreateOrderRequest) -> Result<(), ApiError> {
	require_text(&request.order_number, codes::ORDER_NUMBER_IS_NOT_VALID)?;
	require_text(&request.first_name, codes::FIRST_NAME_IS_NOT_VALID)?;
	require_text(&request.last_name, codes::LAST_NAME_IS_NOT_VALID)?;
	require_positive(request.total_amount, codes::TOTAL_AMOUNT_IS_NOT_VALID)?;
	require_text(&request.address, codes::ADDRESS_IS_NOT_VALID)?;
	require_text(&request.city, codes::CITY_IS_NOT_VALID)?;
	require_text(&request.district, codes::DISTRICT_IS_NOT_VALID)?;
	require_text(&request.currency_code, codes::CURRENCY_CODE_IS_NOT_VALID)?;
	Ok(())
}

/// Validates an update payload.
///
/// Same rules as [`validate_create`] minus the order number, which comes
/// from the request path.
pub fn validate_update(request: &UpdateOrderRequest) -> Result<(), ApiError> {
	require_text(&request.first_name, codes::FIRST_NAME_IS_NOT_VALID)?;
	require_text(&request.last_name, codes::LAST_NAME_IS_NOT_VALID)?;
	require_positive(request.total_amount, codes::TOTAL_AMOUNT_IS_NOT_VALID)?;
	require_text(&request.address, codes::ADDRESS_IS_NOT_VALID)?;
	require_text(&request.city, codes::CITY_IS_NOT_VALID)?;
	require_text(&request.district, codes::DISTRICT_IS_NOT_VALID)?;
	require_text(&request.currency_code, codes::CURRENCY_CODE_IS_NOT_VALID)?;
	Ok(())
}

fn require_text(value: &str, code: &str) -> Result<(), ApiError> {
	if value.trim().is_empty() {
		return Err(ApiError::bad_request(code));
	}
	Ok(())
}

fn require_positive(amount: Decimal, code: &str) -> Result<(), ApiError> {
	if amount <= Decimal::ZERO {
		return Err(ApiError::bad_request(code));
	}
	Ok(())
}
