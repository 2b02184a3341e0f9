//! Message keys returned to API consumers.
//!
//! Every failure surfaced by the API carries one of these fixed keys so
//! that clients can match on them without parsing free-form text. The keys
//! are part of the public contract and must not be changed.

pub const ORDER_NUMBER_IS_NOT_VALID: &str = "order.number.is.not.valid";
pub const FIRST_NAME_IS_NOT_VALID: &str = "first.name.is.not.valid";
pub const LAST_NAME_IS_NOT_VALID: &str = "last.name.is.not.valid";
pub const TOTAL_AMOUNT_IS_NOT_VALID: &str = "total.amount.is.not.valid";
pub const ADDRESS_IS_NOT_VALID: &str = "address.is.not.valid";
pub const CITY_IS_NOT_VALID: &str = "city.is.not.valid";
pub const DISTRICT_IS_NOT_VALID: &str = "district.is.not.valid";
pub const CURRENCY_CODE_IS_NOT_VALID: &str = "currency.code.is.not.valid";
pub const ORDER_NOT_FOUND_BY_ORDER_NUMBER: &str = "order.not.found.by.order.number";
pub const ORDER_DELETION_NOT_PERMITTED_BECAUSE_OF_STATUS: &str =
	"order.deletion.not.permitted.because.of.status";
pub const ORDER_UPDATE_NOT_PERMITTED_BECAUSE_OF_STATUS: &str =
	"order.update.not.permitted.because.of.status";
pub const SAME_ORDER_FOUND_BY_UNIQUE_ID: &str = "same.order.found.by.unique.id";
pub const CREATE_ORDER_REQUEST_IS_NOT_VALID: &str = "create.order.request.is.not.valid";
pub const UPDATE_ORDER_REQUEST_IS_NOT_VALID: &str = "update.order.request.is.not.valid";
