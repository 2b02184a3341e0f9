//! HTTP server for the order API.
//!
//! This module maps the REST surface onto the order service: routing,
//! path-parameter checks and body decoding live here, while every business
//! decision stays in `order-core`. Failures are answered with the shared
//! `{ message, statusCode }` error body.

use axum::{
	body::Bytes,
	extract::{Path, State},
	http::StatusCode,
	response::Json,
	routing::get,
	Router,
};
use order_config::ServerConfig;
use order_core::OrderService;
use order_types::{codes, ApiError, CreateOrderRequest, Order, UpdateOrderRequest};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

/// Shared application state for the API server.
#[derive(Clone)]
pub struct AppState {
	/// Reference to the order service for processing requests.
	pub service: Arc<OrderService>,
}

/// Builds the router for the order endpoints.
pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/orders", get(list_orders).post(create_order))
		.route(
			"/orders/{orderNumber}",
			get(get_order).put(update_order).delete(delete_order),
		)
		.layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
		.with_state(state)
}

/// Starts the HTTP server for the API.
pub async fn start_server(
	config: ServerConfig,
	service: Arc<OrderService>,
) -> Result<(), Box<dyn std::error::Error>> {
	let app = router(AppState { service });

	let bind_address = format!("{}:{}", config.host, config.port);
	let listener = TcpListener::bind(&bind_address).await?;

	tracing::info!("Order API server starting on {}", bind_address);

	axum::serve(listener, app).await?;

	Ok(())
}

/// Rejects blank path parameters before they reach the service.
fn require_order_number(raw: &str) -> Result<&str, ApiError> {
	if raw.trim().is_empty() {
		return Err(ApiError::bad_request(codes::ORDER_NUMBER_IS_NOT_VALID));
	}
	Ok(raw)
}

/// Handles GET /orders requests.
async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
	match state.service.list_orders().await {
		Ok(orders) => Ok(Json(orders)),
		Err(e) => {
			tracing::warn!("Listing orders failed: {}", e);
			Err(e)
		},
	}
}

/// Handles GET /orders/{orderNumber} requests.
async fn get_order(
	State(state): State<AppState>,
	Path(order_number): Path<String>,
) -> Result<Json<Order>, ApiError> {
	let order_number = require_order_number(&order_number)?;

	match state.service.get_order(order_number).await {
		Ok(Some(order)) => Ok(Json(order)),
		Ok(None) => Err(ApiError::not_found(codes::ORDER_NOT_FOUND_BY_ORDER_NUMBER)),
		Err(e) => {
			tracing::warn!("Order retrieval failed: {}", e);
			Err(e)
		},
	}
}

/// Handles POST /orders requests.
async fn create_order(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<StatusCode, ApiError> {
	let request: CreateOrderRequest = serde_json::from_slice(&body)
		.map_err(|_| ApiError::bad_request(codes::CREATE_ORDER_REQUEST_IS_NOT_VALID))?;

	match state.service.create_order(request).await {
		Ok(()) => Ok(StatusCode::CREATED),
		Err(e) => {
			tracing::warn!("Order creation failed: {}", e);
			Err(e)
		},
	}
}

/// Handles PUT /orders/{orderNumber} requests.
async fn update_order(
	State(state): State<AppState>,
	Path(order_number): Path<String>,
	body: Bytes,
) -> Result<StatusCode, ApiError> {
	let order_number = require_order_number(&order_number)?;

	let request: UpdateOrderRequest = serde_json::from_slice(&body)
		.map_err(|_| ApiError::bad_request(codes::UPDATE_ORDER_REQUEST_IS_NOT_VALID))?;

	match state.service.update_order(order_number, request).await {
		Ok(()) => Ok(StatusCode::NO_CONTENT),
		Err(e) => {
			tracing::warn!("Order update failed: {}", e);
			Err(e)
		},
	}
}

/// Handles DELETE /orders/{orderNumber} requests.
async fn delete_order(
	State(state): State<AppState>,
	Path(order_number): Path<String>,
) -> Result<StatusCode, ApiError> {
	let order_number = require_order_number(&order_number)?;

	match state.service.delete_order(order_number).await {
		Ok(()) => Ok(StatusCode::NO_CONTENT),
		Err(e) => {
			tracing::warn!("Order deletion failed: {}", e);
			Err(e)
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::body::Body;
	use axum::http::Request;
	use order_storage::implementations::memory::MemoryStore;
	use order_storage::OrderStore;
	use order_types::OrderStatus;
	use rust_decimal::Decimal;
	use tower::ServiceExt;

	fn app_with(store: MemoryStore) -> Router {
		let service = Arc::new(OrderService::new(Arc::new(store)));
		router(AppState { service })
	}

	async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
		let response = app.oneshot(request).await.unwrap();
		let status = response.status();
		let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
			.await
			.unwrap();
		let value = if bytes.is_empty() {
			serde_json::Value::Null
		} else {
			serde_json::from_slice(&bytes).unwrap()
		};
		(status, value)
	}

	fn get(uri: &str) -> Request<Body> {
		Request::builder().uri(uri).body(Body::empty()).unwrap()
	}

	fn with_body(method: &str, uri: &str, body: &str) -> Request<Body> {
		Request::builder()
			.method(method)
			.uri(uri)
			.header("content-type", "application/json")
			.body(Body::from(body.to_string()))
			.unwrap()
	}

	const CREATE_BODY: &str = r#"{
		"orderNumber": "1",
		"firstName": "Test",
		"lastName": "Sample",
		"totalAmount": 10.2,
		"address": "address",
		"city": "İstanbul",
		"district": "Bakırköy",
		"currencyCode": "TRY"
	}"#;

	const UPDATE_BODY: &str = r#"{
		"firstName": "Updated",
		"lastName": "Name",
		"totalAmount": 20.5,
		"address": "new address",
		"city": "Ankara",
		"district": "Çankaya",
		"currencyCode": "EUR"
	}"#;

	#[tokio::test]
	async fn list_returns_the_seeded_orders() {
		let (status, body) = send(app_with(MemoryStore::seeded()), get("/orders")).await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body.as_array().unwrap().len(), 3);
	}

	#[tokio::test]
	async fn get_returns_a_single_order() {
		let (status, body) = send(app_with(MemoryStore::seeded()), get("/orders/1")).await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["orderNumber"], "1");
		assert_eq!(body["firstName"], "Ahmet");
		assert_eq!(body["statusId"], 2);
	}

	#[tokio::test]
	async fn get_of_unknown_order_is_404() {
		let (status, body) = send(app_with(MemoryStore::seeded()), get("/orders/999")).await;

		assert_eq!(status, StatusCode::NOT_FOUND);
		assert_eq!(body["message"], "order.not.found.by.order.number");
		assert_eq!(body["statusCode"], 404);
	}

	#[tokio::test]
	async fn get_with_blank_order_number_is_400() {
		let (status, body) = send(app_with(MemoryStore::seeded()), get("/orders/%20")).await;

		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body["message"], "order.number.is.not.valid");
	}

	#[tokio::test]
	async fn created_order_can_be_fetched_back() {
		let service = Arc::new(OrderService::new(Arc::new(MemoryStore::new())));
		let state = AppState { service };

		let (status, _) = send(
			router(state.clone()),
			with_body("POST", "/orders", CREATE_BODY),
		)
		.await;
		assert_eq!(status, StatusCode::CREATED);

		let (status, body) = send(router(state), get("/orders/1")).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["orderNumber"], "1");
		assert_eq!(body["firstName"], "Test");
		assert_eq!(body["lastName"], "Sample");
		assert_eq!(body["totalAmount"], 10.2);
		assert_eq!(body["address"], "address");
		assert_eq!(body["city"], "İstanbul");
		assert_eq!(body["district"], "Bakırköy");
		assert_eq!(body["currencyCode"], "TRY");
		assert_eq!(body["statusId"], 1);
	}

	#[tokio::test]
	async fn creating_a_duplicate_order_is_409() {
		let (status, body) = send(
			app_with(MemoryStore::seeded()),
			with_body("POST", "/orders", CREATE_BODY),
		)
		.await;

		assert_eq!(status, StatusCode::CONFLICT);
		assert_eq!(body["message"], "same.order.found.by.unique.id");
		assert_eq!(body["statusCode"], 409);
	}

	#[tokio::test]
	async fn create_with_missing_field_reports_the_field_key() {
		let (status, body) = send(
			app_with(MemoryStore::new()),
			with_body("POST", "/orders", r#"{"orderNumber": "9"}"#),
		)
		.await;

		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body["message"], "first.name.is.not.valid");
	}

	#[tokio::test]
	async fn create_with_malformed_body_is_400() {
		let (status, body) = send(
			app_with(MemoryStore::new()),
			with_body("POST", "/orders", "not json"),
		)
		.await;

		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body["message"], "create.order.request.is.not.valid");
	}

	#[tokio::test]
	async fn create_with_non_positive_amount_is_400() {
		let body_json = CREATE_BODY.replace("10.2", "-12.13");
		let (status, body) = send(
			app_with(MemoryStore::new()),
			with_body("POST", "/orders", &body_json),
		)
		.await;

		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body["message"], "total.amount.is.not.valid");
	}

	#[tokio::test]
	async fn update_overwrites_an_approved_order() {
		let service = Arc::new(OrderService::new(Arc::new(MemoryStore::seeded())));
		let state = AppState { service };

		let (status, _) = send(
			router(state.clone()),
			with_body("PUT", "/orders/1", UPDATE_BODY),
		)
		.await;
		assert_eq!(status, StatusCode::NO_CONTENT);

		let (_, body) = send(router(state), get("/orders/1")).await;
		assert_eq!(body["firstName"], "Updated");
		assert_eq!(body["city"], "Ankara");
		// The status is never touched by an update.
		assert_eq!(body["statusId"], 2);
	}

	#[tokio::test]
	async fn update_of_transferred_order_is_blocked() {
		let (status, body) = send(
			app_with(MemoryStore::seeded()),
			with_body("PUT", "/orders/2", UPDATE_BODY),
		)
		.await;

		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(
			body["message"],
			"order.update.not.permitted.because.of.status"
		);
	}

	#[tokio::test]
	async fn update_of_unknown_order_is_404() {
		let (status, body) = send(
			app_with(MemoryStore::seeded()),
			with_body("PUT", "/orders/999", UPDATE_BODY),
		)
		.await;

		assert_eq!(status, StatusCode::NOT_FOUND);
		assert_eq!(body["message"], "order.not.found.by.order.number");
	}

	#[tokio::test]
	async fn update_with_malformed_body_is_400() {
		let (status, body) = send(
			app_with(MemoryStore::seeded()),
			with_body("PUT", "/orders/1", "{"),
		)
		.await;

		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body["message"], "update.order.request.is.not.valid");
	}

	#[tokio::test]
	async fn delete_removes_a_mutable_order() {
		let service = Arc::new(OrderService::new(Arc::new(MemoryStore::seeded())));
		let state = AppState { service };

		let request = Request::builder()
			.method("DELETE")
			.uri("/orders/1")
			.body(Body::empty())
			.unwrap();
		let (status, _) = send(router(state.clone()), request).await;
		assert_eq!(status, StatusCode::NO_CONTENT);

		let (status, _) = send(router(state), get("/orders/1")).await;
		assert_eq!(status, StatusCode::NOT_FOUND);
	}

	#[tokio::test]
	async fn delete_of_shipped_order_is_blocked() {
		let store = MemoryStore::new();
		store
			.insert(Order {
				order_number: "123456".to_string(),
				first_name: "George".to_string(),
				last_name: "White".to_string(),
				total_amount: "163.99".parse::<Decimal>().unwrap(),
				address: "Ut enim ad minima veniam, quis nostrum".to_string(),
				city: "London".to_string(),
				district: "Birmingham".to_string(),
				currency_code: "EUR".to_string(),
				status: OrderStatus::Shipped,
			})
			.await
			.unwrap();

		let request = Request::builder()
			.method("DELETE")
			.uri("/orders/123456")
			.body(Body::empty())
			.unwrap();
		let (status, body) = send(app_with(store), request).await;

		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(
			body["message"],
			"order.deletion.not.permitted.because.of.status"
		);
		assert_eq!(body["statusCode"], 500);
	}

	#[tokio::test]
	async fn delete_of_unknown_order_is_404() {
		let request = Request::builder()
			.method("DELETE")
			.uri("/orders/999")
			.body(Body::empty())
			.unwrap();
		let (status, body) = send(app_with(MemoryStore::seeded()), request).await;

		assert_eq!(status, StatusCode::NOT_FOUND);
		assert_eq!(body["message"], "order.not.found.by.order.number");
	}
}
