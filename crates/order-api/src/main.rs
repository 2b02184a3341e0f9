//! Main entry point for the order API service.
//!
//! This binary wires the configured store backend into the order service
//! and exposes it over HTTP. Backends are pluggable; the one named by
//! `storage.primary` in the configuration file is instantiated through
//! its registered factory.

use clap::Parser;
use order_config::Config;
use order_core::OrderService;
use order_storage::{OrderStore, StoreFactory};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

mod server;

/// Command-line arguments for the order API service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to configuration file
	#[arg(short, long, default_value = "config.toml")]
	config: PathBuf,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,
}

/// Main entry point for the order API service.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Initializes logging infrastructure
/// 3. Loads configuration from file
/// 4. Builds the order service with the configured store backend
/// 5. Serves HTTP until interrupted
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	// Initialize tracing with env filter
	use tracing_subscriber::{fmt, EnvFilter};

	// Create env filter with default from args
	let default_directive = args.log_level.to_string();
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	fmt().with_env_filter(env_filter).with_target(true).init();

	tracing::info!("Started order API");

	// Load configuration
	let config = Config::from_file_async(args.config.to_str().unwrap()).await?;
	tracing::info!("Loaded configuration [store: {}]", config.storage.primary);

	// Build the service with the configured store backend
	let store = build_store(&config)?;
	let service = Arc::new(OrderService::new(Arc::from(store)));

	server::start_server(config.server, service).await?;

	tracing::info!("Stopped order API");
	Ok(())
}

/// Instantiates the store backend named by `storage.primary`.
fn build_store(config: &Config) -> Result<Box<dyn OrderStore>, Box<dyn std::error::Error>> {
	let factories: HashMap<&str, StoreFactory> =
		order_storage::get_all_implementations().into_iter().collect();

	let factory = match factories.get(config.storage.primary.as_str()) {
		Some(factory) => factory,
		None => {
			return Err(format!(
				"unknown store implementation '{}'",
				config.storage.primary
			)
			.into())
		},
	};

	let empty = toml::Value::Table(toml::map::Map::new());
	let impl_config = config
		.storage
		.implementations
		.get(&config.storage.primary)
		.unwrap_or(&empty);

	Ok(factory(impl_config)?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use order_config::{ServerConfig, StorageConfig};

	/// Creates a minimal test configuration for unit testing
	fn create_test_config(primary: &str) -> Config {
		Config {
			server: ServerConfig::default(),
			storage: StorageConfig {
				primary: primary.to_string(),
				implementations: {
					let mut map = HashMap::new();
					map.insert(
						"memory".to_string(),
						toml::Value::Table(toml::map::Map::new()),
					);
					map
				},
			},
		}
	}

	#[test]
	fn args_default_values() {
		let args = Args {
			config: PathBuf::from("config.toml"),
			log_level: "info".to_string(),
		};

		assert_eq!(args.config, PathBuf::from("config.toml"));
		assert_eq!(args.log_level, "info");
	}

	#[tokio::test]
	async fn build_store_resolves_the_memory_backend() {
		let config = create_test_config("memory");

		let store = build_store(&config).expect("memory backend should resolve");

		// The default memory configuration serves the reference dataset.
		assert_eq!(store.fetch_all().await.unwrap().len(), 3);
	}

	#[test]
	fn build_store_rejects_unknown_backends() {
		let config = create_test_config("redis");

		assert!(build_store(&config).is_err());
	}

	#[test]
	fn registered_implementations_include_memory() {
		let names: Vec<&str> = order_storage::get_all_implementations()
			.into_iter()
			.map(|(name, _)| name)
			.collect();

		assert!(names.contains(&"memory"));
	}
}
