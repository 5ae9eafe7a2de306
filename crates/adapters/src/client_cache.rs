//! HTTP client cache for optimized connection management
//!
//! Provides per-endpoint client instances with connection pooling and
//! keep-alive optimization.

use dashmap::DashMap;
use ponia_types::{AggregatorError, AggregatorResult, AggregatorRuntimeConfig};
use reqwest::{Client, ClientBuilder};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Configuration for creating optimized HTTP clients
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientConfig {
	/// Base endpoint of the aggregator
	pub base_url: String,
	/// Maximum number of idle connections per host
	pub max_idle_per_host: usize,
	/// Connection keep-alive timeout
	pub keep_alive_timeout_ms: u64,
	/// Per-request timeout
	pub request_timeout_ms: u64,
	/// Additional headers (referral tags, API keys)
	pub headers: Vec<(String, String)>,
}

impl From<&AggregatorRuntimeConfig> for ClientConfig {
	fn from(config: &AggregatorRuntimeConfig) -> Self {
		let mut headers = vec![
			("User-Agent".to_string(), "Ponia-Swap/1.0".to_string()),
			("Accept".to_string(), "application/json".to_string()),
		];

		if let Some(extra) = &config.headers {
			for (key, value) in extra {
				headers.push((key.clone(), value.clone()));
			}
		}

		Self {
			base_url: config.endpoint.clone(),
			max_idle_per_host: 10,
			keep_alive_timeout_ms: 90_000,
			request_timeout_ms: 30_000,
			headers,
		}
	}
}

/// Cached client with creation timestamp for TTL management
#[derive(Debug, Clone)]
struct CachedClient {
	client: Arc<Client>,
	created_at: Instant,
}

impl CachedClient {
	fn new(client: Client) -> Self {
		Self {
			client: Arc::new(client),
			created_at: Instant::now(),
		}
	}

	fn is_expired(&self, ttl: Duration) -> bool {
		self.created_at.elapsed() > ttl
	}
}

/// Thread-safe cache for HTTP clients keyed by endpoint configuration
#[derive(Clone, Debug)]
pub struct ClientCache {
	clients: Arc<DashMap<ClientConfig, CachedClient>>,
	ttl: Duration,
}

impl ClientCache {
	/// Create a new client cache with default 30-minute TTL
	pub fn new() -> Self {
		Self {
			clients: Arc::new(DashMap::new()),
			ttl: Duration::from_secs(30 * 60),
		}
	}

	/// Create a new client cache with custom TTL
	pub fn with_ttl(ttl: Duration) -> Self {
		Self {
			clients: Arc::new(DashMap::new()),
			ttl,
		}
	}

	/// Get or create an optimized client for the given configuration
	pub fn get_client(&self, config: &ClientConfig) -> AggregatorResult<Arc<Client>> {
		// Atomic check and removal of an expired client
		self.clients.remove_if(config, |_, cached_client| {
			let is_expired = cached_client.is_expired(self.ttl);
			if is_expired {
				warn!(
					"Client cache expired for {} (age: {:?}), will create new client",
					config.base_url,
					cached_client.created_at.elapsed()
				);
			}
			is_expired
		});

		if let Some(cached_client_ref) = self.clients.get(config) {
			let cached_client = cached_client_ref.value();
			debug!(
				"Reusing cached client for {} (age: {:?})",
				config.base_url,
				cached_client.created_at.elapsed()
			);
			return Ok(cached_client.client.clone());
		}

		debug!("Creating new optimized client for {}", config.base_url);
		let client = Self::create_optimized_client(config)?;
		let cached_client = CachedClient::new(client);
		let client_arc = cached_client.client.clone();

		// Entry API handles two tasks racing to insert the same config
		use dashmap::mapref::entry::Entry;

		match self.clients.entry(config.clone()) {
			Entry::Occupied(entry) => Ok(entry.get().client.clone()),
			Entry::Vacant(entry) => {
				entry.insert(cached_client);
				Ok(client_arc)
			},
		}
	}

	fn create_optimized_client(config: &ClientConfig) -> AggregatorResult<Client> {
		let mut builder = ClientBuilder::new()
			.pool_max_idle_per_host(config.max_idle_per_host)
			.pool_idle_timeout(Duration::from_millis(config.keep_alive_timeout_ms))
			.timeout(Duration::from_millis(config.request_timeout_ms))
			.tcp_keepalive(Duration::from_secs(60));

		let mut header_map = reqwest::header::HeaderMap::new();
		for (key, value) in &config.headers {
			if let (Ok(header_name), Ok(header_value)) = (
				reqwest::header::HeaderName::from_bytes(key.as_bytes()),
				reqwest::header::HeaderValue::from_str(value),
			) {
				header_map.insert(header_name, header_value);
			}
		}
		builder = builder.default_headers(header_map);

		builder.build().map_err(AggregatorError::Http)
	}

	/// Remove all expired clients from the cache
	pub fn cleanup_expired(&self) -> usize {
		let mut removed_count = 0;

		self.clients.retain(|config, cached_client| {
			let is_expired = cached_client.is_expired(self.ttl);
			if is_expired {
				removed_count += 1;
				debug!(
					"Removed expired client for {} (age: {:?})",
					config.base_url,
					cached_client.created_at.elapsed()
				);
			}
			!is_expired
		});

		removed_count
	}

	/// Clear the cache (useful for testing or memory management)
	pub fn clear(&self) {
		self.clients.clear();
	}

	/// Get the configured TTL duration
	pub fn ttl(&self) -> Duration {
		self.ttl
	}

	/// Convenience constructor for adapter implementations
	pub fn for_adapter() -> Self {
		global_client_cache().clone()
	}
}

impl Default for ClientCache {
	fn default() -> Self {
		Self::new()
	}
}

lazy_static::lazy_static! {
	static ref GLOBAL_CLIENT_CACHE: ClientCache = ClientCache::new();
}

/// Get the global client cache instance
pub fn global_client_cache() -> &'static ClientCache {
	&GLOBAL_CLIENT_CACHE
}

#[cfg(test)]
mod tests {
	use super::*;

	fn test_config(base_url: &str) -> ClientConfig {
		ClientConfig {
			base_url: base_url.to_string(),
			max_idle_per_host: 5,
			keep_alive_timeout_ms: 60_000,
			request_timeout_ms: 5_000,
			headers: vec![],
		}
	}

	#[test]
	fn test_client_config_from_runtime_config() {
		let runtime = AggregatorRuntimeConfig::new("https://dln.example.com/v1.0");
		let config = ClientConfig::from(&runtime);

		assert_eq!(config.base_url, "https://dln.example.com/v1.0");
		assert_eq!(config.max_idle_per_host, 10);
		assert!(config
			.headers
			.iter()
			.any(|(key, _)| key == "User-Agent"));
	}

	#[tokio::test]
	async fn test_client_cache_reuse() {
		let cache = ClientCache::new();
		let config = test_config("https://test.com");

		let client1 = cache.get_client(&config).unwrap();
		let client2 = cache.get_client(&config).unwrap();

		// Same Arc instance while the entry is fresh
		assert!(Arc::ptr_eq(&client1, &client2));
	}

	#[tokio::test]
	async fn test_client_cache_ttl_expiration() {
		let cache = ClientCache::with_ttl(Duration::from_millis(50));
		let config = test_config("https://test-ttl.com");

		let client1 = cache.get_client(&config).unwrap();
		tokio::time::sleep(Duration::from_millis(100)).await;
		let client2 = cache.get_client(&config).unwrap();

		// Expired and recreated
		assert!(!Arc::ptr_eq(&client1, &client2));
	}

	#[tokio::test]
	async fn test_cleanup_expired() {
		let cache = ClientCache::with_ttl(Duration::from_millis(10));
		let config = test_config("https://cleanup.com");

		cache.get_client(&config).unwrap();
		tokio::time::sleep(Duration::from_millis(50)).await;

		assert_eq!(cache.cleanup_expired(), 1);
	}
}
