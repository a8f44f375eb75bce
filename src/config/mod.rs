//! Configuration types for the WooCommerce API client.
//!
//! # Overview
//!
//! - [`WooCommerceConfig`]: The configuration holding store and credential settings
//! - [`WooCommerceConfigBuilder`]: A builder for constructing [`WooCommerceConfig`] instances
//! - [`ConsumerKey`] / [`ConsumerSecret`]: Validated REST API credentials
//! - [`StoreUrl`]: A validated store root URL
//! - [`ApiVersion`]: The WooCommerce API version to use
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::{WooCommerceConfig, StoreUrl, ConsumerKey, ConsumerSecret, ApiVersion};
//!
//! let config = WooCommerceConfig::builder()
//!     .store_url(StoreUrl::new("https://shop.example.com").unwrap())
//!     .consumer_key(ConsumerKey::new("ck_1234").unwrap())
//!     .consumer_secret(ConsumerSecret::new("cs_1234").unwrap())
//!     .api_version(ApiVersion::V3)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

use std::time::Duration;

pub use newtypes::{ConsumerKey, ConsumerSecret, StoreUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the WooCommerce API client.
///
/// `WooCommerceConfig` is `Clone`, `Send`, and `Sync`, so one configuration
/// can back any number of clients.
///
/// # Authentication
///
/// By default credentials are sent with HTTP Basic auth. Some hosts strip the
/// `Authorization` header; for those set
/// [`query_string_auth`](WooCommerceConfigBuilder::query_string_auth) to send
/// `consumer_key` and `consumer_secret` as query parameters instead.
#[derive(Clone, Debug)]
pub struct WooCommerceConfig {
    store_url: StoreUrl,
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
    api_version: ApiVersion,
    timeout: Duration,
    verify_ssl: bool,
    query_string_auth: bool,
    user_agent_prefix: Option<String>,
}

impl WooCommerceConfig {
    /// Creates a new builder for constructing a `WooCommerceConfig`.
    #[must_use]
    pub fn builder() -> WooCommerceConfigBuilder {
        WooCommerceConfigBuilder::new()
    }

    /// Returns the store URL.
    #[must_use]
    pub const fn store_url(&self) -> &StoreUrl {
        &self.store_url
    }

    /// Returns the consumer key.
    #[must_use]
    pub const fn consumer_key(&self) -> &ConsumerKey {
        &self.consumer_key
    }

    /// Returns the consumer secret.
    #[must_use]
    pub const fn consumer_secret(&self) -> &ConsumerSecret {
        &self.consumer_secret
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns whether TLS certificates are verified.
    #[must_use]
    pub const fn verify_ssl(&self) -> bool {
        self.verify_ssl
    }

    /// Returns whether credentials are sent as query parameters.
    #[must_use]
    pub const fn query_string_auth(&self) -> bool {
        self.query_string_auth
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify WooCommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WooCommerceConfig>();
};

/// Builder for constructing [`WooCommerceConfig`] instances.
///
/// Required fields are `store_url`, `consumer_key` and `consumer_secret`.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest()`]
/// - `timeout`: 30 seconds
/// - `verify_ssl`: `true`
/// - `query_string_auth`: `false`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct WooCommerceConfigBuilder {
    store_url: Option<StoreUrl>,
    consumer_key: Option<ConsumerKey>,
    consumer_secret: Option<ConsumerSecret>,
    api_version: Option<ApiVersion>,
    timeout: Option<Duration>,
    verify_ssl: Option<bool>,
    query_string_auth: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl WooCommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store URL (required).
    #[must_use]
    pub fn store_url(mut self, url: StoreUrl) -> Self {
        self.store_url = Some(url);
        self
    }

    /// Sets the consumer key (required).
    #[must_use]
    pub fn consumer_key(mut self, key: ConsumerKey) -> Self {
        self.consumer_key = Some(key);
        self
    }

    /// Sets the consumer secret (required).
    #[must_use]
    pub fn consumer_secret(mut self, secret: ConsumerSecret) -> Self {
        self.consumer_secret = Some(secret);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enables or disables TLS certificate verification.
    ///
    /// Only disable this for local development against self-signed stores.
    #[must_use]
    pub const fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = Some(verify);
        self
    }

    /// Sends credentials as query parameters instead of HTTP Basic auth.
    #[must_use]
    pub const fn query_string_auth(mut self, enabled: bool) -> Self {
        self.query_string_auth = Some(enabled);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`WooCommerceConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_url`,
    /// `consumer_key` or `consumer_secret` is not set.
    pub fn build(self) -> Result<WooCommerceConfig, ConfigError> {
        let store_url = self
            .store_url
            .ok_or(ConfigError::MissingRequiredField { field: "store_url" })?;
        let consumer_key = self.consumer_key.ok_or(ConfigError::MissingRequiredField {
            field: "consumer_key",
        })?;
        let consumer_secret = self
            .consumer_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_secret",
            })?;

        Ok(WooCommerceConfig {
            store_url,
            consumer_key,
            consumer_secret,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            verify_ssl: self.verify_ssl.unwrap_or(true),
            query_string_auth: self.query_string_auth.unwrap_or(false),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
