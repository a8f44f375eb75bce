//! Shared REST client for the WooCommerce API.

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, WooCommerceConfig};
use crate::rest::{Products, RequestDescriptor, RequestExecutor};

/// The shared client resources delegate to.
///
/// Owns the HTTP transport for one store and API version. Resource adapters
/// borrow it, so a single client serves any number of resources.
///
/// # Thread Safety
///
/// `WooCommerceClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use woocommerce_api::{WooCommerceClient, WooCommerceConfig, StoreUrl, ConsumerKey, ConsumerSecret};
///
/// let config = WooCommerceConfig::builder()
///     .store_url(StoreUrl::new("https://shop.example.com")?)
///     .consumer_key(ConsumerKey::new("ck_1234")?)
///     .consumer_secret(ConsumerSecret::new("cs_1234")?)
///     .build()?;
///
/// let client = WooCommerceClient::new(&config)?;
/// let count = client.products().get_count(None).await?;
/// ```
#[derive(Debug)]
pub struct WooCommerceClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

// Verify WooCommerceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WooCommerceClient>();
};

impl WooCommerceClient {
    /// Creates a client using the API version from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP transport cannot be created.
    pub fn new(config: &WooCommerceConfig) -> Result<Self, RestError> {
        Self::create_client(config, config.api_version())
    }

    /// Creates a client for a specific API version, overriding `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP transport cannot be created.
    pub fn with_version(
        config: &WooCommerceConfig,
        version: ApiVersion,
    ) -> Result<Self, RestError> {
        if version == config.api_version() {
            tracing::debug!(
                "WooCommerce client has a redundant API version override to the default {}",
                version
            );
        } else {
            tracing::debug!(
                "WooCommerce client overriding default API version {} with {}",
                config.api_version(),
                version
            );
        }

        Self::create_client(config, version)
    }

    fn create_client(
        config: &WooCommerceConfig,
        api_version: ApiVersion,
    ) -> Result<Self, RestError> {
        let http_client = HttpClient::new(api_version.base_path(), config)?;

        Ok(Self {
            http_client,
            api_version,
        })
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the API root, e.g. `https://shop.example.com/wp-json/wc/v3`.
    #[must_use]
    pub fn api_url(&self) -> String {
        format!(
            "{}{}",
            self.http_client.base_uri(),
            self.http_client.base_path()
        )
    }

    /// Returns the products resource bound to this client.
    #[must_use]
    pub const fn products(&self) -> Products<'_, Self> {
        Products::new(self)
    }
}

impl RequestExecutor for WooCommerceClient {
    async fn execute(
        &self,
        resource: &str,
        descriptor: RequestDescriptor,
    ) -> Result<HttpResponse, RestError> {
        let path = normalize_path(&descriptor.resolve_path(resource))?;

        let mut builder = HttpRequest::builder(descriptor.method, path);
        if let Some(body) = descriptor.body {
            builder = builder.body(body);
        }
        if let Some(params) = descriptor.params {
            builder = builder.query(params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Strips leading and trailing slashes, rejecting paths that end up empty.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let normalized = path.trim_matches('/');

    if normalized.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(normalized.to_string())
}
