//! HTTP client for WooCommerce API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to a store.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError, InvalidResponseBodyError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{ConsumerKey, ConsumerSecret, WooCommerceConfig};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the WooCommerce API.
///
/// The client handles:
/// - Base URI construction from the configured store URL
/// - Default headers including `User-Agent` and `Accept`
/// - Credentials, either as HTTP Basic auth or as query parameters
/// - Mapping non-2xx responses onto [`HttpResponseError`]
///
/// Requests are sent exactly once; there is no retry logic.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Store root (e.g., `https://shop.example.com`).
    base_uri: String,
    /// API base path (e.g., `/wp-json/wc/v3`).
    base_path: String,
    default_headers: HashMap<String, String>,
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
    query_string_auth: bool,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the configured store.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The API base path (e.g., "/wp-json/wc/v3")
    /// * `config` - Store URL, credentials and transport settings
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS backend initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use woocommerce_api::{WooCommerceConfig, StoreUrl, ConsumerKey, ConsumerSecret};
    /// use woocommerce_api::clients::HttpClient;
    ///
    /// let config = WooCommerceConfig::builder()
    ///     .store_url(StoreUrl::new("https://shop.example.com").unwrap())
    ///     .consumer_key(ConsumerKey::new("ck_1234").unwrap())
    ///     .consumer_secret(ConsumerSecret::new("cs_1234").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new("/wp-json/wc/v3", &config).unwrap();
    /// assert_eq!(client.base_uri(), "https://shop.example.com");
    /// ```
    pub fn new(
        base_path: impl Into<String>,
        config: &WooCommerceConfig,
    ) -> Result<Self, HttpError> {
        let base_path = base_path.into();
        let base_uri = config.store_url().as_ref().to_string();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}WooCommerce API Client-Rust/{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if !config.store_url().is_https() {
            tracing::warn!(
                store_url = %config.store_url(),
                "WooCommerce credentials will be sent over plain HTTP; use an https store URL"
            );
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .danger_accept_invalid_certs(!config.verify_ssl())
            .build()?;

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
            consumer_key: config.consumer_key().clone(),
            consumer_secret: config.consumer_secret().clone(),
            query_string_auth: config.query_string_auth(),
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL a request path resolves to, without query string.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}/{}", self.base_uri, self.base_path, path)
    }

    /// Sends an HTTP request to the store.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A 2xx response body is not JSON (`InvalidBody`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut query = request.query.clone().unwrap_or_default();
        if self.query_string_auth {
            query.insert(
                "consumer_key".to_string(),
                self.consumer_key.as_ref().to_string(),
            );
            query.insert(
                "consumer_secret".to_string(),
                self.consumer_secret.as_ref().to_string(),
            );
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if !query.is_empty() {
            req_builder = req_builder.query(&query);
        }

        if !self.query_string_auth {
            req_builder = req_builder.basic_auth(
                self.consumer_key.as_ref(),
                Some(self.consumer_secret.as_ref()),
            );
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        tracing::debug!(
            method = request.http_method.as_str(),
            url = %url,
            "Sending request to WooCommerce API"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let body = Self::parse_body(code, body_text)?;

        tracing::debug!(status = code, path = %request.path, "Received WooCommerce API response");

        let response = HttpResponse::new(code, res_headers, body);
        if response.is_ok() {
            return Ok(response);
        }

        let (error_code, message) = response.error_details();
        Err(HttpError::Response(HttpResponseError {
            code,
            error_code,
            message,
        }))
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Parses a response body as JSON.
    ///
    /// An empty body becomes `{}`. A body that is not JSON fails a 2xx
    /// response and is kept as `{"raw_body": ...}` on any other status, where
    /// it becomes the error message.
    fn parse_body(
        code: u16,
        body_text: String,
    ) -> Result<serde_json::Value, InvalidResponseBodyError> {
        if body_text.trim().is_empty() {
            return Ok(serde_json::json!({}));
        }
        match serde_json::from_str(&body_text) {
            Ok(body) => Ok(body),
            Err(_) if (200..300).contains(&code) => Err(InvalidResponseBodyError {
                code,
                body: body_text,
            }),
            Err(_) => Ok(serde_json::json!({ "raw_body": body_text })),
        }
    }
}
