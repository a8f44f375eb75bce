//! HTTP-specific error types for the WooCommerce API client.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the store
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`InvalidResponseBodyError`]: When a successful response is not JSON
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::InvalidBody(e)) => println!("Unexpected body: {}", e.body),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the store answers with a non-successful status.
///
/// WooCommerce reports failures as `{"code": "...", "message": "..."}` on the
/// WP REST API and as `{"errors": [{"code": "...", "message": "..."}]}` on the
/// legacy API. Both shapes populate `error_code` and `message`.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     error_code: Some("woocommerce_rest_product_invalid_id".to_string()),
///     message: "Invalid ID.".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Error 404 (woocommerce_rest_product_invalid_id): Invalid ID.");
/// ```
#[derive(Debug, Error)]
#[error("Error {code}{}: {message}", format_error_code(.error_code.as_deref()))]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The platform error code (e.g. `woocommerce_rest_product_invalid_id`).
    pub error_code: Option<String>,
    /// Human readable error message.
    pub message: String,
}

fn format_error_code(error_code: Option<&str>) -> String {
    error_code.map(|c| format!(" ({c})")).unwrap_or_default()
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Error returned when a 2xx response carries a body that is not JSON.
///
/// Usually an HTML page: a redirect, a maintenance page, or a site with
/// pretty permalinks disabled so `/wp-json` is never routed to the API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Response {code} is not valid JSON: {body}")]
pub struct InvalidResponseBodyError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A successful response whose body could not be parsed.
    #[error(transparent)]
    InvalidBody(#[from] InvalidResponseBodyError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
