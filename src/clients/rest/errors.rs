//! Errors returned by the REST executor.
//!
//! - [`RestError::InvalidPath`]: When a request path is empty after normalization
//! - [`RestError::InvalidParams`]: When request arguments cannot be turned into a query string
//! - [`RestError::Http`]: Wraps underlying HTTP errors unchanged
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::clients::rest::RestError;
//!
//! match client.products().get(Some(42.into()), None).await {
//!     Ok(response) => println!("Product: {}", response.body),
//!     Err(RestError::InvalidPath { path }) => println!("Invalid path: {path}"),
//!     Err(RestError::InvalidParams { message }) => println!("Bad arguments: {message}"),
//!     Err(RestError::Http(e)) => println!("HTTP error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is invalid.
    ///
    /// Returned when a path is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// Request arguments could not be serialized into query parameters.
    #[error("Invalid request parameters: {message}")]
    InvalidParams {
        /// The serialization failure.
        message: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, InvalidHttpRequestError};

    #[test]
    fn test_invalid_path_error_includes_path_in_message() {
        let error = RestError::InvalidPath {
            path: "//".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid REST API path: //");
    }

    #[test]
    fn test_http_error_message_passes_through() {
        let rest_error = RestError::Http(HttpError::Response(HttpResponseError {
            code: 404,
            error_code: Some("woocommerce_rest_product_invalid_id".to_string()),
            message: "Invalid ID.".to_string(),
        }));

        assert_eq!(
            rest_error.to_string(),
            "Error 404 (woocommerce_rest_product_invalid_id): Invalid ID."
        );
    }

    #[test]
    fn test_from_http_error_conversion() {
        let http_error = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        });

        let rest_error: RestError = http_error.into();

        assert!(matches!(
            rest_error,
            RestError::Http(HttpError::InvalidRequest(_))
        ));
    }
}
