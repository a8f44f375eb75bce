//! Client types for WooCommerce API communication.
//!
//! This module provides the transport layer resources delegate to. It
//! handles authentication, request/response processing and error typing.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for one store
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`rest::WooCommerceClient`]: The shared client that executes resource request descriptors
//! - [`rest::RestError`]: Error type returned to resource callers
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new("/wp-json/wc/v3", &config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "products")
//!     .query_param("per_page", "20")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, InvalidResponseBodyError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::{RestError, WooCommerceClient};
