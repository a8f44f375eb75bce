//! # WooCommerce API Rust Client
//!
//! A Rust client for the WooCommerce REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`WooCommerceConfig`] and [`WooCommerceConfigBuilder`]
//! - Validated newtypes for credentials and the store URL
//! - Support for the WP REST API (`/wp-json/wc/vN`) and the legacy API (`/wc-api/vN`)
//! - An async HTTP client with HTTP Basic or query-string authentication
//! - Resource adapters, starting with [`rest::Products`], that map method calls
//!   onto request descriptors executed by a shared [`WooCommerceClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use woocommerce_api::{WooCommerceConfig, StoreUrl, ConsumerKey, ConsumerSecret, ApiVersion};
//!
//! let config = WooCommerceConfig::builder()
//!     .store_url(StoreUrl::new("https://shop.example.com").unwrap())
//!     .consumer_key(ConsumerKey::new("ck_your_key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("cs_your_secret").unwrap())
//!     .api_version(ApiVersion::V3)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Working with Products
//!
//! ```rust,ignore
//! use woocommerce_api::WooCommerceClient;
//! use woocommerce_api::rest::{ProductQuery, ProductRef, ProductStatus};
//! use serde_json::json;
//!
//! let client = WooCommerceClient::new(&config)?;
//! let products = client.products();
//!
//! // GET /products?status=publish
//! let listed = products
//!     .get(None, Some(ProductQuery { status: Some(ProductStatus::Publish), ..Default::default() }))
//!     .await?;
//!
//! // GET /products/794
//! let one = products.get(Some(ProductRef::Id(794)), None).await?;
//!
//! // PUT /products/794
//! products.update(794, json!({"regular_price": "24.54"})).await?;
//!
//! // DELETE /products/794?force=true
//! products.delete(794, true).await?;
//!
//! // GET /products/categories/9
//! let category = products.get_category(Some(9)).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Pass-through resources**: Resources build descriptors; errors come from the client unchanged

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use config::{
    ApiVersion, ConsumerKey, ConsumerSecret, StoreUrl, WooCommerceConfig, WooCommerceConfigBuilder,
};
pub use error::ConfigError;

pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, InvalidResponseBodyError, RestError,
    WooCommerceClient,
};

pub use rest::{Products, RequestDescriptor, RequestExecutor, Resource};
