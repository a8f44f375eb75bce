//! REST executor for the WooCommerce API.
//!
//! This module provides [`WooCommerceClient`], the shared client that resource
//! adapters such as [`Products`](crate::rest::Products) forward their request
//! descriptors to.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::{WooCommerceClient, WooCommerceConfig};
//!
//! let client = WooCommerceClient::new(&config)?;
//!
//! let response = client.products().get(None, None).await?;
//! println!("Products: {}", response.body);
//! ```
//!
//! # Path Normalization
//!
//! Leading and trailing slashes are stripped from the joined
//! `{resource}/{path}` before it is appended to the API base path; an empty
//! result is rejected with [`RestError::InvalidPath`].

mod client;
mod errors;

pub use client::WooCommerceClient;
pub use errors::RestError;
