//! Resource layer for the WooCommerce REST API.
//!
//! Resources translate method calls into [`RequestDescriptor`]s and forward
//! them to a shared [`RequestExecutor`], normally a
//! [`WooCommerceClient`](crate::WooCommerceClient). They hold no state beyond
//! their resource name and a borrow of the client, and they add no error
//! handling of their own.
//!
//! # Key Types
//!
//! - [`RequestDescriptor`] / [`RequestPath`]: The per-call `{method, path, params, body}` tuple
//! - [`RequestExecutor`]: The generic request executor resources delegate to
//! - [`Resource`]: The contract shared by all resources
//! - [`Products`]: The product catalog resource

mod descriptor;
mod products;
mod resource;

pub use descriptor::{serialize_to_query, QueryParams, RequestDescriptor, RequestPath};
pub use products::{ProductQuery, ProductRef, ProductStatus, Products};
pub use resource::{RequestExecutor, Resource};
