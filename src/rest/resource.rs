//! The contract between resource adapters and the client they delegate to.
//!
//! A resource builds a [`RequestDescriptor`] per call and hands it, together
//! with its resource name, to a [`RequestExecutor`]. The executor owns the
//! transport, authentication and error typing; resources own none of that.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use woocommerce_api::rest::{RequestDescriptor, RequestExecutor, Resource};
//! use woocommerce_api::{HttpMethod, HttpResponse, RestError};
//!
//! pub struct Coupons<'a, C> {
//!     client: &'a C,
//! }
//!
//! impl<C: RequestExecutor> Resource for Coupons<'_, C> {
//!     type Executor = C;
//!     const NAME: &'static str = "coupons";
//!
//!     fn executor(&self) -> &C {
//!         self.client
//!     }
//! }
//!
//! impl<C: RequestExecutor> Coupons<'_, C> {
//!     pub async fn get(&self, id: u64) -> Result<HttpResponse, RestError> {
//!         self.do_request(RequestDescriptor::new(HttpMethod::Get).path(id)).await
//!     }
//! }
//! ```

use crate::clients::rest::RestError;
use crate::clients::HttpResponse;
use crate::rest::RequestDescriptor;

/// Executes request descriptors on behalf of a named resource.
///
/// [`WooCommerceClient`](crate::WooCommerceClient) is the production
/// implementation. Errors are produced here and travel back through the
/// resource unchanged.
#[allow(async_fn_in_trait)]
pub trait RequestExecutor {
    /// Sends `descriptor` against the collection named `resource`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] for invalid paths, transport failures and
    /// non-2xx responses.
    async fn execute(
        &self,
        resource: &str,
        descriptor: RequestDescriptor,
    ) -> Result<HttpResponse, RestError>;
}

/// A named REST collection bound to a shared executor.
#[allow(async_fn_in_trait)]
pub trait Resource {
    /// The executor requests are forwarded to.
    type Executor: RequestExecutor;

    /// The collection name used as the first path segment (e.g. "products").
    const NAME: &'static str;

    /// Returns the shared executor.
    fn executor(&self) -> &Self::Executor;

    /// Forwards `descriptor` to the executor under [`Self::NAME`].
    ///
    /// # Errors
    ///
    /// Returns whatever the executor returns, unchanged.
    async fn do_request(&self, descriptor: RequestDescriptor) -> Result<HttpResponse, RestError> {
        tracing::debug!(
            resource = Self::NAME,
            method = descriptor.method.as_str(),
            "Dispatching resource request"
        );
        self.executor().execute(Self::NAME, descriptor).await
    }
}
