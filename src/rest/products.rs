//! Product resource.
//!
//! [`Products`] maps the product catalog endpoints onto request descriptors:
//!
//! | Method | HTTP | Path |
//! |---|---|---|
//! | [`get`](Products::get) | GET | `products`, `products/{id}`, `products/sku/{sku}` |
//! | [`create`](Products::create) | POST | `products` |
//! | [`update`](Products::update) | PUT | `products/{id}` |
//! | [`delete`](Products::delete) | DELETE | `products/{id}?force={bool}` |
//! | [`get_count`](Products::get_count) | GET | `products/count` |
//! | [`get_category`](Products::get_category) | GET | `products/categories`, `products/categories/{id}` |
//!
//! Responses and errors are whatever the client returns.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::{ProductQuery, ProductRef, ProductStatus};
//! use serde_json::json;
//!
//! let products = client.products();
//!
//! let published = products
//!     .get(None, Some(ProductQuery { status: Some(ProductStatus::Publish), ..Default::default() }))
//!     .await?;
//!
//! let shirt = products.get(Some(ProductRef::sku("TS-01")), None).await?;
//!
//! let created = products
//!     .create(json!({"name": "Premium Quality", "type": "simple", "regular_price": "21.99"}))
//!     .await?;
//!
//! products.trash(794).await?;
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::rest::{RestError, WooCommerceClient};
use crate::clients::{HttpMethod, HttpResponse};
use crate::rest::{
    serialize_to_query, QueryParams, RequestDescriptor, RequestExecutor, RequestPath, Resource,
};

/// Identifies a single product, by numeric ID or by SKU.
///
/// SKUs are sent as `sku/{sku}` without escaping, so a SKU containing `/`
/// produces extra path segments. Avoid slashes in SKUs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProductRef {
    /// Numeric product ID.
    Id(u64),
    /// Stock keeping unit.
    Sku(String),
}

impl ProductRef {
    /// Creates a SKU reference.
    #[must_use]
    pub fn sku(sku: impl Into<String>) -> Self {
        Self::Sku(sku.into())
    }
}

impl From<u64> for ProductRef {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl fmt::Display for ProductRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Sku(sku) => write!(f, "sku/{sku}"),
        }
    }
}

impl From<ProductRef> for RequestPath {
    fn from(product: ProductRef) -> Self {
        Self::Single(product.to_string())
    }
}

/// Publication status of a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Any status (list filter only).
    Any,
    /// Draft, not visible in the shop.
    Draft,
    /// Awaiting review.
    Pending,
    /// Visible to store managers only.
    Private,
    /// Published and visible.
    Publish,
    /// Soft-deleted; restorable from the trash.
    Trash,
}

/// Query arguments accepted by the product list and count endpoints.
///
/// Every field is optional and unset fields are not sent. Anything without a
/// dedicated field goes in `extra` and is passed through as-is; typed fields
/// win when both name the same key.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::{ProductQuery, ProductStatus};
///
/// let query = ProductQuery {
///     status: Some(ProductStatus::Publish),
///     per_page: Some(50),
///     ..Default::default()
/// }
/// .param("orderby", "price");
///
/// let params = query.to_params().unwrap();
/// assert_eq!(params.get("status").map(String::as_str), Some("publish"));
/// assert_eq!(params.get("per_page").map(String::as_str), Some("50"));
/// assert_eq!(params.get("orderby").map(String::as_str), Some("price"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProductQuery {
    /// Additional pass-through arguments.
    // Serialized first so typed fields overwrite clashing keys.
    #[serde(flatten)]
    pub extra: QueryParams,

    /// Filter by publication status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    /// Filter by product type (`simple`, `grouped`, `external`, `variable`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// Filter by SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Filter by category ID or slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Full-text search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Page of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl ProductQuery {
    /// Adds a pass-through argument.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Flattens the query into wire parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidParams`] if the query fails to serialize.
    pub fn to_params(&self) -> Result<QueryParams, RestError> {
        serialize_to_query(self)
    }
}

/// The products resource, bound to a shared client.
///
/// Holds nothing but a borrow of the client; create one per use with
/// [`WooCommerceClient::products`] or [`Products::new`].
#[derive(Debug)]
pub struct Products<'a, C = WooCommerceClient> {
    client: &'a C,
}

impl<C> Clone for Products<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Products<'_, C> {}

impl<C: RequestExecutor> Resource for Products<'_, C> {
    type Executor = C;
    const NAME: &'static str = "products";

    fn executor(&self) -> &C {
        self.client
    }
}

impl<'a, C: RequestExecutor> Products<'a, C> {
    /// Binds the products resource to `client`.
    #[must_use]
    pub const fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Gets one product, or lists products when `id` is `None`.
    ///
    /// `GET /products`, `GET /products/{id}`, `GET /products/sku/{sku}`
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidParams`] if `args` fail to serialize, otherwise
    /// the client's [`RestError`] unchanged.
    pub async fn get(
        &self,
        id: Option<ProductRef>,
        args: Option<ProductQuery>,
    ) -> Result<HttpResponse, RestError> {
        let params = args.as_ref().map(ProductQuery::to_params).transpose()?;

        self.do_request(RequestDescriptor {
            method: HttpMethod::Get,
            path: id.map(RequestPath::from),
            params,
            body: None,
        })
        .await
    }

    /// Creates a product from `data`.
    ///
    /// `POST /products`
    ///
    /// # Errors
    ///
    /// Returns the client's [`RestError`] unchanged.
    pub async fn create(&self, data: impl Into<Value>) -> Result<HttpResponse, RestError> {
        self.do_request(RequestDescriptor {
            method: HttpMethod::Post,
            path: None,
            params: None,
            body: Some(data.into()),
        })
        .await
    }

    /// Updates product `id` with `data`.
    ///
    /// `PUT /products/{id}`
    ///
    /// # Errors
    ///
    /// Returns the client's [`RestError`] unchanged.
    pub async fn update(&self, id: u64, data: impl Into<Value>) -> Result<HttpResponse, RestError> {
        self.do_request(RequestDescriptor {
            method: HttpMethod::Put,
            path: Some(RequestPath::from(id)),
            params: None,
            body: Some(data.into()),
        })
        .await
    }

    /// Deletes product `id`: permanently when `force` is true, otherwise moves
    /// it to the trash.
    ///
    /// `DELETE /products/{id}?force={bool}`
    ///
    /// # Errors
    ///
    /// Returns the client's [`RestError`] unchanged.
    pub async fn delete(&self, id: u64, force: bool) -> Result<HttpResponse, RestError> {
        self.do_request(
            RequestDescriptor::new(HttpMethod::Delete)
                .path(id)
                .param("force", force.to_string()),
        )
        .await
    }

    /// Moves product `id` to the trash. Same as `delete(id, false)`.
    ///
    /// # Errors
    ///
    /// Returns the client's [`RestError`] unchanged.
    pub async fn trash(&self, id: u64) -> Result<HttpResponse, RestError> {
        self.delete(id, false).await
    }

    /// Counts products matching `args`.
    ///
    /// `GET /products/count`
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidParams`] if `args` fail to serialize, otherwise
    /// the client's [`RestError`] unchanged.
    pub async fn get_count(&self, args: Option<ProductQuery>) -> Result<HttpResponse, RestError> {
        let params = args.as_ref().map(ProductQuery::to_params).transpose()?;

        self.do_request(RequestDescriptor {
            method: HttpMethod::Get,
            path: Some(RequestPath::from("count")),
            params,
            body: None,
        })
        .await
    }

    /// Gets one product category, or lists them when `id` is `None`.
    ///
    /// `GET /products/categories`, `GET /products/categories/{id}`
    ///
    /// # Errors
    ///
    /// Returns the client's [`RestError`] unchanged.
    pub async fn get_category(&self, id: Option<u64>) -> Result<HttpResponse, RestError> {
        let segments = std::iter::once("categories".to_string())
            .chain(id.map(|id| id.to_string()))
            .collect::<Vec<_>>();

        self.do_request(RequestDescriptor::new(HttpMethod::Get).path(segments))
            .await
    }
}
