//! Request descriptors handed from resources to the shared client.
//!
//! A [`RequestDescriptor`] is the `{method, path, params, body}` tuple a
//! resource builds for every call. It is built per call, passed to a
//! [`RequestExecutor`](crate::rest::RequestExecutor) and then dropped.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::clients::rest::RestError;
use crate::clients::HttpMethod;

/// Query parameters, kept sorted so requests are reproducible.
pub type QueryParams = BTreeMap<String, String>;

/// Serializes an argument struct into query parameters.
///
/// `null` values are skipped, scalars are stringified, arrays become
/// comma-separated lists and nested objects are sent as JSON text. Anything
/// that does not serialize to an object yields no parameters.
///
/// # Errors
///
/// Returns [`RestError::InvalidParams`] if `params` fails to serialize.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use woocommerce_api::rest::serialize_to_query;
///
/// #[derive(Serialize)]
/// struct Args {
///     include: Vec<u64>,
///     on_sale: bool,
///     search: Option<String>,
/// }
///
/// let args = Args { include: vec![3, 5], on_sale: true, search: None };
/// let params = serialize_to_query(&args).unwrap();
/// assert_eq!(params.get("include").map(String::as_str), Some("3,5"));
/// assert_eq!(params.get("on_sale").map(String::as_str), Some("true"));
/// assert!(!params.contains_key("search"));
/// ```
pub fn serialize_to_query<T: Serialize>(params: &T) -> Result<QueryParams, RestError> {
    let value = serde_json::to_value(params).map_err(|e| RestError::InvalidParams {
        message: e.to_string(),
    })?;

    let mut query = QueryParams::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(items) => {
                    let values: Vec<String> = items
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}

/// The part of a URL path that follows the resource name.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::RequestPath;
///
/// assert_eq!(RequestPath::from(42).join(), "42");
/// assert_eq!(
///     RequestPath::Segments(vec!["categories".into(), "9".into()]).join(),
///     "categories/9"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestPath {
    /// A single path component, used verbatim (it may itself contain `/`).
    Single(String),
    /// A compound path, joined with `/` before transmission.
    Segments(Vec<String>),
}

impl RequestPath {
    /// Joins the path into a single string. Empty segments are skipped.
    #[must_use]
    pub fn join(&self) -> String {
        match self {
            Self::Single(path) => path.clone(),
            Self::Segments(segments) => segments
                .iter()
                .map(String::as_str)
                .filter(|segment| !segment.is_empty())
                .collect::<Vec<_>>()
                .join("/"),
        }
    }
}

impl fmt::Display for RequestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

impl From<&str> for RequestPath {
    fn from(path: &str) -> Self {
        Self::Single(path.to_string())
    }
}

impl From<String> for RequestPath {
    fn from(path: String) -> Self {
        Self::Single(path)
    }
}

impl From<u64> for RequestPath {
    fn from(id: u64) -> Self {
        Self::Single(id.to_string())
    }
}

impl From<Vec<String>> for RequestPath {
    fn from(segments: Vec<String>) -> Self {
        Self::Segments(segments)
    }
}

/// A method/path/params/body tuple describing one API call.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::RequestDescriptor;
/// use woocommerce_api::HttpMethod;
///
/// let descriptor = RequestDescriptor::new(HttpMethod::Get)
///     .path("count")
///     .param("status", "publish");
///
/// assert_eq!(descriptor.resolve_path("products"), "products/count");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RequestDescriptor {
    /// The HTTP method.
    pub method: HttpMethod,
    /// Path below the resource name; `None` addresses the collection itself.
    pub path: Option<RequestPath>,
    /// Query parameters.
    pub params: Option<QueryParams>,
    /// JSON payload for write operations.
    pub body: Option<Value>,
}

impl RequestDescriptor {
    /// Creates a descriptor with no path, params or body.
    #[must_use]
    pub const fn new(method: HttpMethod) -> Self {
        Self {
            method,
            path: None,
            params: None,
            body: None,
        }
    }

    /// Sets the path below the resource name.
    #[must_use]
    pub fn path(mut self, path: impl Into<RequestPath>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(QueryParams::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the JSON payload.
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns `{resource}` or `{resource}/{path}`.
    #[must_use]
    pub fn resolve_path(&self, resource: &str) -> String {
        match self.path.as_ref().map(RequestPath::join) {
            Some(path) if !path.is_empty() => format!("{resource}/{path}"),
            _ => resource.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Args {
        per_page: Option<u32>,
        include: Vec<u64>,
        after: Option<String>,
        attributes: Value,
    }

    #[test]
    fn test_serialize_to_query_flattens_values() {
        let params = serialize_to_query(&Args {
            per_page: Some(20),
            include: vec![1, 2, 3],
            after: None,
            attributes: json!({"color": "blue"}),
        })
        .unwrap();

        assert_eq!(params.len(), 3);
        assert_eq!(params["per_page"], "20");
        assert_eq!(params["include"], "1,2,3");
        assert_eq!(params["attributes"], r#"{"color":"blue"}"#);
    }

    #[test]
    fn test_serialize_to_query_skips_empty_arrays_and_non_objects() {
        let params = serialize_to_query(&Args {
            per_page: None,
            include: Vec::new(),
            after: None,
            attributes: Value::Null,
        })
        .unwrap();
        assert!(params.is_empty());

        assert!(serialize_to_query(&"status=publish").unwrap().is_empty());
    }

    #[test]
    fn test_single_path_is_verbatim() {
        let path = RequestPath::from("sku/TS-01/blue");
        assert_eq!(path.join(), "sku/TS-01/blue");
    }

    #[test]
    fn test_segments_skip_empty_components() {
        let path = RequestPath::Segments(vec![
            "categories".to_string(),
            String::new(),
            "15".to_string(),
        ]);
        assert_eq!(path.join(), "categories/15");
        assert_eq!(path.to_string(), "categories/15");
    }

    #[test]
    fn test_new_descriptor_is_bare() {
        let descriptor = RequestDescriptor::new(HttpMethod::Get);

        assert_eq!(descriptor.method, HttpMethod::Get);
        assert!(descriptor.path.is_none());
        assert!(descriptor.params.is_none());
        assert!(descriptor.body.is_none());
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let descriptor = RequestDescriptor::new(HttpMethod::Put)
            .path(12_u64)
            .param("context", "edit")
            .body(json!({"regular_price": "24.54"}));

        assert_eq!(descriptor.path, Some(RequestPath::Single("12".to_string())));
        assert_eq!(
            descriptor.params.as_ref().and_then(|p| p.get("context")),
            Some(&"edit".to_string())
        );
        assert_eq!(descriptor.body, Some(json!({"regular_price": "24.54"})));
    }

    #[test]
    fn test_resolve_path() {
        let list = RequestDescriptor::new(HttpMethod::Get);
        assert_eq!(list.resolve_path("products"), "products");

        let single = RequestDescriptor::new(HttpMethod::Get).path(7_u64);
        assert_eq!(single.resolve_path("products"), "products/7");

        let empty = RequestDescriptor::new(HttpMethod::Get).path(Vec::<String>::new());
        assert_eq!(empty.resolve_path("products"), "products");
    }
}
