//! HTTP response types for the WooCommerce API client.

use std::collections::HashMap;

use serde_json::Value;

/// An HTTP response from a store.
///
/// The body is the parsed JSON exactly as the store sent it; this crate does
/// not map it onto typed models.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the named header, if present.
    ///
    /// Lookup is case-insensitive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use woocommerce_api::HttpResponse;
    /// use std::collections::HashMap;
    /// use serde_json::json;
    ///
    /// let mut headers = HashMap::new();
    /// headers.insert("x-wp-total".to_string(), vec!["42".to_string()]);
    ///
    /// let response = HttpResponse::new(200, headers, json!([]));
    /// assert_eq!(response.header("X-WP-Total"), Some("42"));
    /// ```
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Extracts the platform error code and message from an error body.
    ///
    /// Understands both the WP REST shape (`{"code", "message"}`) and the
    /// legacy shape (`{"errors": [{"code", "message"}]}`). Falls back to the
    /// raw text of a non-JSON body, then to the body as JSON.
    #[must_use]
    pub fn error_details(&self) -> (Option<String>, String) {
        let source = match self.body.get("errors") {
            Some(Value::Array(errors)) => errors.first().unwrap_or(&self.body),
            _ => &self.body,
        };

        let error_code = source
            .get("code")
            .and_then(Value::as_str)
            .map(String::from);
        let message = source
            .get("message")
            .or_else(|| self.body.get("raw_body"))
            .and_then(Value::as_str)
            .map_or_else(|| self.body.to_string(), String::from);

        (error_code, message)
    }
}
