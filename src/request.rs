//! HTTP request representation consumed by ViewSets.

use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri, Version};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::error::{Error, Result};

/// HTTP Request representation
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	/// Path variables extracted by the router, e.g. `pk` from `/things/{pk}/`
	pub path_params: HashMap<String, String>,
	pub query_params: HashMap<String, String>,
}

impl Request {
	/// Creates a new `Request`.
	///
	/// # Examples
	///
	/// ```
	/// use action_serializers::Request;
	/// use bytes::Bytes;
	/// use hyper::{HeaderMap, Method, Uri, Version};
	///
	/// let request = Request::new(
	///     Method::GET,
	///     Uri::from_static("/things/?page=2"),
	///     Version::HTTP_11,
	///     HeaderMap::new(),
	///     Bytes::new(),
	/// );
	/// assert_eq!(request.path(), "/things/");
	/// assert_eq!(request.query_param("page"), Some("2"));
	/// ```
	pub fn new(
		method: Method,
		uri: Uri,
		version: Version,
		headers: HeaderMap,
		body: Bytes,
	) -> Self {
		let query_params = Self::parse_query_params(&uri);
		Self {
			method,
			uri,
			version,
			headers,
			body,
			path_params: HashMap::new(),
			query_params,
		}
	}

	/// Parse query parameters from URI
	fn parse_query_params(uri: &Uri) -> HashMap<String, String> {
		uri.query()
			.map(|q| {
				q.split('&')
					.filter_map(|pair| {
						// Split on first '=' only to preserve '=' in values (e.g., Base64)
						let mut parts = pair.splitn(2, '=');
						Some((
							parts.next()?.to_string(),
							parts.next().unwrap_or("").to_string(),
						))
					})
					.collect()
			})
			.unwrap_or_default()
	}

	/// Get the request path
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Get a query parameter by name
	pub fn query_param(&self, name: &str) -> Option<&str> {
		self.query_params.get(name).map(|v| v.as_str())
	}

	/// Get a path parameter by name
	pub fn path_param(&self, name: &str) -> Option<&str> {
		self.path_params.get(name).map(|v| v.as_str())
	}

	/// Set a path parameter (used by routers for path variable extraction)
	///
	/// # Examples
	///
	/// ```
	/// use action_serializers::Request;
	/// use bytes::Bytes;
	/// use hyper::{HeaderMap, Method, Uri, Version};
	///
	/// let mut request = Request::new(
	///     Method::GET,
	///     Uri::from_static("/things/123/"),
	///     Version::HTTP_11,
	///     HeaderMap::new(),
	///     Bytes::new(),
	/// );
	/// request.set_path_param("pk", "123");
	/// assert_eq!(request.path_param("pk"), Some("123"));
	/// ```
	pub fn set_path_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.path_params.insert(key.into(), value.into());
	}

	/// Deserialize the request body as JSON.
	///
	/// Malformed bodies surface as `Error::Validation` so the dispatch layer
	/// can answer with HTTP 400.
	pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
		serde_json::from_slice(&self.body)
			.map_err(|e| Error::Validation(format!("JSON parse error: {}", e)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn request_for(uri: &'static str) -> Request {
		Request::new(
			Method::GET,
			Uri::from_static(uri),
			Version::HTTP_11,
			HeaderMap::new(),
			Bytes::new(),
		)
	}

	#[rstest]
	fn test_parse_query_params_preserves_equals_in_value() {
		// Arrange
		let request = request_for("/test?token=abc==");

		// Assert
		assert_eq!(request.query_param("token"), Some("abc=="));
	}

	#[rstest]
	fn test_parse_query_params_multiple_params() {
		// Arrange
		let request = request_for("/test?page=2&page_size=5");

		// Assert
		assert_eq!(request.query_param("page"), Some("2"));
		assert_eq!(request.query_param("page_size"), Some("5"));
	}

	#[rstest]
	fn test_parse_query_params_no_query_string() {
		// Arrange
		let request = request_for("/test");

		// Assert
		assert!(request.query_params.is_empty());
	}

	#[rstest]
	fn test_json_body_rejects_malformed_input() {
		// Arrange
		let request = Request::new(
			Method::POST,
			Uri::from_static("/things/"),
			Version::HTTP_11,
			HeaderMap::new(),
			Bytes::from_static(b"{not json"),
		);

		// Act
		let result = request.json::<serde_json::Value>();

		// Assert
		assert!(matches!(result, Err(Error::Validation(_))));
	}
}
