//! Request factory for creating test requests
//!
//! Similar to DRF's APIRequestFactory

use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri, Version};
use serde::Serialize;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::request::Request;

/// Factory for creating test requests
pub struct APIRequestFactory {
	default_headers: HeaderMap,
}

impl APIRequestFactory {
	/// Create a new request factory
	///
	/// # Examples
	///
	/// ```
	/// use action_serializers::testing::APIRequestFactory;
	///
	/// let factory = APIRequestFactory::new();
	/// let request = factory.get("/things/").build().unwrap();
	/// assert_eq!(request.method, hyper::Method::GET);
	/// ```
	pub fn new() -> Self {
		Self {
			default_headers: HeaderMap::new(),
		}
	}

	/// Create a GET request
	pub fn get(&self, path: &str) -> RequestBuilder {
		RequestBuilder::new(Method::GET, path, &self.default_headers)
	}
	/// Create a POST request
	pub fn post(&self, path: &str) -> RequestBuilder {
		RequestBuilder::new(Method::POST, path, &self.default_headers)
	}
	/// Create a PUT request
	pub fn put(&self, path: &str) -> RequestBuilder {
		RequestBuilder::new(Method::PUT, path, &self.default_headers)
	}
	/// Create a PATCH request
	pub fn patch(&self, path: &str) -> RequestBuilder {
		RequestBuilder::new(Method::PATCH, path, &self.default_headers)
	}
	/// Create a DELETE request
	pub fn delete(&self, path: &str) -> RequestBuilder {
		RequestBuilder::new(Method::DELETE, path, &self.default_headers)
	}
}

impl Default for APIRequestFactory {
	fn default() -> Self {
		Self::new()
	}
}

/// Builder for a single test request
pub struct RequestBuilder {
	method: Method,
	path: String,
	headers: HeaderMap,
	body: Bytes,
	path_params: HashMap<String, String>,
}

impl RequestBuilder {
	fn new(method: Method, path: &str, headers: &HeaderMap) -> Self {
		Self {
			method,
			path: path.to_string(),
			headers: headers.clone(),
			body: Bytes::new(),
			path_params: HashMap::new(),
		}
	}

	/// Set a JSON body and content type
	///
	/// # Examples
	///
	/// ```
	/// use action_serializers::testing::APIRequestFactory;
	/// use serde_json::json;
	///
	/// let factory = APIRequestFactory::new();
	/// let request = factory
	///     .post("/things/")
	///     .json(&json!({"name": "new"}))
	///     .unwrap()
	///     .build()
	///     .unwrap();
	/// assert_eq!(request.method, hyper::Method::POST);
	/// ```
	pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self> {
		let body = serde_json::to_vec(data).map_err(|e| Error::Serialization(e.to_string()))?;
		self.body = Bytes::from(body);
		self.headers.insert(
			hyper::header::CONTENT_TYPE,
			hyper::header::HeaderValue::from_static("application/json"),
		);
		Ok(self)
	}

	/// Set a path parameter, as a router would when matching `/things/{pk}/`
	pub fn path_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.path_params.insert(key.into(), value.into());
		self
	}

	/// Build the request
	pub fn build(self) -> Result<Request> {
		let uri: Uri = self
			.path
			.parse()
			.map_err(|e| Error::Http(format!("Invalid URI `{}`: {}", self.path, e)))?;
		let mut request = Request::new(self.method, uri, Version::HTTP_11, self.headers, self.body);
		for (key, value) in self.path_params {
			request.set_path_param(key, value);
		}
		Ok(request)
	}
}
