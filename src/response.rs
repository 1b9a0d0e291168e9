//! HTTP response representation produced by ViewSets.

use bytes::Bytes;
use hyper::{HeaderMap, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// HTTP Response representation
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}
	/// Create a Response with HTTP 200 OK status
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}
	/// Create a Response with HTTP 201 Created status
	pub fn created() -> Self {
		Self::new(StatusCode::CREATED)
	}
	/// Create a Response with HTTP 204 No Content status
	pub fn no_content() -> Self {
		Self::new(StatusCode::NO_CONTENT)
	}
	/// Create a Response with HTTP 400 Bad Request status
	pub fn bad_request() -> Self {
		Self::new(StatusCode::BAD_REQUEST)
	}
	/// Create a Response with HTTP 404 Not Found status
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	/// Serialize `data` into the body and set the JSON content type.
	///
	/// # Examples
	///
	/// ```
	/// use action_serializers::Response;
	/// use serde_json::json;
	///
	/// let response = Response::ok().with_json(&json!({"id": 1})).unwrap();
	/// assert_eq!(
	///     response.headers.get("content-type").unwrap().to_str().unwrap(),
	///     "application/json"
	/// );
	/// ```
	pub fn with_json<T: Serialize>(mut self, data: &T) -> Result<Self> {
		let json = serde_json::to_vec(data).map_err(|e| Error::Serialization(e.to_string()))?;
		self.body = Bytes::from(json);
		self.headers.insert(
			hyper::header::CONTENT_TYPE,
			hyper::header::HeaderValue::from_static("application/json"),
		);
		Ok(self)
	}

	/// Deserialize the body as JSON. Primarily a test convenience.
	pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
		serde_json::from_slice(&self.body).map_err(|e| Error::Serialization(e.to_string()))
	}
}
