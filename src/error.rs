//! Error types for the action-serializers crate.

use thiserror::Error;

/// Errors surfaced by viewsets, serializers, stores and pagination.
#[derive(Debug, Clone, Error)]
pub enum Error {
	/// Generic HTTP-level failure (unroutable action, method not allowed).
	#[error("HTTP error: {0}")]
	Http(String),

	/// Object lookup failed.
	#[error("Not found: {0}")]
	NotFound(String),

	/// Request input failed validation.
	#[error("Validation error: {0}")]
	Validation(String),

	/// Serializing a response body failed.
	#[error("Serialization error: {0}")]
	Serialization(String),

	/// Requested page is invalid or out of range.
	#[error("Invalid page: {0}")]
	InvalidPage(String),

	/// Controller setup is broken. This is a programming error: it is never
	/// converted into a client-facing HTTP response and should fail tests and
	/// processes loudly.
	#[error("Improperly configured: {0}")]
	ImproperlyConfigured(String),
}

pub type Result<T> = std::result::Result<T, Error>;
