//! Model trait for objects served by ViewSets.

use std::fmt::Display;
use std::str::FromStr;

/// Minimal model contract: a table name and primary-key access.
///
/// `PrimaryKey` must round-trip through strings so viewsets can parse the
/// `pk` path parameter without knowing the concrete key type.
///
/// # Examples
///
/// ```
/// use action_serializers::Model;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct Thing {
///     id: Option<i64>,
///     name: String,
/// }
///
/// impl Model for Thing {
///     type PrimaryKey = i64;
///     fn table_name() -> &'static str { "things" }
///     fn primary_key(&self) -> Option<&Self::PrimaryKey> { self.id.as_ref() }
///     fn set_primary_key(&mut self, value: Self::PrimaryKey) { self.id = Some(value); }
/// }
/// ```
pub trait Model: Clone + Send + Sync + 'static {
	type PrimaryKey: Clone + PartialEq + Display + FromStr + Send + Sync;

	fn table_name() -> &'static str;

	fn primary_key(&self) -> Option<&Self::PrimaryKey>;

	fn set_primary_key(&mut self, value: Self::PrimaryKey);
}
