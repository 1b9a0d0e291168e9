//! Serializer seam between ViewSets and their wire representations.
//!
//! A serializer owns one representation of a model: which fields appear in
//! output, and how raw input is validated into an instance. ViewSets hold
//! shared [`SerializerClass`] handles and pick one per action and role via
//! [`crate::SerializerConfig`].

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::model::Model;

/// Shared handle to a serializer, playing the role a serializer *class*
/// plays in class-based frameworks: cheap to clone, stateless, safe to use
/// from any request-handling task.
pub type SerializerClass<M> = Arc<dyn ModelSerializer<M>>;

/// A representation of model `M`.
///
/// `to_internal_value` and `update` are the write role (input validation);
/// `to_representation` is the read role (output rendering).
pub trait ModelSerializer<M>: Send + Sync {
	/// Validate raw input and build a new, unsaved instance.
	fn to_internal_value(&self, data: &Value) -> Result<M>;

	/// Validate raw input against an existing instance and return the
	/// updated instance. `partial` merges only the provided fields.
	fn update(&self, instance: M, data: &Value, partial: bool) -> Result<M>;

	/// Render one instance into its output representation.
	fn to_representation(&self, instance: &M) -> Result<Value>;

	/// Render many instances.
	fn many_to_representation(&self, instances: &[M]) -> Result<Vec<Value>> {
		instances
			.iter()
			.map(|instance| self.to_representation(instance))
			.collect()
	}
}

impl<M> std::fmt::Debug for dyn ModelSerializer<M> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("dyn ModelSerializer")
	}
}

/// Serde passthrough serializer: every field of `M` appears in both the
/// input and the output representation.
pub struct JsonSerializer<M> {
	_phantom: std::marker::PhantomData<M>,
}

impl<M> JsonSerializer<M> {
	pub fn new() -> Self {
		Self {
			_phantom: std::marker::PhantomData,
		}
	}
}

impl<M> Default for JsonSerializer<M> {
	fn default() -> Self {
		Self::new()
	}
}

impl<M> ModelSerializer<M> for JsonSerializer<M>
where
	M: Model + Serialize + DeserializeOwned,
{
	fn to_internal_value(&self, data: &Value) -> Result<M> {
		serde_json::from_value(data.clone())
			.map_err(|e| Error::Validation(format!("Invalid {}: {}", M::table_name(), e)))
	}

	fn update(&self, instance: M, data: &Value, partial: bool) -> Result<M> {
		let merged = if partial {
			let mut current = serde_json::to_value(&instance)
				.map_err(|e| Error::Serialization(e.to_string()))?;
			if let (Some(fields), Some(patch)) = (current.as_object_mut(), data.as_object()) {
				for (key, value) in patch {
					fields.insert(key.clone(), value.clone());
				}
			}
			current
		} else {
			data.clone()
		};

		let mut updated: M = serde_json::from_value(merged)
			.map_err(|e| Error::Validation(format!("Invalid {}: {}", M::table_name(), e)))?;
		// Input never moves an object to another primary key.
		if updated.primary_key().is_none()
			&& let Some(pk) = instance.primary_key()
		{
			updated.set_primary_key(pk.clone());
		}
		Ok(updated)
	}

	fn to_representation(&self, instance: &M) -> Result<Value> {
		serde_json::to_value(instance).map_err(|e| Error::Serialization(e.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde::Deserialize;
	use serde_json::json;

	#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
	struct Note {
		id: Option<i64>,
		text: String,
	}

	impl Model for Note {
		type PrimaryKey = i64;

		fn table_name() -> &'static str {
			"notes"
		}

		fn primary_key(&self) -> Option<&Self::PrimaryKey> {
			self.id.as_ref()
		}

		fn set_primary_key(&mut self, value: Self::PrimaryKey) {
			self.id = Some(value);
		}
	}

	#[test]
	fn test_to_internal_value_builds_unsaved_instance() {
		let serializer = JsonSerializer::<Note>::new();

		let note = serializer
			.to_internal_value(&json!({"text": "hello"}))
			.unwrap();

		assert_eq!(note.id, None);
		assert_eq!(note.text, "hello");
	}

	#[test]
	fn test_to_internal_value_rejects_wrong_types() {
		let serializer = JsonSerializer::<Note>::new();

		let result = serializer.to_internal_value(&json!({"text": 5}));

		assert!(matches!(result, Err(Error::Validation(_))));
	}

	#[test]
	fn test_partial_update_merges_and_keeps_primary_key() {
		let serializer = JsonSerializer::<Note>::new();
		let existing = Note {
			id: Some(3),
			text: "before".to_string(),
		};

		let updated = serializer
			.update(existing, &json!({"text": "after"}), true)
			.unwrap();

		assert_eq!(updated.id, Some(3));
		assert_eq!(updated.text, "after");
	}

	#[test]
	fn test_full_update_keeps_primary_key_when_absent_from_input() {
		let serializer = JsonSerializer::<Note>::new();
		let existing = Note {
			id: Some(3),
			text: "before".to_string(),
		};

		let updated = serializer
			.update(existing, &json!({"text": "after"}), false)
			.unwrap();

		assert_eq!(updated.id, Some(3));
		assert_eq!(updated.text, "after");
	}
}
