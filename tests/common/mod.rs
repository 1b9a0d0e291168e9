//! Shared test model and serializers.
//!
//! `Thing` stores `id` and `name`; the serializers differ only in the
//! representation they render (field subsets and computed fields), which is
//! what the resolution tests tell apart.

#![allow(dead_code)]

use action_serializers::{Error, Model, ModelSerializer, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Thing {
	pub id: Option<i64>,
	pub name: String,
}

impl Model for Thing {
	type PrimaryKey = i64;

	fn table_name() -> &'static str {
		"things"
	}

	fn primary_key(&self) -> Option<&Self::PrimaryKey> {
		self.id.as_ref()
	}

	fn set_primary_key(&mut self, value: Self::PrimaryKey) {
		self.id = Some(value);
	}
}

pub fn unsaved(name: &str) -> Thing {
	Thing {
		id: None,
		name: name.to_string(),
	}
}

fn require_name(data: &Value) -> Result<String> {
	data.get("name")
		.and_then(Value::as_str)
		.map(str::to_string)
		.ok_or_else(|| Error::Validation("`name` is required and must be a string".to_string()))
}

fn thing_from_input(data: &Value) -> Result<Thing> {
	Ok(Thing {
		id: None,
		name: require_name(data)?,
	})
}

fn thing_update(mut instance: Thing, data: &Value, partial: bool) -> Result<Thing> {
	if partial {
		if data.get("name").is_some() {
			instance.name = require_name(data)?;
		}
	} else {
		instance.name = require_name(data)?;
	}
	Ok(instance)
}

/// Writable fields only: id, name
pub struct WriteSerializer;

impl ModelSerializer<Thing> for WriteSerializer {
	fn to_internal_value(&self, data: &Value) -> Result<Thing> {
		thing_from_input(data)
	}

	fn update(&self, instance: Thing, data: &Value, partial: bool) -> Result<Thing> {
		thing_update(instance, data, partial)
	}

	fn to_representation(&self, thing: &Thing) -> Result<Value> {
		Ok(json!({"id": thing.id, "name": thing.name}))
	}
}

/// Detail representation: id, name and a computed `extra` field
pub struct RetrieveSerializer;

impl ModelSerializer<Thing> for RetrieveSerializer {
	fn to_internal_value(&self, data: &Value) -> Result<Thing> {
		thing_from_input(data)
	}

	fn update(&self, instance: Thing, data: &Value, partial: bool) -> Result<Thing> {
		thing_update(instance, data, partial)
	}

	fn to_representation(&self, thing: &Thing) -> Result<Value> {
		Ok(json!({"id": thing.id, "name": thing.name, "extra": "extra value"}))
	}
}

/// Simple serializer for list views with minimal fields
pub struct ListSerializer;

impl ModelSerializer<Thing> for ListSerializer {
	fn to_internal_value(&self, data: &Value) -> Result<Thing> {
		thing_from_input(data)
	}

	fn update(&self, instance: Thing, data: &Value, partial: bool) -> Result<Thing> {
		thing_update(instance, data, partial)
	}

	fn to_representation(&self, thing: &Thing) -> Result<Value> {
		Ok(json!({"id": thing.id, "name": thing.name}))
	}
}

/// Serializer for the custom `uppercase` action
pub struct ThingCustomActionSerializer;

impl ModelSerializer<Thing> for ThingCustomActionSerializer {
	fn to_internal_value(&self, data: &Value) -> Result<Thing> {
		thing_from_input(data)
	}

	fn update(&self, instance: Thing, data: &Value, partial: bool) -> Result<Thing> {
		thing_update(instance, data, partial)
	}

	fn to_representation(&self, thing: &Thing) -> Result<Value> {
		Ok(json!({
			"id": thing.id,
			"name": thing.name,
			"name_uppercase": thing.name.to_uppercase(),
		}))
	}
}
