//! Serializer resolution: which serializer serves a given action and role.
//!
//! A [`SerializerConfig`] is a table of optional slots set once per
//! controller. [`SerializerConfig::resolve`] walks a deterministic fallback
//! chain over those slots: the action-specific slot, then the role fallback,
//! then the framework-standard `serializer_class`. Resolution is a pure
//! function of (configuration, action, role).

use tracing::debug;

use crate::actions::{ActionKind, SerializerRole};
use crate::error::{Error, Result};
use crate::serializers::SerializerClass;

/// Per-controller serializer slot table.
///
/// All slots are optional. Write actions (`create`, `update`,
/// `partial_update`) consult the write chain for input and the read chain
/// for output; `update` and `partial_update` share the `update` slots.
///
/// # Examples
///
/// ```
/// use action_serializers::{ActionKind, SerializerConfig, SerializerRole};
/// use action_serializers::JsonSerializer;
/// use serde::{Deserialize, Serialize};
/// use std::sync::Arc;
///
/// # #[derive(Debug, Clone, Serialize, Deserialize)]
/// # struct Thing { id: Option<i64>, name: String }
/// # impl action_serializers::Model for Thing {
/// #     type PrimaryKey = i64;
/// #     fn table_name() -> &'static str { "things" }
/// #     fn primary_key(&self) -> Option<&Self::PrimaryKey> { self.id.as_ref() }
/// #     fn set_primary_key(&mut self, value: Self::PrimaryKey) { self.id = Some(value); }
/// # }
/// let config = SerializerConfig::<Thing>::new()
///     .serializer_class(Arc::new(JsonSerializer::new()));
///
/// let resolved = config.resolve(&ActionKind::List, SerializerRole::Read);
/// assert!(resolved.is_ok());
/// ```
pub struct SerializerConfig<M> {
	/// Final fallback, the framework-standard field.
	pub serializer_class: Option<SerializerClass<M>>,
	/// Read-role fallback for every action.
	pub read_serializer_class: Option<SerializerClass<M>>,
	/// Write-role fallback for create/update/partial_update.
	pub write_serializer_class: Option<SerializerClass<M>>,
	/// Read slot for the `list` action.
	pub list_serializer_class: Option<SerializerClass<M>>,
	/// Read slot for the `retrieve` action.
	pub retrieve_serializer_class: Option<SerializerClass<M>>,
	/// Write slot for the `create` action.
	pub create_serializer_class: Option<SerializerClass<M>>,
	/// Write slot shared by `update` and `partial_update`.
	pub update_serializer_class: Option<SerializerClass<M>>,
	/// Read slot used to render the response of a `create`.
	pub create_read_serializer_class: Option<SerializerClass<M>>,
	/// Read slot used to render the response of an `update`/`partial_update`.
	pub update_read_serializer_class: Option<SerializerClass<M>>,
}

impl<M> SerializerConfig<M> {
	/// Creates an empty configuration with every slot unset.
	pub fn new() -> Self {
		Self {
			serializer_class: None,
			read_serializer_class: None,
			write_serializer_class: None,
			list_serializer_class: None,
			retrieve_serializer_class: None,
			create_serializer_class: None,
			update_serializer_class: None,
			create_read_serializer_class: None,
			update_read_serializer_class: None,
		}
	}

	pub fn serializer_class(mut self, serializer: SerializerClass<M>) -> Self {
		self.serializer_class = Some(serializer);
		self
	}
	pub fn read_serializer_class(mut self, serializer: SerializerClass<M>) -> Self {
		self.read_serializer_class = Some(serializer);
		self
	}
	pub fn write_serializer_class(mut self, serializer: SerializerClass<M>) -> Self {
		self.write_serializer_class = Some(serializer);
		self
	}
	pub fn list_serializer_class(mut self, serializer: SerializerClass<M>) -> Self {
		self.list_serializer_class = Some(serializer);
		self
	}
	pub fn retrieve_serializer_class(mut self, serializer: SerializerClass<M>) -> Self {
		self.retrieve_serializer_class = Some(serializer);
		self
	}
	pub fn create_serializer_class(mut self, serializer: SerializerClass<M>) -> Self {
		self.create_serializer_class = Some(serializer);
		self
	}
	pub fn update_serializer_class(mut self, serializer: SerializerClass<M>) -> Self {
		self.update_serializer_class = Some(serializer);
		self
	}
	pub fn create_read_serializer_class(mut self, serializer: SerializerClass<M>) -> Self {
		self.create_read_serializer_class = Some(serializer);
		self
	}
	pub fn update_read_serializer_class(mut self, serializer: SerializerClass<M>) -> Self {
		self.update_read_serializer_class = Some(serializer);
		self
	}

	/// Resolve the serializer for `action` in `role`.
	///
	/// The first populated slot wins: action-specific slot, then the role
	/// fallback (`read_serializer_class`/`write_serializer_class`), then
	/// `serializer_class`. Actions without a dedicated slot for the given
	/// role (custom actions, `destroy`, or write-role lookups for read-only
	/// actions) start at the role fallback.
	///
	/// # Errors
	///
	/// `Error::ImproperlyConfigured` when no slot in the applicable chain is
	/// populated. This is a controller-setup defect, not a request error.
	pub fn resolve(&self, action: &ActionKind, role: SerializerRole) -> Result<SerializerClass<M>> {
		let action_slot = match role {
			SerializerRole::Write => match action {
				ActionKind::Create => self.create_serializer_class.as_ref(),
				ActionKind::Update | ActionKind::PartialUpdate => {
					self.update_serializer_class.as_ref()
				}
				_ => None,
			},
			SerializerRole::Read => match action {
				ActionKind::List => self.list_serializer_class.as_ref(),
				ActionKind::Retrieve => self.retrieve_serializer_class.as_ref(),
				ActionKind::Create => self.create_read_serializer_class.as_ref(),
				ActionKind::Update | ActionKind::PartialUpdate => {
					self.update_read_serializer_class.as_ref()
				}
				_ => None,
			},
		};

		let role_slot = match role {
			SerializerRole::Read => self.read_serializer_class.as_ref(),
			SerializerRole::Write => self.write_serializer_class.as_ref(),
		};

		action_slot
			.or(role_slot)
			.or(self.serializer_class.as_ref())
			.cloned()
			.inspect(|_| debug!(action = %action, role = %role, "resolved serializer"))
			.ok_or_else(|| {
				Error::ImproperlyConfigured(format!(
					"the controller must define a suitable serializer for the `{}` action \
					 ({} role): set an action-specific slot, `{}_serializer_class`, or \
					 `serializer_class`, or override `get_serializer_class()`",
					action, role, role
				))
			})
	}
}

impl<M> Default for SerializerConfig<M> {
	fn default() -> Self {
		Self::new()
	}
}

// Cloning shares the underlying serializer handles.
impl<M> Clone for SerializerConfig<M> {
	fn clone(&self) -> Self {
		Self {
			serializer_class: self.serializer_class.clone(),
			read_serializer_class: self.read_serializer_class.clone(),
			write_serializer_class: self.write_serializer_class.clone(),
			list_serializer_class: self.list_serializer_class.clone(),
			retrieve_serializer_class: self.retrieve_serializer_class.clone(),
			create_serializer_class: self.create_serializer_class.clone(),
			update_serializer_class: self.update_serializer_class.clone(),
			create_read_serializer_class: self.create_read_serializer_class.clone(),
			update_read_serializer_class: self.update_read_serializer_class.clone(),
		}
	}
}
