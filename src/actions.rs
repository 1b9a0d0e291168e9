//! Action types for ViewSet operations.

use std::fmt;

/// The kind of action a ViewSet is executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
	List,
	Retrieve,
	Create,
	Update,
	PartialUpdate,
	Destroy,
	Custom(&'static str),
}

impl ActionKind {
	/// Canonical action name, as used in URL confs and log output.
	pub fn name(&self) -> &str {
		match self {
			ActionKind::List => "list",
			ActionKind::Retrieve => "retrieve",
			ActionKind::Create => "create",
			ActionKind::Update => "update",
			ActionKind::PartialUpdate => "partial_update",
			ActionKind::Destroy => "destroy",
			ActionKind::Custom(name) => name,
		}
	}

	/// Whether this action validates request input through a write serializer.
	pub fn is_write(&self) -> bool {
		matches!(
			self,
			ActionKind::Create | ActionKind::Update | ActionKind::PartialUpdate
		)
	}
}

impl fmt::Display for ActionKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// The role a serializer plays for the current action: validating input
/// (write) or rendering output (read).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializerRole {
	Read,
	Write,
}

impl fmt::Display for SerializerRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SerializerRole::Read => f.write_str("read"),
			SerializerRole::Write => f.write_str("write"),
		}
	}
}

/// Action metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
	pub kind: ActionKind,
	pub detail: bool, // Whether this action operates on a single object
}

impl Action {
	pub fn list() -> Self {
		Self {
			kind: ActionKind::List,
			detail: false,
		}
	}
	pub fn retrieve() -> Self {
		Self {
			kind: ActionKind::Retrieve,
			detail: true,
		}
	}
	pub fn create() -> Self {
		Self {
			kind: ActionKind::Create,
			detail: false,
		}
	}
	pub fn update() -> Self {
		Self {
			kind: ActionKind::Update,
			detail: true,
		}
	}
	pub fn partial_update() -> Self {
		Self {
			kind: ActionKind::PartialUpdate,
			detail: true,
		}
	}
	pub fn destroy() -> Self {
		Self {
			kind: ActionKind::Destroy,
			detail: true,
		}
	}
	pub fn custom(name: &'static str, detail: bool) -> Self {
		Self {
			kind: ActionKind::Custom(name),
			detail,
		}
	}

	/// The name of the action, e.g. `"partial_update"` or a custom name.
	pub fn name(&self) -> &str {
		self.kind.name()
	}

	/// Create an Action from a string name.
	/// Maps standard action names to their corresponding kind; anything else
	/// becomes a custom action.
	///
	/// # Examples
	///
	/// ```
	/// use action_serializers::Action;
	///
	/// let action = Action::from_name("list");
	/// assert_eq!(action.detail, false);
	/// ```
	pub fn from_name(name: &str) -> Self {
		match name {
			"list" => Self::list(),
			"retrieve" => Self::retrieve(),
			"create" => Self::create(),
			"update" => Self::update(),
			"partial_update" => Self::partial_update(),
			"destroy" => Self::destroy(),
			custom_name => Self {
				kind: ActionKind::Custom(Box::leak(custom_name.to_string().into_boxed_str())),
				detail: false, // Default to list-like action
			},
		}
	}
}
