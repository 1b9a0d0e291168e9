//! ViewSets with per-action read/write serializer selection.
//!
//! [`ActionSerializerViewSet`] is the host surface: default CRUD handlers
//! that resolve their serializers through the controller's
//! [`SerializerConfig`], honoring the `serializer_class_override` hook.
//! [`ActionSerializerModelViewSet`] is the ready-made implementation
//! configured by builder; controllers with custom actions implement the
//! trait on their own type and override `handle_custom`.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

use crate::actions::{Action, ActionKind, SerializerRole};
use crate::error::{Error, Result};
use crate::model::Model;
use crate::pagination::PageNumberPagination;
use crate::request::Request;
use crate::resolve::SerializerConfig;
use crate::response::Response;
use crate::serializers::SerializerClass;
use crate::store::Store;

/// Parse the `pk` path parameter into the model's primary-key type.
fn object_pk<M: Model>(request: &Request) -> Result<M::PrimaryKey> {
	let raw = request
		.path_param("pk")
		.ok_or_else(|| Error::Http("Missing `pk` path parameter".to_string()))?;
	raw.parse().map_err(|_| {
		Error::NotFound(format!(
			"{} with primary key {} not found",
			M::table_name(),
			raw
		))
	})
}

/// Map request-time failures to HTTP responses.
///
/// `ImproperlyConfigured` is deliberately excluded: a broken controller setup
/// is a programming error and must surface as a failure, not as a response.
fn exception_response(error: Error) -> Result<Response> {
	match error {
		Error::Validation(detail) => Response::bad_request().with_json(&json!({"detail": detail})),
		Error::NotFound(detail) => Response::not_found().with_json(&json!({"detail": detail})),
		Error::InvalidPage(detail) => Response::not_found().with_json(&json!({"detail": detail})),
		other => Err(other),
	}
}

/// ViewSet trait with per-action serializer resolution.
///
/// Write actions (`create`, `update`, `partial_update`) perform two
/// independent resolutions against the same configuration: the write
/// serializer validates and persists the input, then the read serializer
/// renders the persisted instance for the response.
#[async_trait]
pub trait ActionSerializerViewSet: Send + Sync {
	type Model: Model;

	/// Get the basename for URL routing
	fn basename(&self) -> &str;

	/// Object storage backing this ViewSet
	fn store(&self) -> &dyn Store<Self::Model>;

	/// The serializer slot table for this controller
	fn serializers(&self) -> &SerializerConfig<Self::Model>;

	/// Pagination for the list action; `None` renders a plain array
	fn pagination(&self) -> Option<&PageNumberPagination> {
		None
	}

	/// Explicit per-action serializer override.
	///
	/// When this returns `Some`, that serializer is used for both the read
	/// and the write role of the action and the configured slots are not
	/// consulted at all.
	fn serializer_class_override(&self, _action: &Action) -> Option<SerializerClass<Self::Model>> {
		None
	}

	/// The serializer for the current action, in the action's primary role:
	/// write for `create`/`update`/`partial_update`, read otherwise.
	///
	/// # Errors
	///
	/// `Error::ImproperlyConfigured` when neither the override hook nor any
	/// applicable configuration slot yields a serializer.
	fn get_serializer_class(&self, action: &Action) -> Result<SerializerClass<Self::Model>> {
		if let Some(serializer) = self.serializer_class_override(action) {
			return Ok(serializer);
		}
		let role = if action.kind.is_write() {
			SerializerRole::Write
		} else {
			SerializerRole::Read
		};
		self.serializers().resolve(&action.kind, role)
	}

	/// The serializer rendering output for the current action.
	fn get_read_serializer_class(&self, action: &Action) -> Result<SerializerClass<Self::Model>> {
		if let Some(serializer) = self.serializer_class_override(action) {
			return Ok(serializer);
		}
		self.serializers().resolve(&action.kind, SerializerRole::Read)
	}

	/// The serializer validating input for the current action.
	fn get_write_serializer_class(&self, action: &Action) -> Result<SerializerClass<Self::Model>> {
		if let Some(serializer) = self.serializer_class_override(action) {
			return Ok(serializer);
		}
		self.serializers()
			.resolve(&action.kind, SerializerRole::Write)
	}

	/// Look up the object addressed by the `pk` path parameter.
	async fn get_object(&self, request: &Request) -> Result<Self::Model> {
		let pk = object_pk::<Self::Model>(request)?;
		self.store().get(&pk).await?.ok_or_else(|| {
			Error::NotFound(format!(
				"{} with primary key {} not found",
				<Self::Model as Model>::table_name(),
				pk
			))
		})
	}

	/// Dispatch request to the appropriate action handler.
	///
	/// Validation failures become 400 responses and missing objects 404;
	/// configuration errors propagate as `Err`.
	async fn dispatch(&self, request: Request, action: Action) -> Result<Response> {
		debug!(basename = self.basename(), action = %action.name(), method = %request.method, "dispatching action");
		let result = match action.kind {
			ActionKind::List => self.list(request).await,
			ActionKind::Retrieve => self.retrieve(request).await,
			ActionKind::Create => self.create(request).await,
			ActionKind::Update => self.update(request, false).await,
			ActionKind::PartialUpdate => self.update(request, true).await,
			ActionKind::Destroy => self.destroy(request).await,
			ActionKind::Custom(_) => self.handle_custom(request, &action).await,
		};
		result.or_else(exception_response)
	}

	/// List all objects, paginated when pagination is configured.
	async fn list(&self, request: Request) -> Result<Response> {
		let serializer = self.get_read_serializer_class(&Action::list())?;
		let objects = self.store().list().await?;
		let data = serializer.many_to_representation(&objects)?;
		match self.pagination() {
			Some(paginator) => {
				let page = paginator.paginate(&data, request.uri.query(), request.path())?;
				Response::ok().with_json(&page)
			}
			None => Response::ok().with_json(&data),
		}
	}

	/// Retrieve a single object.
	async fn retrieve(&self, request: Request) -> Result<Response> {
		let serializer = self.get_read_serializer_class(&Action::retrieve())?;
		let object = self.get_object(&request).await?;
		Response::ok().with_json(&serializer.to_representation(&object)?)
	}

	/// Validate input through the write serializer, persist, and render the
	/// saved instance through the independently resolved read serializer.
	async fn create(&self, request: Request) -> Result<Response> {
		let action = Action::create();
		let write_serializer = self.get_write_serializer_class(&action)?;
		let data: Value = request.json()?;
		let instance = write_serializer.to_internal_value(&data)?;
		let saved = self.store().insert(instance).await?;

		let read_serializer = self.get_read_serializer_class(&action)?;
		Response::created().with_json(&read_serializer.to_representation(&saved)?)
	}

	/// Update an existing object; `partial` merges only the provided fields.
	async fn update(&self, request: Request, partial: bool) -> Result<Response> {
		let action = if partial {
			Action::partial_update()
		} else {
			Action::update()
		};
		let write_serializer = self.get_write_serializer_class(&action)?;
		let existing = self.get_object(&request).await?;
		let data: Value = request.json()?;
		let updated = write_serializer.update(existing, &data, partial)?;
		let saved = self.store().update(updated).await?;

		let read_serializer = self.get_read_serializer_class(&action)?;
		Response::ok().with_json(&read_serializer.to_representation(&saved)?)
	}

	/// Delete an object.
	async fn destroy(&self, request: Request) -> Result<Response> {
		let pk = object_pk::<Self::Model>(&request)?;
		if self.store().delete(&pk).await? {
			Ok(Response::no_content())
		} else {
			Err(Error::NotFound(format!(
				"{} with primary key {} not found",
				<Self::Model as Model>::table_name(),
				pk
			)))
		}
	}

	/// Handle a custom action. Controllers declaring extra actions override
	/// this; the default rejects the action.
	async fn handle_custom(&self, _request: Request, action: &Action) -> Result<Response> {
		Err(Error::Http(format!(
			"Unhandled custom action `{}`",
			action.name()
		)))
	}
}

/// Ready-made ViewSet over a [`Store`], configured entirely by builder.
///
/// # Examples
///
/// ```no_run
/// use action_serializers::{
///     ActionSerializerModelViewSet, JsonSerializer, MemoryStore, SerializerConfig,
/// };
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
/// let viewset = ActionSerializerModelViewSet::new("things", Arc::new(MemoryStore::<Thing>::new()))
///     .with_serializers(
///         SerializerConfig::new().serializer_class(Arc::new(JsonSerializer::new())),
///     );
/// ```
pub struct ActionSerializerModelViewSet<M: Model> {
	basename: String,
	store: Arc<dyn Store<M>>,
	serializers: SerializerConfig<M>,
	pagination: Option<PageNumberPagination>,
}

impl<M: Model> ActionSerializerModelViewSet<M> {
	pub fn new(basename: impl Into<String>, store: Arc<dyn Store<M>>) -> Self {
		Self {
			basename: basename.into(),
			store,
			serializers: SerializerConfig::new(),
			pagination: None,
		}
	}

	/// Set the serializer slot table.
	pub fn with_serializers(mut self, serializers: SerializerConfig<M>) -> Self {
		self.serializers = serializers;
		self
	}

	/// Enable pagination for the list action.
	pub fn with_pagination(mut self, pagination: PageNumberPagination) -> Self {
		self.pagination = Some(pagination);
		self
	}
}

#[async_trait]
impl<M: Model> ActionSerializerViewSet for ActionSerializerModelViewSet<M> {
	type Model = M;

	fn basename(&self) -> &str {
		&self.basename
	}

	fn store(&self) -> &dyn Store<M> {
		self.store.as_ref()
	}

	fn serializers(&self) -> &SerializerConfig<M> {
		&self.serializers
	}

	fn pagination(&self) -> Option<&PageNumberPagination> {
		self.pagination.as_ref()
	}
}
