//! # action-serializers
//!
//! ViewSets that pick a different serializer per action and per read/write
//! role, inspired by Django REST Framework.
//!
//! A controller configures optional serializer slots; resolution walks a
//! deterministic fallback chain over them:
//!
//! - write role (`create`, `update`, `partial_update` input):
//!   action-specific write slot → `write_serializer_class` → `serializer_class`
//! - read role (every rendered response):
//!   action-specific read slot → `read_serializer_class` → `serializer_class`
//!
//! Write actions resolve twice against the same configuration: the write
//! serializer validates and persists the input, the read serializer renders
//! the persisted instance. When no slot in the applicable chain is populated
//! the controller must define a suitable serializer, and resolution fails
//! with [`Error::ImproperlyConfigured`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use action_serializers::{
//!     Action, ActionSerializerModelViewSet, ActionSerializerViewSet, MemoryStore,
//!     SerializerConfig,
//! };
//! use std::sync::Arc;
//!
//! let viewset = ActionSerializerModelViewSet::new("things", Arc::new(MemoryStore::new()))
//!     .with_serializers(
//!         SerializerConfig::new()
//!             .write_serializer_class(Arc::new(ThingWriteSerializer))
//!             .serializer_class(Arc::new(ThingDetailSerializer)),
//!     );
//!
//! let response = viewset.dispatch(request, Action::create()).await?;
//! ```

pub mod actions;
pub mod error;
pub mod model;
pub mod pagination;
pub mod request;
pub mod resolve;
pub mod response;
pub mod serializers;
pub mod store;
pub mod testing;
pub mod viewset;

pub use actions::{Action, ActionKind, SerializerRole};
pub use error::{Error, Result};
pub use model::Model;
pub use pagination::{PageNumberPagination, PaginatedResponse};
pub use request::Request;
pub use resolve::SerializerConfig;
pub use response::Response;
pub use serializers::{JsonSerializer, ModelSerializer, SerializerClass};
pub use store::{MemoryStore, Store};
pub use viewset::{ActionSerializerModelViewSet, ActionSerializerViewSet};
