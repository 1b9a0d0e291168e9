//! Persistence seam for ViewSets.
//!
//! ViewSets only talk to the `Store` trait; `MemoryStore` is the in-memory
//! implementation used by tests and small deployments. Database-backed
//! stores implement the same trait.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::error::{Error, Result};
use crate::model::Model;

/// Object storage contract consumed by ViewSet handlers.
#[async_trait]
pub trait Store<M: Model>: Send + Sync {
	/// All objects, in a stable order.
	async fn list(&self) -> Result<Vec<M>>;

	/// Look up one object by primary key.
	async fn get(&self, pk: &M::PrimaryKey) -> Result<Option<M>>;

	/// Persist a new object, assigning a primary key if it has none.
	async fn insert(&self, instance: M) -> Result<M>;

	/// Replace the stored object with the same primary key.
	async fn update(&self, instance: M) -> Result<M>;

	/// Delete by primary key. Returns whether an object was removed.
	async fn delete(&self, pk: &M::PrimaryKey) -> Result<bool>;
}

/// In-memory store with auto-incrementing integer primary keys.
///
/// Objects are kept in insertion order, which for auto-assigned keys is also
/// primary-key order.
pub struct MemoryStore<M> {
	objects: RwLock<Vec<M>>,
	next_pk: AtomicI64,
}

impl<M: Model<PrimaryKey = i64>> MemoryStore<M> {
	/// Creates an empty `MemoryStore`.
	///
	/// # Examples
	///
	/// ```
	/// use action_serializers::{MemoryStore, Model};
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
	///
	/// let store: MemoryStore<Thing> = MemoryStore::new();
	/// ```
	pub fn new() -> Self {
		Self {
			objects: RwLock::new(Vec::new()),
			next_pk: AtomicI64::new(1),
		}
	}
}

impl<M: Model<PrimaryKey = i64>> Default for MemoryStore<M> {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl<M: Model<PrimaryKey = i64>> Store<M> for MemoryStore<M> {
	async fn list(&self) -> Result<Vec<M>> {
		Ok(self.objects.read().clone())
	}

	async fn get(&self, pk: &i64) -> Result<Option<M>> {
		Ok(self
			.objects
			.read()
			.iter()
			.find(|obj| obj.primary_key() == Some(pk))
			.cloned())
	}

	async fn insert(&self, mut instance: M) -> Result<M> {
		if instance.primary_key().is_none() {
			instance.set_primary_key(self.next_pk.fetch_add(1, Ordering::SeqCst));
		}
		self.objects.write().push(instance.clone());
		Ok(instance)
	}

	async fn update(&self, instance: M) -> Result<M> {
		let pk = instance.primary_key().copied().ok_or_else(|| {
			Error::Validation(format!(
				"Cannot update {} without a primary key",
				M::table_name()
			))
		})?;
		let mut objects = self.objects.write();
		match objects
			.iter_mut()
			.find(|obj| obj.primary_key() == Some(&pk))
		{
			Some(slot) => {
				*slot = instance.clone();
				Ok(instance)
			}
			None => Err(Error::NotFound(format!(
				"{} with primary key {} not found",
				M::table_name(),
				pk
			))),
		}
	}

	async fn delete(&self, pk: &i64) -> Result<bool> {
		let mut objects = self.objects.write();
		let before = objects.len();
		objects.retain(|obj| obj.primary_key() != Some(pk));
		Ok(objects.len() < before)
	}
}
