//! # EntityStore Trait
//!
//! Common interface for resource‑specific stores, providing the standard lookups, listing,
//! deletion and uniqueness checks on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific stores to inherit standard data-access operations.
///
/// Implementors only supply the inner client and an error mapping; `save` stays on the concrete
/// store because creation and update payloads differ per entity.
///
/// # Example
///
/// ```rust
/// use resource_actor::{ActorEntity, EntityStore, FrameworkError, ResourceActor, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Tag { id: u32, label: String }
/// #[derive(Debug)] struct TagCreate { label: String }
/// #[derive(Debug)] struct TagUpdate;
/// #[derive(Debug)] enum TagAction {}
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct TagError(String);
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u32;
///     type Create = TagCreate;
///     type Update = TagUpdate;
///     type Action = TagAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = TagError;
///
///     fn from_create_params(id: u32, params: TagCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, label: params.label })
///     }
///     fn id(&self) -> &u32 { &self.id }
///     fn unique_key(&self) -> Option<&str> { Some(&self.label) }
///     async fn on_update(&mut self, _: TagUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: TagAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct TagStore {
///     inner: ResourceClient<Tag>,
/// }
///
/// #[async_trait]
/// impl EntityStore<Tag> for TagStore {
///     type Error = TagError;
///
///     fn inner(&self) -> &ResourceClient<Tag> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         TagError(e.to_string())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, inner) = ResourceActor::<Tag>::new(10);
///     tokio::spawn(actor.run(()));
///     let store = TagStore { inner: inner.clone() };
///
///     let tag = inner.create(TagCreate { label: "rust".into() }).await.unwrap();
///     assert!(!store.is_unique("rust", None).await.unwrap());
///     assert!(store.is_unique("rust", Some(tag.id)).await.unwrap());
///     assert_eq!(store.list().await.unwrap().len(), 1);
/// }
/// ```
#[async_trait]
pub trait EntityStore<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn find(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, in ID order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Fetch the entities accepted by `predicate`, in ID order.
    #[tracing::instrument(skip(self, predicate))]
    async fn list_filtered<F>(&self, predicate: F) -> Result<Vec<T>, Self::Error>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        tracing::debug!("Sending request");
        self.inner()
            .list_filtered(predicate)
            .await
            .map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Whether `key` is free for the entity identified by `id` (`None` for a new entity).
    ///
    /// An entity never collides with itself.
    #[tracing::instrument(skip(self))]
    async fn is_unique(&self, key: &str, id: Option<T::Id>) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        let holder = self
            .inner()
            .find_by_key(key)
            .await
            .map_err(Self::map_error)?;
        Ok(match holder {
            None => true,
            Some(existing) => id.as_ref() == Some(existing.id()),
        })
    }
}
