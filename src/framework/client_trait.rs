//! # StoreHandle Trait
//!
//! Common interface for resource-specific store wrappers, adding default
//! `find`, `find_all`, and `delete` methods on top of a generic
//! [`StoreClient`], with errors mapped into the resource's own enum.

use crate::framework::client::StoreClient;
use crate::framework::entity::StoreEntity;
use crate::framework::error::StoreError;
use async_trait::async_trait;

/// Trait for resource-specific store wrappers to inherit the read/delete
/// operations every store contract shares.
///
/// A wrapper implements `inner()` and `map_error()` once and gets `find`,
/// `find_all`, and `delete` for free; resource-specific writes (`save`,
/// `update`, actions) stay on the wrapper itself where their payload types
/// live.
#[async_trait]
pub trait StoreHandle<T: StoreEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &StoreClient<T>;

    /// Map framework errors to the resource error type. Implementations are
    /// expected to recover typed hook errors via
    /// [`StoreError::downcast_entity`] so nothing is flattened to a string
    /// before the Request Layer sees it.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn find(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch a snapshot of every record.
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete a record by id (hard delete).
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
