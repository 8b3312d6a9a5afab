use crate::framework::{StoreClient, StoreError, StoreHandle};
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use crate::order_store::{OrderAction, OrderError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Typed client for the order store.
///
/// Implements the order store contract: `find`, `find_all_active`,
/// `find_active_by_id`, `save`, plus the update and action writes. The
/// active-only views filter soft-deleted records out of the generic reads;
/// the status guards themselves run inside the store (entity hooks), this
/// wrapper only recovers their typed errors.
#[derive(Clone)]
pub struct OrderStore {
    inner: StoreClient<Order>,
}

impl OrderStore {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    /// Every order that has not been soft-deleted.
    #[instrument(skip(self))]
    pub async fn find_all_active(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.find_all().await?;
        Ok(orders.into_iter().filter(|o| o.is_active).collect())
    }

    /// One order by id, only while it is active. Soft-deleted records answer
    /// `None` just like ids that never existed.
    #[instrument(skip(self))]
    pub async fn find_active_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        Ok(self.find(id).await?.filter(|o| o.is_active))
    }

    /// Persists a new order (cart validation happens in the store's
    /// `on_create` hook) and returns the stored snapshot.
    #[instrument(skip(self, params))]
    pub async fn save(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Merges mutable fields into the stored order.
    #[instrument(skip(self, update))]
    pub async fn update(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!(?update, "Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Runs a status-guarded action and returns the updated snapshot.
    #[instrument(skip(self))]
    pub async fn perform(&self, id: OrderId, action: OrderAction) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl StoreHandle<Order> for OrderStore {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> OrderError {
        match e.downcast_entity::<OrderError>() {
            Ok(domain) => domain,
            Err(StoreError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::Store(other.to_string()),
        }
    }
}
