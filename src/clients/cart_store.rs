use crate::cart_store::CartError;
use crate::framework::{StoreClient, StoreError, StoreHandle};
use crate::model::{Cart, CartCreate, CartId, CartUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Typed client for the cart store.
///
/// Implements the cart store contract: `find`, `find_all`, `save`, `update`,
/// `delete`. Reads and the hard delete come from [`StoreHandle`]; the writes
/// live here with their payload types.
#[derive(Clone)]
pub struct CartStore {
    inner: StoreClient<Cart>,
}

impl CartStore {
    pub fn new(inner: StoreClient<Cart>) -> Self {
        Self { inner }
    }

    /// Persists a new cart and returns it with its assigned id.
    #[instrument(skip(self))]
    pub async fn save(&self, params: CartCreate) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Replaces the stored cart's fields; fails `NotFound` if the id does
    /// not resolve.
    #[instrument(skip(self))]
    pub async fn update(&self, id: CartId, update: CartUpdate) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl StoreHandle<Cart> for CartStore {
    type Error = CartError;

    fn inner(&self) -> &StoreClient<Cart> {
        &self.inner
    }

    fn map_error(e: StoreError) -> CartError {
        match e.downcast_entity::<CartError>() {
            Ok(domain) => domain,
            Err(StoreError::NotFound(id)) => CartError::NotFound(id),
            Err(other) => CartError::Store(other.to_string()),
        }
    }
}
