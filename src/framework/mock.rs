//! # Mock Framework
//!
//! Utilities for testing services and entities in isolation.
//!
//! [`MockStore`] hands out a real [`StoreClient`] whose requests are answered
//! from a queue of scripted expectations instead of a live store. This is how
//! the order store's cart validation is tested without spawning a cart store,
//! and how store failures are injected deterministically.

use crate::framework::client::StoreClient;
use crate::framework::entity::StoreEntity;
use crate::framework::error::StoreError;
use crate::framework::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request together with the scripted response.
enum Expectation<T: StoreEntity> {
    Get {
        response: Result<Option<T>, StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
    Create {
        response: Result<T, StoreError>,
    },
    Update {
        response: Result<T, StoreError>,
    },
    Delete {
        response: Result<(), StoreError>,
    },
    Action {
        response: Result<T::ActionResult, StoreError>,
    },
}

/// A mock store with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockStore::<Cart>::new();
/// mock.expect_get().return_ok(Some(cart));
/// mock.expect_create().return_err(StoreError::StoreClosed);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were consumed
/// ```
pub struct MockStore<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> MockStore<T> {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task answers each request with the next expectation.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (StoreRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `get` request.
    pub fn expect_get(&mut self) -> GetExpectation<'_, T> {
        GetExpectation { mock: self }
    }

    /// Expects a `list` request.
    pub fn expect_list(&mut self) -> ListExpectation<'_, T> {
        ListExpectation { mock: self }
    }

    /// Expects a `create` request.
    pub fn expect_create(&mut self) -> CreateExpectation<'_, T> {
        CreateExpectation { mock: self }
    }

    /// Expects an `update` request.
    pub fn expect_update(&mut self) -> UpdateExpectation<'_, T> {
        UpdateExpectation { mock: self }
    }

    /// Expects a `delete` request.
    pub fn expect_delete(&mut self) -> DeleteExpectation<'_, T> {
        DeleteExpectation { mock: self }
    }

    /// Expects an `action` request.
    pub fn expect_action(&mut self) -> ActionExpectation<'_, T> {
        ActionExpectation { mock: self }
    }

    fn push(&self, expectation: Expectation<T>) {
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Verifies that all expectations were consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectation<'a, T: StoreEntity> {
    mock: &'a MockStore<T>,
}

impl<T: StoreEntity> GetExpectation<'_, T> {
    pub fn return_ok(self, value: Option<T>) {
        self.mock.push(Expectation::Get {
            response: Ok(value),
        });
    }

    pub fn return_err(self, error: StoreError) {
        self.mock.push(Expectation::Get {
            response: Err(error),
        });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectation<'a, T: StoreEntity> {
    mock: &'a MockStore<T>,
}

impl<T: StoreEntity> ListExpectation<'_, T> {
    pub fn return_ok(self, items: Vec<T>) {
        self.mock.push(Expectation::List {
            response: Ok(items),
        });
    }

    pub fn return_err(self, error: StoreError) {
        self.mock.push(Expectation::List {
            response: Err(error),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectation<'a, T: StoreEntity> {
    mock: &'a MockStore<T>,
}

impl<T: StoreEntity> CreateExpectation<'_, T> {
    pub fn return_ok(self, created: T) {
        self.mock.push(Expectation::Create {
            response: Ok(created),
        });
    }

    pub fn return_err(self, error: StoreError) {
        self.mock.push(Expectation::Create {
            response: Err(error),
        });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectation<'a, T: StoreEntity> {
    mock: &'a MockStore<T>,
}

impl<T: StoreEntity> UpdateExpectation<'_, T> {
    pub fn return_ok(self, updated: T) {
        self.mock.push(Expectation::Update {
            response: Ok(updated),
        });
    }

    pub fn return_err(self, error: StoreError) {
        self.mock.push(Expectation::Update {
            response: Err(error),
        });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectation<'a, T: StoreEntity> {
    mock: &'a MockStore<T>,
}

impl<T: StoreEntity> DeleteExpectation<'_, T> {
    pub fn return_ok(self) {
        self.mock.push(Expectation::Delete { response: Ok(()) });
    }

    pub fn return_err(self, error: StoreError) {
        self.mock.push(Expectation::Delete {
            response: Err(error),
        });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectation<'a, T: StoreEntity> {
    mock: &'a MockStore<T>,
}

impl<T: StoreEntity> ActionExpectation<'_, T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.mock.push(Expectation::Action {
            response: Ok(result),
        });
    }

    pub fn return_err(self, error: StoreError) {
        self.mock.push(Expectation::Action {
            response: Err(error),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cart, CartCreate, CartId, UserId};

    #[tokio::test]
    async fn mock_store_answers_scripted_expectations() {
        let mut mock = MockStore::<Cart>::new();

        let cart = Cart {
            cart_id: CartId(1),
            user_id: UserId(4),
        };
        mock.expect_create().return_ok(cart.clone());
        mock.expect_get().return_ok(Some(cart.clone()));

        let client = mock.client();

        let created = client
            .create(CartCreate {
                user_id: UserId(4),
            })
            .await
            .unwrap();
        assert_eq!(created, cart);

        let fetched = client.get(CartId(1)).await.unwrap();
        assert_eq!(fetched, Some(cart));

        mock.verify();
    }

    #[tokio::test]
    async fn mock_store_injects_failures() {
        let mut mock = MockStore::<Cart>::new();
        mock.expect_get().return_err(StoreError::StoreClosed);

        let client = mock.client();
        let err = client.get(CartId(1)).await.unwrap_err();
        assert!(matches!(err, StoreError::StoreClosed));

        mock.verify();
    }
}
