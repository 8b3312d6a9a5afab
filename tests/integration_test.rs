use cart_order_service::cart_store::{self, CartError};
use cart_order_service::directory::{self, StoreUserDirectory};
use cart_order_service::model::{
    CartCreate, CartId, CartUpdate, InvalidTransition, OrderDraft, OrderId, OrderStatus,
    OrderUpdate, UserId, UserProfileCreate, UserProfileUpdate,
};
use cart_order_service::order_store::OrderError;
use cart_order_service::runtime::CartOrderSystem;
use cart_order_service::services::CartService;
use chrono::Utc;
use std::sync::Arc;

fn profile(first: &str, last: &str, email: &str) -> UserProfileCreate {
    UserProfileCreate {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        phone: None,
    }
}

/// Full end-to-end walk through the order lifecycle with all real stores:
/// create a cart, order against it, advance the status to its terminal
/// state, and verify both terminal-state guards.
#[tokio::test]
async fn test_full_order_lifecycle() {
    let system = CartOrderSystem::new();

    let alice = system
        .users
        .create(profile("Alice", "Example", "alice@example.com"))
        .await
        .expect("Failed to seed profile");

    let cart = system
        .cart_service
        .create_cart(CartCreate {
            user_id: alice.user_id,
        })
        .await
        .expect("Failed to create cart");
    assert_eq!(cart.cart_id, CartId(1));

    // Create: status and active flag are forced, the date is set.
    let order = system
        .order_service
        .create_order(OrderDraft {
            order_desc: Some("A".into()),
            order_fee: Some(100.0),
            cart_id: Some(cart.cart_id),
            ..OrderDraft::default()
        })
        .await
        .expect("Failed to create order");
    assert_eq!(order.status, OrderStatus::Created);
    assert!(order.is_active);
    assert!(order.order_date <= Utc::now());
    assert_eq!(order.cart.user_id, alice.user_id);

    // Walk the state machine forward.
    let order = system
        .order_service
        .advance_status(order.order_id)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Ordered);

    let order = system
        .order_service
        .advance_status(order.order_id)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::InPayment);

    // No transition out of InPayment.
    let err = system
        .order_service
        .advance_status(order.order_id)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::InvalidTransition(InvalidTransition {
            from: OrderStatus::InPayment
        })
    );

    // And no deletion mid-payment; the record stays as it was.
    let err = system
        .order_service
        .delete_order(order.order_id)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::PaymentInProgress(order.order_id.to_string())
    );

    let unchanged = system.order_service.get_order(order.order_id).await.unwrap();
    assert_eq!(unchanged.status, OrderStatus::InPayment);
    assert!(unchanged.is_active);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_order_creation_guards() {
    let system = CartOrderSystem::new();

    // A draft with no cart reference at all is an argument error.
    let err = system
        .order_service
        .create_order(OrderDraft {
            order_desc: Some("Order without cart".into()),
            order_fee: Some(3000.0),
            ..OrderDraft::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::MissingCart);

    // A cart id that does not resolve is rejected with nothing persisted.
    let err = system
        .order_service
        .create_order(OrderDraft {
            order_desc: Some("Order".into()),
            cart_id: Some(CartId(999)),
            ..OrderDraft::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::CartNotFound("999".to_string()));

    assert!(system
        .order_service
        .list_active_orders()
        .await
        .unwrap()
        .is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_soft_delete_hides_the_order_from_active_views() {
    let system = CartOrderSystem::new();

    let cart = system
        .cart_service
        .create_cart(CartCreate { user_id: UserId(1) })
        .await
        .unwrap();

    let keep = system
        .order_service
        .create_order(OrderDraft {
            order_desc: Some("keep".into()),
            cart_id: Some(cart.cart_id),
            ..OrderDraft::default()
        })
        .await
        .unwrap();
    let discard = system
        .order_service
        .create_order(OrderDraft {
            order_desc: Some("discard".into()),
            cart_id: Some(cart.cart_id),
            ..OrderDraft::default()
        })
        .await
        .unwrap();

    system.order_service.delete_order(discard.order_id).await.unwrap();

    let active = system.order_service.list_active_orders().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].order_id, keep.order_id);

    // The deactivated order answers NotFound everywhere.
    let err = system
        .order_service
        .get_order(discard.order_id)
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::NotFound(discard.order_id.to_string()));

    // As does an id that never existed.
    let err = system
        .order_service
        .update_order(OrderId(777), OrderUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::NotFound("777".to_string()));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cart_enrichment_and_profile_updates() {
    let system = CartOrderSystem::new();

    let bob = system
        .users
        .create(profile("Bob", "Builder", "bob@example.com"))
        .await
        .unwrap();

    let with_profile = system
        .cart_service
        .create_cart(CartCreate { user_id: bob.user_id })
        .await
        .unwrap();
    // The directory has never heard of user 99; the cart is still valid.
    let without_profile = system
        .cart_service
        .create_cart(CartCreate {
            user_id: UserId(99),
        })
        .await
        .unwrap();

    let enriched = system
        .cart_service
        .get_cart(with_profile.cart_id)
        .await
        .unwrap();
    assert_eq!(
        enriched.profile.as_ref().map(|p| p.email.as_str()),
        Some("bob@example.com")
    );

    let bare = system
        .cart_service
        .get_cart(without_profile.cart_id)
        .await
        .unwrap();
    assert!(bare.profile.is_none());

    let all = system.cart_service.list_carts().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all.iter().filter(|c| c.profile.is_some()).count(), 1);

    // Enrichment reads live directory data: a profile update shows up on the
    // next cart read.
    system
        .users
        .update(
            bob.user_id,
            UserProfileUpdate {
                email: Some("bob@rebuilt.example.com".to_string()),
                phone: None,
            },
        )
        .await
        .unwrap();

    let refreshed = system
        .cart_service
        .get_cart(with_profile.cart_id)
        .await
        .unwrap();
    assert_eq!(
        refreshed.profile.as_ref().map(|p| p.email.as_str()),
        Some("bob@rebuilt.example.com")
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_keeps_its_cart_snapshot_by_value() {
    let system = CartOrderSystem::new();

    let cart = system
        .cart_service
        .create_cart(CartCreate { user_id: UserId(1) })
        .await
        .unwrap();

    let order = system
        .order_service
        .create_order(OrderDraft {
            cart_id: Some(cart.cart_id),
            ..OrderDraft::default()
        })
        .await
        .unwrap();
    assert_eq!(order.cart.user_id, UserId(1));

    // Hand the cart to another user; the order's snapshot must not move.
    system
        .cart_service
        .update_cart_by_id(
            cart.cart_id,
            CartUpdate {
                user_id: Some(UserId(2)),
            },
        )
        .await
        .unwrap();

    let order = system.order_service.get_order(order.order_id).await.unwrap();
    assert_eq!(order.cart.user_id, UserId(1));

    // Only an explicit re-point refreshes the snapshot.
    let second_cart = system
        .cart_service
        .create_cart(CartCreate { user_id: UserId(3) })
        .await
        .unwrap();
    let order = system
        .order_service
        .update_order(
            order.order_id,
            OrderUpdate {
                cart_id: Some(second_cart.cart_id),
                ..OrderUpdate::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(order.cart.cart_id, second_cart.cart_id);
    assert_eq!(order.cart.user_id, UserId(3));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cart_deletion_is_hard_and_breaks_new_orders_only() {
    let system = CartOrderSystem::new();

    let cart = system
        .cart_service
        .create_cart(CartCreate { user_id: UserId(1) })
        .await
        .unwrap();
    let order = system
        .order_service
        .create_order(OrderDraft {
            cart_id: Some(cart.cart_id),
            ..OrderDraft::default()
        })
        .await
        .unwrap();

    system.cart_service.delete_cart(cart.cart_id).await.unwrap();

    // Deleting twice is NotFound; the cart is really gone.
    let err = system
        .cart_service
        .delete_cart(cart.cart_id)
        .await
        .unwrap_err();
    assert_eq!(err, CartError::NotFound(cart.cart_id.to_string()));
    let err = system.cart_service.get_cart(cart.cart_id).await.unwrap_err();
    assert_eq!(err, CartError::NotFound(cart.cart_id.to_string()));

    // New orders can no longer reference it...
    let err = system
        .order_service
        .create_order(OrderDraft {
            cart_id: Some(cart.cart_id),
            ..OrderDraft::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::CartNotFound(cart.cart_id.to_string()));

    // ...but the existing order keeps its snapshot.
    let existing = system.order_service.get_order(order.order_id).await.unwrap();
    assert_eq!(existing.cart.cart_id, cart.cart_id);

    system.shutdown().await.unwrap();
}

/// Concurrent status advances serialize inside the order store: with three
/// racing callers exactly two transitions exist to be taken, so exactly one
/// caller is rejected, deterministically.
#[tokio::test]
async fn test_concurrent_advances_serialize() {
    let system = CartOrderSystem::new();

    let cart = system
        .cart_service
        .create_cart(CartCreate { user_id: UserId(1) })
        .await
        .unwrap();
    let order = system
        .order_service
        .create_order(OrderDraft {
            cart_id: Some(cart.cart_id),
            ..OrderDraft::default()
        })
        .await
        .unwrap();

    let mut handles = vec![];
    for _ in 0..3 {
        let order_service = system.order_service.clone();
        let id = order.order_id;
        handles.push(tokio::spawn(
            async move { order_service.advance_status(id).await },
        ));
    }

    let mut successful = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful += 1,
            Err(OrderError::InvalidTransition(_)) => rejected += 1,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }
    assert_eq!(successful, 2, "exactly two transitions can be taken");
    assert_eq!(rejected, 1, "the third caller must be rejected");

    let final_order = system.order_service.get_order(order.order_id).await.unwrap();
    assert_eq!(final_order.status, OrderStatus::InPayment);

    system.shutdown().await.unwrap();
}

/// A directory that never comes up must cost carts their profiles, not their
/// availability. Wired manually so the outage is total.
#[tokio::test]
async fn test_cart_reads_survive_directory_outage() {
    let (cart_actor, cart_client) = cart_store::new();
    tokio::spawn(cart_actor.run(()));

    let (user_actor, user_client) = directory::new();
    drop(user_actor); // the directory service never starts

    let service = CartService::new(
        cart_client,
        Arc::new(StoreUserDirectory::new(user_client)),
    );

    service
        .create_cart(CartCreate { user_id: UserId(1) })
        .await
        .unwrap();
    service
        .create_cart(CartCreate { user_id: UserId(2) })
        .await
        .unwrap();

    // Every lookup fails, yet every cart is returned, each without a
    // profile, and no error surfaces.
    let carts = service.list_carts().await.unwrap();
    assert_eq!(carts.len(), 2);
    assert!(carts.iter().all(|c| c.profile.is_none()));

    let one = service.get_cart(carts[0].cart.cart_id).await.unwrap();
    assert!(one.profile.is_none());
}
