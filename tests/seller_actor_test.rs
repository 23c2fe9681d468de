use crud_seller_client::model::{Client, ClientId, SellerFields, SellerId};
use crud_seller_client::seller_actor::SellerError;
use crud_seller_client::stores::ClientStore;
use resource_actor::mock::MockClient;
use resource_actor::{EntityStore, FrameworkError};

/// Real Seller actor with a mocked Client store.
/// Deleting a seller must detach every client that references it, from inside `on_delete`.
#[tokio::test]
async fn test_seller_delete_detaches_its_clients() {
    let mut client_mock = MockClient::<Client>::new();

    // detach_seller lists the clients, then detaches the attached ones one by one
    client_mock.expect_list().return_ok(vec![
        Client::new(ClientId(1), "Bob", Some(SellerId(1))),
        Client::new(ClientId(2), "Ann", None),
    ]);
    client_mock.expect_action(ClientId(1)).return_ok(true);

    let client_store = ClientStore::new(client_mock.client());
    let (seller_actor, seller_store) = crud_seller_client::seller_actor::new(8);
    let actor_handle = tokio::spawn(seller_actor.run(client_store));

    let acme = seller_store
        .save(None, SellerFields { name: "Acme".into() })
        .await
        .unwrap();
    assert_eq!(acme.id, SellerId(1));

    seller_store.delete(acme.id).await.unwrap();
    assert!(seller_store.find(acme.id).await.unwrap().is_none());

    client_mock.verify();

    drop(seller_store);
    actor_handle.await.unwrap();
}

/// When the clients cannot be detached, the seller is kept.
#[tokio::test]
async fn test_failed_detach_keeps_the_seller() {
    let mut client_mock = MockClient::<Client>::new();
    client_mock
        .expect_list()
        .return_err(FrameworkError::ActorClosed);

    let (seller_actor, seller_store) = crud_seller_client::seller_actor::new(8);
    let actor_handle = tokio::spawn(seller_actor.run(ClientStore::new(client_mock.client())));

    let acme = seller_store
        .save(None, SellerFields { name: "Acme".into() })
        .await
        .unwrap();

    let result = seller_store.delete(acme.id).await;
    assert!(matches!(result, Err(SellerError::DetachFailed(_))));
    assert!(seller_store.find(acme.id).await.unwrap().is_some());

    client_mock.verify();
    drop(seller_store);
    actor_handle.await.unwrap();
}

/// A client deleted between the listing and its detach does not block the seller delete.
#[tokio::test]
async fn test_client_deleted_during_detach_does_not_block_seller_delete() {
    let mut client_mock = MockClient::<Client>::new();
    client_mock.expect_list().return_ok(vec![
        Client::new(ClientId(1), "Bob", Some(SellerId(1))),
        Client::new(ClientId(2), "Ann", Some(SellerId(1))),
    ]);
    client_mock
        .expect_action(ClientId(1))
        .return_err(FrameworkError::NotFound("client_1".into()));
    client_mock.expect_action(ClientId(2)).return_ok(true);

    let (seller_actor, seller_store) = crud_seller_client::seller_actor::new(8);
    let actor_handle = tokio::spawn(seller_actor.run(ClientStore::new(client_mock.client())));

    let acme = seller_store
        .save(None, SellerFields { name: "Acme".into() })
        .await
        .unwrap();

    seller_store.delete(acme.id).await.unwrap();
    assert!(seller_store.find(acme.id).await.unwrap().is_none());

    client_mock.verify();
    drop(seller_store);
    actor_handle.await.unwrap();
}
