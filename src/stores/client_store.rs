//! # Client Store
//!
//! High‑level data access for the `Client` actor.
use crate::client_actor::{ClientAction, ClientError};
use crate::model::{Client, ClientFields, ClientId, SellerId};
use async_trait::async_trait;
use resource_actor::{EntityStore, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Store for interacting with the Client actor.
#[derive(Clone)]
pub struct ClientStore {
    inner: ResourceClient<Client>,
}

impl ClientStore {
    pub fn new(inner: ResourceClient<Client>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EntityStore<Client> for ClientStore {
    type Error = ClientError;

    fn inner(&self) -> &ResourceClient<Client> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}

impl ClientStore {
    /// Creates the client when `id` is `None`, otherwise replaces the fields of client `id`.
    #[instrument(skip(self))]
    pub async fn save(
        &self,
        id: Option<ClientId>,
        fields: ClientFields,
    ) -> Result<Client, ClientError> {
        debug!("Sending request");
        match id {
            None => self.inner.create(fields).await,
            Some(id) => self.inner.update(id, fields).await,
        }
        .map_err(ClientError::from)
    }

    /// Clients whose seller reference equals `seller_id`.
    #[instrument(skip(self))]
    pub async fn list_by_seller(&self, seller_id: SellerId) -> Result<Vec<Client>, ClientError> {
        self.list_filtered(move |c: &Client| c.seller_id == Some(seller_id))
            .await
    }

    /// Clears the seller reference of every client attached to `seller_id`.
    ///
    /// Clients deleted or moved to another seller after the listing are skipped. Returns how
    /// many clients were detached.
    #[instrument(skip(self))]
    pub async fn detach_seller(&self, seller_id: SellerId) -> Result<usize, ClientError> {
        let attached = self.list_by_seller(seller_id).await?;
        let mut detached = 0;
        for client in &attached {
            debug!(client_id = %client.id, "Detaching seller");
            match self
                .inner
                .perform_action(client.id, ClientAction::DetachSeller(seller_id))
                .await
                .map_err(ClientError::from)
            {
                Ok(true) => detached += 1,
                Ok(false) => debug!(client_id = %client.id, "Client moved to another seller"),
                Err(ClientError::NotFound(_)) => debug!(client_id = %client.id, "Client already gone"),
                Err(e) => return Err(e),
            }
        }
        Ok(detached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::MockClient;

    #[tokio::test]
    async fn test_save_dispatches_on_id() {
        let mut mock = MockClient::<Client>::new();
        mock.expect_create()
            .return_ok(Client::new(ClientId(1), "Bob", None));
        mock.expect_update(ClientId(1))
            .return_err(FrameworkError::Conflict("Ann".into()));
        let store = ClientStore::new(mock.client());

        let fields = ClientFields {
            name: "Bob".into(),
            seller_id: None,
        };
        assert_eq!(store.save(None, fields).await.unwrap().id, ClientId(1));

        let rename = ClientFields {
            name: "Ann".into(),
            seller_id: None,
        };
        assert_eq!(
            store.save(Some(ClientId(1)), rename).await,
            Err(ClientError::AlreadyExists("Ann".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_detach_seller_only_touches_attached_clients() {
        let mut mock = MockClient::<Client>::new();
        mock.expect_list().return_ok(vec![
            Client::new(ClientId(1), "Bob", Some(SellerId(1))),
            Client::new(ClientId(2), "Ann", Some(SellerId(2))),
            Client::new(ClientId(3), "Eve", Some(SellerId(1))),
        ]);
        mock.expect_action(ClientId(1)).return_ok(true);
        mock.expect_action(ClientId(3)).return_ok(true);
        let store = ClientStore::new(mock.client());

        assert_eq!(store.detach_seller(SellerId(1)).await.unwrap(), 2);
        mock.verify();
    }

    #[tokio::test]
    async fn test_detach_seller_skips_clients_gone_or_moved_since_listing() {
        let mut mock = MockClient::<Client>::new();
        mock.expect_list().return_ok(vec![
            Client::new(ClientId(1), "Bob", Some(SellerId(1))),
            Client::new(ClientId(2), "Ann", Some(SellerId(1))),
            Client::new(ClientId(3), "Eve", Some(SellerId(1))),
        ]);
        mock.expect_action(ClientId(1))
            .return_err(FrameworkError::NotFound("client_1".into()));
        mock.expect_action(ClientId(2)).return_ok(false);
        mock.expect_action(ClientId(3)).return_ok(true);
        let store = ClientStore::new(mock.client());

        assert_eq!(store.detach_seller(SellerId(1)).await.unwrap(), 1);
        mock.verify();
    }

    #[tokio::test]
    async fn test_detach_seller_stops_on_store_failure() {
        let mut mock = MockClient::<Client>::new();
        mock.expect_list().return_ok(vec![
            Client::new(ClientId(1), "Bob", Some(SellerId(1))),
            Client::new(ClientId(2), "Ann", Some(SellerId(1))),
        ]);
        mock.expect_action(ClientId(1)).return_err(FrameworkError::ActorClosed);
        let store = ClientStore::new(mock.client());

        assert!(matches!(
            store.detach_seller(SellerId(1)).await,
            Err(ClientError::ActorCommunicationError(_))
        ));
        mock.verify();
    }
}
