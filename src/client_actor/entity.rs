//! ActorEntity trait implementation for the Client domain type.

use crate::client_actor::{ClientAction, ClientError};
use crate::model::{Client, ClientFields, ClientId};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Client {
    type Id = ClientId;
    type Create = ClientFields;
    type Update = ClientFields;
    type Action = ClientAction;
    type ActionResult = bool;
    type Context = ();
    type Error = ClientError;

    fn from_create_params(id: ClientId, params: ClientFields) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name, params.seller_id))
    }

    fn id(&self) -> &ClientId {
        &self.id
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.name)
    }

    /// Replaces every mutable field; a missing seller in the payload clears the reference.
    async fn on_update(&mut self, update: ClientFields, _ctx: &()) -> Result<(), Self::Error> {
        self.name = update.name;
        self.seller_id = update.seller_id;
        Ok(())
    }

    /// Answers whether the reference was cleared.
    async fn handle_action(&mut self, action: ClientAction, _ctx: &()) -> Result<bool, Self::Error> {
        match action {
            ClientAction::DetachSeller(seller_id) => {
                // The client may have moved to another seller since it was listed.
                if self.seller_id != Some(seller_id) {
                    return Ok(false);
                }
                self.seller_id = None;
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SellerId;

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let mut client = Client::new(ClientId(1), "Bob", Some(SellerId(3)));
        client
            .on_update(
                ClientFields {
                    name: "Robert".into(),
                    seller_id: None,
                },
                &(),
            )
            .await
            .unwrap();
        assert_eq!(client, Client::new(ClientId(1), "Robert", None));
    }

    #[tokio::test]
    async fn test_detach_seller_clears_reference() {
        let mut client = Client::new(ClientId(1), "Bob", Some(SellerId(3)));
        let cleared = client
            .handle_action(ClientAction::DetachSeller(SellerId(3)), &())
            .await
            .unwrap();
        assert!(cleared);
        assert_eq!(client.seller_id, None);
        assert_eq!(client.unique_key(), Some("Bob"));
    }

    #[tokio::test]
    async fn test_stale_detach_keeps_new_seller() {
        // Listed under seller 1, then moved to seller 2 before the detach arrives
        let mut client = Client::new(ClientId(1), "Bob", Some(SellerId(1)));
        client
            .on_update(
                ClientFields {
                    name: "Bob".into(),
                    seller_id: Some(SellerId(2)),
                },
                &(),
            )
            .await
            .unwrap();

        let cleared = client
            .handle_action(ClientAction::DetachSeller(SellerId(1)), &())
            .await
            .unwrap();

        assert!(!cleared);
        assert_eq!(client.seller_id, Some(SellerId(2)));
    }
}
