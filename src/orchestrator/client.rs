use crate::dto::ClientDto;
use crate::mapper::client as mapper;
use crate::model::{ClientId, Seller, SellerId};
use crate::orchestrator::ApiError;
use crate::stores::{ClientStore, SellerStore};
use resource_actor::EntityStore;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, instrument};

/// Client lifecycle operations.
#[derive(Clone)]
pub struct ClientOrchestrator {
    clients: ClientStore,
    sellers: SellerStore,
}

impl ClientOrchestrator {
    pub fn new(clients: ClientStore, sellers: SellerStore) -> Self {
        Self { clients, sellers }
    }

    /// Every client, with its seller reduced to a reference.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ClientDto>, ApiError> {
        let clients = self.clients.list().await?;
        Ok(clients.iter().map(mapper::to_dto).collect())
    }

    /// Every client, with its seller populated. Each distinct seller is fetched once.
    #[instrument(skip(self))]
    pub async fn list_with_seller(&self) -> Result<Vec<ClientDto>, ApiError> {
        let clients = self.clients.list().await?;
        let seller_ids: BTreeSet<SellerId> = clients.iter().filter_map(|c| c.seller_id).collect();

        let mut sellers: BTreeMap<SellerId, Seller> = BTreeMap::new();
        for id in seller_ids {
            if let Some(seller) = self.sellers.find(id).await? {
                sellers.insert(id, seller);
            }
        }

        Ok(clients
            .iter()
            .map(|c| {
                let seller = c.seller_id.and_then(|id| sellers.get(&id));
                mapper::to_dto_with_seller(c, seller)
            })
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn show(&self, id: u64) -> Result<ClientDto, ApiError> {
        let client = self
            .clients
            .find(ClientId(id))
            .await?
            .ok_or(ApiError::NotFound)?;
        Ok(mapper::to_dto(&client))
    }

    /// Creates a client. Any `id` in the payload is ignored.
    #[instrument(skip(self))]
    pub async fn create(&self, payload: ClientDto) -> Result<ClientDto, ApiError> {
        self.check_seller(&payload).await?;
        self.persist(None, payload).await
    }

    /// Replaces the fields of client `id`.
    #[instrument(skip(self))]
    pub async fn update(&self, id: u64, mut payload: ClientDto) -> Result<ClientDto, ApiError> {
        payload.id = Some(id);
        let id = ClientId(id);
        if self.clients.find(id).await?.is_none() {
            return Err(ApiError::NotFound);
        }
        self.check_seller(&payload).await?;
        self.persist(Some(id), payload).await
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: u64) -> Result<(), ApiError> {
        self.clients.delete(ClientId(id)).await?;
        Ok(())
    }

    async fn check_seller(&self, payload: &ClientDto) -> Result<(), ApiError> {
        let Some(seller_id) = mapper::seller_reference(payload) else {
            return Ok(());
        };
        match self.sellers.find(seller_id).await? {
            Some(_) => Ok(()),
            None => {
                debug!(%seller_id, "Referenced seller does not exist");
                Err(ApiError::ReferenceNotFound)
            }
        }
    }

    async fn persist(&self, id: Option<ClientId>, payload: ClientDto) -> Result<ClientDto, ApiError> {
        let violations = payload.validate();
        if !violations.is_empty() {
            return Err(ApiError::ValidationFailed(violations));
        }
        let fields = mapper::to_fields(&payload);
        if !self.clients.is_unique(&fields.name, id).await? {
            return Err(ApiError::NameNotUnique);
        }
        let saved = self.clients.save(id, fields).await?;
        Ok(mapper::to_dto(&saved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Client;
    use resource_actor::mock::MockClient;
    use resource_actor::FrameworkError;

    struct Mocks {
        clients: MockClient<Client>,
        sellers: MockClient<Seller>,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                clients: MockClient::new(),
                sellers: MockClient::new(),
            }
        }

        fn orchestrator(&self) -> ClientOrchestrator {
            ClientOrchestrator::new(
                ClientStore::new(self.clients.client()),
                SellerStore::new(self.sellers.client()),
            )
        }

        fn verify(&self) {
            self.clients.verify();
            self.sellers.verify();
        }
    }

    fn bob(id: u64, seller: Option<u64>) -> Client {
        Client::new(ClientId(id), "Bob", seller.map(SellerId))
    }

    #[tokio::test]
    async fn test_create_discards_payload_id() {
        let mut mocks = Mocks::new();
        mocks.sellers.expect_get(SellerId(1)).return_ok(Some(Seller::new(SellerId(1), "Acme")));
        mocks.clients.expect_find_by_key("Bob").return_ok(None);
        mocks.clients.expect_create().return_ok(bob(1, Some(1)));

        let mut payload = ClientDto::named("Bob").with_seller(1);
        payload.id = Some(42);
        let created = mocks.orchestrator().create(payload).await.unwrap();

        assert_eq!(created.id, Some(1));
        assert_eq!(created.seller_id(), Some(1));
        mocks.verify();
    }

    #[tokio::test]
    async fn test_create_with_missing_seller_touches_no_client() {
        let mut mocks = Mocks::new();
        mocks.sellers.expect_get(SellerId(7)).return_ok(None);

        let result = mocks
            .orchestrator()
            .create(ClientDto::named("Bob").with_seller(7))
            .await;

        assert_eq!(result, Err(ApiError::ReferenceNotFound));
        mocks.verify();
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_payload() {
        let mocks = Mocks::new();
        let result = mocks.orchestrator().create(ClientDto::default()).await;
        match result {
            Err(ApiError::ValidationFailed(violations)) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].code, "NotNull");
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        mocks.verify();
    }

    #[tokio::test]
    async fn test_create_rejects_taken_name() {
        let mut mocks = Mocks::new();
        mocks.clients.expect_find_by_key("Bob").return_ok(Some(bob(3, None)));

        let result = mocks.orchestrator().create(ClientDto::named("Bob")).await;

        assert_eq!(result, Err(ApiError::NameNotUnique));
        mocks.verify();
    }

    #[tokio::test]
    async fn test_concurrent_name_conflict_reports_not_unique() {
        let mut mocks = Mocks::new();
        mocks.clients.expect_find_by_key("Bob").return_ok(None);
        mocks
            .clients
            .expect_create()
            .return_err(FrameworkError::Conflict("Bob".into()));

        let result = mocks.orchestrator().create(ClientDto::named("Bob")).await;

        assert_eq!(result, Err(ApiError::NameNotUnique));
        mocks.verify();
    }

    #[tokio::test]
    async fn test_update_keeping_own_name() {
        let mut mocks = Mocks::new();
        mocks.clients.expect_get(ClientId(3)).return_ok(Some(bob(3, None)));
        mocks.clients.expect_find_by_key("Bob").return_ok(Some(bob(3, None)));
        mocks.clients.expect_update(ClientId(3)).return_ok(bob(3, None));

        let updated = mocks
            .orchestrator()
            .update(3, ClientDto::named("Bob"))
            .await
            .unwrap();

        assert_eq!(updated.id, Some(3));
        mocks.verify();
    }

    #[tokio::test]
    async fn test_update_missing_client() {
        let mut mocks = Mocks::new();
        mocks.clients.expect_get(ClientId(9)).return_ok(None);

        let result = mocks.orchestrator().update(9, ClientDto::named("Bob")).await;

        assert_eq!(result, Err(ApiError::NotFound));
        mocks.verify();
    }

    #[tokio::test]
    async fn test_remove_missing_client() {
        let mut mocks = Mocks::new();
        mocks
            .clients
            .expect_delete(ClientId(5))
            .return_err(FrameworkError::NotFound("client_5".into()));

        assert_eq!(mocks.orchestrator().remove(5).await, Err(ApiError::NotFound));
        mocks.verify();
    }

    #[tokio::test]
    async fn test_list_with_seller_fetches_each_seller_once() {
        let mut mocks = Mocks::new();
        mocks.clients.expect_list().return_ok(vec![
            bob(1, Some(2)),
            Client::new(ClientId(2), "Ann", Some(SellerId(2))),
            Client::new(ClientId(3), "Eve", None),
        ]);
        mocks.sellers.expect_get(SellerId(2)).return_ok(Some(Seller::new(SellerId(2), "Acme")));

        let listed = mocks.orchestrator().list_with_seller().await.unwrap();

        let seller_names: Vec<Option<String>> = listed
            .iter()
            .map(|c| c.seller.as_ref().and_then(|s| s.name.clone()))
            .collect();
        assert_eq!(seller_names, vec![Some("Acme".into()), Some("Acme".into()), None]);
        mocks.verify();
    }

    #[tokio::test]
    async fn test_store_failure_is_reported() {
        let mut mocks = Mocks::new();
        mocks.clients.expect_list().return_err(FrameworkError::ActorClosed);

        assert!(matches!(mocks.orchestrator().list().await, Err(ApiError::Store(_))));
        mocks.verify();
    }
}
