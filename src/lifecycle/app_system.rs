use crate::http::AppState;
use crate::orchestrator::{ClientOrchestrator, SellerOrchestrator};
use crate::stores::{ClientStore, SellerStore};
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

#[derive(Debug, Error)]
#[error("Actor task failed: {0}")]
pub struct ShutdownError(#[from] JoinError);

/// Owns the running actors and the stores that reach them.
///
/// The Seller actor runs with the [`ClientStore`] as its context, so deleting a seller can
/// detach that seller's clients. The Client actor has no dependencies.
///
/// # Example
///
/// ```no_run
/// # async fn demo() -> Result<(), crud_seller_client::lifecycle::ShutdownError> {
/// use crud_seller_client::lifecycle::AppSystem;
///
/// let system = AppSystem::new(32);
/// let state = system.state();
/// // ... serve `state` over HTTP ...
/// drop(state);
/// system.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub struct AppSystem {
    pub client_store: ClientStore,
    pub seller_store: SellerStore,
    handles: Vec<JoinHandle<()>>,
}

impl AppSystem {
    /// Spawns both actors with mailboxes of `buffer_size` requests.
    pub fn new(buffer_size: usize) -> Self {
        let (client_actor, client_store) = crate::client_actor::new(buffer_size);
        let (seller_actor, seller_store) = crate::seller_actor::new(buffer_size);

        let client_handle = tokio::spawn(client_actor.run(()));
        let seller_handle = tokio::spawn(seller_actor.run(client_store.clone()));

        Self {
            client_store,
            seller_store,
            handles: vec![seller_handle, client_handle],
        }
    }

    /// Handler state wired to this system's stores.
    pub fn state(&self) -> AppState {
        AppState {
            clients: ClientOrchestrator::new(self.client_store.clone(), self.seller_store.clone()),
            sellers: SellerOrchestrator::new(self.seller_store.clone(), self.client_store.clone()),
        }
    }

    /// Drops the stores and waits for the actors to drain their mailboxes and exit.
    ///
    /// Every other store clone (such as an [`AppState`]) must be dropped first, or this waits
    /// forever. The Seller actor holds a Client store, so it is awaited before the Client actor.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");
        drop(self.client_store);
        drop(self.seller_store);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
