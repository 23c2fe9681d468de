//! Custom actions for the Client actor.
//!
//! Handled by the `handle_action` hook of [`Client`](crate::model::Client).

use crate::model::SellerId;

/// Custom actions for Client entities, beyond the standard CRUD operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientAction {
    /// Clears the client's seller reference if it still points at the given seller.
    /// Issued when that seller is deleted.
    DetachSeller(SellerId),
}
