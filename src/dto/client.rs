use crate::dto::validation::{validate_name, FieldViolation};
use crate::dto::SellerDto;
use serde::{Deserialize, Serialize};

/// Client as exchanged over HTTP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientDto {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub seller: Option<SellerDto>,
}

impl ClientDto {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Attaches a seller reference carrying only its identifier.
    pub fn with_seller(mut self, seller_id: u64) -> Self {
        self.seller = Some(SellerDto {
            id: Some(seller_id),
            name: None,
        });
        self
    }

    /// Identifier of the referenced seller. A nested seller without an `id` counts as none.
    pub fn seller_id(&self) -> Option<u64> {
        self.seller.as_ref().and_then(|s| s.id)
    }

    /// Field-level rule violations of this payload; empty when valid.
    pub fn validate(&self) -> Vec<FieldViolation> {
        validate_name(self.name.as_deref())
    }
}
