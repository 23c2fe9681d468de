use crate::dto::validation::{validate_name, FieldViolation};
use serde::{Deserialize, Serialize};

/// Seller as exchanged over HTTP.
///
/// Also used as the nested seller reference inside a [`ClientDto`](crate::dto::ClientDto), where
/// only `id` is required and `name` is omitted when unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellerDto {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SellerDto {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    /// Field-level rule violations of this payload; empty when valid.
    pub fn validate(&self) -> Vec<FieldViolation> {
        validate_name(self.name.as_deref())
    }
}
