//! Pure conversions between the HTTP DTOs and the persisted models.

pub mod client;
pub mod seller;
