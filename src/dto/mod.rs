//! Wire representations (DTOs) exchanged over HTTP, and their field validation.

pub mod client;
pub mod seller;
pub mod validation;

pub use client::*;
pub use seller::*;
pub use validation::FieldViolation;
