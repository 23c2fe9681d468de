//! Runtime lifecycle: starting, wiring and stopping the actors, plus tracing setup.

pub mod app_system;
pub mod tracing;

pub use app_system::*;
pub use self::tracing::*;
