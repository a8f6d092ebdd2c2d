//! Application layer: use cases
//!
//! This layer orchestrates domain logic and the effective settings.

pub mod display;
pub mod error;
pub mod sample;

pub use display::DisplayService;
pub use error::{ApplicationError, ApplicationResult};
pub use sample::company_document;
