//! Domain Services
//!
//! Stateless builders and transformations with no I/O.

pub mod artifacts;
mod cleanup_plan;
mod ordered_document;

pub use cleanup_plan::standard_plan;
pub use ordered_document::{DocumentError, OrderedDocument};
