//! mockcall-core: canned customer-complaint scenarios for the MockCall
//! training/demo application.
//!
//! Exposes three process-wide, read-only structures: the scenario catalog,
//! the difficulty weight table, and the response-time targets. Consumers
//! read them; nothing here executes scenarios or scores responses.

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod targets;
pub mod types;

pub use builtin::{catalog, DIFFICULTY_WEIGHTS, RESPONSE_TIME_TARGETS};
pub use catalog::{ComplaintCatalog, ComplaintRecord};
pub use error::{DatasetError, DatasetResult};
pub use targets::{DifficultyWeightTable, ResolutionTargets, ResponseTimeTargets};
pub use types::Difficulty;
