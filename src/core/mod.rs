// Public modules
pub mod defaults;
pub mod disable;
pub mod error;
pub mod extract;
pub mod filter;
pub mod log_reader;
pub mod output;
pub mod pipeline;
pub mod scope;

// Re-export common types for convenience
pub use disable::{DisableItem, Mode, Outcome, RenamePlan};
pub use error::{Error, ErrorCode, Result};
pub use output::DisableSummary;
pub use pipeline::{Candidates, DisableOptions, StageCounts};
pub use scope::Scope;
