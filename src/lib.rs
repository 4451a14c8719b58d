// Quiz document normalization: renumber ids, validate items, inject prompt fields
pub mod error;
pub mod transform;

// Re-export core types for convenience
pub use error::ProcessError;
pub use transform::{normalize, process, NormalizeSummary};
pub use transform::{FIXED_PROMPT, PLACEHOLDER_MARKER, QUIZ_TYPE};
