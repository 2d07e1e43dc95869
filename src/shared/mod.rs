/// Shared kernel - error types, result alias and file safety helpers
///
/// Everything in here is used by more than one layer.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
