/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports. The CLI in `main.rs`
/// is the only inbound adapter.
pub mod outbound;
