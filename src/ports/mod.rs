/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are what the CLI drives. Outbound ports are what the
/// application core drives: the vendor catalog, report formatting, output
/// and progress feedback.
pub mod inbound;
pub mod outbound;
