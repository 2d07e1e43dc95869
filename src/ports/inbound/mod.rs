/// Inbound ports (Driving ports) - Use case interfaces
pub mod vendor_comparison_port;

pub use vendor_comparison_port::VendorComparisonPort;
