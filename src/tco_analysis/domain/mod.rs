pub mod capabilities;
pub mod catalog;
pub mod comparison;
pub mod configuration;
pub mod raw_input;
pub mod report_metadata;
pub mod vendor;

pub use capabilities::CapabilityScores;
pub use catalog::{CatalogDocument, VendorCatalog, FEATURED_VENDOR};
pub use comparison::{
    ComparisonResult, ComparisonSummary, CostBreakdown, MetricsSnapshot, RiskSnapshot,
    RoiProjection, TcoBreakdown, VendorComparison, VendorTotal, YearlyCost,
};
pub use configuration::{
    AnalysisConfiguration, Baseline, CompanySize, Industry, InputAdjustment, MAX_MONEY_AMOUNT,
};
pub use raw_input::{LooseNumber, RawAnalysisInput};
pub use report_metadata::ReportMetadata;
pub use vendor::{Architecture, VendorId, VendorPricing, VendorProfile, VolumeDiscounts};
