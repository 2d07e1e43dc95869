use crate::tco_analysis::domain::{
    AnalysisConfiguration, InputAdjustment, ReportMetadata, VendorComparison,
};

/// ComparisonResponse - Response DTO from the comparison use case
///
/// Holds the domain results; formatters turn them into a report via the
/// read model.
#[derive(Debug, Clone)]
pub struct ComparisonResponse {
    /// Priced vendors and cross-vendor summary
    pub comparison: VendorComparison,
    /// Configuration the comparison was computed with, after sanitizing
    pub configuration: AnalysisConfiguration,
    pub metadata: ReportMetadata,
}

impl ComparisonResponse {
    pub fn new(
        comparison: VendorComparison,
        configuration: AnalysisConfiguration,
        metadata: ReportMetadata,
    ) -> Self {
        Self {
            comparison,
            configuration,
            metadata,
        }
    }

    /// Defaults substituted for invalid input
    pub fn adjustments(&self) -> &[InputAdjustment] {
        &self.comparison.summary.adjustments
    }
}
