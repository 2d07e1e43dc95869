use crate::tco_analysis::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// ReportGenerator service stamping comparison reports
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generates report metadata with the current time and a fresh report id
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool producing the report
    /// * `tool_version` - Version of the tool
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            report_id,
        )
    }

    /// Generates metadata for this build of nac-tco
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata("nac-tco", env!("CARGO_PKG_VERSION"))
    }
}
