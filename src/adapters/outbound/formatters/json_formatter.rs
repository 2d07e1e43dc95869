use crate::application::read_models::ComparisonReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter producing a pretty-printed JSON report
///
/// The document is the read model itself:
/// `{ metadata, configuration, vendors, summary }`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &ComparisonReadModel) -> Result<String> {
        let mut json = serde_json::to_string_pretty(model)
            .context("Failed to serialize comparison report to JSON")?;
        json.push('\n');
        Ok(json)
    }
}
