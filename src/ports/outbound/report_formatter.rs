use crate::application::read_models::ComparisonReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering a comparison report
///
/// Implemented once per output format (JSON, Markdown).
pub trait ReportFormatter {
    /// Formats the comparison read model
    ///
    /// # Arguments
    /// * `model` - The comparison read model with metadata, vendors and summary
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &ComparisonReadModel) -> Result<String>;
}
