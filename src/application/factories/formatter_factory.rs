use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Lives in the application layer because it picks an infrastructure
/// adapter based on an application-level setting.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    ///
    /// # Returns
    /// A boxed ReportFormatter trait object appropriate for the specified format
    ///
    /// # Examples
    /// ```
    /// use nac_tco::application::dto::OutputFormat;
    /// use nac_tco::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format
    ///
    /// # Returns
    /// A static string containing the progress message to display
    ///
    /// # Examples
    /// ```
    /// use nac_tco::application::dto::OutputFormat;
    /// use nac_tco::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON report...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::ComparisonReadModelBuilder;
    use crate::tco_analysis::domain::{AnalysisConfiguration, VendorCatalog};
    use crate::tco_analysis::services::{ComparisonGenerator, ReportGenerator};

    fn format_with(format: OutputFormat) -> String {
        let config = AnalysisConfiguration::default();
        let comparison = ComparisonGenerator::generate(&VendorCatalog::builtin(), &config);
        let model = ComparisonReadModelBuilder::build(
            &comparison,
            &config,
            &ReportGenerator::generate_default_metadata(),
        );
        FormatterFactory::create(format).format(&model).unwrap()
    }

    #[test]
    fn test_create_json_formatter() {
        let output = format_with(OutputFormat::Json);
        assert!(serde_json::from_str::<serde_json::Value>(&output).is_ok());
    }

    #[test]
    fn test_create_markdown_formatter() {
        let output = format_with(OutputFormat::Markdown);
        assert!(output.starts_with("# NAC Total Cost of Ownership Comparison"));
    }

    #[test]
    fn test_progress_message() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Json),
            "📝 Generating JSON report..."
        );
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Markdown),
            "📝 Generating Markdown report..."
        );
    }
}
