use crate::application::dto::{ComparisonRequest, ComparisonResponse};
use crate::ports::inbound::VendorComparisonPort;
use crate::ports::outbound::{CatalogSource, ProgressReporter};
use crate::shared::error::TcoError;
use crate::shared::Result;
use crate::tco_analysis::domain::{
    AnalysisConfiguration, InputAdjustment, VendorCatalog, VendorComparison,
};
use crate::tco_analysis::services::{
    ComparisonGenerator, InputSanitizer, ReportGenerator, SanitizedInput,
};
use tracing::info;

/// GenerateComparisonUseCase - Core use case for the TCO comparison
///
/// Orchestrates catalog loading, input sanitizing and comparison generation
/// using generic dependency injection for the infrastructure.
///
/// # Type Parameters
/// * `CS` - CatalogSource implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateComparisonUseCase<CS, PR> {
    catalog_source: CS,
    progress_reporter: PR,
}

impl<CS, PR> GenerateComparisonUseCase<CS, PR>
where
    CS: CatalogSource,
    PR: ProgressReporter,
{
    /// Creates a new GenerateComparisonUseCase with injected dependencies
    pub fn new(catalog_source: CS, progress_reporter: PR) -> Self {
        Self {
            catalog_source,
            progress_reporter,
        }
    }

    /// Executes the comparison use case
    ///
    /// # Arguments
    /// * `request` - Unvalidated analysis input
    ///
    /// # Returns
    /// ComparisonResponse with the comparison, effective configuration and
    /// report metadata
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be loaded or if no requested
    /// vendor exists in it
    pub fn execute(&self, request: ComparisonRequest) -> Result<ComparisonResponse> {
        // Step 1: Load the vendor catalog
        let catalog = self.load_catalog()?;

        // Step 2: Sanitize input, reporting every substituted default
        let SanitizedInput {
            configuration,
            adjustments,
        } = self.sanitize_input(&request);

        // Step 3: Make sure the selection leaves something to compare
        self.check_vendor_selection(&catalog, &configuration)?;

        // Step 4: Price every selected vendor
        let mut comparison = self.generate_comparison(&catalog, &configuration);
        comparison.summary.adjustments = adjustments;

        // Step 5: Build response
        let metadata = ReportGenerator::generate_default_metadata();
        info!(
            report_id = metadata.report_id(),
            vendors = comparison.len(),
            "Comparison generated"
        );
        Ok(ComparisonResponse::new(comparison, configuration, metadata))
    }

    fn load_catalog(&self) -> Result<VendorCatalog> {
        self.progress_reporter.report(&format!(
            "📖 Loading {}",
            self.catalog_source.describe()
        ));

        let catalog = self.catalog_source.load_catalog()?;

        self.progress_reporter
            .report(&format!("✅ Loaded {} vendor(s)", catalog.len()));
        Ok(catalog)
    }

    fn sanitize_input(&self, request: &ComparisonRequest) -> SanitizedInput {
        let sanitized = InputSanitizer::sanitize(&request.input);
        for adjustment in &sanitized.adjustments {
            self.progress_reporter
                .report_error(&Self::adjustment_warning(adjustment));
        }
        sanitized
    }

    fn adjustment_warning(adjustment: &InputAdjustment) -> String {
        format!(
            "⚠️  Warning: Invalid {} {}, using {}",
            adjustment.field, adjustment.provided, adjustment.applied
        )
    }

    /// Warns about unknown vendor ids and fails when none of the requested
    /// vendors is known
    fn check_vendor_selection(
        &self,
        catalog: &VendorCatalog,
        configuration: &AnalysisConfiguration,
    ) -> Result<()> {
        let Some(ids) = configuration.vendors() else {
            return Ok(());
        };

        let (selected, unknown) = catalog.select(ids);
        for id in &unknown {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Vendor '{}' is not in the {}, skipping.",
                id,
                self.catalog_source.describe()
            ));
        }

        if selected.is_empty() {
            let requested = ids
                .iter()
                .map(|id| id.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(TcoError::EmptyComparison {
                details: if requested.is_empty() {
                    "No valid vendor id was given".to_string()
                } else {
                    format!(
                        "None of the requested vendors ({}) exist in the {}",
                        requested,
                        self.catalog_source.describe()
                    )
                },
            }
            .into());
        }

        Ok(())
    }

    fn generate_comparison(
        &self,
        catalog: &VendorCatalog,
        configuration: &AnalysisConfiguration,
    ) -> VendorComparison {
        self.progress_reporter.report(&format!(
            "💰 Calculating {}-year TCO for {} device(s) across {} location(s)...",
            configuration.analysis_period_years(),
            configuration.device_count(),
            configuration.location_count()
        ));

        let comparison = ComparisonGenerator::generate(catalog, configuration);

        let total = comparison.len();
        for (index, result) in comparison.results.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(&result.name));
        }
        comparison
    }
}

impl<CS, PR> VendorComparisonPort for GenerateComparisonUseCase<CS, PR>
where
    CS: CatalogSource,
    PR: ProgressReporter,
{
    fn compare(&self, request: ComparisonRequest) -> Result<ComparisonResponse> {
        self.execute(request)
    }
}
