use crate::application::dto::{ComparisonRequest, ComparisonResponse};
use crate::shared::Result;

/// VendorComparisonPort - Inbound port for the TCO comparison use case
///
/// This is the application's public API: adapters (the CLI today) hand in
/// loose user input and receive the priced comparison.
pub trait VendorComparisonPort {
    /// Runs a vendor comparison
    ///
    /// # Arguments
    /// * `request` - Unvalidated analysis input plus output options
    ///
    /// # Returns
    /// The comparison together with report metadata and applied defaults
    ///
    /// # Errors
    /// Returns an error if:
    /// - The vendor catalog cannot be loaded
    /// - None of the requested vendors exists in the catalog
    fn compare(&self, request: ComparisonRequest) -> Result<ComparisonResponse>;
}
