use crate::shared::Result;
use crate::tco_analysis::domain::VendorCatalog;

/// CatalogSource port for obtaining the vendor catalog
///
/// The catalog is either compiled in or read from a user-supplied file.
/// Either way it is loaded once per run and never mutated.
pub trait CatalogSource {
    /// Loads and validates the vendor catalog
    ///
    /// # Errors
    /// Returns an error if:
    /// - The catalog file does not exist or cannot be read
    /// - The file is not valid JSON, YAML or TOML
    /// - A vendor entry fails validation (duplicate id, negative price, score above 100)
    fn load_catalog(&self) -> Result<VendorCatalog>;

    /// Short description of where the catalog comes from, for progress output
    fn describe(&self) -> String;
}

impl<T: CatalogSource + ?Sized> CatalogSource for Box<T> {
    fn load_catalog(&self) -> Result<VendorCatalog> {
        (**self).load_catalog()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
