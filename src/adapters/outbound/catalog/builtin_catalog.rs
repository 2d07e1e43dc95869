use crate::ports::outbound::CatalogSource;
use crate::shared::Result;
use crate::tco_analysis::domain::VendorCatalog;

/// BuiltinCatalogSource adapter serving the compiled-in vendor table
pub struct BuiltinCatalogSource;

impl BuiltinCatalogSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuiltinCatalogSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for BuiltinCatalogSource {
    fn load_catalog(&self) -> Result<VendorCatalog> {
        Ok(VendorCatalog::builtin())
    }

    fn describe(&self) -> String {
        "built-in vendor catalog".to_string()
    }
}
