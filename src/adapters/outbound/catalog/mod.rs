/// Catalog adapters implementing the CatalogSource port
mod builtin_catalog;
mod file_catalog;

pub use builtin_catalog::BuiltinCatalogSource;
pub use file_catalog::{CatalogFileFormat, FileCatalogSource};
