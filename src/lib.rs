//! nac-tco - total cost of ownership comparison for NAC vendors
//!
//! Prices network access control products over a multi-year period from a
//! vendor catalog and a handful of organisation parameters, then derives
//! ROI, payback, risk and cross-vendor summary figures.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`tco_analysis`): Vendor catalog, cost model and comparison engine
//! - **Application Layer** (`application`): Use cases, DTOs, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use nac_tco::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateComparisonUseCase::new(
//!     BuiltinCatalogSource::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let input = RawAnalysisInput {
//!     device_count: Some(LooseNumber::from(2500.0)),
//!     vendors: Some(vec!["portnox".to_string(), "cisco".to_string()]),
//!     ..Default::default()
//! };
//! let response = use_case.execute(ComparisonRequest::new(input))?;
//!
//! let model = ComparisonReadModelBuilder::build(
//!     &response.comparison,
//!     &response.configuration,
//!     &response.metadata,
//! );
//! println!("{}", MarkdownFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod tco_analysis;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::catalog::{BuiltinCatalogSource, FileCatalogSource};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{ComparisonRequest, ComparisonResponse, OutputFormat};
    pub use crate::application::read_models::{ComparisonReadModel, ComparisonReadModelBuilder};
    pub use crate::application::use_cases::GenerateComparisonUseCase;
    pub use crate::ports::inbound::VendorComparisonPort;
    pub use crate::ports::outbound::{
        CatalogSource, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
    pub use crate::tco_analysis::domain::{
        AnalysisConfiguration, Baseline, CompanySize, LooseNumber, RawAnalysisInput,
        VendorCatalog, VendorComparison, VendorId, VendorProfile,
    };
    pub use crate::tco_analysis::services::{ComparisonGenerator, InputSanitizer};
}
