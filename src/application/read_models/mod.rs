//! Read models for CQRS-lite pattern
//!
//! View-optimized structs giving formatters a denormalized, report-ordered
//! picture of one comparison.

mod comparison_read_model;
mod comparison_read_model_builder;
mod vendor_view;

pub use comparison_read_model::{
    ComparisonReadModel, ConfigurationView, ReportMetadataView, SummaryView, VendorTotalView,
};
pub use comparison_read_model_builder::ComparisonReadModelBuilder;
pub use vendor_view::VendorView;
