//! Comparison read model for report rendering

use super::vendor_view::VendorView;
use crate::tco_analysis::domain::InputAdjustment;
use serde::Serialize;

/// Main read model for a comparison report
///
/// Serialized as-is by the JSON formatter, so field names are part of the
/// report format.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReadModel {
    pub metadata: ReportMetadataView,
    pub configuration: ConfigurationView,
    /// Vendors sorted by total TCO, cheapest first
    pub vendors: Vec<VendorView>,
    pub summary: SummaryView,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub report_id: String,
}

/// Effective analysis inputs after sanitizing
#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationView {
    pub device_count: u64,
    pub location_count: u64,
    pub analysis_period_years: u32,
    pub company_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    pub fte_cost: f64,
    pub breach_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portnox_pricing: Option<f64>,
    pub baseline: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VendorTotalView {
    pub id: String,
    pub name: String,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub vendor_count: usize,
    pub lowest_tco: Option<VendorTotalView>,
    pub highest_tco: Option<VendorTotalView>,
    pub baseline_label: String,
    pub baseline_tco: f64,
    pub average_competitor_tco: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_savings: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_savings_percent: Option<f64>,
    pub fastest_deployment_days: Option<u32>,
    pub average_deployment_days: f64,
    pub adjustments: Vec<InputAdjustment>,
}
