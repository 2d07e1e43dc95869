//! Builder for constructing ComparisonReadModel from domain objects

use super::comparison_read_model::{
    ComparisonReadModel, ConfigurationView, ReportMetadataView, SummaryView, VendorTotalView,
};
use super::vendor_view::VendorView;
use crate::tco_analysis::domain::{
    AnalysisConfiguration, ComparisonResult, ReportMetadata, VendorComparison, VendorTotal,
};

/// Builder for constructing ComparisonReadModel from domain objects
pub struct ComparisonReadModelBuilder;

impl ComparisonReadModelBuilder {
    /// Builds the read model for one comparison
    ///
    /// # Arguments
    /// * `comparison` - Generated comparison, in catalog order
    /// * `configuration` - Configuration the comparison was computed with
    /// * `metadata` - Report timestamp, tool and id
    ///
    /// # Returns
    /// A read model whose vendor rows are sorted by TCO ascending. Vendors
    /// with equal TCO keep their catalog order.
    pub fn build(
        comparison: &VendorComparison,
        configuration: &AnalysisConfiguration,
        metadata: &ReportMetadata,
    ) -> ComparisonReadModel {
        ComparisonReadModel {
            metadata: Self::build_metadata(metadata),
            configuration: Self::build_configuration(configuration),
            vendors: Self::build_vendors(&comparison.results),
            summary: Self::build_summary(comparison),
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            report_id: metadata.report_id().to_string(),
        }
    }

    fn build_configuration(configuration: &AnalysisConfiguration) -> ConfigurationView {
        ConfigurationView {
            device_count: configuration.device_count(),
            location_count: configuration.location_count(),
            analysis_period_years: configuration.analysis_period_years(),
            company_size: configuration.company_size().to_string(),
            industry: configuration.industry().map(|industry| industry.to_string()),
            fte_cost: configuration.fte_cost(),
            breach_cost: configuration.breach_cost(),
            portnox_pricing: configuration.portnox_pricing(),
            baseline: configuration.baseline().to_string(),
        }
    }

    fn build_vendors(results: &[ComparisonResult]) -> Vec<VendorView> {
        let mut ordered: Vec<&ComparisonResult> = results.iter().collect();
        ordered.sort_by(|a, b| a.tco.total.total_cmp(&b.tco.total));

        ordered
            .into_iter()
            .enumerate()
            .map(|(index, result)| VendorView {
                rank: index + 1,
                id: result.id.to_string(),
                name: result.name.clone(),
                architecture: result.architecture.to_string(),
                total_tco: result.tco.total,
                annual_tco: result.tco.annual,
                monthly_tco: result.tco.monthly,
                per_device_tco: result.tco.per_device,
                per_device_monthly: result.tco.per_device_monthly,
                yearly: result.tco.yearly.clone(),
                breakdown: result.tco.breakdown.clone(),
                roi_percent: result.roi.percentage,
                annual_savings: result.roi.annual_savings,
                payback_months: result.roi.payback_months,
                savings_vs_baseline: result.roi.savings_vs_baseline,
                savings_percent: result.roi.savings_percent,
                overall_score: result.metrics.overall_score,
                security_score: result.metrics.security_score,
                zero_trust_score: result.metrics.zero_trust_score,
                automation_level: result.metrics.automation_level,
                risk_score: result.risk.risk_score,
                breach_reduction_percent: result.risk.breach_reduction_percent,
                implementation_days: result.metrics.implementation_days,
                fte_required: result.metrics.fte_required,
                cloud_native: result.metrics.cloud_native,
            })
            .collect()
    }

    fn build_summary(comparison: &VendorComparison) -> SummaryView {
        let summary = &comparison.summary;
        let to_view = |total: &VendorTotal| VendorTotalView {
            id: total.id.to_string(),
            name: comparison
                .get(total.id.as_str())
                .map(|r| r.name.clone())
                .unwrap_or_else(|| total.id.to_string()),
            total: total.total,
        };

        SummaryView {
            vendor_count: comparison.len(),
            lowest_tco: summary.lowest_tco.as_ref().map(to_view),
            highest_tco: summary.highest_tco.as_ref().map(to_view),
            baseline_label: summary.baseline_label.clone(),
            baseline_tco: summary.baseline_tco,
            average_competitor_tco: summary.average_competitor_tco,
            featured_savings: summary.featured_savings,
            featured_savings_percent: summary.featured_savings_percent,
            fastest_deployment_days: summary.fastest_deployment_days,
            average_deployment_days: summary.average_deployment_days,
            adjustments: summary.adjustments.clone(),
        }
    }
}
