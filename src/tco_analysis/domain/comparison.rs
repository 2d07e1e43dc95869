use super::{Architecture, InputAdjustment, VendorId};
use serde::Serialize;

/// Cost of a single analysis year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyCost {
    pub year: u32,
    pub cost: f64,
    pub cumulative: f64,
}

/// Cost categories accumulated over the whole analysis period
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub license: f64,
    pub implementation: f64,
    pub hardware: f64,
    pub support: f64,
    pub personnel: f64,
    pub training: f64,
    pub maintenance: f64,
}

impl CostBreakdown {
    pub fn sum(&self) -> f64 {
        self.license
            + self.implementation
            + self.hardware
            + self.support
            + self.personnel
            + self.training
            + self.maintenance
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TcoBreakdown {
    pub total: f64,
    pub annual: f64,
    pub monthly: f64,
    pub per_device: f64,
    /// Effective subscription price after any override
    pub per_device_monthly: f64,
    pub yearly: Vec<YearlyCost>,
    pub breakdown: CostBreakdown,
}

impl TcoBreakdown {
    /// Cost of the given 1-based year, 0 when outside the period
    pub fn year(&self, year: u32) -> f64 {
        self.yearly
            .iter()
            .find(|y| y.year == year)
            .map(|y| y.cost)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiProjection {
    pub percentage: f64,
    pub annual_savings: f64,
    /// Months until savings repay the TCO; 999 when they never do
    pub payback_months: u32,
    pub savings_vs_baseline: f64,
    pub savings_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub security_score: u8,
    pub fte_required: f64,
    pub overall_score: u8,
    pub zero_trust_score: u8,
    pub automation_level: u8,
    pub implementation_days: u32,
    pub cloud_native: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSnapshot {
    pub risk_score: u8,
    pub breach_reduction_percent: u8,
}

/// Derived per-vendor result. Rebuilt wholesale on every calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub id: VendorId,
    pub name: String,
    pub architecture: Architecture,
    pub tco: TcoBreakdown,
    pub roi: RoiProjection,
    pub metrics: MetricsSnapshot,
    pub risk: RiskSnapshot,
}

/// A vendor id paired with its TCO
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorTotal {
    pub id: VendorId,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub lowest_tco: Option<VendorTotal>,
    pub highest_tco: Option<VendorTotal>,
    /// TCO the savings figures are measured against
    pub baseline_tco: f64,
    pub baseline_label: String,
    pub average_competitor_tco: f64,
    /// Featured vendor savings against the competitor average, if compared
    pub featured_savings: Option<f64>,
    pub featured_savings_percent: Option<f64>,
    pub fastest_deployment_days: Option<u32>,
    pub average_deployment_days: f64,
    pub adjustments: Vec<InputAdjustment>,
}

/// Comparison across vendors, in catalog order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorComparison {
    pub results: Vec<ComparisonResult>,
    pub summary: ComparisonSummary,
}

impl VendorComparison {
    pub fn get(&self, id: &str) -> Option<&ComparisonResult> {
        self.results.iter().find(|r| r.id.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
