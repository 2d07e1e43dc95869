use crate::tco_analysis::domain::{CostBreakdown, YearlyCost};
use crate::tco_analysis::policies::CostAssumptions;
use serde::Serialize;

/// One report row: a vendor's costs, returns and scores
#[derive(Debug, Clone, Serialize)]
pub struct VendorView {
    /// 1-based position by TCO
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub architecture: String,
    pub total_tco: f64,
    pub annual_tco: f64,
    pub monthly_tco: f64,
    pub per_device_tco: f64,
    pub per_device_monthly: f64,
    pub yearly: Vec<YearlyCost>,
    pub breakdown: CostBreakdown,
    pub roi_percent: f64,
    pub annual_savings: f64,
    pub payback_months: u32,
    pub savings_vs_baseline: f64,
    pub savings_percent: f64,
    pub overall_score: u8,
    pub security_score: u8,
    pub zero_trust_score: u8,
    pub automation_level: u8,
    pub risk_score: u8,
    pub breach_reduction_percent: u8,
    pub implementation_days: u32,
    pub fte_required: f64,
    pub cloud_native: bool,
}

impl VendorView {
    /// True when savings never repay the TCO
    pub fn payback_undefined(&self) -> bool {
        self.payback_months >= CostAssumptions::PAYBACK_UNDEFINED_MONTHS
    }
}
