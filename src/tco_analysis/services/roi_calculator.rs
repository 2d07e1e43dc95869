use crate::tco_analysis::domain::{AnalysisConfiguration, RoiProjection, VendorProfile};
use crate::tco_analysis::policies::{CostAssumptions, FiniteGuard};

/// RoiCalculator service projecting savings against a vendor's TCO
pub struct RoiCalculator;

impl RoiCalculator {
    /// Savings per year from deploying the vendor
    ///
    /// A flat operational saving, plus the FTE cost avoided relative to
    /// running access control manually, plus the expected breach loss the
    /// vendor's zero-trust capability removes. May be negative for vendors
    /// that need more staff than the manual baseline.
    pub fn annual_savings(profile: &VendorProfile, config: &AnalysisConfiguration) -> f64 {
        let staff_savings =
            (CostAssumptions::BASELINE_FTE - profile.pricing.fte_required) * config.fte_cost();
        let breach_savings = config.breach_cost()
            * CostAssumptions::ANNUAL_BREACH_PROBABILITY
            * f64::from(profile.capabilities.zero_trust)
            / 100.0;

        FiniteGuard::or_zero(
            CostAssumptions::BASE_ANNUAL_SAVINGS + staff_savings + breach_savings,
            "annual savings",
        )
    }

    /// Builds the ROI projection for a vendor
    ///
    /// # Arguments
    /// * `total` - Vendor TCO over the period
    /// * `annual_savings` - Result of [`RoiCalculator::annual_savings`]
    /// * `years` - Analysis period
    /// * `baseline_tco` - TCO the vendor is compared against
    pub fn project(total: f64, annual_savings: f64, years: u32, baseline_tco: f64) -> RoiProjection {
        let percentage = if total > 0.0 {
            FiniteGuard::ratio(annual_savings * f64::from(years) - total, total, "roi") * 100.0
        } else {
            0.0
        };

        let savings_vs_baseline = FiniteGuard::or_zero(baseline_tco - total, "baseline savings");
        let savings_percent = if baseline_tco > 0.0 {
            FiniteGuard::or_zero((1.0 - total / baseline_tco) * 100.0, "baseline savings percent")
                .round()
        } else {
            0.0
        };

        RoiProjection {
            percentage: percentage.round(),
            annual_savings,
            payback_months: Self::payback_months(total, annual_savings),
            savings_vs_baseline,
            savings_percent,
        }
    }

    /// Months until cumulative savings cover the TCO, capped at 999
    pub fn payback_months(total: f64, annual_savings: f64) -> u32 {
        let undefined = CostAssumptions::PAYBACK_UNDEFINED_MONTHS;
        if annual_savings <= 0.0 {
            return undefined;
        }

        let months = total / (annual_savings / 12.0);
        if !months.is_finite() {
            return undefined;
        }
        months.round().clamp(0.0, f64::from(undefined)) as u32
    }
}
