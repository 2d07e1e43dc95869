use crate::tco_analysis::domain::{
    AnalysisConfiguration, CostBreakdown, TcoBreakdown, VendorProfile, YearlyCost, FEATURED_VENDOR,
};
use crate::tco_analysis::policies::{CostAssumptions, FiniteGuard};
use tracing::debug;

/// CostCalculator service computing a vendor's TCO over the analysis period
///
/// One-time costs (hardware, implementation, training) are charged in
/// year 1. Hardware and implementation scale with the square root of the
/// location count. On-premises hardware gets a half refresh in year 4.
pub struct CostCalculator;

impl CostCalculator {
    /// Calculates the TCO breakdown of one vendor
    ///
    /// # Arguments
    /// * `profile` - Vendor to price
    /// * `config` - Validated analysis configuration
    ///
    /// # Returns
    /// Breakdown whose `total` equals the sum of its yearly costs. Every
    /// figure is finite.
    pub fn calculate(profile: &VendorProfile, config: &AnalysisConfiguration) -> TcoBreakdown {
        let pricing = &profile.pricing;
        let years = config.analysis_period_years();
        let devices = config.device_count() as f64;
        let site_factor = (config.location_count() as f64).sqrt();
        let company_size = config.company_size();
        let compliance = config.compliance_multiplier();
        let price = Self::effective_price(profile, config);

        let hardware = FiniteGuard::or_zero(pricing.hardware * site_factor, "hardware");
        let implementation = FiniteGuard::or_zero(
            pricing.implementation * company_size.complexity_factor() * site_factor * compliance,
            "implementation",
        );
        let training = CostAssumptions::training_cost(profile.architecture) * compliance;
        let upfront = FiniteGuard::or_zero(hardware + implementation + training, "upfront");

        let annual_license = FiniteGuard::or_zero(price * devices * 12.0, "license");
        let annual_support = FiniteGuard::or_zero(pricing.annual_support * compliance, "support");
        let annual_maintenance = FiniteGuard::or_zero(
            hardware * CostAssumptions::HARDWARE_MAINTENANCE_RATE * compliance,
            "maintenance",
        );
        let annual_personnel = FiniteGuard::or_zero(
            pricing.fte_required * config.fte_cost() * company_size.fte_multiplier() * compliance,
            "personnel",
        );
        let recurring = FiniteGuard::or_zero(
            annual_license + annual_support + annual_maintenance + annual_personnel,
            "recurring",
        );

        let refresh = if hardware > 0.0 && years >= CostAssumptions::HARDWARE_REFRESH_YEAR {
            hardware * CostAssumptions::HARDWARE_REFRESH_RATE
        } else {
            0.0
        };

        let mut yearly = Vec::with_capacity(years as usize);
        let mut cumulative = 0.0;
        for year in 1..=years {
            let mut cost = recurring;
            if year == 1 {
                cost += upfront;
            }
            if year == CostAssumptions::HARDWARE_REFRESH_YEAR {
                cost += refresh;
            }
            let cost = FiniteGuard::or_zero(cost, "yearly cost");
            cumulative = FiniteGuard::or_zero(cumulative + cost, "cumulative");
            yearly.push(YearlyCost {
                year,
                cost,
                cumulative,
            });
        }
        let total = cumulative;

        let period = f64::from(years);
        let breakdown = CostBreakdown {
            license: FiniteGuard::or_zero(annual_license * period, "license"),
            implementation,
            hardware: FiniteGuard::or_zero(hardware + refresh, "hardware"),
            support: FiniteGuard::or_zero(annual_support * period, "support"),
            personnel: FiniteGuard::or_zero(annual_personnel * period, "personnel"),
            training,
            maintenance: FiniteGuard::or_zero(annual_maintenance * period, "maintenance"),
        };

        debug!(
            vendor = %profile.id,
            price,
            compliance,
            upfront,
            recurring,
            total,
            "Calculated TCO"
        );

        TcoBreakdown {
            total,
            annual: FiniteGuard::ratio(total, period, "annual"),
            monthly: FiniteGuard::ratio(total, period * 12.0, "monthly"),
            per_device: FiniteGuard::ratio(total, devices, "per device"),
            per_device_monthly: price,
            yearly,
            breakdown,
        }
    }

    /// Per-device monthly price
    ///
    /// The featured-vendor override is taken as-is. Catalog prices get the
    /// vendor's volume or enterprise discount for large deployments.
    pub fn effective_price(profile: &VendorProfile, config: &AnalysisConfiguration) -> f64 {
        match config.portnox_pricing() {
            Some(price) if profile.id.as_str() == FEATURED_VENDOR => price,
            _ => {
                let discount = profile.pricing.discounts.rate_for(config.device_count());
                profile.pricing.per_device_monthly * (1.0 - discount)
            }
        }
    }
}
