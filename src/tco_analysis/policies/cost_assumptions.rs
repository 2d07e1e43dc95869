use crate::tco_analysis::domain::Architecture;

/// Fixed assumptions of the cost and savings model
///
/// These are market averages rather than vendor data, so they live apart
/// from the catalog.
pub struct CostAssumptions;

impl CostAssumptions {
    /// Annual maintenance as a share of hardware cost
    pub const HARDWARE_MAINTENANCE_RATE: f64 = 0.15;
    /// Share of hardware cost spent on the year-4 refresh
    pub const HARDWARE_REFRESH_RATE: f64 = 0.5;
    pub const HARDWARE_REFRESH_YEAR: u32 = 4;

    /// Savings every NAC deployment is assumed to bring per year
    pub const BASE_ANNUAL_SAVINGS: f64 = 50_000.0;
    /// FTE load of running network access manually
    pub const BASELINE_FTE: f64 = 1.5;
    /// Annual breach probability without NAC
    pub const ANNUAL_BREACH_PROBABILITY: f64 = 0.05;
    /// Share of the security score converted into breach reduction
    pub const BREACH_REDUCTION_FACTOR: f64 = 0.3;

    /// Returned when savings never repay the cost
    pub const PAYBACK_UNDEFINED_MONTHS: u32 = 999;

    /// One-time training spend for the given architecture
    pub fn training_cost(architecture: Architecture) -> f64 {
        if architecture.is_on_premises() {
            25_000.0
        } else {
            10_000.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_training_cost_by_architecture() {
        assert_eq!(CostAssumptions::training_cost(Architecture::OnPremises), 25_000.0);
        assert_eq!(CostAssumptions::training_cost(Architecture::Cloud), 10_000.0);
        assert_eq!(CostAssumptions::training_cost(Architecture::Hybrid), 10_000.0);
    }
}
