use super::{CostCalculator, RoiCalculator};
use crate::tco_analysis::domain::{
    AnalysisConfiguration, Baseline, ComparisonResult, ComparisonSummary, MetricsSnapshot,
    RiskSnapshot, TcoBreakdown, VendorCatalog, VendorComparison, VendorProfile, VendorTotal,
    FEATURED_VENDOR,
};
use crate::tco_analysis::policies::{CostAssumptions, FiniteGuard};
use tracing::{debug, info, warn};

/// ComparisonGenerator service - the core of the TCO analysis
///
/// Prices every selected vendor under one configuration and derives the
/// cross-vendor summary. Pure: the same catalog and configuration always
/// yield the same comparison.
pub struct ComparisonGenerator;

struct PricedVendor<'a> {
    profile: &'a VendorProfile,
    tco: TcoBreakdown,
    annual_savings: f64,
}

impl ComparisonGenerator {
    /// Generates the vendor comparison
    ///
    /// Vendors are taken from `config.vendors()` in catalog order, or the
    /// whole catalog when no selection is set. Unknown ids are skipped with
    /// a warning, so the result may be empty.
    ///
    /// # Arguments
    /// * `catalog` - Vendor catalog to price
    /// * `config` - Validated analysis configuration
    pub fn generate(catalog: &VendorCatalog, config: &AnalysisConfiguration) -> VendorComparison {
        let profiles = Self::selected_profiles(catalog, config);
        info!(
            vendors = profiles.len(),
            devices = config.device_count(),
            years = config.analysis_period_years(),
            "Generating vendor comparison"
        );

        let priced: Vec<PricedVendor> = profiles
            .into_iter()
            .map(|profile| PricedVendor {
                profile,
                tco: CostCalculator::calculate(profile, config),
                annual_savings: RoiCalculator::annual_savings(profile, config),
            })
            .collect();

        let average_competitor_tco = Self::average_competitor_tco(&priced);
        let (baseline_tco, baseline_label) =
            Self::resolve_baseline(config.baseline(), &priced, average_competitor_tco);
        debug!(baseline = %baseline_label, baseline_tco, "Resolved baseline");

        let years = config.analysis_period_years();
        let results: Vec<ComparisonResult> = priced
            .into_iter()
            .map(|vendor| Self::build_result(vendor, years, baseline_tco))
            .collect();

        let summary = Self::summarize(&results, average_competitor_tco, baseline_tco, baseline_label);

        VendorComparison { results, summary }
    }

    fn selected_profiles<'a>(
        catalog: &'a VendorCatalog,
        config: &AnalysisConfiguration,
    ) -> Vec<&'a VendorProfile> {
        let Some(ids) = config.vendors() else {
            return catalog.profiles().iter().collect();
        };

        let (selected, unknown) = catalog.select(ids);
        for id in unknown {
            warn!(vendor = %id, "Unknown vendor skipped");
        }
        selected
    }

    fn average_competitor_tco(priced: &[PricedVendor]) -> f64 {
        let competitors: Vec<f64> = priced
            .iter()
            .filter(|v| v.profile.id.as_str() != FEATURED_VENDOR)
            .map(|v| v.tco.total)
            .collect();

        FiniteGuard::ratio(
            competitors.iter().sum(),
            competitors.len() as f64,
            "average competitor tco",
        )
    }

    /// Savings reference for every vendor. The featured vendor is never its
    /// own yardstick, so overriding its price cannot move other vendors.
    fn resolve_baseline(
        baseline: &Baseline,
        priced: &[PricedVendor],
        average_competitor_tco: f64,
    ) -> (f64, String) {
        match baseline {
            Baseline::CompetitorAverage => (average_competitor_tco, baseline.to_string()),
            Baseline::Vendor(id) if id.as_str() == FEATURED_VENDOR => {
                warn!(
                    vendor = %id,
                    "Featured vendor cannot be the baseline, using competitor average"
                );
                (
                    average_competitor_tco,
                    Baseline::CompetitorAverage.to_string(),
                )
            }
            Baseline::Vendor(id) => match priced.iter().find(|v| &v.profile.id == id) {
                Some(vendor) => (vendor.tco.total, vendor.profile.name.clone()),
                None => {
                    warn!(
                        vendor = %id,
                        "Baseline vendor is not part of the comparison, using competitor average"
                    );
                    (
                        average_competitor_tco,
                        Baseline::CompetitorAverage.to_string(),
                    )
                }
            },
        }
    }

    fn build_result(vendor: PricedVendor, years: u32, baseline_tco: f64) -> ComparisonResult {
        let PricedVendor {
            profile,
            tco,
            annual_savings,
        } = vendor;
        let capabilities = &profile.capabilities;
        let security_score = capabilities.security_score();
        let breach_reduction = FiniteGuard::score(
            f64::from(security_score) * CostAssumptions::BREACH_REDUCTION_FACTOR,
        );

        ComparisonResult {
            id: profile.id.clone(),
            name: profile.name.clone(),
            architecture: profile.architecture,
            roi: RoiCalculator::project(tco.total, annual_savings, years, baseline_tco),
            tco,
            metrics: MetricsSnapshot {
                security_score,
                fte_required: profile.pricing.fte_required,
                overall_score: capabilities.overall_score(),
                zero_trust_score: capabilities.zero_trust,
                automation_level: capabilities.automation,
                implementation_days: profile.pricing.deployment_days,
                cloud_native: capabilities.is_cloud_native(),
            },
            risk: RiskSnapshot {
                risk_score: 100 - security_score.min(100),
                breach_reduction_percent: breach_reduction,
            },
        }
    }

    fn summarize(
        results: &[ComparisonResult],
        average_competitor_tco: f64,
        baseline_tco: f64,
        baseline_label: String,
    ) -> ComparisonSummary {
        let to_total = |r: &ComparisonResult| VendorTotal {
            id: r.id.clone(),
            total: r.tco.total,
        };
        let lowest_tco = results
            .iter()
            .min_by(|a, b| a.tco.total.total_cmp(&b.tco.total))
            .map(to_total);
        let highest_tco = results
            .iter()
            .max_by(|a, b| a.tco.total.total_cmp(&b.tco.total))
            .map(to_total);

        let has_competitors = results.iter().any(|r| r.id.as_str() != FEATURED_VENDOR);
        let featured = results
            .iter()
            .find(|r| r.id.as_str() == FEATURED_VENDOR)
            .filter(|_| has_competitors);
        let featured_savings = featured.map(|r| average_competitor_tco - r.tco.total);
        let featured_savings_percent = featured.map(|r| {
            (FiniteGuard::ratio(
                average_competitor_tco - r.tco.total,
                average_competitor_tco,
                "featured savings percent",
            ) * 100.0)
                .round()
        });

        let fastest_deployment_days = results.iter().map(|r| r.metrics.implementation_days).min();
        let average_deployment_days = FiniteGuard::ratio(
            results
                .iter()
                .map(|r| f64::from(r.metrics.implementation_days))
                .sum(),
            results.len() as f64,
            "average deployment days",
        );

        ComparisonSummary {
            lowest_tco,
            highest_tco,
            baseline_tco,
            baseline_label,
            average_competitor_tco,
            featured_savings,
            featured_savings_percent,
            fastest_deployment_days,
            average_deployment_days,
            adjustments: Vec::new(),
        }
    }
}
