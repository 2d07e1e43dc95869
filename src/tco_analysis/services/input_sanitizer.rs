use crate::tco_analysis::domain::configuration::{
    DEFAULT_ANALYSIS_YEARS, DEFAULT_BREACH_COST, DEFAULT_DEVICE_COUNT, DEFAULT_FTE_COST,
    DEFAULT_LOCATION_COUNT, MAX_ANALYSIS_YEARS, MAX_MONEY_AMOUNT,
};
use crate::tco_analysis::domain::{
    AnalysisConfiguration, Baseline, CompanySize, Industry, InputAdjustment, LooseNumber,
    RawAnalysisInput, VendorId, FEATURED_VENDOR,
};
use tracing::warn;

/// Validated configuration plus the defaults that had to be substituted
#[derive(Debug, Clone)]
pub struct SanitizedInput {
    pub configuration: AnalysisConfiguration,
    pub adjustments: Vec<InputAdjustment>,
}

/// InputSanitizer service turning loose user input into a configuration
///
/// Missing values silently take their defaults. Values that were provided
/// but unusable also take their defaults, and each such substitution is
/// recorded and logged. Sanitizing never fails.
pub struct InputSanitizer;

impl InputSanitizer {
    pub fn sanitize(raw: &RawAnalysisInput) -> SanitizedInput {
        let mut adjustments = Vec::new();

        let device_count = Self::positive_count(
            "device_count",
            raw.device_count.as_ref(),
            DEFAULT_DEVICE_COUNT,
            &mut adjustments,
        );
        let location_count = Self::positive_count(
            "location_count",
            raw.location_count.as_ref(),
            DEFAULT_LOCATION_COUNT,
            &mut adjustments,
        );
        let analysis_period = Self::analysis_period(raw.analysis_period.as_ref(), &mut adjustments);
        let company_size = Self::company_size(raw.company_size.as_deref(), &mut adjustments);
        let industry = Self::industry(raw.industry.as_deref(), &mut adjustments);
        let fte_cost = raw
            .fte_cost
            .as_ref()
            .and_then(|value| {
                Self::non_negative_amount(
                    "fte_cost",
                    value,
                    &DEFAULT_FTE_COST.to_string(),
                    &mut adjustments,
                )
            })
            .unwrap_or(DEFAULT_FTE_COST);
        let default_breach_cost =
            industry.map_or(DEFAULT_BREACH_COST, |industry| industry.average_breach_cost());
        let breach_cost = raw.breach_cost.as_ref().and_then(|value| {
            Self::non_negative_amount(
                "breach_cost",
                value,
                &default_breach_cost.to_string(),
                &mut adjustments,
            )
        });
        let portnox_pricing = raw.portnox_pricing.as_ref().and_then(|value| {
            Self::non_negative_amount("portnox_pricing", value, "catalog price", &mut adjustments)
        });
        let vendors = raw
            .vendors
            .as_ref()
            .map(|ids| Self::vendor_ids(ids, &mut adjustments));
        let baseline = Self::baseline(raw.baseline.as_deref(), &mut adjustments);

        for adjustment in &adjustments {
            warn!(
                field = %adjustment.field,
                provided = %adjustment.provided,
                applied = %adjustment.applied,
                "Invalid input replaced"
            );
        }

        let mut configuration = AnalysisConfiguration::default()
            .with_device_count(device_count)
            .with_location_count(location_count)
            .with_analysis_period(analysis_period)
            .with_company_size(company_size)
            .with_industry(industry)
            .with_fte_cost(fte_cost)
            .with_portnox_pricing(portnox_pricing)
            .with_vendors(vendors)
            .with_baseline(baseline);
        if let Some(breach_cost) = breach_cost {
            configuration = configuration.with_breach_cost(breach_cost);
        }

        SanitizedInput {
            configuration,
            adjustments,
        }
    }

    fn positive_count(
        field: &str,
        raw: Option<&LooseNumber>,
        default: u64,
        adjustments: &mut Vec<InputAdjustment>,
    ) -> u64 {
        let Some(raw) = raw else {
            return default;
        };

        match raw.as_f64().map(f64::round) {
            Some(value) if value >= 1.0 => value as u64,
            _ => {
                adjustments.push(InputAdjustment::new(
                    field,
                    raw.to_string(),
                    default.to_string(),
                ));
                default
            }
        }
    }

    fn analysis_period(raw: Option<&LooseNumber>, adjustments: &mut Vec<InputAdjustment>) -> u32 {
        let Some(raw) = raw else {
            return DEFAULT_ANALYSIS_YEARS;
        };

        match raw.as_f64().map(f64::round) {
            Some(years) if years > f64::from(MAX_ANALYSIS_YEARS) => {
                adjustments.push(InputAdjustment::new(
                    "analysis_period",
                    raw.to_string(),
                    MAX_ANALYSIS_YEARS.to_string(),
                ));
                MAX_ANALYSIS_YEARS
            }
            Some(years) if years >= 1.0 => years as u32,
            _ => {
                adjustments.push(InputAdjustment::new(
                    "analysis_period",
                    raw.to_string(),
                    DEFAULT_ANALYSIS_YEARS.to_string(),
                ));
                DEFAULT_ANALYSIS_YEARS
            }
        }
    }

    fn company_size(raw: Option<&str>, adjustments: &mut Vec<InputAdjustment>) -> CompanySize {
        let Some(raw) = raw else {
            return CompanySize::default();
        };

        raw.parse().unwrap_or_else(|_| {
            adjustments.push(InputAdjustment::new(
                "company_size",
                raw,
                CompanySize::default().to_string(),
            ));
            CompanySize::default()
        })
    }

    fn industry(raw: Option<&str>, adjustments: &mut Vec<InputAdjustment>) -> Option<Industry> {
        let raw = raw?;

        Some(raw.parse().unwrap_or_else(|_| {
            adjustments.push(InputAdjustment::new(
                "industry",
                raw,
                Industry::default().to_string(),
            ));
            Industry::default()
        }))
    }

    /// Parses a USD amount; `None` means the caller's fallback applies
    ///
    /// Amounts above [`MAX_MONEY_AMOUNT`] are capped and recorded.
    fn non_negative_amount(
        field: &str,
        raw: &LooseNumber,
        fallback: &str,
        adjustments: &mut Vec<InputAdjustment>,
    ) -> Option<f64> {
        match raw.as_f64() {
            Some(value) if value > MAX_MONEY_AMOUNT => {
                adjustments.push(InputAdjustment::new(
                    field,
                    raw.to_string(),
                    MAX_MONEY_AMOUNT.to_string(),
                ));
                Some(MAX_MONEY_AMOUNT)
            }
            Some(value) if value >= 0.0 => Some(value),
            _ => {
                adjustments.push(InputAdjustment::new(field, raw.to_string(), fallback));
                None
            }
        }
    }

    fn vendor_ids(raw: &[String], adjustments: &mut Vec<InputAdjustment>) -> Vec<VendorId> {
        let mut ids: Vec<VendorId> = Vec::with_capacity(raw.len());
        for entry in raw {
            match VendorId::new(entry.trim().to_lowercase()) {
                Ok(id) if !ids.contains(&id) => ids.push(id),
                Ok(_) => {}
                Err(_) => adjustments.push(InputAdjustment::new("vendors", entry.as_str(), "skipped")),
            }
        }
        ids
    }

    fn baseline(raw: Option<&str>, adjustments: &mut Vec<InputAdjustment>) -> Baseline {
        let Some(raw) = raw else {
            return Baseline::CompetitorAverage;
        };

        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "" | "average" | "competitor-average" | "competitor_average" => {
                Baseline::CompetitorAverage
            }
            // The featured vendor is what gets measured, never the yardstick
            FEATURED_VENDOR => {
                adjustments.push(InputAdjustment::new(
                    "baseline",
                    raw,
                    Baseline::CompetitorAverage.to_string(),
                ));
                Baseline::CompetitorAverage
            }
            _ => match VendorId::new(normalized.clone()) {
                Ok(id) => Baseline::Vendor(id),
                Err(_) => {
                    adjustments.push(InputAdjustment::new(
                        "baseline",
                        raw,
                        Baseline::CompetitorAverage.to_string(),
                    ));
                    Baseline::CompetitorAverage
                }
            },
        }
    }
}
