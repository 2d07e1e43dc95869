use super::VendorId;
use serde::Serialize;

pub const DEFAULT_DEVICE_COUNT: u64 = 1000;
pub const DEFAULT_LOCATION_COUNT: u64 = 1;
pub const DEFAULT_ANALYSIS_YEARS: u32 = 3;
pub const MAX_ANALYSIS_YEARS: u32 = 10;
pub const DEFAULT_FTE_COST: f64 = 100_000.0;
pub const DEFAULT_BREACH_COST: f64 = 4_350_000.0;
/// Upper bound for any USD amount, keeping every derived figure finite
pub const MAX_MONEY_AMOUNT: f64 = 1.0e12;

/// Company size bucket, driving personnel and implementation multipliers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanySize {
    VerySmall,
    Small,
    #[default]
    Medium,
    Large,
    Enterprise,
}

impl CompanySize {
    /// Multiplier applied to the annual personnel cost
    pub fn fte_multiplier(&self) -> f64 {
        match self {
            CompanySize::VerySmall => 0.5,
            CompanySize::Small => 0.75,
            CompanySize::Medium => 1.0,
            CompanySize::Large => 1.25,
            CompanySize::Enterprise => 1.5,
        }
    }

    /// Multiplier applied to one-time implementation services
    pub fn complexity_factor(&self) -> f64 {
        match self {
            CompanySize::VerySmall => 0.8,
            CompanySize::Small => 0.9,
            CompanySize::Medium => 1.0,
            CompanySize::Large => 1.1,
            CompanySize::Enterprise => 1.2,
        }
    }
}

impl std::str::FromStr for CompanySize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "very-small" | "verysmall" => Ok(CompanySize::VerySmall),
            "small" => Ok(CompanySize::Small),
            "medium" => Ok(CompanySize::Medium),
            "large" => Ok(CompanySize::Large),
            "enterprise" => Ok(CompanySize::Enterprise),
            _ => Err(format!(
                "Invalid company size: {}. Please specify 'very-small', 'small', 'medium', 'large' or 'enterprise'",
                s
            )),
        }
    }
}

impl std::fmt::Display for CompanySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompanySize::VerySmall => write!(f, "very-small"),
            CompanySize::Small => write!(f, "small"),
            CompanySize::Medium => write!(f, "medium"),
            CompanySize::Large => write!(f, "large"),
            CompanySize::Enterprise => write!(f, "enterprise"),
        }
    }
}

/// Industry vertical, driving compliance overhead and breach exposure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    Healthcare,
    FinancialServices,
    Retail,
    Manufacturing,
    Education,
    Government,
    #[default]
    Technology,
    EnergyUtilities,
}

impl Industry {
    /// Multiplier applied to implementation, training and operational costs
    pub fn compliance_multiplier(&self) -> f64 {
        match self {
            Industry::Healthcare => 1.5,
            Industry::FinancialServices => 1.8,
            Industry::Retail => 1.2,
            Industry::Manufacturing => 1.0,
            Industry::Education => 0.8,
            Industry::Government => 2.0,
            Industry::Technology => 1.1,
            Industry::EnergyUtilities => 1.6,
        }
    }

    /// Average cost of one breach in this industry, in USD
    pub fn average_breach_cost(&self) -> f64 {
        match self {
            Industry::Healthcare => 10_930_000.0,
            Industry::FinancialServices => 5_850_000.0,
            Industry::Retail => 3_280_000.0,
            Industry::Manufacturing => 4_990_000.0,
            Industry::Education => 3_790_000.0,
            Industry::Government => 4_910_000.0,
            Industry::Technology => 5_040_000.0,
            Industry::EnergyUtilities => 6_720_000.0,
        }
    }
}

impl std::str::FromStr for Industry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "healthcare" => Ok(Industry::Healthcare),
            "financial-services" | "finance" => Ok(Industry::FinancialServices),
            "retail" => Ok(Industry::Retail),
            "manufacturing" => Ok(Industry::Manufacturing),
            "education" => Ok(Industry::Education),
            "government" => Ok(Industry::Government),
            "technology" => Ok(Industry::Technology),
            "energy-utilities" | "energy" => Ok(Industry::EnergyUtilities),
            _ => Err(format!("Invalid industry: {}", s)),
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Industry::Healthcare => "healthcare",
            Industry::FinancialServices => "financial-services",
            Industry::Retail => "retail",
            Industry::Manufacturing => "manufacturing",
            Industry::Education => "education",
            Industry::Government => "government",
            Industry::Technology => "technology",
            Industry::EnergyUtilities => "energy-utilities",
        };
        f.write_str(name)
    }
}

/// Reference point for savings figures
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "vendor")]
pub enum Baseline {
    /// Mean TCO of every compared vendor except the featured one
    #[default]
    CompetitorAverage,
    /// TCO of one specific vendor (e.g. the incumbent)
    Vendor(VendorId),
}

impl std::fmt::Display for Baseline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Baseline::CompetitorAverage => write!(f, "competitor average"),
            Baseline::Vendor(id) => write!(f, "{}", id),
        }
    }
}

/// A default substituted for a missing or invalid input value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputAdjustment {
    pub field: String,
    pub provided: String,
    pub applied: String,
}

impl InputAdjustment {
    pub fn new(
        field: impl Into<String>,
        provided: impl Into<String>,
        applied: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            provided: provided.into(),
            applied: applied.into(),
        }
    }
}

/// Validated analysis input. Treated as an immutable value per calculation.
///
/// The `with_*` methods apply the same guards as the input sanitizer, so a
/// configuration always holds usable values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisConfiguration {
    device_count: u64,
    location_count: u64,
    analysis_period_years: u32,
    company_size: CompanySize,
    industry: Option<Industry>,
    fte_cost: f64,
    /// Explicit breach cost; `None` means the industry average or the default
    breach_cost: Option<f64>,
    portnox_pricing: Option<f64>,
    vendors: Option<Vec<VendorId>>,
    baseline: Baseline,
}

impl Default for AnalysisConfiguration {
    fn default() -> Self {
        Self {
            device_count: DEFAULT_DEVICE_COUNT,
            location_count: DEFAULT_LOCATION_COUNT,
            analysis_period_years: DEFAULT_ANALYSIS_YEARS,
            company_size: CompanySize::default(),
            industry: None,
            fte_cost: DEFAULT_FTE_COST,
            breach_cost: None,
            portnox_pricing: None,
            vendors: None,
            baseline: Baseline::default(),
        }
    }
}

impl AnalysisConfiguration {
    pub fn with_device_count(mut self, device_count: u64) -> Self {
        self.device_count = if device_count == 0 {
            DEFAULT_DEVICE_COUNT
        } else {
            device_count
        };
        self
    }

    pub fn with_location_count(mut self, location_count: u64) -> Self {
        self.location_count = location_count.max(1);
        self
    }

    pub fn with_analysis_period(mut self, years: u32) -> Self {
        self.analysis_period_years = if years == 0 {
            DEFAULT_ANALYSIS_YEARS
        } else {
            years.min(MAX_ANALYSIS_YEARS)
        };
        self
    }

    pub fn with_company_size(mut self, company_size: CompanySize) -> Self {
        self.company_size = company_size;
        self
    }

    pub fn with_industry(mut self, industry: Option<Industry>) -> Self {
        self.industry = industry;
        self
    }

    /// Amounts above [`MAX_MONEY_AMOUNT`] are capped
    pub fn with_fte_cost(mut self, fte_cost: f64) -> Self {
        self.fte_cost = if fte_cost.is_finite() && fte_cost >= 0.0 {
            fte_cost.min(MAX_MONEY_AMOUNT)
        } else {
            DEFAULT_FTE_COST
        };
        self
    }

    /// Sets an explicit breach cost. Invalid amounts fall back to the
    /// industry average (or the general default).
    pub fn with_breach_cost(mut self, breach_cost: f64) -> Self {
        self.breach_cost = (breach_cost.is_finite() && breach_cost >= 0.0)
            .then(|| breach_cost.min(MAX_MONEY_AMOUNT));
        self
    }

    /// Sets the per-device monthly price of the featured vendor.
    /// Negative or non-finite prices clear the override.
    pub fn with_portnox_pricing(mut self, price: Option<f64>) -> Self {
        self.portnox_pricing = price
            .filter(|p| p.is_finite() && *p >= 0.0)
            .map(|p| p.min(MAX_MONEY_AMOUNT));
        self
    }

    pub fn with_vendors(mut self, vendors: Option<Vec<VendorId>>) -> Self {
        self.vendors = vendors;
        self
    }

    pub fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn device_count(&self) -> u64 {
        self.device_count
    }

    pub fn location_count(&self) -> u64 {
        self.location_count
    }

    pub fn analysis_period_years(&self) -> u32 {
        self.analysis_period_years
    }

    pub fn company_size(&self) -> CompanySize {
        self.company_size
    }

    pub fn industry(&self) -> Option<Industry> {
        self.industry
    }

    /// Cost multiplier of the industry; 1.0 when no industry is set
    pub fn compliance_multiplier(&self) -> f64 {
        self.industry
            .map_or(1.0, |industry| industry.compliance_multiplier())
    }

    pub fn fte_cost(&self) -> f64 {
        self.fte_cost
    }

    /// Explicit breach cost, else the industry average, else the default
    pub fn breach_cost(&self) -> f64 {
        self.breach_cost.unwrap_or_else(|| {
            self.industry
                .map_or(DEFAULT_BREACH_COST, |industry| industry.average_breach_cost())
        })
    }

    pub fn portnox_pricing(&self) -> Option<f64> {
        self.portnox_pricing
    }

    pub fn vendors(&self) -> Option<&[VendorId]> {
        self.vendors.as_deref()
    }

    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }
}
