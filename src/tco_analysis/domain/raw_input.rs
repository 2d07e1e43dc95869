use serde::Deserialize;

/// A numeric input as the user typed it: either a real number or text
///
/// Config files and JSON payloads may carry `devices: "1,500"` or
/// `devices: 1500`; both deserialize into this type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    /// Parses the value, ignoring surrounding whitespace, `$` and thousands
    /// separators. Returns `None` for non-numeric or non-finite values.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            LooseNumber::Number(n) => *n,
            LooseNumber::Text(text) => {
                let cleaned: String = text
                    .trim()
                    .chars()
                    .filter(|c| !matches!(c, ',' | '_' | '$'))
                    .collect();
                cleaned.parse::<f64>().ok()?
            }
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for LooseNumber {
    fn from(value: f64) -> Self {
        LooseNumber::Number(value)
    }
}

impl From<&str> for LooseNumber {
    fn from(value: &str) -> Self {
        LooseNumber::Text(value.to_string())
    }
}

impl From<String> for LooseNumber {
    fn from(value: String) -> Self {
        LooseNumber::Text(value)
    }
}

impl std::fmt::Display for LooseNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LooseNumber::Number(n) => write!(f, "{}", n),
            LooseNumber::Text(text) => write!(f, "\"{}\"", text),
        }
    }
}

/// Unvalidated analysis input collected from the CLI or a config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawAnalysisInput {
    pub device_count: Option<LooseNumber>,
    pub location_count: Option<LooseNumber>,
    pub analysis_period: Option<LooseNumber>,
    pub company_size: Option<String>,
    pub industry: Option<String>,
    pub fte_cost: Option<LooseNumber>,
    pub breach_cost: Option<LooseNumber>,
    pub portnox_pricing: Option<LooseNumber>,
    pub vendors: Option<Vec<String>>,
    pub baseline: Option<String>,
}

impl RawAnalysisInput {
    /// Returns `self` with every field that `higher` sets replaced by
    /// `higher`'s value
    pub fn overlaid_with(self, higher: RawAnalysisInput) -> Self {
        Self {
            device_count: higher.device_count.or(self.device_count),
            location_count: higher.location_count.or(self.location_count),
            analysis_period: higher.analysis_period.or(self.analysis_period),
            company_size: higher.company_size.or(self.company_size),
            industry: higher.industry.or(self.industry),
            fte_cost: higher.fte_cost.or(self.fte_cost),
            breach_cost: higher.breach_cost.or(self.breach_cost),
            portnox_pricing: higher.portnox_pricing.or(self.portnox_pricing),
            vendors: higher.vendors.or(self.vendors),
            baseline: higher.baseline.or(self.baseline),
        }
    }
}
