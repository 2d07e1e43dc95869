use crate::shared::error::TcoError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

use super::configuration::MAX_MONEY_AMOUNT;

/// Maximum length for vendor identifiers
const MAX_VENDOR_ID_LENGTH: usize = 64;

/// NewType wrapper for a vendor identifier with validation
///
/// Identifiers are lowercase ASCII alphanumerics plus `-` and `_`
/// (e.g. `portnox`, `no-nac`, `radius_saas`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VendorId(String);

impl VendorId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        Ok(Self::validated(id.into())?)
    }

    /// Builds an id from a compile-time literal of the built-in catalog
    pub(crate) fn from_static(id: &'static str) -> Self {
        debug_assert!(Self::validated(id.to_string()).is_ok());
        Self(id.to_string())
    }

    fn validated(id: String) -> std::result::Result<Self, TcoError> {
        if id.is_empty() {
            return Err(TcoError::Validation {
                message: "Vendor id cannot be empty".to_string(),
            });
        }

        if id.len() > MAX_VENDOR_ID_LENGTH {
            return Err(TcoError::Validation {
                message: format!(
                    "Vendor id is too long ({} bytes). Maximum allowed: {} bytes",
                    id.len(),
                    MAX_VENDOR_ID_LENGTH
                ),
            });
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(TcoError::Validation {
                message: format!(
                    "Vendor id '{}' contains invalid characters. Only lowercase letters, digits, hyphens and underscores are allowed.",
                    id
                ),
            });
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VendorId {
    type Error = TcoError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::validated(value)
    }
}

impl From<VendorId> for String {
    fn from(id: VendorId) -> Self {
        id.0
    }
}

impl std::fmt::Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deployment architecture of a NAC product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Architecture {
    Cloud,
    #[serde(alias = "on-premise", alias = "onpremises")]
    OnPremises,
    Hybrid,
}

impl Architecture {
    pub fn is_on_premises(&self) -> bool {
        matches!(self, Architecture::OnPremises)
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Architecture::Cloud => write!(f, "cloud"),
            Architecture::OnPremises => write!(f, "on-premises"),
            Architecture::Hybrid => write!(f, "hybrid"),
        }
    }
}

/// Per-device price reductions for large deployments, as fractions of the
/// list price
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VolumeDiscounts {
    /// Applied from [`VolumeDiscounts::VOLUME_THRESHOLD`] devices
    #[serde(default)]
    pub volume: f64,
    /// Applied from [`VolumeDiscounts::ENTERPRISE_THRESHOLD`] devices
    #[serde(default)]
    pub enterprise: f64,
}

impl VolumeDiscounts {
    pub const VOLUME_THRESHOLD: u64 = 2_500;
    pub const ENTERPRISE_THRESHOLD: u64 = 10_000;

    pub fn new(volume: f64, enterprise: f64) -> Self {
        Self { volume, enterprise }
    }

    /// Discount rate for a deployment of `devices` devices
    pub fn rate_for(&self, devices: u64) -> f64 {
        if devices >= Self::ENTERPRISE_THRESHOLD {
            self.enterprise
        } else if devices >= Self::VOLUME_THRESHOLD {
            self.volume
        } else {
            0.0
        }
    }
}

/// Base cost inputs of a vendor, in USD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorPricing {
    /// Subscription price per device per month
    pub per_device_monthly: f64,
    /// One-time professional services cost
    pub implementation: f64,
    /// Recurring vendor support contract per year
    #[serde(default)]
    pub annual_support: f64,
    /// One-time appliance cost for a single site
    #[serde(default)]
    pub hardware: f64,
    /// Full-time equivalents needed to operate the product
    pub fte_required: f64,
    #[serde(default)]
    pub deployment_days: u32,
    #[serde(default)]
    pub discounts: VolumeDiscounts,
}

impl VendorPricing {
    /// Returns the name of the first amount that is negative, non-finite or
    /// above [`MAX_MONEY_AMOUNT`], or of a discount outside `0..1`
    pub fn first_invalid_amount(&self) -> Option<&'static str> {
        let amounts = [
            ("per_device_monthly", self.per_device_monthly),
            ("implementation", self.implementation),
            ("annual_support", self.annual_support),
            ("hardware", self.hardware),
            ("fte_required", self.fte_required),
        ];
        let discounts = [
            ("discounts.volume", self.discounts.volume),
            ("discounts.enterprise", self.discounts.enterprise),
        ];

        amounts
            .into_iter()
            .find(|(_, value)| !(0.0..=MAX_MONEY_AMOUNT).contains(value))
            .or_else(|| {
                discounts
                    .into_iter()
                    .find(|(_, rate)| !(0.0..1.0).contains(rate))
            })
            .map(|(name, _)| name)
    }
}

/// Static vendor record. Loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorProfile {
    pub id: VendorId,
    pub name: String,
    pub architecture: Architecture,
    pub pricing: VendorPricing,
    pub capabilities: super::CapabilityScores,
}
