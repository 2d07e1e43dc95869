use super::{
    Architecture, CapabilityScores, VendorId, VendorPricing, VendorProfile, VolumeDiscounts,
};
use crate::shared::error::TcoError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Vendor that receives the pricing override and is excluded from the
/// competitor average
pub const FEATURED_VENDOR: &str = "portnox";

/// On-disk catalog layout: a top-level `vendors` list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub vendors: Vec<VendorProfile>,
}

/// Immutable, ordered collection of vendor profiles
///
/// Catalog order is preserved in every comparison built from it.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorCatalog {
    profiles: Vec<VendorProfile>,
}

impl VendorCatalog {
    /// Builds a catalog after validating every profile
    ///
    /// # Errors
    /// Returns an error if the list is empty, an id repeats, a price is
    /// negative, non-finite or above the money cap, a discount falls outside
    /// `0..1`, or a capability score exceeds 100.
    pub fn from_profiles(profiles: Vec<VendorProfile>) -> Result<Self> {
        if profiles.is_empty() {
            return Err(TcoError::InvalidCatalog {
                reason: "catalog contains no vendors".to_string(),
            }
            .into());
        }

        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.id.clone()) {
                return Err(TcoError::InvalidCatalog {
                    reason: format!("duplicate vendor id '{}'", profile.id),
                }
                .into());
            }
            if profile.name.trim().is_empty() {
                return Err(TcoError::InvalidCatalog {
                    reason: format!("vendor '{}' has an empty name", profile.id),
                }
                .into());
            }
            if let Some(field) = profile.pricing.first_invalid_amount() {
                return Err(TcoError::InvalidCatalog {
                    reason: format!(
                        "vendor '{}' has a negative, non-finite or out-of-range {}",
                        profile.id, field
                    ),
                }
                .into());
            }
            if let Some(field) = profile.capabilities.first_out_of_range() {
                return Err(TcoError::InvalidCatalog {
                    reason: format!("vendor '{}' has {} above 100", profile.id, field),
                }
                .into());
            }
        }

        Ok(Self { profiles })
    }

    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        Self::from_profiles(document.vendors)
    }

    pub fn profiles(&self) -> &[VendorProfile] {
        &self.profiles
    }

    pub fn get(&self, id: &str) -> Option<&VendorProfile> {
        self.profiles.iter().find(|p| p.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Returns the selected profiles in catalog order, plus the requested ids
    /// that the catalog does not know
    pub fn select(&self, ids: &[VendorId]) -> (Vec<&VendorProfile>, Vec<VendorId>) {
        let selected = self
            .profiles
            .iter()
            .filter(|p| ids.contains(&p.id))
            .collect();
        let unknown = ids
            .iter()
            .filter(|id| !self.contains(id.as_str()))
            .cloned()
            .collect();
        (selected, unknown)
    }

    /// The built-in 14-vendor table
    pub fn builtin() -> Self {
        Self {
            profiles: builtin_profiles(),
        }
    }
}

fn pricing(
    per_device_monthly: f64,
    implementation: f64,
    annual_support: f64,
    hardware: f64,
    fte_required: f64,
    deployment_days: u32,
) -> VendorPricing {
    VendorPricing {
        per_device_monthly,
        implementation,
        annual_support,
        hardware,
        fte_required,
        deployment_days,
        discounts: VolumeDiscounts::default(),
    }
}

/// Published volume and enterprise discounts; other vendors list none
const BUILTIN_DISCOUNTS: [(&str, f64, f64); 5] = [
    ("portnox", 0.15, 0.25),
    ("cisco", 0.10, 0.20),
    ("aruba", 0.12, 0.22),
    ("juniper", 0.14, 0.24),
    ("forescout", 0.11, 0.21),
];

/// Scores in field order: cloud_native, zero_trust, automation, ai_ml,
/// compliance, user_experience, support, innovation, scalability, integration
fn scores(s: [u8; 10]) -> CapabilityScores {
    CapabilityScores {
        cloud_native: s[0],
        zero_trust: s[1],
        automation: s[2],
        ai_ml: s[3],
        compliance: s[4],
        user_experience: s[5],
        support: s[6],
        innovation: s[7],
        scalability: s[8],
        integration: s[9],
    }
}

fn builtin_profiles() -> Vec<VendorProfile> {
    use Architecture::{Cloud, Hybrid, OnPremises};

    let table: [(&'static str, &str, Architecture, VendorPricing, [u8; 10]); 14] = [
        (
            "portnox",
            "Portnox CLEAR",
            Cloud,
            pricing(3.50, 15_000.0, 0.0, 0.0, 0.25, 21),
            [100, 95, 90, 85, 92, 95, 95, 90, 100, 90],
        ),
        (
            "cisco",
            "Cisco ISE",
            OnPremises,
            pricing(8.50, 85_000.0, 18_000.0, 125_000.0, 2.0, 90),
            [40, 85, 75, 70, 95, 65, 80, 70, 75, 90],
        ),
        (
            "aruba",
            "Aruba ClearPass",
            Hybrid,
            pricing(7.25, 65_000.0, 15_000.0, 95_000.0, 1.5, 75),
            [60, 80, 70, 65, 90, 70, 75, 75, 80, 85],
        ),
        (
            "forescout",
            "Forescout",
            OnPremises,
            pricing(6.75, 55_000.0, 12_000.0, 85_000.0, 1.25, 60),
            [50, 85, 80, 75, 85, 70, 70, 70, 70, 80],
        ),
        (
            "fortinet",
            "FortiNAC",
            OnPremises,
            pricing(5.50, 45_000.0, 10_000.0, 75_000.0, 1.0, 45),
            [45, 75, 70, 60, 85, 65, 75, 65, 70, 85],
        ),
        (
            "microsoft",
            "Microsoft NPS/Intune",
            Cloud,
            pricing(4.50, 35_000.0, 8_000.0, 0.0, 1.0, 30),
            [90, 80, 75, 80, 85, 75, 70, 85, 90, 95],
        ),
        (
            "juniper",
            "Juniper Mist Access Assurance",
            Cloud,
            pricing(5.25, 40_000.0, 0.0, 0.0, 0.75, 35),
            [85, 80, 80, 75, 80, 75, 70, 80, 85, 80],
        ),
        (
            "arista",
            "Arista CloudVision",
            Cloud,
            pricing(4.75, 38_000.0, 0.0, 0.0, 0.75, 30),
            [90, 75, 85, 70, 75, 70, 65, 75, 85, 75],
        ),
        (
            "extreme",
            "ExtremeCloud IQ",
            Cloud,
            pricing(4.25, 32_000.0, 0.0, 0.0, 0.5, 28),
            [85, 70, 75, 65, 75, 70, 65, 70, 80, 75],
        ),
        (
            "foxpass",
            "Foxpass",
            Cloud,
            pricing(2.50, 10_000.0, 0.0, 0.0, 0.25, 14),
            [100, 65, 70, 50, 70, 80, 60, 65, 75, 70],
        ),
        (
            "securew2",
            "SecureW2",
            Cloud,
            pricing(3.00, 15_000.0, 0.0, 0.0, 0.25, 14),
            [100, 70, 75, 55, 75, 80, 65, 70, 80, 75],
        ),
        (
            "packetfence",
            "PacketFence",
            OnPremises,
            pricing(0.0, 25_000.0, 20_000.0, 50_000.0, 2.0, 60),
            [20, 60, 50, 40, 65, 50, 45, 55, 60, 70],
        ),
        (
            "radiussaas",
            "RADIUS-as-a-Service",
            Cloud,
            pricing(2.25, 8_000.0, 0.0, 0.0, 0.25, 7),
            [100, 60, 65, 45, 65, 75, 55, 60, 80, 65],
        ),
        (
            "pulse",
            "Pulse Policy Secure",
            Hybrid,
            pricing(5.75, 48_000.0, 11_000.0, 65_000.0, 1.25, 45),
            [50, 75, 65, 55, 80, 60, 65, 60, 70, 75],
        ),
    ];

    table
        .into_iter()
        .map(|(id, name, architecture, mut pricing, s)| {
            if let Some((_, volume, enterprise)) =
                BUILTIN_DISCOUNTS.iter().find(|(vendor, _, _)| *vendor == id)
            {
                pricing.discounts = VolumeDiscounts::new(*volume, *enterprise);
            }
            VendorProfile {
                id: VendorId::from_static(id),
                name: name.to_string(),
                architecture,
                pricing,
                capabilities: scores(s),
            }
        })
        .collect()
}
