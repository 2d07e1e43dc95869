use nac_tco::prelude::*;
use nac_tco::tco_analysis::domain::{
    Architecture, CapabilityScores, VendorPricing, VolumeDiscounts,
};

/// Mock CatalogSource serving an in-memory vendor list
pub struct MockCatalogSource {
    profiles: Vec<VendorProfile>,
}

impl MockCatalogSource {
    pub fn new() -> Self {
        Self {
            profiles: Vec::new(),
        }
    }

    /// Adds a vendor with uniform capability scores
    pub fn with_vendor(
        mut self,
        id: &str,
        architecture: Architecture,
        per_device_monthly: f64,
        hardware: f64,
        fte_required: f64,
    ) -> Self {
        self.profiles.push(VendorProfile {
            id: VendorId::new(id).unwrap(),
            name: format!("{} NAC", id),
            architecture,
            pricing: VendorPricing {
                per_device_monthly,
                implementation: 20_000.0,
                annual_support: 5_000.0,
                hardware,
                fte_required,
                deployment_days: 30,
                discounts: VolumeDiscounts::default(),
            },
            capabilities: CapabilityScores {
                cloud_native: 80,
                zero_trust: 80,
                automation: 80,
                ai_ml: 80,
                compliance: 80,
                user_experience: 80,
                support: 80,
                innovation: 80,
                scalability: 80,
                integration: 80,
            },
        });
        self
    }
}

impl CatalogSource for MockCatalogSource {
    fn load_catalog(&self) -> Result<VendorCatalog> {
        VendorCatalog::from_profiles(self.profiles.clone())
    }

    fn describe(&self) -> String {
        "mock catalog".to_string()
    }
}
