use serde::{Deserialize, Serialize};

/// Highest value a capability score may take
pub const MAX_SCORE: u8 = 100;

/// Capability scores of a vendor, each in 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityScores {
    pub cloud_native: u8,
    pub zero_trust: u8,
    pub automation: u8,
    pub ai_ml: u8,
    pub compliance: u8,
    pub user_experience: u8,
    pub support: u8,
    pub innovation: u8,
    pub scalability: u8,
    pub integration: u8,
}

impl CapabilityScores {
    /// Weighted overall score, rounded. Integration is reported but not weighted.
    pub fn overall_score(&self) -> u8 {
        let weighted = [
            (self.cloud_native, 0.15),
            (self.zero_trust, 0.20),
            (self.automation, 0.15),
            (self.ai_ml, 0.10),
            (self.compliance, 0.15),
            (self.user_experience, 0.10),
            (self.support, 0.05),
            (self.innovation, 0.05),
            (self.scalability, 0.05),
        ]
        .iter()
        .map(|(score, weight)| f64::from(*score) * weight)
        .sum::<f64>();

        weighted.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
    }

    /// Mean of zero-trust and compliance scores, rounded
    pub fn security_score(&self) -> u8 {
        let mean = (f64::from(self.zero_trust) + f64::from(self.compliance)) / 2.0;
        mean.round() as u8
    }

    pub fn is_cloud_native(&self) -> bool {
        self.cloud_native == MAX_SCORE
    }

    /// Returns the name of the first score above 100, if any
    pub fn first_out_of_range(&self) -> Option<&'static str> {
        [
            ("cloud_native", self.cloud_native),
            ("zero_trust", self.zero_trust),
            ("automation", self.automation),
            ("ai_ml", self.ai_ml),
            ("compliance", self.compliance),
            ("user_experience", self.user_experience),
            ("support", self.support),
            ("innovation", self.innovation),
            ("scalability", self.scalability),
            ("integration", self.integration),
        ]
        .into_iter()
        .find(|(_, score)| *score > MAX_SCORE)
        .map(|(name, _)| name)
    }
}
