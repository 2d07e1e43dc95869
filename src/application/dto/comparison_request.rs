use crate::tco_analysis::domain::RawAnalysisInput;

/// ComparisonRequest - Request DTO for the comparison use case
///
/// Carries the input exactly as the user gave it. Validation happens
/// inside the use case so that every substitution is reported.
#[derive(Debug, Clone, Default)]
pub struct ComparisonRequest {
    pub input: RawAnalysisInput,
}

impl ComparisonRequest {
    pub fn new(input: RawAnalysisInput) -> Self {
        Self { input }
    }
}
