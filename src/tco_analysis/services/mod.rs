mod comparison_generator;
mod cost_calculator;
mod input_sanitizer;
mod report_generator;
mod roi_calculator;

pub use comparison_generator::ComparisonGenerator;
pub use cost_calculator::CostCalculator;
pub use input_sanitizer::{InputSanitizer, SanitizedInput};
pub use report_generator::ReportGenerator;
pub use roi_calculator::RoiCalculator;
