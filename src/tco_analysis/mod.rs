/// Domain layer - vendor catalog, analysis inputs and the comparison engine
///
/// Nothing in this module performs I/O. Calculations never return errors;
/// invalid inputs degrade to defaults and are logged through `tracing`.
pub mod domain;
pub mod policies;
pub mod services;
