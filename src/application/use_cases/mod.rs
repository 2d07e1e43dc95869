/// Use cases module containing application business logic orchestration
mod generate_comparison;

pub use generate_comparison::GenerateComparisonUseCase;
