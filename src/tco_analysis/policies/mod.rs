mod cost_assumptions;
mod finite_guard;

pub use cost_assumptions::CostAssumptions;
pub use finite_guard::FiniteGuard;
