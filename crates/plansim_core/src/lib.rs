//! Investment plan projection engine
//!
//! Projects the future value of a periodic investment plan under uncertainty
//! and picks the most statistically reliable projection. It provides:
//! - Scenario generation by historical bootstrap, Gaussian returns and
//!   Geometric Brownian Motion
//! - Yearly cash-flow compounding with inflation-adjusted contributions
//! - Standard error and 95% confidence interval of the terminal mean
//! - Strategy comparison with a deterministic selection rule
//! - Percentile bands and growth figures for a charting collaborator
//!
//! Market data comes from a [`HistoricalSeriesProvider`]; randomness is
//! always an explicit RNG supplied by the caller.
//!
//! ```ignore
//! use plansim_core::{ComparisonConfig, MarketData, PlanParameters, run_comparison};
//! use rand::SeedableRng;
//!
//! let plan = PlanParameters::new(10_000.0, 500.0, 20, "US");
//! let data: MarketData = serde_json::from_str(&json)?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let comparison = run_comparison(&plan, &data, &ComparisonConfig::default(), &mut rng)?;
//! println!("best method: {}", comparison.best);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod cashflow;
pub mod comparison;
pub mod error;
pub mod provider;
pub mod scenario;
pub mod statistics;
pub mod summary;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use comparison::{run_comparison, select_best};
pub use config::{ComparisonConfig, ExpenseTreatment, HistoryWindow, ParametricAssumptions};
pub use error::{DataError, Result, SimulationError};
pub use model::{
    Comparison, ErrorMetrics, PlanParameters, PresentationSummary, ScenarioMatrix,
    SimulationRecord, Strategy, StrategyResult, YearlyStatistics,
};
pub use provider::{HistoricalSeriesProvider, MarketData};
pub use summary::summarize_for_presentation;
