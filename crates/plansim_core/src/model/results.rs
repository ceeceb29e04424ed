//! Simulation outputs
//!
//! Metrics and summaries derived from a `ScenarioMatrix`, the per-strategy
//! comparison result, and the record handed to persistence.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ids::{PlanId, UserId};
use super::matrix::ScenarioMatrix;
use super::plan::PlanParameters;
use super::strategy::Strategy;

/// Sampling-error statistics over the terminal year of an ensemble
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorMetrics {
    pub mean: f64,
    /// Population standard deviation of terminal values
    pub std_dev: f64,
    /// `std_dev / sqrt(paths)`
    pub standard_error: f64,
    /// 95% normal-approximation interval for the mean: (lower, upper)
    pub confidence_interval: (f64, f64),
}

/// Per-year bands over an ensemble, ready for a charting collaborator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearlyStatistics {
    pub mean: Vec<f64>,
    pub p10: Vec<f64>,
    pub p90: Vec<f64>,
    /// Deterministic baseline: initial balance plus contributions paid so far
    pub cumulative_contributions: Vec<f64>,
}

impl YearlyStatistics {
    #[must_use]
    pub fn years(&self) -> usize {
        self.mean.len()
    }
}

/// Presentation-ready reduction of an ensemble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationSummary {
    pub yearly: YearlyStatistics,
    pub final_mean: f64,
    /// Initial balance plus every annual contribution, undiscounted
    pub total_contributions: f64,
    /// Compound annual growth rate of contributions into the final mean
    pub cagr: f64,
    pub estimated_profit: f64,
}

/// One strategy's ensemble and its error metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    pub strategy: Strategy,
    pub scenarios: ScenarioMatrix,
    pub metrics: ErrorMetrics,
}

/// Every strategy run for one plan, plus the most reliable one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// In evaluation order: Bootstrap, Classical, GBM
    pub results: Vec<StrategyResult>,
    pub best: Strategy,
}

impl Comparison {
    #[must_use]
    pub fn get(&self, strategy: Strategy) -> Option<&StrategyResult> {
        self.results.iter().find(|r| r.strategy == strategy)
    }

    #[must_use]
    pub fn best_result(&self) -> Option<&StrategyResult> {
        self.get(self.best)
    }

    #[must_use]
    pub fn best_strategy_name(&self) -> &'static str {
        self.best.name()
    }
}

/// Summary of a comparison run, owned by the persistence layer once returned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub plan_id: PlanId,
    pub user_id: UserId,
    pub created_at: Timestamp,
    pub initial_balance: f64,
    pub horizon_years: usize,
    pub simulation_count: usize,
    pub method: Strategy,
}

impl SimulationRecord {
    #[must_use]
    pub fn new(
        plan_id: PlanId,
        user_id: UserId,
        plan: &PlanParameters,
        comparison: &Comparison,
        created_at: Timestamp,
    ) -> Self {
        Self {
            plan_id,
            user_id,
            created_at,
            initial_balance: plan.initial_balance,
            horizon_years: plan.horizon_years,
            simulation_count: plan.simulation_count,
            method: comparison.best,
        }
    }
}
