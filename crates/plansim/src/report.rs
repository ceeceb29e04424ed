//! JSON report printed by the command line front end

use jiff::Timestamp;
use plansim_core::model::{
    Comparison, ErrorMetrics, PlanParameters, PresentationSummary, SimulationRecord, Strategy,
    index_label,
};
use plansim_core::summary::summarize_for_presentation;
use serde::Serialize;

use crate::input::PlanFile;

/// One strategy's metrics and chart-ready series
#[derive(Debug, Clone, Serialize)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub metrics: ErrorMetrics,
    pub summary: PresentationSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub market: String,
    pub plan: PlanParameters,
    pub record: SimulationRecord,
    pub best: Strategy,
    pub strategies: Vec<StrategyReport>,
}

impl Report {
    #[must_use]
    pub fn new(file: &PlanFile, comparison: &Comparison, created_at: Timestamp) -> Self {
        let plan = &file.plan;
        let strategies = comparison
            .results
            .iter()
            .map(|result| StrategyReport {
                strategy: result.strategy,
                metrics: result.metrics,
                summary: summarize_for_presentation(
                    &result.scenarios,
                    plan.annual_contribution(),
                    plan.initial_balance,
                ),
            })
            .collect();

        Self {
            market: index_label(&plan.market_symbol),
            plan: plan.clone(),
            record: SimulationRecord::new(file.plan_id, file.user_id, plan, comparison, created_at),
            best: comparison.best,
            strategies,
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
