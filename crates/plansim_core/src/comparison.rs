//! Method selector and comparator
//!
//! Runs Bootstrap-Historical, Classical-Normal and GBM for the same plan and
//! picks the strategy with the smallest standard error of its terminal mean.

use rand::Rng;

use crate::config::ComparisonConfig;
use crate::error::{Result, SimulationError};
use crate::model::{
    Comparison, ErrorMetrics, PlanParameters, ScenarioMatrix, Strategy, StrategyResult,
};
use crate::provider::HistoricalSeriesProvider;
use crate::scenario::{bootstrap_historical, classical_normal, geometric_brownian_motion};
use crate::statistics::evaluate;

/// Strategy with the strictly smallest `standard_error`.
///
/// Candidates are considered in slice order and the first one wins a tie.
/// A NaN standard error never wins. `None` only for an empty slice or when
/// every candidate is NaN.
#[must_use]
pub fn select_best(candidates: &[(Strategy, ErrorMetrics)]) -> Option<Strategy> {
    let mut best: Option<(Strategy, f64)> = None;
    for &(strategy, metrics) in candidates {
        let se = metrics.standard_error;
        if se.is_nan() {
            continue;
        }
        match best {
            Some((_, current)) if se >= current => {}
            _ => best = Some((strategy, se)),
        }
    }
    best.map(|(strategy, _)| strategy)
}

fn evaluated(strategy: Strategy, scenarios: ScenarioMatrix) -> Result<StrategyResult> {
    let metrics = evaluate(&scenarios).ok_or_else(|| {
        SimulationError::invalid("scenarios", format!("{strategy} produced an empty ensemble"))
    })?;
    tracing::debug!(
        strategy = strategy.name(),
        mean = metrics.mean,
        standard_error = metrics.standard_error,
        "Evaluated strategy"
    );
    Ok(StrategyResult {
        strategy,
        scenarios,
        metrics,
    })
}

/// Run all three strategies for `plan` and select the most reliable one.
///
/// The plan and history window are validated before the provider is called
/// or any random number is drawn. The provider is asked for returns and
/// inflation exactly once each; its errors propagate unchanged. Strategies
/// share `rng` in the fixed order Bootstrap, Classical, GBM.
pub fn run_comparison<P, R>(
    plan: &PlanParameters,
    provider: &P,
    config: &ComparisonConfig,
    rng: &mut R,
) -> Result<Comparison>
where
    P: HistoricalSeriesProvider + ?Sized,
    R: Rng + ?Sized,
{
    plan.validate()?;
    config.history.validate()?;

    tracing::info!(
        symbol = %plan.market_symbol,
        inflation_period = %plan.inflation_period,
        horizon_years = plan.horizon_years,
        simulations = plan.simulation_count,
        "Starting strategy comparison"
    );

    let history = config.history;
    let returns = provider.get_annual_returns(&plan.market_symbol, history.start, history.end)?;
    let inflation = provider.get_annual_inflation(&plan.inflation_period)?;
    tracing::debug!(
        return_years = returns.len(),
        inflation_years = inflation.len(),
        "Loaded historical series"
    );

    let treatment = config.expense_treatment;
    let results = vec![
        evaluated(
            Strategy::Bootstrap,
            bootstrap_historical(plan, &returns, &inflation, treatment, rng)?,
        )?,
        evaluated(
            Strategy::Classical,
            classical_normal(plan, &config.parametric, treatment, rng)?,
        )?,
        evaluated(
            Strategy::Gbm,
            geometric_brownian_motion(plan, &config.parametric, treatment, rng)?,
        )?,
    ];

    let candidates: Vec<(Strategy, ErrorMetrics)> =
        results.iter().map(|r| (r.strategy, r.metrics)).collect();
    let best = select_best(&candidates).ok_or_else(|| {
        SimulationError::invalid("scenarios", "no strategy produced a finite standard error")
    })?;

    tracing::info!(best = best.name(), "Strategy comparison complete");
    Ok(Comparison { results, best })
}
