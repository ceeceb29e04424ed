//! Scenario generation strategies
//!
//! Each strategy produces a `ScenarioMatrix` of shape
//! `simulation_count x horizon_years` by running the shared cash-flow
//! recurrence with a different source of yearly return shocks and inflation.
//!
//! # Reproducibility
//!
//! The caller's RNG is only used to draw one seed per path, sequentially.
//! Every path then runs on its own `SmallRng`, so the matrix is identical for
//! identical inputs whether paths run on one thread or on the rayon pool.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, StandardNormal};
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::cashflow::{CashFlows, compound_path};
use crate::config::{ExpenseTreatment, ParametricAssumptions};
use crate::error::{DataError, Result, SimulationError};
use crate::model::{
    InflationSeries, PlanParameters, ReturnSeries, ScenarioMatrix, Strategy, resample,
};

/// Growth factor `exp((mu - sigma^2 / 2) + sigma * z)` of one GBM year.
///
/// Strictly positive for every finite input, so a balance never changes
/// sign through the multiplicative step.
#[inline]
#[must_use]
pub fn gbm_growth_factor(mean_return: f64, std_dev: f64, z: f64) -> f64 {
    ((mean_return - 0.5 * std_dev * std_dev) + std_dev * z).exp()
}

/// Reject parameters a Gaussian draw cannot use.
///
/// `Normal::new` accepts a negative `std_dev` (it mirrors the draws), so the
/// sign is checked here.
fn check_moments(distribution: &'static str, mean: f64, std_dev: f64) -> Result<()> {
    if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
        return Err(SimulationError::InvalidDistributionParameters {
            distribution,
            mean,
            std_dev,
            reason: "mean must be finite and std_dev non-negative and finite",
        });
    }
    Ok(())
}

fn normal(distribution: &'static str, mean: f64, std_dev: f64) -> Result<Normal<f64>> {
    check_moments(distribution, mean, std_dev)?;
    Normal::new(mean, std_dev).map_err(|_| SimulationError::InvalidDistributionParameters {
        distribution,
        mean,
        std_dev,
        reason: "std_dev must be non-negative and finite",
    })
}

/// Run every path of one strategy.
///
/// `draw` yields `(growth_factor, inflation)` for a year from the path's RNG.
fn generate<R, F>(
    strategy: Strategy,
    plan: &PlanParameters,
    treatment: ExpenseTreatment,
    rng: &mut R,
    draw: F,
) -> Result<ScenarioMatrix>
where
    R: Rng + ?Sized,
    F: Fn(&mut SmallRng) -> (f64, f64) + Sync,
{
    let flows = CashFlows::from_plan(plan, treatment);
    let seeds: Vec<u64> = (0..plan.simulation_count).map(|_| rng.next_u64()).collect();

    tracing::debug!(
        strategy = strategy.name(),
        paths = plan.simulation_count,
        years = plan.horizon_years,
        "Generating scenarios"
    );

    let simulate_path = |seed: u64| {
        let mut path_rng = SmallRng::seed_from_u64(seed);
        compound_path(plan.initial_balance, flows, plan.horizon_years, |_| {
            draw(&mut path_rng)
        })
    };

    #[cfg(feature = "parallel")]
    let rows: Vec<Vec<f64>> = seeds.into_par_iter().map(simulate_path).collect();
    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Vec<f64>> = seeds.into_iter().map(simulate_path).collect();

    ScenarioMatrix::from_rows(rows)
}

/// Bootstrap-Historical: every year draws one historical return and one
/// historical inflation rate, independently and with replacement.
///
/// Fails with `DataUnavailable` before any path is generated if either
/// series is empty.
pub fn bootstrap_historical<R: Rng + ?Sized>(
    plan: &PlanParameters,
    returns: &ReturnSeries,
    inflation: &InflationSeries,
    treatment: ExpenseTreatment,
    rng: &mut R,
) -> Result<ScenarioMatrix> {
    plan.validate()?;
    if returns.is_empty() {
        return Err(DataError::EmptyReturns(returns.symbol.clone()).into());
    }
    if inflation.is_empty() {
        return Err(DataError::EmptyInflation(inflation.period.clone()).into());
    }

    let history = returns.returns.as_slice();
    let rates = inflation.rates.as_slice();
    generate(Strategy::Bootstrap, plan, treatment, rng, |path_rng| {
        let shock = resample(history, path_rng);
        (1.0 + shock, resample(rates, path_rng))
    })
}

/// Classical-Normal: Gaussian return shock and Gaussian inflation each year.
pub fn classical_normal<R: Rng + ?Sized>(
    plan: &PlanParameters,
    assumptions: &ParametricAssumptions,
    treatment: ExpenseTreatment,
    rng: &mut R,
) -> Result<ScenarioMatrix> {
    plan.validate()?;
    let returns = normal("Normal return", assumptions.mean_return, assumptions.std_dev)?;
    let inflation = normal(
        "Normal inflation",
        assumptions.inflation_mean,
        assumptions.inflation_std_dev,
    )?;

    generate(Strategy::Classical, plan, treatment, rng, |path_rng| {
        let shock = returns.sample(path_rng);
        (1.0 + shock, inflation.sample(path_rng))
    })
}

/// Geometric Brownian Motion: log-normal growth factor each year, Gaussian
/// inflation as in Classical-Normal.
pub fn geometric_brownian_motion<R: Rng + ?Sized>(
    plan: &PlanParameters,
    assumptions: &ParametricAssumptions,
    treatment: ExpenseTreatment,
    rng: &mut R,
) -> Result<ScenarioMatrix> {
    plan.validate()?;
    let (mean_return, std_dev) = (assumptions.mean_return, assumptions.std_dev);
    check_moments("GBM return", mean_return, std_dev)?;
    let inflation = normal(
        "Normal inflation",
        assumptions.inflation_mean,
        assumptions.inflation_std_dev,
    )?;

    generate(Strategy::Gbm, plan, treatment, rng, |path_rng| {
        let z: f64 = StandardNormal.sample(path_rng);
        (
            gbm_growth_factor(mean_return, std_dev, z),
            inflation.sample(path_rng),
        )
    })
}
