//! Presentation prep: reduce an ensemble to chartable series and scalars.
//!
//! Pure arithmetic over a finished `ScenarioMatrix`; rendering belongs to the
//! charting collaborator.

use crate::model::{PresentationSummary, ScenarioMatrix, YearlyStatistics};
use crate::statistics::{mean, percentile_sorted};

pub const LOWER_BAND: f64 = 0.10;
pub const UPPER_BAND: f64 = 0.90;

/// Per-year mean, 10th and 90th percentile, and the contribution baseline.
///
/// `cumulative_contributions[t]` is `initial_balance + (t + 1) * annual_contribution`.
#[must_use]
pub fn yearly_statistics(
    scenarios: &ScenarioMatrix,
    annual_contribution: f64,
    initial_balance: f64,
) -> YearlyStatistics {
    let years = scenarios.years();
    let mut stats = YearlyStatistics {
        mean: Vec::with_capacity(years),
        p10: Vec::with_capacity(years),
        p90: Vec::with_capacity(years),
        cumulative_contributions: Vec::with_capacity(years),
    };

    for year in 0..years {
        let Some(mut column) = scenarios.column(year) else {
            break;
        };
        column.sort_by(f64::total_cmp);
        stats.mean.push(mean(&column).unwrap_or(0.0));
        stats
            .p10
            .push(percentile_sorted(&column, LOWER_BAND).unwrap_or(0.0));
        stats
            .p90
            .push(percentile_sorted(&column, UPPER_BAND).unwrap_or(0.0));
        stats
            .cumulative_contributions
            .push(initial_balance + (year + 1) as f64 * annual_contribution);
    }

    stats
}

/// Total contributions, CAGR and profit for a final mean value.
///
/// CAGR is 0 when nothing was contributed or the horizon is empty rather than
/// an error; that boundary is expected for zero-contribution plans.
#[must_use]
pub fn growth_figures(
    final_mean: f64,
    annual_contribution: f64,
    initial_balance: f64,
    horizon_years: usize,
) -> (f64, f64, f64) {
    let total_contributions = initial_balance + horizon_years as f64 * annual_contribution;
    let cagr = if total_contributions > 0.0 && horizon_years > 0 {
        (final_mean / total_contributions).powf(1.0 / horizon_years as f64) - 1.0
    } else {
        0.0
    };
    (total_contributions, cagr, final_mean - total_contributions)
}

/// Yearly bands plus final mean, total contributions, CAGR and estimated profit.
#[must_use]
pub fn summarize_for_presentation(
    scenarios: &ScenarioMatrix,
    annual_contribution: f64,
    initial_balance: f64,
) -> PresentationSummary {
    let yearly = yearly_statistics(scenarios, annual_contribution, initial_balance);
    let final_mean = yearly.mean.last().copied().unwrap_or(initial_balance);
    let (total_contributions, cagr, estimated_profit) = growth_figures(
        final_mean,
        annual_contribution,
        initial_balance,
        scenarios.years(),
    );

    PresentationSummary {
        yearly,
        final_mean,
        total_contributions,
        cagr,
        estimated_profit,
    }
}
