//! Annual historical series consumed by the bootstrap strategy.
//!
//! Both series store one fraction per historical year. The first year of the
//! underlying level data has no prior year, so it never appears here.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Year-over-year fractional changes of a level series, first year dropped.
///
/// Every adjacent pair yields one change, so `result[i]` always belongs to
/// the year of `levels[i + 1]`. Callers validate levels beforehand.
#[must_use]
pub fn year_over_year(levels: &[f64]) -> Vec<f64> {
    levels.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// Draw one value uniformly, with replacement.
///
/// `values` must be non-empty; the bootstrap generator checks both series
/// before any path runs.
#[inline]
pub(crate) fn resample<R: Rng + ?Sized>(values: &[f64], rng: &mut R) -> f64 {
    values[rng.random_range(0..values.len())]
}

/// Annual compounded market returns, e.g. `0.12` for a 12% year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    /// Index symbol the returns were derived from
    pub symbol: String,
    /// Calendar year of `returns[0]`
    pub start_year: i16,
    pub returns: Vec<f64>,
}

impl ReturnSeries {
    #[must_use]
    pub fn new(symbol: impl Into<String>, start_year: i16, returns: Vec<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            start_year,
            returns,
        }
    }

    /// Build from year-end closing levels; `start_year` is the year of the
    /// first level, so the first return belongs to `start_year + 1`.
    #[must_use]
    pub fn from_levels(symbol: impl Into<String>, start_year: i16, levels: &[f64]) -> Self {
        Self::new(symbol, start_year + 1, year_over_year(levels))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }
}

/// Annual year-over-year inflation, e.g. `0.03` for 3%
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationSeries {
    /// Identifier of the period/index the rates came from
    pub period: String,
    pub start_year: i16,
    pub rates: Vec<f64>,
}

impl InflationSeries {
    #[must_use]
    pub fn new(period: impl Into<String>, start_year: i16, rates: Vec<f64>) -> Self {
        Self {
            period: period.into(),
            start_year,
            rates,
        }
    }

    /// Build from annual price-index levels (CPI); see [`ReturnSeries::from_levels`].
    #[must_use]
    pub fn from_levels(period: impl Into<String>, start_year: i16, levels: &[f64]) -> Self {
        Self::new(period, start_year + 1, year_over_year(levels))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
