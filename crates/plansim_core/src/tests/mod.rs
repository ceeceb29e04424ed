//! Integration tests for the plansim projection engine
//!
//! Tests are organized by topic:
//! - `scenarios` - End-to-end comparison runs with known outcomes
//! - `properties` - Invariants that hold for any seed or plan
//! - `provider` - How a comparison run uses its data provider


use crate::model::{InflationSeries, ReturnSeries};
use crate::provider::{HistoricalSeriesProvider, IndexLevel, MarketData};

/// Ten years of S&P 500 year-end closes and a matching CPI index
pub(crate) fn sample_market() -> MarketData {
    MarketData::new()
        .with_year_end_closes(
            "^GSPC",
            &[
                (2013, 1_848.36),
                (2014, 2_058.90),
                (2015, 2_043.94),
                (2016, 2_238.83),
                (2017, 2_673.61),
                (2018, 2_506.85),
                (2019, 3_230.78),
                (2020, 3_756.07),
                (2021, 4_766.18),
                (2022, 3_839.50),
            ],
        )
        .with_inflation(
            "US",
            [
                (2013, 233.0),
                (2014, 236.7),
                (2015, 237.0),
                (2016, 240.0),
                (2017, 245.1),
                (2018, 251.1),
                (2019, 255.7),
                (2020, 258.8),
                (2021, 271.0),
                (2022, 292.7),
            ]
            .into_iter()
            .map(|(year, level)| IndexLevel { year, level })
            .collect(),
        )
}

/// Provider returning fixed series regardless of the request
pub(crate) struct FixedProvider {
    pub returns: Vec<f64>,
    pub inflation: Vec<f64>,
}

impl HistoricalSeriesProvider for FixedProvider {
    fn get_annual_returns(
        &self,
        symbol: &str,
        _start: jiff::civil::Date,
        _end: jiff::civil::Date,
    ) -> crate::error::Result<ReturnSeries> {
        Ok(ReturnSeries::new(symbol, 2014, self.returns.clone()))
    }

    fn get_annual_inflation(&self, period: &str) -> crate::error::Result<InflationSeries> {
        Ok(InflationSeries::new(period, 2014, self.inflation.clone()))
    }
}
