//! Historical series provider
//!
//! The engine does not fetch market data. A `HistoricalSeriesProvider`
//! supplies annual return and inflation series; a comparison run calls each
//! method once and propagates any failure without retrying.
//!
//! `MarketData` is an in-memory provider built from raw price rows and
//! annual price-index levels, e.g. loaded from a JSON file.

use jiff::civil::Date;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};
use crate::model::{InflationSeries, ReturnSeries};

/// Source of historical market returns and inflation
pub trait HistoricalSeriesProvider {
    /// Annual compounded returns of `symbol` for prices dated in `[start, end)`.
    fn get_annual_returns(&self, symbol: &str, start: Date, end: Date) -> Result<ReturnSeries>;

    /// Annual year-over-year inflation for the named period/series.
    fn get_annual_inflation(&self, period: &str) -> Result<InflationSeries>;
}

/// One raw price observation. `close` is optional because upstream feeds
/// may omit the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: Date,
    #[serde(default)]
    pub close: Option<f64>,
}

impl PricePoint {
    #[must_use]
    pub fn new(date: Date, close: f64) -> Self {
        Self {
            date,
            close: Some(close),
        }
    }
}

/// Price-index level (e.g. CPI) for a calendar year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexLevel {
    pub year: i16,
    pub level: f64,
}

/// Derive annual returns from raw prices.
///
/// Rows outside `[start, end)` are ignored. Every row inside must carry a
/// positive, finite close. The last close of each calendar year is that
/// year's level; the first year only serves as the base.
pub fn annual_returns_from_prices(
    symbol: &str,
    prices: &[PricePoint],
    start: Date,
    end: Date,
) -> Result<ReturnSeries> {
    let mut rows: Vec<&PricePoint> = prices
        .iter()
        .filter(|p| p.date >= start && p.date < end)
        .collect();
    rows.sort_by_key(|p| p.date);

    let mut year_end: Vec<(i16, f64)> = Vec::new();
    for row in rows {
        let Some(close) = row.close else {
            return Err(DataError::MissingPriceField {
                symbol: symbol.to_string(),
                date: row.date,
            }
            .into());
        };
        if !close.is_finite() || close <= 0.0 {
            return Err(DataError::InvalidPrice {
                symbol: symbol.to_string(),
                date: row.date,
                close,
            }
            .into());
        }
        match year_end.last_mut() {
            Some((year, level)) if *year == row.date.year() => *level = close,
            _ => year_end.push((row.date.year(), close)),
        }
    }

    let Some(&(first_year, _)) = year_end.first() else {
        return Err(DataError::EmptyReturns(symbol.to_string()).into());
    };
    let levels: Vec<f64> = year_end.iter().map(|(_, level)| *level).collect();
    let series = ReturnSeries::from_levels(symbol, first_year, &levels);
    if series.is_empty() {
        return Err(DataError::EmptyReturns(symbol.to_string()).into());
    }
    Ok(series)
}

/// Derive year-over-year inflation from annual index levels.
///
/// Every level must be positive and finite.
pub fn annual_inflation_from_levels(
    period: &str,
    levels: &[IndexLevel],
) -> Result<InflationSeries> {
    let mut sorted = levels.to_vec();
    sorted.sort_by_key(|l| l.year);
    if let Some(bad) = sorted
        .iter()
        .find(|l| !l.level.is_finite() || l.level <= 0.0)
    {
        return Err(DataError::InvalidIndexLevel {
            period: period.to_string(),
            year: bad.year,
            level: bad.level,
        }
        .into());
    }

    let Some(first) = sorted.first() else {
        return Err(DataError::EmptyInflation(period.to_string()).into());
    };
    let values: Vec<f64> = sorted.iter().map(|l| l.level).collect();
    let series = InflationSeries::from_levels(period, first.year, &values);
    if series.is_empty() {
        return Err(DataError::EmptyInflation(period.to_string()).into());
    }
    Ok(series)
}

/// In-memory market history keyed by index symbol and inflation period
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub prices: FxHashMap<String, Vec<PricePoint>>,
    #[serde(default)]
    pub inflation: FxHashMap<String, Vec<IndexLevel>>,
}

impl MarketData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_prices(mut self, symbol: impl Into<String>, prices: Vec<PricePoint>) -> Self {
        self.prices.insert(symbol.into(), prices);
        self
    }

    #[must_use]
    pub fn with_inflation(mut self, period: impl Into<String>, levels: Vec<IndexLevel>) -> Self {
        self.inflation.insert(period.into(), levels);
        self
    }

    /// Convenience: one closing price per year, dated December 31st
    #[must_use]
    pub fn with_year_end_closes(self, symbol: impl Into<String>, closes: &[(i16, f64)]) -> Self {
        let prices = closes
            .iter()
            .map(|&(year, close)| PricePoint::new(Date::constant(year, 12, 31), close))
            .collect();
        self.with_prices(symbol, prices)
    }
}

impl HistoricalSeriesProvider for MarketData {
    fn get_annual_returns(&self, symbol: &str, start: Date, end: Date) -> Result<ReturnSeries> {
        let prices = self
            .prices
            .get(symbol)
            .ok_or_else(|| DataError::UnknownSymbol(symbol.to_string()))?;
        annual_returns_from_prices(symbol, prices, start, end)
    }

    fn get_annual_inflation(&self, period: &str) -> Result<InflationSeries> {
        let levels = self
            .inflation
            .get(period)
            .ok_or_else(|| DataError::UnknownPeriod(period.to_string()))?;
        annual_inflation_from_levels(period, levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;
    use jiff::civil::date;

    fn gspc() -> Vec<PricePoint> {
        vec![
            PricePoint::new(date(2013, 6, 30), 1_600.0),
            PricePoint::new(date(2013, 12, 31), 1_800.0),
            PricePoint::new(date(2014, 12, 31), 2_070.0),
            PricePoint::new(date(2015, 3, 31), 2_100.0),
            PricePoint::new(date(2015, 12, 31), 2_049.3),
            PricePoint::new(date(2023, 12, 29), 4_770.0),
        ]
    }

    #[test]
    fn test_returns_use_year_end_closes() {
        let series =
            annual_returns_from_prices("^GSPC", &gspc(), date(2013, 1, 1), date(2023, 1, 1))
                .unwrap();
        assert_eq!(series.start_year, 2014);
        assert_eq!(series.len(), 2);
        assert!((series.returns[0] - 0.15).abs() < 1e-12);
        assert!((series.returns[1] - (2_049.3 / 2_070.0 - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_returns_ignore_unsorted_input() {
        let mut prices = gspc();
        prices.reverse();
        let series =
            annual_returns_from_prices("^GSPC", &prices, date(2013, 1, 1), date(2023, 1, 1))
                .unwrap();
        assert!((series.returns[0] - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_returns_missing_close() {
        let mut prices = gspc();
        prices[2].close = None;
        let err = annual_returns_from_prices("^GSPC", &prices, date(2013, 1, 1), date(2023, 1, 1))
            .unwrap_err();
        assert_eq!(
            err,
            SimulationError::DataUnavailable(DataError::MissingPriceField {
                symbol: "^GSPC".into(),
                date: date(2014, 12, 31),
            })
        );
    }

    #[test]
    fn test_returns_reject_non_positive_close() {
        let prices: Vec<PricePoint> = [(2019, 100.0), (2020, 0.0), (2021, 50.0), (2022, 55.0)]
            .into_iter()
            .map(|(year, close)| PricePoint::new(date(year, 12, 31), close))
            .collect();
        let err = annual_returns_from_prices("^GSPC", &prices, date(2013, 1, 1), date(2023, 1, 1))
            .unwrap_err();
        assert_eq!(
            err,
            SimulationError::DataUnavailable(DataError::InvalidPrice {
                symbol: "^GSPC".into(),
                date: date(2020, 12, 31),
                close: 0.0,
            })
        );

        let mut prices = gspc();
        prices[1].close = Some(-1.0);
        assert!(matches!(
            annual_returns_from_prices("^GSPC", &prices, date(2013, 1, 1), date(2023, 1, 1)),
            Err(SimulationError::DataUnavailable(DataError::InvalidPrice { .. }))
        ));

        let mut prices = gspc();
        prices[4].close = Some(f64::INFINITY);
        assert!(
            annual_returns_from_prices("^GSPC", &prices, date(2013, 1, 1), date(2023, 1, 1))
                .unwrap_err()
                .is_data_unavailable()
        );
    }

    #[test]
    fn test_returns_ignore_bad_rows_outside_window() {
        let mut prices = gspc();
        // 2023-12-29 falls after the window end
        prices[5].close = Some(0.0);
        assert!(
            annual_returns_from_prices("^GSPC", &prices, date(2013, 1, 1), date(2023, 1, 1))
                .is_ok()
        );
    }

    #[test]
    fn test_returns_empty_window() {
        let err = annual_returns_from_prices("^GSPC", &gspc(), date(1990, 1, 1), date(2000, 1, 1))
            .unwrap_err();
        assert_eq!(
            err,
            SimulationError::DataUnavailable(DataError::EmptyReturns("^GSPC".into()))
        );

        // a single year has no return
        let err = annual_returns_from_prices("^GSPC", &gspc(), date(2013, 1, 1), date(2014, 1, 1))
            .unwrap_err();
        assert!(err.is_data_unavailable());
    }

    #[test]
    fn test_inflation_from_levels() {
        let levels = vec![
            IndexLevel {
                year: 2021,
                level: 105.0,
            },
            IndexLevel {
                year: 2020,
                level: 100.0,
            },
        ];
        let series = annual_inflation_from_levels("RO", &levels).unwrap();
        assert_eq!(series.start_year, 2021);
        assert!((series.rates[0] - 0.05).abs() < 1e-12);

        assert!(annual_inflation_from_levels("RO", &levels[..1]).is_err());
        assert!(annual_inflation_from_levels("RO", &[]).is_err());
    }

    #[test]
    fn test_inflation_rejects_invalid_level() {
        let levels: Vec<IndexLevel> = [(2019, 100.0), (2020, f64::NAN), (2021, 103.0), (2022, 110.0)]
            .into_iter()
            .map(|(year, level)| IndexLevel { year, level })
            .collect();
        let err = annual_inflation_from_levels("US", &levels).unwrap_err();
        match err {
            SimulationError::DataUnavailable(DataError::InvalidIndexLevel {
                period,
                year,
                level,
            }) => {
                assert_eq!(period, "US");
                assert_eq!(year, 2020);
                assert!(level.is_nan());
            }
            other => panic!("unexpected error: {other}"),
        }

        let zero = [
            IndexLevel {
                year: 2020,
                level: 100.0,
            },
            IndexLevel {
                year: 2021,
                level: 0.0,
            },
        ];
        assert_eq!(
            annual_inflation_from_levels("US", &zero),
            Err(SimulationError::DataUnavailable(
                DataError::InvalidIndexLevel {
                    period: "US".into(),
                    year: 2021,
                    level: 0.0,
                }
            ))
        );
    }

    #[test]
    fn test_market_data_provider() {
        let data = MarketData::new()
            .with_year_end_closes("^FTSE", &[(2015, 6_242.0), (2016, 7_142.0)])
            .with_inflation(
                "UK",
                vec![
                    IndexLevel {
                        year: 2015,
                        level: 100.0,
                    },
                    IndexLevel {
                        year: 2016,
                        level: 101.0,
                    },
                ],
            );

        let returns = data
            .get_annual_returns("^FTSE", date(2015, 1, 1), date(2017, 1, 1))
            .unwrap();
        assert_eq!(returns.len(), 1);
        assert!(data.get_annual_inflation("UK").is_ok());

        assert_eq!(
            data.get_annual_returns("^XYZ", date(2015, 1, 1), date(2017, 1, 1)),
            Err(SimulationError::DataUnavailable(DataError::UnknownSymbol(
                "^XYZ".into()
            )))
        );
        assert_eq!(
            data.get_annual_inflation("FR"),
            Err(SimulationError::DataUnavailable(DataError::UnknownPeriod(
                "FR".into()
            )))
        );
    }

    #[test]
    fn test_market_data_from_json() {
        let json = r#"{
            "prices": {
                "^GSPC": [
                    {"date": "2020-12-31", "close": 3756.07},
                    {"date": "2021-12-31", "close": 4766.18}
                ]
            },
            "inflation": {
                "US": [{"year": 2020, "level": 258.8}, {"year": 2021, "level": 270.97}]
            }
        }"#;
        let data: MarketData = serde_json::from_str(json).unwrap();
        let returns = data
            .get_annual_returns("^GSPC", date(2020, 1, 1), date(2022, 1, 1))
            .unwrap();
        assert!((returns.returns[0] - (4766.18 / 3756.07 - 1.0)).abs() < 1e-12);
        let inflation = data.get_annual_inflation("US").unwrap();
        assert_eq!(inflation.len(), 1);
    }
}
