use std::fmt;

/// Reasons the historical series provider could not supply data
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    /// No price history is known for the symbol
    UnknownSymbol(String),
    /// No annual return can be derived: no rows fall inside the requested
    /// window, or only the first (return-less) year does
    EmptyReturns(String),
    /// A price row inside the window has no closing price
    MissingPriceField {
        symbol: String,
        date: jiff::civil::Date,
    },
    /// A closing price inside the window is zero, negative or not finite
    InvalidPrice {
        symbol: String,
        date: jiff::civil::Date,
        close: f64,
    },
    /// No inflation index is known for the period
    UnknownPeriod(String),
    /// The inflation index yields no year-over-year values
    EmptyInflation(String),
    /// A price-index level is zero, negative or not finite
    InvalidIndexLevel {
        period: String,
        year: i16,
        level: f64,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::UnknownSymbol(symbol) => write!(f, "no price history for {symbol}"),
            DataError::EmptyReturns(symbol) => write!(f, "no annual returns for {symbol}"),
            DataError::MissingPriceField { symbol, date } => {
                write!(f, "closing price missing for {symbol} on {date}")
            }
            DataError::InvalidPrice {
                symbol,
                date,
                close,
            } => write!(f, "invalid closing price {close} for {symbol} on {date}"),
            DataError::UnknownPeriod(period) => {
                write!(f, "no inflation index for period {period}")
            }
            DataError::EmptyInflation(period) => {
                write!(f, "inflation series for period {period} is empty")
            }
            DataError::InvalidIndexLevel {
                period,
                year,
                level,
            } => write!(f, "invalid index level {level} for period {period} in {year}"),
        }
    }
}

impl std::error::Error for DataError {}

/// Errors raised by the simulation engine
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Plan parameters rejected before any random generation
    InvalidParameters {
        field: &'static str,
        reason: String,
    },
    /// Historical data missing, empty or malformed. Never retried here.
    DataUnavailable(DataError),
    InvalidDistributionParameters {
        distribution: &'static str,
        mean: f64,
        std_dev: f64,
        reason: &'static str,
    },
}

impl SimulationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SimulationError::InvalidParameters {
            field,
            reason: reason.into(),
        }
    }

    /// True for failures caused by the data provider rather than the plan
    #[must_use]
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, SimulationError::DataUnavailable(_))
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidParameters { field, reason } => {
                write!(f, "invalid plan parameter `{field}`: {reason}")
            }
            SimulationError::DataUnavailable(e) => write!(f, "data unavailable: {e}"),
            SimulationError::InvalidDistributionParameters {
                distribution,
                mean,
                std_dev,
                reason,
            } => {
                write!(
                    f,
                    "invalid {distribution} parameters (mean={mean}, std_dev={std_dev}): {reason}"
                )
            }
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::DataUnavailable(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DataError> for SimulationError {
    fn from(e: DataError) -> Self {
        SimulationError::DataUnavailable(e)
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
