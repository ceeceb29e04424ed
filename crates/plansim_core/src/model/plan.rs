//! Plan parameters supplied by the surrounding application
//!
//! A `PlanParameters` value is an immutable snapshot of one simulation
//! request. Monetary inputs are stored per month, the way plans are entered,
//! and converted to annual amounts for the yearly projection.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

pub const DEFAULT_SIMULATION_COUNT: usize = 500;
pub const DEFAULT_MARKET_SYMBOL: &str = "^GSPC";
const MONTHS_PER_YEAR: f64 = 12.0;
const DAYS_PER_YEAR: i32 = 365;

fn default_simulation_count() -> usize {
    DEFAULT_SIMULATION_COUNT
}

fn default_market_symbol() -> String {
    DEFAULT_MARKET_SYMBOL.to_string()
}

/// Snapshot of a simulation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanParameters {
    /// Starting balance in plan currency
    pub initial_balance: f64,
    pub monthly_contribution: f64,
    #[serde(default)]
    pub monthly_expense: f64,
    #[serde(default)]
    pub monthly_income: f64,
    /// Projection horizon in whole years
    pub horizon_years: usize,
    /// Market index whose history drives bootstrap sampling (e.g. "^GSPC")
    #[serde(default = "default_market_symbol")]
    pub market_symbol: String,
    /// Identifier of the inflation series handed to the data provider
    pub inflation_period: String,
    #[serde(default = "default_simulation_count")]
    pub simulation_count: usize,
}

impl PlanParameters {
    #[must_use]
    pub fn new(
        initial_balance: f64,
        monthly_contribution: f64,
        horizon_years: usize,
        inflation_period: impl Into<String>,
    ) -> Self {
        Self {
            initial_balance,
            monthly_contribution,
            monthly_expense: 0.0,
            monthly_income: 0.0,
            horizon_years,
            market_symbol: default_market_symbol(),
            inflation_period: inflation_period.into(),
            simulation_count: DEFAULT_SIMULATION_COUNT,
        }
    }

    #[must_use]
    pub fn with_market_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.market_symbol = symbol.into();
        self
    }

    #[must_use]
    pub fn with_simulation_count(mut self, count: usize) -> Self {
        self.simulation_count = count;
        self
    }

    #[must_use]
    pub fn with_monthly_expense(mut self, expense: f64) -> Self {
        self.monthly_expense = expense;
        self
    }

    #[must_use]
    pub fn with_monthly_income(mut self, income: f64) -> Self {
        self.monthly_income = income;
        self
    }

    #[must_use]
    pub fn annual_contribution(&self) -> f64 {
        self.monthly_contribution * MONTHS_PER_YEAR
    }

    #[must_use]
    pub fn annual_expense(&self) -> f64 {
        self.monthly_expense * MONTHS_PER_YEAR
    }

    #[must_use]
    pub fn annual_income(&self) -> f64 {
        self.monthly_income * MONTHS_PER_YEAR
    }

    /// Reject plans the engine cannot project.
    ///
    /// Runs before any random generation so bad input fails fast.
    pub fn validate(&self) -> Result<()> {
        if self.horizon_years < 1 {
            return Err(SimulationError::invalid(
                "horizon_years",
                "must be at least 1 year",
            ));
        }
        if self.simulation_count < 1 {
            return Err(SimulationError::invalid(
                "simulation_count",
                "must be at least 1",
            ));
        }
        let monetary = [
            ("initial_balance", self.initial_balance),
            ("monthly_contribution", self.monthly_contribution),
            ("monthly_expense", self.monthly_expense),
            ("monthly_income", self.monthly_income),
        ];
        for (field, value) in monetary {
            if !value.is_finite() || value < 0.0 {
                return Err(SimulationError::invalid(
                    field,
                    format!("must be a non-negative amount, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

/// Calendar span of a plan, as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSchedule {
    pub start: Date,
    pub end: Date,
}

impl PlanSchedule {
    #[must_use]
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Whole years between start and end, counting 365-day years.
    pub fn horizon_years(&self) -> Result<usize> {
        if self.start >= self.end {
            return Err(SimulationError::invalid(
                "end_date",
                format!("end {} must be after start {}", self.end, self.start),
            ));
        }
        let days = (self.end - self.start).get_days();
        Ok((days / DAYS_PER_YEAR) as usize)
    }
}

/// Coarse volatility bucket chosen on the plan form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskLevel {
    /// Annual return standard deviation associated with the bucket
    #[must_use]
    pub fn volatility(self) -> f64 {
        match self {
            RiskLevel::Low => 0.05,
            RiskLevel::Medium => 0.10,
            RiskLevel::High => 0.20,
        }
    }
}
