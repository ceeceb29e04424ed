//! Comparison configuration
//!
//! `ComparisonConfig` holds the world assumptions shared by every plan: the
//! parametric return/inflation model, the window of market history used for
//! bootstrapping, and how expenses and income enter the balance. Every field
//! has a serde default so a partial JSON document is a valid config.

use jiff::civil::{Date, date};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::model::RiskLevel;

fn default_mean_return() -> f64 {
    0.07
}

fn default_std_dev() -> f64 {
    0.15
}

fn default_inflation_mean() -> f64 {
    0.025
}

fn default_inflation_std_dev() -> f64 {
    0.01
}

/// Distribution parameters for the Classical-Normal and GBM strategies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParametricAssumptions {
    #[serde(default = "default_mean_return")]
    pub mean_return: f64,
    #[serde(default = "default_std_dev")]
    pub std_dev: f64,
    #[serde(default = "default_inflation_mean")]
    pub inflation_mean: f64,
    #[serde(default = "default_inflation_std_dev")]
    pub inflation_std_dev: f64,
}

impl Default for ParametricAssumptions {
    fn default() -> Self {
        Self {
            mean_return: default_mean_return(),
            std_dev: default_std_dev(),
            inflation_mean: default_inflation_mean(),
            inflation_std_dev: default_inflation_std_dev(),
        }
    }
}

impl ParametricAssumptions {
    /// Same assumptions with return volatility taken from a risk bucket
    #[must_use]
    pub fn with_risk_level(self, level: RiskLevel) -> Self {
        Self {
            std_dev: level.volatility(),
            ..self
        }
    }

    /// Zero-volatility returns and inflation; every path is identical.
    #[must_use]
    pub fn deterministic(mean_return: f64, inflation: f64) -> Self {
        Self {
            mean_return,
            std_dev: 0.0,
            inflation_mean: inflation,
            inflation_std_dev: 0.0,
        }
    }
}

/// Calendar window of market history fetched for bootstrapping, `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryWindow {
    pub start: Date,
    pub end: Date,
}

impl Default for HistoryWindow {
    fn default() -> Self {
        Self {
            start: date(2013, 1, 1),
            end: date(2023, 1, 1),
        }
    }
}

impl HistoryWindow {
    pub fn validate(&self) -> Result<()> {
        if self.start >= self.end {
            return Err(SimulationError::invalid(
                "history",
                format!("window start {} must precede end {}", self.start, self.end),
            ));
        }
        Ok(())
    }
}

/// How a plan's monthly expense and income affect the simulated balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseTreatment {
    /// Only the contribution is invested. Expense and income are still
    /// inflated and reported for each year.
    #[default]
    Informational,
    /// Contribution plus income minus expense is invested each year.
    NetCashFlow,
}

/// Assumptions applied when comparing strategies for a plan
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparisonConfig {
    #[serde(default)]
    pub parametric: ParametricAssumptions,
    #[serde(default)]
    pub history: HistoryWindow,
    #[serde(default)]
    pub expense_treatment: ExpenseTreatment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ComparisonConfig::default();
        assert_eq!(config.parametric.mean_return, 0.07);
        assert_eq!(config.parametric.std_dev, 0.15);
        assert_eq!(config.parametric.inflation_mean, 0.025);
        assert_eq!(config.parametric.inflation_std_dev, 0.01);
        assert_eq!(config.history.start, date(2013, 1, 1));
        assert_eq!(config.expense_treatment, ExpenseTreatment::Informational);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ComparisonConfig =
            serde_json::from_str(r#"{"parametric": {"std_dev": 0.2}}"#).unwrap();
        assert_eq!(config.parametric.std_dev, 0.2);
        assert_eq!(config.parametric.mean_return, 0.07);
        assert_eq!(config.history, HistoryWindow::default());

        let config: ComparisonConfig =
            serde_json::from_str(r#"{"expense_treatment": "net_cash_flow"}"#).unwrap();
        assert_eq!(config.expense_treatment, ExpenseTreatment::NetCashFlow);
    }

    #[test]
    fn test_risk_level_assumptions() {
        let high = ParametricAssumptions::default().with_risk_level(RiskLevel::High);
        assert_eq!(high.std_dev, 0.20);
        assert_eq!(high.mean_return, 0.07);

        let custom = ParametricAssumptions {
            mean_return: 0.04,
            ..ParametricAssumptions::default()
        }
        .with_risk_level(RiskLevel::Low);
        assert_eq!(custom.std_dev, 0.05);
        assert_eq!(custom.mean_return, 0.04);
    }

    #[test]
    fn test_history_window_validation() {
        assert!(HistoryWindow::default().validate().is_ok());
        let reversed = HistoryWindow {
            start: date(2023, 1, 1),
            end: date(2013, 1, 1),
        };
        assert!(reversed.validate().is_err());
    }
}
