//! Plan and market-data files read by the command line front end
//!
//! A plan file is JSON:
//!
//! ```json
//! {
//!   "plan_id": 7,
//!   "user_id": 3,
//!   "plan": {
//!     "initial_balance": 10000.0,
//!     "monthly_contribution": 500.0,
//!     "horizon_years": 20,
//!     "inflation_period": "US"
//!   },
//!   "schedule": { "start": "2025-01-01", "end": "2045-01-01" },
//!   "risk_level": "medium",
//!   "config": { "expense_treatment": "net_cash_flow" }
//! }
//! ```
//!
//! `schedule` overrides `plan.horizon_years`; `risk_level` overrides the
//! configured return volatility.

use std::fs;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use plansim_core::config::ComparisonConfig;
use plansim_core::model::{PlanId, PlanParameters, PlanSchedule, RiskLevel, UserId};
use plansim_core::provider::MarketData;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFile {
    #[serde(default)]
    pub plan_id: PlanId,
    #[serde(default)]
    pub user_id: UserId,
    pub plan: PlanParameters,
    #[serde(default)]
    pub schedule: Option<PlanSchedule>,
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
    #[serde(default)]
    pub config: ComparisonConfig,
}

impl PlanFile {
    /// Resolve `schedule` and `risk_level` into the plan and config.
    pub fn resolve(mut self) -> plansim_core::Result<Self> {
        if let Some(schedule) = self.schedule {
            self.plan.horizon_years = schedule.horizon_years()?;
        }
        if let Some(level) = self.risk_level {
            self.config.parametric = self.config.parametric.with_risk_level(level);
        }
        Ok(self)
    }
}

pub fn load_plan_file(path: &Path) -> color_eyre::Result<PlanFile> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read plan file {}", path.display()))?;
    let file: PlanFile = serde_json::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse plan file {}", path.display()))?;
    let file = file.resolve().wrap_err("Invalid plan schedule")?;
    tracing::debug!(
        plan_id = file.plan_id.0,
        horizon_years = file.plan.horizon_years,
        "Loaded plan"
    );
    Ok(file)
}

pub fn load_market_data(path: &Path) -> color_eyre::Result<MarketData> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read market data {}", path.display()))?;
    let data: MarketData = serde_json::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse market data {}", path.display()))?;
    tracing::debug!(
        symbols = data.prices.len(),
        inflation_series = data.inflation.len(),
        "Loaded market data"
    );
    Ok(data)
}
