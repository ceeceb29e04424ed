//! Yearly cash-flow compounding shared by every scenario strategy.
//!
//! For projection year `t` the invested amount is inflated by the cumulative
//! factor of all years before `t` (year 0 is today's money), added to the
//! balance, and the sum is grown by that year's return:
//!
//! ```text
//! factor(0)   = 1
//! factor(t+1) = factor(t) * (1 + inflation_t)
//! balance'    = (balance + invested * factor(t)) * (1 + shock_t)
//! ```
//!
//! Strategies only differ in how `shock_t` and `inflation_t` are drawn.

use serde::{Deserialize, Serialize};

use crate::config::ExpenseTreatment;
use crate::model::PlanParameters;

/// Annual (un-inflated) cash flows of a plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlows {
    pub annual_contribution: f64,
    pub annual_expense: f64,
    pub annual_income: f64,
    pub treatment: ExpenseTreatment,
}

impl CashFlows {
    #[must_use]
    pub fn from_plan(plan: &PlanParameters, treatment: ExpenseTreatment) -> Self {
        Self {
            annual_contribution: plan.annual_contribution(),
            annual_expense: plan.annual_expense(),
            annual_income: plan.annual_income(),
            treatment,
        }
    }

    /// Contribution only, nothing else tracked
    #[must_use]
    pub fn contribution_only(annual_contribution: f64) -> Self {
        Self {
            annual_contribution,
            annual_expense: 0.0,
            annual_income: 0.0,
            treatment: ExpenseTreatment::Informational,
        }
    }

    /// Amount added to the balance before inflation adjustment
    #[inline]
    #[must_use]
    pub fn invested(&self) -> f64 {
        match self.treatment {
            ExpenseTreatment::Informational => self.annual_contribution,
            ExpenseTreatment::NetCashFlow => {
                self.annual_contribution + self.annual_income - self.annual_expense
            }
        }
    }
}

/// Inflation-adjusted flows of one projection year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearCashFlow {
    pub contribution: f64,
    pub expense: f64,
    pub income: f64,
    /// Amount actually added to the balance
    pub invested: f64,
}

/// Result of applying one year to a path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearStep {
    pub year: usize,
    pub flows: YearCashFlow,
    pub balance: f64,
}

/// Running state of one simulated path
#[derive(Debug, Clone)]
pub struct Compounder {
    flows: CashFlows,
    balance: f64,
    inflation_factor: f64,
    year: usize,
}

impl Compounder {
    #[must_use]
    pub fn new(initial_balance: f64, flows: CashFlows) -> Self {
        Self {
            flows,
            balance: initial_balance,
            inflation_factor: 1.0,
            year: 0,
        }
    }

    #[must_use]
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Cumulative inflation factor that applies to the next year's flows
    #[must_use]
    pub fn inflation_factor(&self) -> f64 {
        self.inflation_factor
    }

    /// Index of the next year to be applied
    #[must_use]
    pub fn year(&self) -> usize {
        self.year
    }

    /// Inflation-adjusted flows for the next year, without advancing
    #[must_use]
    pub fn current_flows(&self) -> YearCashFlow {
        let factor = self.inflation_factor;
        YearCashFlow {
            contribution: self.flows.annual_contribution * factor,
            expense: self.flows.annual_expense * factor,
            income: self.flows.annual_income * factor,
            invested: self.flows.invested() * factor,
        }
    }

    /// Apply one year with a fractional return `shock`.
    pub fn step(&mut self, shock: f64, inflation: f64) -> YearStep {
        self.step_with_growth(1.0 + shock, inflation)
    }

    /// Apply one year with an explicit multiplicative growth factor.
    ///
    /// Used by GBM, where the factor is `exp(..)` and must stay positive
    /// even when `exp(..) - 1` would round to `-1`.
    pub fn step_with_growth(&mut self, growth: f64, inflation: f64) -> YearStep {
        let flows = self.current_flows();
        self.balance = (self.balance + flows.invested) * growth;
        self.inflation_factor *= 1.0 + inflation;
        let step = YearStep {
            year: self.year,
            flows,
            balance: self.balance,
        };
        self.year += 1;
        step
    }
}

/// Run `years` steps and collect the end-of-year balances.
///
/// `draw` returns `(growth_factor, inflation)` for each year index.
pub fn compound_path<F>(
    initial_balance: f64,
    flows: CashFlows,
    years: usize,
    mut draw: F,
) -> Vec<f64>
where
    F: FnMut(usize) -> (f64, f64),
{
    let mut compounder = Compounder::new(initial_balance, flows);
    (0..years)
        .map(|year| {
            let (growth, inflation) = draw(year);
            compounder.step_with_growth(growth, inflation).balance
        })
        .collect()
}
