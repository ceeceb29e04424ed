//! Command line front end for the plansim projection engine
//!
//! Loads a plan and a market-data file, runs the strategy comparison and
//! renders a JSON report for downstream charting and persistence.

pub mod input;
pub mod logging;
pub mod report;

pub use input::{PlanFile, load_market_data, load_plan_file};
pub use logging::init_logging;
pub use report::{Report, StrategyReport};
