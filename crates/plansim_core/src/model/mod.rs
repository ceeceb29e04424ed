mod ids;
mod indices;
mod matrix;
mod plan;
mod results;
mod series;
mod strategy;

pub use ids::{PlanId, UserId};
pub use indices::{MARKET_INDICES, MarketIndex, find_index, index_label};
pub use matrix::ScenarioMatrix;
pub use plan::{
    DEFAULT_MARKET_SYMBOL, DEFAULT_SIMULATION_COUNT, PlanParameters, PlanSchedule, RiskLevel,
};
pub use results::{
    Comparison, ErrorMetrics, PresentationSummary, SimulationRecord, StrategyResult,
    YearlyStatistics,
};
pub(crate) use series::resample;
pub use series::{InflationSeries, ReturnSeries, year_over_year};
pub use strategy::Strategy;
