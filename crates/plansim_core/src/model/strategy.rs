use std::fmt;

use serde::{Deserialize, Serialize};

/// Scenario generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Resample historical market returns and inflation with replacement
    Bootstrap,
    /// Gaussian returns and inflation
    Classical,
    /// Geometric Brownian Motion (log-normal growth factor)
    #[serde(rename = "GBM")]
    Gbm,
}

impl Strategy {
    /// Fixed evaluation order; earlier strategies win ties
    pub const ALL: [Strategy; 3] = [Strategy::Bootstrap, Strategy::Classical, Strategy::Gbm];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bootstrap => "Bootstrap",
            Strategy::Classical => "Classical",
            Strategy::Gbm => "GBM",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
