use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Simulated balances, one row per path and one column per projection year.
///
/// Stored row-major in a single buffer. The matrix is built once by a
/// generator and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMatrix {
    paths: usize,
    years: usize,
    balances: Vec<f64>,
}

impl ScenarioMatrix {
    /// Assemble a matrix from per-path trajectories of equal length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let paths = rows.len();
        let years = rows.first().map_or(0, Vec::len);
        let mut balances = Vec::with_capacity(paths * years);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != years {
                return Err(SimulationError::invalid(
                    "scenario_rows",
                    format!("path {i} has {} years, expected {years}", row.len()),
                ));
            }
            balances.extend(row);
        }
        Ok(Self {
            paths,
            years,
            balances,
        })
    }

    /// Number of simulated paths (rows)
    #[must_use]
    pub fn paths(&self) -> usize {
        self.paths
    }

    /// Number of projection years (columns)
    #[must_use]
    pub fn years(&self) -> usize {
        self.years
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on 0, and a zero-year matrix has no data anyway
        self.balances.chunks_exact(self.years.max(1))
    }

    /// All path balances for one projection year
    #[must_use]
    pub fn column(&self, year: usize) -> Option<Vec<f64>> {
        if year >= self.years {
            return None;
        }
        Some(self.rows().map(|row| row[year]).collect())
    }

    /// Balances in the final projection year
    #[must_use]
    pub fn terminal_values(&self) -> Vec<f64> {
        match self.years {
            0 => Vec::new(),
            n => self.rows().map(|row| row[n - 1]).collect(),
        }
    }
}
