//! Statistical reductions over scenario ensembles

use crate::model::{ErrorMetrics, ScenarioMatrix};

/// z-score of a two-sided 95% normal confidence interval
pub const Z_95: f64 = 1.96;

/// Arithmetic mean, `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by `n`)
#[must_use]
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Percentile of an ascending-sorted slice, `p` in `[0, 1]`.
///
/// Linear interpolation between the closest ranks, rank = `p * (n - 1)`.
#[must_use]
pub fn percentile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let rank = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

/// Percentile of unsorted values; see [`percentile_sorted`]
#[must_use]
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    percentile_sorted(&sorted, p)
}

/// Mean, standard deviation, standard error and 95% confidence interval of
/// the final-year balances. `None` when the matrix has no paths or no years.
#[must_use]
pub fn evaluate(scenarios: &ScenarioMatrix) -> Option<ErrorMetrics> {
    let terminal = scenarios.terminal_values();
    let mean = mean(&terminal)?;
    let std_dev = population_std_dev(&terminal)?;
    let standard_error = std_dev / (terminal.len() as f64).sqrt();
    let half_width = Z_95 * standard_error;

    Some(ErrorMetrics {
        mean,
        std_dev,
        standard_error,
        confidence_interval: (mean - half_width, mean + half_width),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> ScenarioMatrix {
        ScenarioMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_evaluate_uses_terminal_column() {
        let m = matrix(vec![
            vec![1_000.0, 2.0],
            vec![-5_000.0, 4.0],
            vec![7.0, 6.0],
            vec![0.0, 8.0],
        ]);
        let metrics = evaluate(&m).unwrap();
        assert!((metrics.mean - 5.0).abs() < 1e-12);
        // population variance of 2,4,6,8 is 5
        assert!((metrics.std_dev - 5.0_f64.sqrt()).abs() < 1e-12);
        assert!((metrics.standard_error - 5.0_f64.sqrt() / 2.0).abs() < 1e-12);
        let (lo, hi) = metrics.confidence_interval;
        assert!((hi - lo - 2.0 * 1.96 * metrics.standard_error).abs() < 1e-12);
        assert!(((lo + hi) / 2.0 - metrics.mean).abs() < 1e-12);
    }

    #[test]
    fn test_zero_spread_collapses_interval() {
        let m = matrix(vec![vec![3.0, 42.0]; 10]);
        let metrics = evaluate(&m).unwrap();
        assert_eq!(metrics.std_dev, 0.0);
        assert_eq!(metrics.standard_error, 0.0);
        assert_eq!(metrics.confidence_interval, (42.0, 42.0));
    }

    #[test]
    fn test_single_path() {
        let metrics = evaluate(&matrix(vec![vec![10.0]])).unwrap();
        assert_eq!(metrics.mean, 10.0);
        assert_eq!(metrics.standard_error, 0.0);
    }

    #[test]
    fn test_evaluate_empty() {
        assert!(evaluate(&matrix(vec![])).is_none());
        assert!(evaluate(&matrix(vec![vec![]])).is_none());
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let m = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let before = m.clone();
        let _ = evaluate(&m);
        assert_eq!(m, before);
    }

    #[test]
    fn test_percentile_interpolates() {
        let values = [4.0, 1.0, 3.0, 2.0, 5.0];
        assert_eq!(percentile(&values, 0.0), Some(1.0));
        assert_eq!(percentile(&values, 0.5), Some(3.0));
        assert_eq!(percentile(&values, 1.0), Some(5.0));
        // rank 0.4 between 1.0 and 2.0
        assert!((percentile(&values, 0.1).unwrap() - 1.4).abs() < 1e-12);
        assert!((percentile(&values, 0.9).unwrap() - 4.6).abs() < 1e-12);
        assert_eq!(percentile(&[], 0.5), None);
    }

    #[test]
    fn test_mean_and_std_dev_empty() {
        assert_eq!(mean(&[]), None);
        assert_eq!(population_std_dev(&[]), None);
    }
}
