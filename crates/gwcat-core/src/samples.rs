//! # Posterior-Sample Aggregation
//!
//! Alternate construction path for [`ParameterSet`]: instead of writing
//! medians and error bars by hand, submitters provide a rectangular table
//! of posterior samples and the summary statistics are derived here.
//!
//! Per column the 5th, 50th and 95th percentiles are computed (central 90%
//! credible region, the convention used across published catalogs):
//! `median` = q50, `upper_95` = q95 − q50, `lower_05` = q50 − q05.
//! The percentile estimator is linear interpolation between order
//! statistics, with ties broken by index order (stable sort).
//!
//! Values and error bars are then conditioned so that published numbers
//! carry uncertainty-driven significant figures: everything is rounded to
//! the decimal place implied by the smaller error bar (one extra digit when
//! that error's leading digit is 1), and `decimal_places` is set to match.
//! When both error bars are zero (e.g., a single-sample column) the median
//! is kept exact.

use crate::catalog::{Link, ParameterSet, ParameterValue};
use crate::error::SampleError;
use crate::vocabulary::unit_constraint;

/// A rectangular table of posterior samples: named columns of equal length.
///
/// Column order is preserved and becomes the parameter order of the
/// resulting [`ParameterSet`]. Column names become `parameter_name`
/// verbatim; no renaming is performed, so columns should already follow
/// the vocabulary naming convention.
#[derive(Debug, Clone, Default)]
pub struct SampleTable {
    columns: Vec<(String, Vec<f64>)>,
}

impl SampleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. Rectangularity is checked at aggregation time.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.columns.push((name.into(), values));
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over `(column_name, samples)` pairs in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    fn check_rectangular(&self) -> Result<(), SampleError> {
        if self.columns.is_empty() {
            return Err(SampleError::EmptyTable);
        }
        let expected = self.columns[0].1.len();
        for (name, values) in &self.columns {
            if values.is_empty() {
                return Err(SampleError::EmptyColumn { column: name.clone() });
            }
            if values.len() != expected {
                return Err(SampleError::RaggedColumn {
                    column: name.clone(),
                    expected,
                    actual: values.len(),
                });
            }
        }
        Ok(())
    }
}

impl ParameterValue {
    /// Summarize one column of posterior samples into a parameter value.
    ///
    /// The unit is auto-filled from the fixed-unit constraint table when the
    /// parameter carries one; otherwise it is left dimensionless.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError`] if the column is empty or contains NaN or
    /// infinite values.
    pub fn from_samples(parameter_name: &str, samples: &[f64]) -> Result<Self, SampleError> {
        if samples.is_empty() {
            return Err(SampleError::EmptyColumn { column: parameter_name.to_string() });
        }
        if let Some(row) = samples.iter().position(|v| !v.is_finite()) {
            return Err(SampleError::NonFinite { column: parameter_name.to_string(), row });
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        let q05 = quantile(&sorted, 0.05);
        let q50 = quantile(&sorted, 0.50);
        let q95 = quantile(&sorted, 0.95);
        let conditioned = condition_value_and_error(q50, q50 - q05, q95 - q50);

        Ok(ParameterValue {
            parameter_name: parameter_name.to_string(),
            median: conditioned.median,
            upper_95: Some(conditioned.upper),
            lower_05: Some(conditioned.lower),
            is_upper_bound: false,
            is_lower_bound: false,
            decimal_places: conditioned.decimal_places,
            unit: unit_constraint(parameter_name).map(|allowed| allowed[0].to_string()),
        })
    }
}

impl ParameterSet {
    /// Build a parameter set by summarizing a table of posterior samples.
    ///
    /// One [`ParameterValue`] is produced per column, in column order.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError`] if the table is empty, ragged, or contains
    /// non-finite values.
    pub fn from_samples(
        samples: &SampleTable,
        pe_set_name: impl Into<String>,
        waveform_family: impl Into<String>,
        data_url: Option<String>,
        is_preferred: bool,
        links: Vec<Link>,
    ) -> Result<Self, SampleError> {
        samples.check_rectangular()?;
        let parameters = samples
            .columns()
            .map(|(name, values)| ParameterValue::from_samples(name, values))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParameterSet {
            pe_set_name: pe_set_name.into(),
            waveform_family: waveform_family.into(),
            data_url,
            is_preferred,
            parameters,
            links,
        })
    }
}

/// Linear-interpolation quantile over an ascending-sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

struct Conditioned {
    median: f64,
    lower: f64,
    upper: f64,
    decimal_places: i32,
}

/// Round a value, its error bars, and the display precision to the number
/// of decimal places implied by the smaller error bar.
fn condition_value_and_error(value: f64, lower: f64, upper: f64) -> Conditioned {
    let lower = lower.abs();
    let upper = upper.abs();
    let min_error = lower.min(upper);

    if min_error == 0.0 {
        // Zero uncertainty: keep the value exact, derive a display precision
        // from the value's own magnitude.
        let decimal_places = if value == 0.0 { 0 } else { first_decimal_place(value) + 1 };
        return Conditioned {
            median: value,
            lower,
            upper,
            decimal_places: decimal_places.max(0),
        };
    }

    let mut dp = first_decimal_place(min_error);
    if leading_digit_is_one(min_error) {
        dp += 1;
    }
    Conditioned {
        median: round_to(value, dp),
        lower: round_to(lower, dp),
        upper: round_to(upper, dp),
        decimal_places: dp.max(0),
    }
}

/// Decimal place of the leading significant digit: 0.034 → 2, 1.2 → 0,
/// 200 → −2.
fn first_decimal_place(value: f64) -> i32 {
    (-value.abs().log10()).ceil() as i32
}

fn leading_digit_is_one(value: f64) -> bool {
    format!("{value:e}").starts_with('1')
}

fn round_to(value: f64, decimal_places: i32) -> f64 {
    let factor = 10f64.powi(decimal_places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_median_odd() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile(&sorted, 0.5), 3.0);
    }

    #[test]
    fn test_quantile_interpolates() {
        let sorted = [0.0, 1.0];
        assert_eq!(quantile(&sorted, 0.5), 0.5);
        assert!((quantile(&sorted, 0.95) - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample_median_exact_and_zero_widths() {
        let pv = ParameterValue::from_samples("chi_eff", &[0.137]).unwrap();
        assert_eq!(pv.median, 0.137);
        assert_eq!(pv.upper_95, Some(0.0));
        assert_eq!(pv.lower_05, Some(0.0));
    }

    #[test]
    fn test_empty_column_rejected() {
        assert!(matches!(
            ParameterValue::from_samples("chi_eff", &[]),
            Err(SampleError::EmptyColumn { .. })
        ));
    }

    #[test]
    fn test_non_finite_samples_rejected() {
        let err = ParameterValue::from_samples("chi_eff", &[0.1, f64::NAN, 0.3]).unwrap_err();
        assert!(matches!(err, SampleError::NonFinite { row: 1, .. }));
        assert!(matches!(
            ParameterValue::from_samples("chi_eff", &[f64::INFINITY]),
            Err(SampleError::NonFinite { row: 0, .. })
        ));
    }

    #[test]
    fn test_unit_autofill_from_constraint_table() {
        let pv = ParameterValue::from_samples("mass_1_source", &[10.0, 10.1, 9.9]).unwrap();
        assert_eq!(pv.unit.as_deref(), Some("Msun"));
        let pv = ParameterValue::from_samples("luminosity_distance", &[440.0, 450.0]).unwrap();
        assert_eq!(pv.unit.as_deref(), Some("Mpc"));
        let pv = ParameterValue::from_samples("chi_eff", &[0.1, 0.2]).unwrap();
        assert_eq!(pv.unit, None);
    }

    #[test]
    fn test_from_samples_preserves_column_order() {
        let mut table = SampleTable::new();
        table.push_column("mass_1_source", vec![10.0, 11.0, 12.0]);
        table.push_column("mass_2_source", vec![8.0, 9.0, 10.0]);
        table.push_column("chi_eff", vec![0.0, 0.1, 0.2]);
        let ps = ParameterSet::from_samples(&table, "combined", "IMRPhenomXPHM", None, true, vec![])
            .unwrap();
        let names: Vec<&str> = ps.parameters.iter().map(|p| p.parameter_name.as_str()).collect();
        assert_eq!(names, ["mass_1_source", "mass_2_source", "chi_eff"]);
        assert!(ps.is_preferred);
    }

    #[test]
    fn test_empty_table_rejected() {
        let table = SampleTable::new();
        assert!(matches!(
            ParameterSet::from_samples(&table, "x", "y", None, false, vec![]),
            Err(SampleError::EmptyTable)
        ));
    }

    #[test]
    fn test_ragged_table_rejected() {
        let mut table = SampleTable::new();
        table.push_column("mass_1_source", vec![10.0, 11.0]);
        table.push_column("mass_2_source", vec![8.0]);
        let err = ParameterSet::from_samples(&table, "x", "y", None, false, vec![]).unwrap_err();
        assert!(matches!(
            err,
            SampleError::RaggedColumn { expected: 2, actual: 1, .. }
        ));
    }

    // ---- conditioning ----

    #[test]
    fn test_first_decimal_place() {
        assert_eq!(first_decimal_place(0.034), 2);
        assert_eq!(first_decimal_place(1.2), 0);
        assert_eq!(first_decimal_place(200.0), -2);
    }

    #[test]
    fn test_conditioning_rounds_to_error_precision() {
        let c = condition_value_and_error(3.34321, 0.0223, 0.0348);
        assert_eq!(c.decimal_places, 2);
        assert_eq!(c.median, 3.34);
        assert_eq!(c.lower, 0.02);
        assert_eq!(c.upper, 0.03);
    }

    #[test]
    fn test_conditioning_extra_digit_when_error_leads_with_one() {
        let c = condition_value_and_error(3.34321, 0.0123, 0.0347);
        assert_eq!(c.decimal_places, 3);
        assert_eq!(c.median, 3.343);
        assert_eq!(c.lower, 0.012);
        assert_eq!(c.upper, 0.035);
    }

    #[test]
    fn test_conditioning_large_error_clamps_display_precision() {
        // Error of ~200 rounds to the hundreds place; decimal_places
        // cannot go negative.
        let c = condition_value_and_error(1234.5, 200.0, 300.0);
        assert_eq!(c.decimal_places, 0);
        assert_eq!(c.median, 1200.0);
        assert_eq!(c.lower, 200.0);
        assert_eq!(c.upper, 300.0);
    }

    #[test]
    fn test_conditioning_zero_error_keeps_value_exact() {
        let c = condition_value_and_error(1.234567, 0.0, 0.0);
        assert_eq!(c.median, 1.234567);
        assert_eq!(c.lower, 0.0);
        assert_eq!(c.upper, 0.0);
        assert_eq!(c.decimal_places, 1);
    }
}
