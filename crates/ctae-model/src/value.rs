//! Tagged numeric cell values.
//!
//! Registry counts are inconsistently populated: numbers arrive as JSON
//! strings, are sometimes absent, and derived ratios can be undefined
//! (zero denominator). [`AeValue`] carries that distinction explicitly
//! instead of mixing numbers and sentinel strings in one column.

use std::fmt;

/// Label used wherever an unavailable value is rendered.
pub const NOT_AVAILABLE_LABEL: &str = "NA";

/// A numeric table cell that is either a known quantity or unavailable.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum AeValue {
    Known(f64),
    NotAvailable,
}

impl AeValue {
    /// Wrap an optional count; `None` becomes `NotAvailable`.
    pub fn from_opt(value: Option<f64>) -> Self {
        match value {
            Some(v) => Self::Known(v),
            None => Self::NotAvailable,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Self::Known(v) => Some(v),
            Self::NotAvailable => None,
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// `numerator / denominator`, unavailable when the denominator is
    /// zero or either operand is not finite.
    pub fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 || !numerator.is_finite() || !denominator.is_finite() {
            return Self::NotAvailable;
        }
        Self::Known(numerator / denominator)
    }

    /// Round a known value to the given number of decimal places.
    pub fn rounded(self, decimals: u32) -> Self {
        match self {
            Self::Known(v) => Self::Known(round_to(v, decimals)),
            Self::NotAvailable => Self::NotAvailable,
        }
    }

    /// Sum the known values in `iter`; missing cells are skipped.
    pub fn sum_known<I>(iter: I) -> f64
    where
        I: IntoIterator<Item = AeValue>,
    {
        iter.into_iter().filter_map(AeValue::value).sum()
    }

    /// Render for terminal and CSV output.
    pub fn render(self) -> String {
        match self {
            Self::Known(v) => format_numeric(v),
            Self::NotAvailable => NOT_AVAILABLE_LABEL.to_string(),
        }
    }
}

impl fmt::Display for AeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Round to `decimals` decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    // Strip unnecessary trailing zeros while keeping at least one decimal place
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_unavailable_on_zero_denominator() {
        assert_eq!(AeValue::ratio(7.0, 0.0), AeValue::NotAvailable);
        assert_eq!(AeValue::ratio(7.0, 98.0), AeValue::Known(7.0 / 98.0));
    }

    #[test]
    fn rounding_preserves_unavailable() {
        assert_eq!(AeValue::NotAvailable.rounded(3), AeValue::NotAvailable);
        assert_eq!(AeValue::Known(7.142857).rounded(3), AeValue::Known(7.143));
    }

    #[test]
    fn sums_skip_missing_cells() {
        let cells = [
            AeValue::Known(2.0),
            AeValue::NotAvailable,
            AeValue::Known(5.0),
        ];
        assert!((AeValue::sum_known(cells) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn renders_counts_without_trailing_zeros() {
        assert_eq!(AeValue::Known(7.0).render(), "7");
        assert_eq!(AeValue::Known(7.143).render(), "7.143");
        assert_eq!(AeValue::NotAvailable.render(), "NA");
    }
}
