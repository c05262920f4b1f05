use std::fmt;
use std::str::FromStr;

use crate::error::RecordError;

const EXPONENT_LOW: f64 = 1e-4;
const EXPONENT_HIGH: f64 = 1e16;

/// Numeric grade that keeps the form it was written in.
///
/// Whole-number grades print without a decimal point (`85`), while decimal
/// grades always carry one (`85.0`, `72.5`). Both take part in arithmetic
/// through [`Grade::value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Grade {
    Integer(i64),
    Decimal(f64),
}

impl Grade {
    /// Grade as a float for averaging.
    pub fn value(&self) -> f64 {
        match *self {
            Grade::Integer(v) => v as f64,
            Grade::Decimal(v) => v,
        }
    }
}

impl From<i64> for Grade {
    fn from(value: i64) -> Self {
        Grade::Integer(value)
    }
}

impl From<i32> for Grade {
    fn from(value: i32) -> Self {
        Grade::Integer(i64::from(value))
    }
}

impl From<u32> for Grade {
    fn from(value: u32) -> Self {
        Grade::Integer(i64::from(value))
    }
}

/// Unchecked: NaN and infinities pass through. Text input goes through
/// [`FromStr`], which rejects them.
impl From<f64> for Grade {
    fn from(value: f64) -> Self {
        Grade::Decimal(value)
    }
}

impl FromStr for Grade {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(v) = trimmed.parse::<i64>() {
            return Ok(Grade::Integer(v));
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Grade::Decimal(v)),
            _ => Err(RecordError::InvalidGrade {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Grade::Integer(v) => write!(f, "{}", v),
            Grade::Decimal(v) => write_decimal(f, v),
        }
    }
}

/// Write a float the way grade reports expect: integral values keep a
/// trailing `.0`, and magnitudes of at least 1e16 or below 1e-4 switch to
/// exponent form with a signed two-digit exponent (`1e+16`, `1.5e-05`).
pub(crate) fn write_decimal(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(EXPONENT_LOW..EXPONENT_HIGH).contains(&magnitude) {
        let sci = format!("{:e}", value);
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        return write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs());
    }
    if value.fract() == 0.0 {
        write!(f, "{:.1}", value)
    } else {
        write!(f, "{}", value)
    }
}

/// Adapter that renders an average with [`write_decimal`].
pub(crate) struct DecimalDisplay(pub f64);

impl fmt::Display for DecimalDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_decimal(f, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn integer_grades_print_without_decimal_point() {
        assert_eq!(Grade::from(85).to_string(), "85");
        assert_eq!(Grade::Integer(-3).to_string(), "-3");
    }

    #[test]
    fn decimal_grades_keep_fraction_marker() {
        assert_eq!(Grade::from(85.0).to_string(), "85.0");
        assert_eq!(Grade::from(72.5).to_string(), "72.5");
        assert_eq!(DecimalDisplay(80.0).to_string(), "80.0");
        assert_eq!(DecimalDisplay(76.66666666666667).to_string(), "76.66666666666667");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(DecimalDisplay(1e16).to_string(), "1e+16");
        assert_eq!(DecimalDisplay(1.2345e20).to_string(), "1.2345e+20");
        assert_eq!(DecimalDisplay(0.00001).to_string(), "1e-05");
        assert_eq!(DecimalDisplay(-1.5e-7).to_string(), "-1.5e-07");
        assert_eq!(DecimalDisplay(0.0001).to_string(), "0.0001");
        assert_eq!(DecimalDisplay(9.5e15).to_string(), "9500000000000000.0");
        assert_eq!(DecimalDisplay(0.0).to_string(), "0.0");
    }

    #[test]
    fn non_finite_values_print_lowercase() {
        assert_eq!(Grade::from(f64::NAN).to_string(), "nan");
        assert_eq!(Grade::from(f64::INFINITY).to_string(), "inf");
        assert_eq!(Grade::from(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn parses_integers_before_decimals() {
        assert_eq!(" 90 ".parse::<Grade>(), Ok(Grade::Integer(90)));
        assert_eq!("67.25".parse::<Grade>(), Ok(Grade::Decimal(67.25)));
        assert_eq!("70.0".parse::<Grade>(), Ok(Grade::Decimal(70.0)));
    }

    #[test]
    fn rejects_non_numeric_and_non_finite_text() {
        for input in ["abc", "", "NaN", "inf", "-infinity", "8 5"] {
            assert_eq!(
                input.parse::<Grade>(),
                Err(RecordError::InvalidGrade {
                    input: input.to_string()
                }),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn value_widens_integers() {
        assert_eq!(Grade::Integer(7).value(), 7.0);
        assert_eq!(Grade::Decimal(7.5).value(), 7.5);
    }
}
