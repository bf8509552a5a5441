use core::fmt::{Display, Formatter, Result as FmtResult};

/// A computed metric, integral as long as the inputs allow it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Int(i64),
    Float(f64),
}

impl MetricValue {
    /// Parses a raw table value or numeric literal. Non-finite numbers are rejected.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Ok(value) = text.parse::<i64>() {
            return Some(Self::Int(value));
        }

        text.parse::<f64>().ok().filter(|value| value.is_finite()).map(Self::Float)
    }

    #[expect(clippy::cast_precision_loss, reason = "metric values are far below 2^53")]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }

    #[must_use]
    pub fn add(self, rhs: Self) -> Self {
        self.combine(rhs, i64::checked_add, |a, b| a + b)
    }

    #[must_use]
    pub fn subtract(self, rhs: Self) -> Self {
        self.combine(rhs, i64::checked_sub, |a, b| a - b)
    }

    #[must_use]
    pub fn multiply(self, rhs: Self) -> Self {
        self.combine(rhs, i64::checked_mul, |a, b| a * b)
    }

    /// Integer operands divide with the quotient rounded toward negative infinity;
    /// any float operand gives true division. Returns `None` when `rhs` is zero.
    #[must_use]
    pub fn divide(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (_, Self::Int(0)) => None,
            (_, Self::Float(divisor)) if divisor == 0.0 => None,
            (Self::Int(a), Self::Int(b)) => Some(
                floor_div(a, b).map_or_else(|| Self::Float((self.as_f64() / rhs.as_f64()).floor()), Self::Int),
            ),
            _ => Some(Self::Float(self.as_f64() / rhs.as_f64())),
        }
    }

    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Self::Int(value) => value.checked_neg().map_or_else(|| Self::Float(-self.as_f64()), Self::Int),
            Self::Float(value) => Self::Float(-value),
        }
    }

    fn combine(self, rhs: Self, int_op: impl Fn(i64, i64) -> Option<i64>, float_op: impl Fn(f64, f64) -> f64) -> Self {
        if let (Self::Int(a), Self::Int(b)) = (self, rhs)
            && let Some(value) = int_op(a, b)
        {
            return Self::Int(value);
        }

        Self::Float(float_op(self.as_f64(), rhs.as_f64()))
    }
}

fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    if a % b != 0 && (a < 0) != (b < 0) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

impl Display for MetricValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) if value.fract() == 0.0 => write!(f, "{value:.1}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(MetricValue::parse("42"), Some(MetricValue::Int(42)));
        assert_eq!(MetricValue::parse(" -7 "), Some(MetricValue::Int(-7)));
        assert_eq!(MetricValue::parse("2.5"), Some(MetricValue::Float(2.5)));
        assert_eq!(MetricValue::parse(".5"), Some(MetricValue::Float(0.5)));
        assert_eq!(MetricValue::parse("abc"), None);
        assert_eq!(MetricValue::parse(""), None);
        assert_eq!(MetricValue::parse("inf"), None);
        assert_eq!(MetricValue::parse("NaN"), None);
    }

    #[test]
    fn test_integer_arithmetic_stays_integral() {
        assert_eq!(MetricValue::Int(3).add(MetricValue::Int(3)), MetricValue::Int(6));
        assert_eq!(MetricValue::Int(3).subtract(MetricValue::Int(5)), MetricValue::Int(-2));
        assert_eq!(MetricValue::Int(4).multiply(MetricValue::Int(5)), MetricValue::Int(20));
        assert_eq!(MetricValue::Int(8).divide(MetricValue::Int(2)), Some(MetricValue::Int(4)));
    }

    #[test]
    fn test_integer_division_rounds_down() {
        assert_eq!(MetricValue::Int(3).divide(MetricValue::Int(2)), Some(MetricValue::Int(1)));
        assert_eq!(MetricValue::Int(1).divide(MetricValue::Int(2)), Some(MetricValue::Int(0)));
        assert_eq!(MetricValue::Int(-7).divide(MetricValue::Int(2)), Some(MetricValue::Int(-4)));
        assert_eq!(MetricValue::Int(7).divide(MetricValue::Int(-2)), Some(MetricValue::Int(-4)));
        assert_eq!(MetricValue::Int(-7).divide(MetricValue::Int(-2)), Some(MetricValue::Int(3)));
        assert_eq!(MetricValue::Int(-8).divide(MetricValue::Int(2)), Some(MetricValue::Int(-4)));
    }

    #[test]
    fn test_fractional_operands_produce_floats() {
        assert_eq!(MetricValue::Int(3).divide(MetricValue::Float(2.0)), Some(MetricValue::Float(1.5)));
        assert_eq!(MetricValue::Float(1.5).add(MetricValue::Int(1)), MetricValue::Float(2.5));
        assert_eq!(MetricValue::Int(2).multiply(MetricValue::Float(0.25)), MetricValue::Float(0.5));
    }

    #[test]
    fn test_overflow_falls_back_to_float() {
        let sum = MetricValue::Int(i64::MAX).add(MetricValue::Int(1));
        assert!(matches!(sum, MetricValue::Float(_)));
        assert!(matches!(MetricValue::Int(i64::MIN).negate(), MetricValue::Float(_)));
        assert!(matches!(MetricValue::Int(i64::MIN).divide(MetricValue::Int(-1)), Some(MetricValue::Float(_))));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(MetricValue::Int(1).divide(MetricValue::Int(0)), None);
        assert_eq!(MetricValue::Float(1.0).divide(MetricValue::Float(0.0)), None);
        assert_eq!(MetricValue::Int(1).divide(MetricValue::Float(-0.0)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(MetricValue::Int(3).to_string(), "3");
        assert_eq!(MetricValue::Int(-12).to_string(), "-12");
        assert_eq!(MetricValue::Float(2.5).to_string(), "2.5");
        assert_eq!(MetricValue::Float(6.0).to_string(), "6.0");
        assert_eq!(MetricValue::Float(-0.125).to_string(), "-0.125");
        assert_eq!(MetricValue::Float(1.0 / 3.0).to_string(), "0.3333333333333333");
    }
}
