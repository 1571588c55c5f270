// Arbitrary-precision signed decimal values and input normalization.

use num_bigint::BigUint;
use num_traits::Zero;

/// Error type for input normalization failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input string is not a decimal number.
    #[error("invalid decimal input: {0:?}")]
    InvalidInput(String),
    /// The input is infinite or NaN. Callers short-circuit these to a fixed
    /// localized literal without invoking the numeral engine.
    #[error("non-finite input")]
    NonFinite,
}

/// An arbitrary-precision signed decimal number, normalized for the engine.
///
/// The engine itself only ever sees the non-negative integer magnitude and
/// the fraction digits; the sign is applied by the caller as a prefix word.
/// The fraction is kept as a digit string so that `0.05` and `0.5` stay
/// distinct and no floating-point arithmetic enters the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    negative: bool,
    int: BigUint,
    frac: String,
}

impl Decimal {
    /// Build a decimal from parts. The fraction must be all ASCII digits.
    pub fn new(negative: bool, int: BigUint, frac: &str) -> Result<Self, ParseError> {
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidInput(frac.to_string()));
        }
        Ok(Self {
            negative: negative && !(int.is_zero() && frac.bytes().all(|b| b == b'0')),
            int,
            frac: frac.to_string(),
        })
    }

    /// Parse a decimal string such as `-123.45`, `+7`, `.5` or `1_000_000`.
    ///
    /// Underscores and spaces between digits are ignored. An exponent part is
    /// not accepted: the callers that need scientific notation expand it
    /// before normalization.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::InvalidInput(input.to_string()));
        }

        let (negative, rest) = match trimmed.as_bytes()[0] {
            b'-' => (true, &trimmed[1..]),
            b'+' => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let mut int_digits = String::new();
        let mut frac_digits = String::new();
        let mut seen_sep = false;
        let mut seen_digit = false;
        for c in rest.chars() {
            match c {
                '0'..='9' => {
                    seen_digit = true;
                    if seen_sep {
                        frac_digits.push(c);
                    } else {
                        int_digits.push(c);
                    }
                }
                '.' | ',' if !seen_sep => seen_sep = true,
                '_' | ' ' if !seen_sep && seen_digit => {}
                _ => return Err(ParseError::InvalidInput(input.to_string())),
            }
        }
        if !seen_digit {
            return Err(ParseError::InvalidInput(input.to_string()));
        }

        let int = if int_digits.is_empty() {
            BigUint::zero()
        } else {
            // All bytes are ASCII digits at this point, so parsing cannot fail.
            int_digits
                .parse::<BigUint>()
                .map_err(|_| ParseError::InvalidInput(input.to_string()))?
        };
        Self::new(negative, int, &frac_digits)
    }

    /// Normalize a binary float. Non-finite values are rejected so the caller
    /// can substitute the lexicon's fixed literal.
    ///
    /// The float is formatted through the shortest-roundtrip decimal form,
    /// which matches what the user typed for any value that survived a prior
    /// string-to-float conversion.
    pub fn from_f64(value: f64) -> Result<Self, ParseError> {
        if !value.is_finite() {
            return Err(ParseError::NonFinite);
        }
        Self::parse(&format!("{value}"))
    }

    /// True when the value is negative (and non-zero; `-0` normalizes to `0`).
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The non-negative integer magnitude.
    pub fn magnitude(&self) -> &BigUint {
        &self.int
    }

    /// The fraction digits exactly as written, possibly with trailing zeros.
    pub fn fraction_digits(&self) -> &str {
        &self.frac
    }

    /// True when both the integer part and the fraction are zero.
    pub fn is_zero(&self) -> bool {
        self.int.is_zero() && self.frac.bytes().all(|b| b == b'0')
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self {
            negative: false,
            int: BigUint::from(value),
            frac: String::new(),
        }
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self {
            negative: value < 0,
            int: BigUint::from(value.unsigned_abs()),
            frac: String::new(),
        }
    }
}

impl From<BigUint> for Decimal {
    fn from(int: BigUint) -> Self {
        Self {
            negative: false,
            int,
            frac: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Decimal {
        Decimal::parse(s).unwrap()
    }

    #[test]
    fn parse_plain_integer() {
        let d = parse("1234");
        assert!(!d.is_negative());
        assert_eq!(d.magnitude(), &BigUint::from(1234u32));
        assert_eq!(d.fraction_digits(), "");
    }

    #[test]
    fn parse_signs() {
        assert!(parse("-5").is_negative());
        assert!(!parse("+5").is_negative());
        assert!(!parse("5").is_negative());
    }

    #[test]
    fn parse_fraction_keeps_digits() {
        let d = parse("-123.450");
        assert!(d.is_negative());
        assert_eq!(d.magnitude(), &BigUint::from(123u32));
        assert_eq!(d.fraction_digits(), "450");
    }

    #[test]
    fn parse_comma_separator() {
        assert_eq!(parse("3,14").fraction_digits(), "14");
    }

    #[test]
    fn parse_bare_fraction() {
        let d = parse(".5");
        assert_eq!(d.magnitude(), &BigUint::zero());
        assert_eq!(d.fraction_digits(), "5");
    }

    #[test]
    fn parse_grouping_characters() {
        assert_eq!(parse("1_000_000").magnitude(), &BigUint::from(1_000_000u32));
        assert_eq!(parse("1 000").magnitude(), &BigUint::from(1000u32));
    }

    #[test]
    fn parse_huge_magnitude() {
        let d = parse("123456789012345678901234567890");
        assert_eq!(d.magnitude().to_string(), "123456789012345678901234567890");
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "  ", "abc", "1.2.3", "--4", "12e5", "."] {
            assert!(Decimal::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn negative_zero_normalizes() {
        assert!(!parse("-0").is_negative());
        assert!(!parse("-0.00").is_negative());
        assert!(parse("-0.01").is_negative());
    }

    #[test]
    fn from_f64_rejects_non_finite() {
        assert_eq!(Decimal::from_f64(f64::INFINITY), Err(ParseError::NonFinite));
        assert_eq!(Decimal::from_f64(f64::NEG_INFINITY), Err(ParseError::NonFinite));
        assert_eq!(Decimal::from_f64(f64::NAN), Err(ParseError::NonFinite));
    }

    #[test]
    fn from_f64_roundtrip() {
        let d = Decimal::from_f64(-12.5).unwrap();
        assert!(d.is_negative());
        assert_eq!(d.magnitude(), &BigUint::from(12u32));
        assert_eq!(d.fraction_digits(), "5");
    }

    #[test]
    fn is_zero() {
        assert!(parse("0").is_zero());
        assert!(parse("0.000").is_zero());
        assert!(!parse("0.001").is_zero());
        assert!(!parse("1").is_zero());
    }

    #[test]
    fn from_i64() {
        let d = Decimal::from(-44i64);
        assert!(d.is_negative());
        assert_eq!(d.magnitude(), &BigUint::from(44u32));
    }
}
