//! Exact rational arithmetic with magnitude bounds.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::{BigRational, ParseRatioError};
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{ArithmeticError, ConfigError, Result};

/// Smallest non-zero magnitude an intermediate value may take.
pub const LOWER_BOUND: (i64, i64) = (1, 100_000);
/// Largest magnitude an intermediate value may take.
pub const UPPER_BOUND: i64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

/// A reduced fraction. Zero is always `0/1` with a positive sign.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fraction(BigRational);

impl Fraction {
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Fraction(BigRational::new(numer.into(), denom)))
    }

    pub fn integer(value: impl Into<BigInt>) -> Self {
        Fraction(BigRational::from_integer(value.into()))
    }

    pub fn zero() -> Self {
        Fraction(BigRational::zero())
    }

    pub fn one() -> Self {
        Fraction(BigRational::one())
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn as_rational(&self) -> &BigRational {
        &self.0
    }

    pub fn sign(&self) -> Sign {
        if self.0.is_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn negate(&self) -> Self {
        Fraction(-self.0.clone())
    }

    pub fn abs(&self) -> Self {
        Fraction(self.0.abs())
    }

    pub fn add(&self, rhs: &Fraction) -> Self {
        Fraction(&self.0 + &rhs.0)
    }

    pub fn subtract(&self, rhs: &Fraction) -> Self {
        Fraction(&self.0 - &rhs.0)
    }

    pub fn multiply(&self, rhs: &Fraction) -> Self {
        Fraction(&self.0 * &rhs.0)
    }

    pub fn divide(&self, rhs: &Fraction) -> Result<Self> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Fraction(&self.0 / &rhs.0))
    }

    /// Floored modulo, `a - b * floor(a / b)`. The result takes the sign of `rhs`.
    pub fn modulo(&self, rhs: &Fraction) -> Result<Self> {
        let quotient = self.divide(rhs)?;
        let floored = quotient.0.floor();
        Ok(Fraction(&self.0 - &rhs.0 * floored))
    }

    pub fn reciprocal(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Fraction(self.0.recip()))
    }

    pub fn compare(&self, rhs: &Fraction) -> Ordering {
        self.cmp(rhs)
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction::integer(value)
    }
}

impl From<i32> for Fraction {
    fn from(value: i32) -> Self {
        Fraction::integer(value)
    }
}

impl From<BigRational> for Fraction {
    fn from(value: BigRational) -> Self {
        Fraction(value)
    }
}

impl FromStr for Fraction {
    type Err = ParseRatioError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        BigRational::from_str(s.trim()).map(Fraction)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::fraction(self))
    }
}

/// The range every computed value must stay inside.
///
/// Exercises are meant to be worked by hand, so a result whose magnitude is
/// smaller than `lower` (but not zero) or larger than `upper` is rejected with
/// [`ArithmeticError::OperationOutOfRange`] instead of being carried forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    lower: Fraction,
    upper: Fraction,
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            lower: Fraction(BigRational::new(LOWER_BOUND.0.into(), LOWER_BOUND.1.into())),
            upper: Fraction::integer(UPPER_BOUND),
        }
    }
}

impl Bounds {
    pub fn new(lower: Fraction, upper: Fraction) -> std::result::Result<Self, ConfigError> {
        if lower.is_negative() || lower.is_zero() {
            return Err(ConfigError::InvalidBound {
                name: "lower",
                value: lower.to_string(),
            });
        }
        if upper.is_negative() || upper.is_zero() {
            return Err(ConfigError::InvalidBound {
                name: "upper",
                value: upper.to_string(),
            });
        }
        if lower > upper {
            return Err(ConfigError::InvertedBounds { lower, upper });
        }
        Ok(Bounds { lower, upper })
    }

    pub fn lower(&self) -> &Fraction {
        &self.lower
    }

    pub fn upper(&self) -> &Fraction {
        &self.upper
    }

    pub fn contains(&self, value: &Fraction) -> bool {
        if value.is_zero() {
            return true;
        }
        let magnitude = value.abs();
        magnitude >= self.lower && magnitude <= self.upper
    }

    pub fn check(&self, value: Fraction) -> Result<Fraction> {
        if self.contains(&value) {
            Ok(value)
        } else {
            Err(ArithmeticError::OperationOutOfRange { value })
        }
    }

    pub fn add(&self, a: &Fraction, b: &Fraction) -> Result<Fraction> {
        self.check(a.add(b))
    }

    pub fn subtract(&self, a: &Fraction, b: &Fraction) -> Result<Fraction> {
        self.check(a.subtract(b))
    }

    pub fn multiply(&self, a: &Fraction, b: &Fraction) -> Result<Fraction> {
        self.check(a.multiply(b))
    }

    pub fn divide(&self, a: &Fraction, b: &Fraction) -> Result<Fraction> {
        self.check(a.divide(b)?)
    }

    pub fn modulo(&self, a: &Fraction, b: &Fraction) -> Result<Fraction> {
        self.check(a.modulo(b)?)
    }

    pub fn reciprocal(&self, value: &Fraction) -> Result<Fraction> {
        self.check(value.reciprocal()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).expect("non-zero denominator")
    }

    #[test]
    fn zero_is_canonical() {
        let zero = frac(0, -7);
        assert_eq!(zero, Fraction::zero());
        assert_eq!(zero.sign(), Sign::Plus);
        assert_eq!(zero.denom(), &BigInt::from(1));
    }

    #[test]
    fn negative_denominator_moves_sign() {
        let value = frac(3, -6);
        assert_eq!(value.numer(), &BigInt::from(-1));
        assert_eq!(value.denom(), &BigInt::from(2));
        assert_eq!(value.sign(), Sign::Minus);
    }

    #[test]
    fn modulo_is_floored() {
        assert_eq!(frac(7, 1).modulo(&frac(2, 1)).unwrap(), frac(1, 1));
        assert_eq!(frac(-7, 1).modulo(&frac(2, 1)).unwrap(), frac(1, 1));
        assert_eq!(frac(3, 2).modulo(&frac(1, 2)).unwrap(), Fraction::zero());
        assert_eq!(frac(3, 1).modulo(&frac(2, 3)).unwrap(), frac(1, 3));
    }
}
