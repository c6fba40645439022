//! Arbitrary precision rational numbers.
//!
//! This module provides exact rational arithmetic on top of [`Integer`].

use num_traits::{One, Zero};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::{NumberError, Result};
use crate::Integer;

/// Fractional digits rendered by [`Rational::to_string_with_decimal_expansion`].
pub const DEFAULT_EXPANSION_DIGITS: usize = 64;

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator,
/// so two equal values are structurally equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// A negative denominator moves its sign onto the numerator, and the
    /// fraction is reduced to lowest terms.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::ZeroDenominator`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self> {
        if denominator.is_zero() {
            return Err(NumberError::ZeroDenominator);
        }
        if denominator.is_negative() {
            Ok(Self::reduced(-numerator, -denominator))
        } else {
            Ok(Self::reduced(numerator, denominator))
        }
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::ZeroDenominator`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self> {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            numerator: n,
            denominator: Integer::one(),
        }
    }

    /// Divides both parts by their greatest common divisor. The denominator
    /// must already be positive.
    fn reduced(numerator: Integer, denominator: Integer) -> Self {
        debug_assert!(denominator.positive() && !denominator.is_zero());

        if numerator.is_zero() {
            return Self::zero();
        }
        if denominator.is_one() {
            return Self::from_integer(numerator);
        }

        let gcd = numerator.gcd(&denominator);
        if gcd.is_one() {
            return Self {
                numerator,
                denominator,
            };
        }

        Self {
            numerator: numerator.truncating_div_rem(&gcd).0,
            denominator: denominator.truncating_div_rem(&gcd).0,
        }
    }

    /// Returns the numerator, which carries the sign.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the denominator, which is always positive.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(self.numerator.clone())
        } else {
            None
        }
    }

    /// Returns true for zero and positive values.
    #[must_use]
    pub fn positive(&self) -> bool {
        self.numerator.positive()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::DivisionByZero`] if the rational is zero.
    pub fn recip(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Rewrites both operands over their lowest common denominator.
    ///
    /// Returns the scaled numerators of `self` and `other`, then the shared
    /// denominator.
    #[must_use]
    pub fn normalize_denominator_with(&self, other: &Self) -> (Integer, Integer, Integer) {
        if self.denominator == other.denominator {
            return (
                self.numerator.clone(),
                other.numerator.clone(),
                self.denominator.clone(),
            );
        }

        let common = self.denominator.lcm(&other.denominator);
        let left = &common.truncating_div_rem(&self.denominator).0 * &self.numerator;
        let right = &common.truncating_div_rem(&other.denominator).0 * &other.numerator;
        (left, right, common)
    }

    /// Divides two whole numbers, producing a fraction when they don't
    /// divide evenly.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::DivisionByZero`] for a zero divisor and
    /// [`NumberError::FractionDivision`] if either operand has a
    /// denominator other than 1. Multiply by [`Rational::recip`] instead to
    /// divide fractions.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }
        if !self.is_integer() || !rhs.is_integer() {
            return Err(NumberError::FractionDivision);
        }

        let step = rhs.numerator.abs();
        let (quotient, remainder) = self.numerator.abs().truncating_div_rem(&step);
        let same_sign = self.positive() == rhs.positive();

        if remainder.is_zero() {
            let quotient = if same_sign { quotient } else { -quotient };
            return Ok(Self::from_integer(quotient));
        }

        // quotient + remainder / step; the fraction is proper, so the mixed
        // number stays in lowest terms.
        let fraction = Self::reduced(remainder, step);
        let numerator = &(&quotient * &fraction.denominator) + &fraction.numerator;
        let numerator = if same_sign { numerator } else { -numerator };
        Ok(Self {
            numerator,
            denominator: fraction.denominator,
        })
    }

    /// Raises to a whole, non-negative power.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::ZeroToZero`] for `0^0`,
    /// [`NumberError::NegativeExponent`] for a negative exponent and
    /// [`NumberError::FractionalExponent`] for a non-whole one.
    pub fn pow(&self, exponent: &Self) -> Result<Self> {
        if self.is_zero() && exponent.is_zero() {
            return Err(NumberError::ZeroToZero);
        }
        if exponent.is_negative() {
            return Err(NumberError::NegativeExponent);
        }
        if !exponent.is_integer() {
            return Err(NumberError::FractionalExponent);
        }

        if self.is_integer() {
            return self.numerator.pow(&exponent.numerator).map(Self::from_integer);
        }

        tracing::trace!(base = %self, exponent = %exponent, "rational power");

        let mut result = Self::one();
        let mut i = Integer::zero();
        while i < exponent.numerator {
            result = &result * self;
            i = i.increment();
        }
        Ok(result)
    }

    /// Returns `self + 1`.
    #[must_use]
    pub fn increment(&self) -> Self {
        // gcd(n + d, d) == gcd(n, d) == 1, so no reduction is needed.
        Self {
            numerator: &self.numerator + &self.denominator,
            denominator: self.denominator.clone(),
        }
    }

    /// Renders the value followed by its decimal expansion, e.g.
    /// `"5/2 (2.5)"` or `"1/3 (0.(3))"`. Whole numbers render as is.
    #[must_use]
    pub fn to_string_with_decimal_expansion(&self) -> String {
        if self.is_integer() {
            return self.numerator.to_string();
        }
        format!(
            "{self} ({})",
            self.decimal_expansion(DEFAULT_EXPANSION_DIGITS)
        )
    }

    /// Exact decimal expansion by long division.
    ///
    /// A repeating block is wrapped in parentheses. If no repetition shows
    /// up within `max_digits` fractional digits the output is cut there and
    /// ends in `"..."`.
    #[must_use]
    pub fn decimal_expansion(&self, max_digits: usize) -> String {
        let (whole, mut remainder) = self
            .numerator
            .abs()
            .truncating_div_rem(&self.denominator);

        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(&whole.to_string());
        if remainder.is_zero() {
            return out;
        }
        if max_digits == 0 {
            out.push_str("...");
            return out;
        }

        let ten = Integer::new(10);
        let mut digits = String::new();
        let mut seen: FxHashMap<Integer, usize> = FxHashMap::default();

        while !remainder.is_zero() {
            if let Some(&start) = seen.get(&remainder) {
                digits.insert(start, '(');
                digits.push(')');
                break;
            }
            if digits.len() == max_digits {
                digits.push_str("...");
                break;
            }

            seen.insert(remainder.clone(), digits.len());
            let (digit, next) = (&remainder * &ten).truncating_div_rem(&self.denominator);
            digits.push_str(&digit.to_string());
            remainder = next;
        }

        out.push('.');
        out.push_str(&digits);
        out
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        let (left, right, denominator) = self.normalize_denominator_with(rhs);
        Self::reduced(left + right, denominator)
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        let (left, right, denominator) = self.normalize_denominator_with(rhs);
        Self::reduced(left - right, denominator)
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        Self::reduced(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Rational {
    type Err = NumberError;

    /// Parses `"n"` or `"n/d"`.
    fn from_str(s: &str) -> Result<Self> {
        let Some((numerator, denominator)) = s.split_once('/') else {
            return s.parse().map(Self::from_integer);
        };

        if numerator.is_empty() || denominator.is_empty() {
            return Err(NumberError::malformed(s));
        }
        let numerator = numerator.parse().map_err(|_| NumberError::malformed(s))?;
        let denominator = denominator.parse().map_err(|_| NumberError::malformed(s))?;
        Self::new(numerator, denominator)
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.positive() != other.positive() {
            return if other.positive() {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        let (us, them, _) = self.normalize_denominator_with(other);
        us.cmp(&them)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        self.is_integer() && self.numerator == *other
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_ref(&rhs)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        self.add_ref(rhs)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_ref(rhs)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_ref(&rhs)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        self.sub_ref(rhs)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_ref(rhs)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_ref(&rhs)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        self.mul_ref(rhs)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_ref(rhs)
    }
}

/// # Panics
///
/// Panics on the conditions where [`Rational::checked_div`] returns an error.
impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl AddAssign<&Rational> for Rational {
    fn add_assign(&mut self, rhs: &Rational) {
        *self = self.add_ref(rhs);
    }
}

impl SubAssign<&Rational> for Rational {
    fn sub_assign(&mut self, rhs: &Rational) {
        *self = self.sub_ref(rhs);
    }
}

impl MulAssign<&Rational> for Rational {
    fn mul_assign(&mut self, rhs: &Rational) {
        *self = self.mul_ref(rhs);
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}
