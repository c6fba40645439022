//! Arbitrary precision integers.
//!
//! An [`Integer`] is a sign flag plus a magnitude stored as base-10^9 slices,
//! least significant first. Values are immutable: every operation returns a
//! fresh integer.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};
use std::str::FromStr;

use crate::error::{NumberError, Result};
use crate::slices::{self, Slice, SLICE_DIGITS, SLICE_SIZE};

/// An arbitrary precision signed integer.
///
/// The representation is canonical: no zero slice at the most significant
/// end, and zero is always positive. Derived equality and hashing rely on
/// this.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Integer {
    slices: Vec<Slice>,
    positive: bool,
}

impl Integer {
    fn from_parts(mut slices: Vec<Slice>, positive: bool) -> Self {
        slices::trim(&mut slices);
        let positive = positive || slices.is_empty();
        Self { slices, positive }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_magnitude(mut value: u128, positive: bool) -> Self {
        let mut slices = Vec::new();
        while value > 0 {
            slices.push((value % u128::from(SLICE_SIZE)) as Slice);
            value /= u128::from(SLICE_SIZE);
        }
        Self::from_parts(slices, positive)
    }

    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from(value)
    }

    /// Returns true for zero and positive values.
    #[must_use]
    pub fn positive(&self) -> bool {
        self.positive
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        !self.positive
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.slices.is_empty() {
            0
        } else if self.positive {
            1
        } else {
            -1
        }
    }

    /// Returns the absolute value.
    #[doc(alias = "absolute")]
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            slices: self.slices.clone(),
            positive: true,
        }
    }

    /// Returns the magnitude's slices, least significant first.
    #[must_use]
    pub fn as_slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        let mut magnitude = 0i128;
        for &slice in self.slices.iter().rev() {
            magnitude = magnitude
                .checked_mul(i128::from(SLICE_SIZE))?
                .checked_add(i128::from(slice))?;
        }
        let value = if self.positive { magnitude } else { -magnitude };
        i64::try_from(value).ok()
    }

    /// Returns `self + 1`.
    ///
    /// Only the low slices are touched, so this is much cheaper than a
    /// general addition when used as a loop counter.
    #[must_use]
    pub fn increment(&self) -> Self {
        let mut slices = self.slices.clone();
        if self.positive {
            slices::increment(&mut slices);
        } else {
            slices::decrement(&mut slices);
        }
        Self::from_parts(slices, self.positive)
    }

    /// Returns `self - 1`.
    #[must_use]
    pub fn decrement(&self) -> Self {
        let mut slices = self.slices.clone();
        if self.positive && !slices.is_empty() {
            slices::decrement(&mut slices);
            Self::from_parts(slices, true)
        } else {
            slices::increment(&mut slices);
            Self::from_parts(slices, false)
        }
    }

    /// Truncating division of magnitudes with signs applied; `rhs` must be
    /// non-zero. The remainder takes the sign of the dividend.
    pub(crate) fn truncating_div_rem(&self, rhs: &Self) -> (Self, Self) {
        debug_assert!(!rhs.is_zero());
        let (quotient, remainder) = slices::div_rem(&self.slices, &rhs.slices);
        (
            Self::from_parts(quotient, self.positive == rhs.positive),
            Self::from_parts(remainder, self.positive),
        )
    }

    /// Divides by `rhs`, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::DivisionByZero`] if `rhs` is zero, and
    /// [`NumberError::NonIntegralQuotient`] if a non-zero dividend is smaller
    /// in magnitude than the divisor. Use [`crate::Rational`] for fractions.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// Remainder of truncating division; it carries the sign of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        Ok(self.truncating_div_rem(rhs).1)
    }

    /// Quotient and remainder in one pass.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Integer::checked_div`].
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok((Self::zero(), Self::zero()));
        }
        if slices::compare(&self.slices, &rhs.slices) == Ordering::Less {
            return Err(NumberError::NonIntegralQuotient);
        }
        Ok(self.truncating_div_rem(rhs))
    }

    /// Computes `self^exponent` by square-and-multiply.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::NegativeExponent`] for a negative exponent and
    /// [`NumberError::ZeroToZero`] for `0^0`.
    pub fn pow(&self, exponent: &Self) -> Result<Self> {
        if exponent.is_negative() {
            return Err(NumberError::NegativeExponent);
        }
        if exponent.is_zero() {
            return if self.is_zero() {
                Err(NumberError::ZeroToZero)
            } else {
                Ok(Self::one())
            };
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut remaining = exponent.slices.clone();

        // SLICE_SIZE is even, so the lowest slice decides parity.
        while let Some(&low) = remaining.first() {
            if low % 2 == 1 {
                result = &result * &base;
            }
            remaining = slices::div_rem(&remaining, &[2]).0;
            if !remaining.is_empty() {
                base = &base * &base;
            }
        }

        Ok(result)
    }

    /// Computes the greatest common divisor with Euclid's algorithm.
    ///
    /// The result is never negative; `gcd(0, x) == |x|`.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut left = self.slices.clone();
        let mut right = other.slices.clone();
        let mut rounds = 0usize;

        let divisor = loop {
            if right.is_empty() {
                break left;
            }
            left = slices::div_rem(&left, &right).1;
            rounds += 1;
            if left.is_empty() {
                break right;
            }
            right = slices::div_rem(&right, &left).1;
            rounds += 1;
        };

        tracing::trace!(rounds, "euclidean gcd");
        Self::from_parts(divisor, true)
    }

    /// Computes the least common multiple.
    ///
    /// The result is never negative, and zero if either operand is zero.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        let (reduced, _) = slices::div_rem(&self.slices, &g.slices);
        Self::from_parts(slices::mul(&reduced, &other.slices), true)
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        if rhs.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return rhs.clone();
        }

        if self.positive == rhs.positive {
            return Self::from_parts(slices::add(&self.slices, &rhs.slices), self.positive);
        }

        // Differing signs: subtract the smaller magnitude from the larger,
        // which also lends its sign.
        match slices::compare(&self.slices, &rhs.slices) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => Self::from_parts(
                slices::combine(&self.slices, &rhs.slices, true),
                self.positive,
            ),
            Ordering::Less => Self::from_parts(
                slices::combine(&rhs.slices, &self.slices, true),
                rhs.positive,
            ),
        }
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        // Same sign and a single-slice subtrahend that fits in our lowest
        // slice: no carry or borrow can happen.
        if self.positive == rhs.positive {
            if let ([low, ..], [small]) = (self.slices.as_slice(), rhs.slices.as_slice()) {
                if small <= low {
                    let mut slices = self.slices.clone();
                    slices[0] = low - small;
                    return Self::from_parts(slices, self.positive);
                }
            }
        }

        self.add_ref(&-rhs)
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        Self::from_parts(
            slices::mul(&self.slices, &rhs.slices),
            self.positive == rhs.positive,
        )
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self {
            slices: Vec::new(),
            positive: true,
        }
    }

    fn is_zero(&self) -> bool {
        self.slices.is_empty()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self {
            slices: vec![1],
            positive: true,
        }
    }

    fn is_one(&self) -> bool {
        self.positive && self.slices == [1]
    }
}

impl Default for Integer {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Integer {
    type Err = NumberError;

    /// Parses an optionally `-`-prefixed run of decimal digits.
    ///
    /// The empty string and `"0"` both parse as zero.
    fn from_str(s: &str) -> Result<Self> {
        let (positive, body) = match s.strip_prefix('-') {
            Some(rest) if rest.is_empty() => return Err(NumberError::malformed(s)),
            Some(rest) => (false, rest),
            None => (true, s),
        };

        if !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NumberError::malformed(s));
        }

        let slices = body
            .as_bytes()
            .rchunks(SLICE_DIGITS)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0, |acc: Slice, &digit| acc * 10 + Slice::from(digit - b'0'))
            })
            .collect();

        Ok(Self::from_parts(slices, positive))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.positive, other.positive) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => slices::compare(&self.slices, &other.slices),
            (false, false) => slices::compare(&other.slices, &self.slices),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<i64> for Integer {
    fn eq(&self, other: &i64) -> bool {
        self.to_i64() == Some(*other)
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({self})")
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((top, rest)) = self.slices.split_last() else {
            return f.pad_integral(true, "", "0");
        };

        let mut digits = String::with_capacity(self.slices.len() * SLICE_DIGITS);
        digits.push_str(&top.to_string());
        for slice in rest.iter().rev() {
            digits.push_str(&format!("{slice:0width$}", width = SLICE_DIGITS));
        }

        f.pad_integral(self.positive, "", &digits)
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_ref(&rhs)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        self.add_ref(rhs)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_ref(rhs)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_ref(&rhs)
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(self, rhs: &Integer) -> Self::Output {
        self.sub_ref(rhs)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_ref(rhs)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_ref(&rhs)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        self.mul_ref(rhs)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_ref(rhs)
    }
}

/// # Panics
///
/// Panics on the conditions where [`Integer::checked_div`] returns an error.
impl Div for Integer {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div for &Integer {
    type Output = Integer;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

/// # Panics
///
/// Panics if the divisor is zero.
impl Rem for Integer {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        &self % &rhs
    }
}

impl Rem for &Integer {
    type Output = Integer;

    fn rem(self, rhs: Self) -> Self::Output {
        match self.checked_rem(rhs) {
            Ok(remainder) => remainder,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let positive = !self.positive;
        Self::from_parts(self.slices, positive)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl AddAssign<&Integer> for Integer {
    fn add_assign(&mut self, rhs: &Integer) {
        *self = self.add_ref(rhs);
    }
}

impl SubAssign<&Integer> for Integer {
    fn sub_assign(&mut self, rhs: &Integer) {
        *self = self.sub_ref(rhs);
    }
}

impl MulAssign<&Integer> for Integer {
    fn mul_assign(&mut self, rhs: &Integer) {
        *self = self.mul_ref(rhs);
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                #[allow(clippy::cast_lossless)]
                fn from(value: $t) -> Self {
                    Self::from_magnitude(value.unsigned_abs() as u128, value >= 0)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                #[allow(clippy::cast_lossless)]
                fn from(value: $t) -> Self {
                    Self::from_magnitude(value as u128, true)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
