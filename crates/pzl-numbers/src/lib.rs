//! # pzl-numbers
//!
//! Arbitrary precision integer and rational arithmetic for the puzzle
//! solvers.
//!
//! This crate provides:
//! - Arbitrary precision integers (`Integer`), stored as base-10^9 slices
//! - Arbitrary precision rationals (`Rational`), always in lowest terms
//!
//! Both are immutable value types. Operations that can be undefined
//! (division by zero, `0^0`, malformed input) have `checked_*` or
//! `Result`-returning forms reporting a [`NumberError`].
//!
//! ## Performance Notes
//!
//! - Multiplication is schoolbook, quadratic in the number of slices
//! - Division is slice-wise long division with a doubling step table
//! - Rational power of a non-whole base costs one multiplication per unit
//!   of the exponent, so keep such exponents small

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod rational;
pub mod slices;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod proptests;

pub use error::{NumberError, Result};
pub use integer::Integer;
pub use rational::Rational;
