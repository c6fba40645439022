//! Magnitude arithmetic on decimal slices.
//!
//! A magnitude is a low-endian sequence of slices, each holding nine decimal
//! digits (radix 10^9). The empty sequence is zero and the last slice is
//! never zero. Every function here takes and returns magnitudes in that
//! canonical form; signs are handled by [`crate::Integer`].

use std::cmp::Ordering;

/// One base-10^9 digit group.
pub type Slice = u32;

/// Number of decimal digits stored in a slice.
pub const SLICE_DIGITS: usize = 9;

/// Largest value a slice can hold.
pub const SLICE_MAX: Slice = 999_999_999;

/// The slice radix.
pub const SLICE_SIZE: u64 = SLICE_MAX as u64 + 1;

// 2^29 < SLICE_SIZE <= 2^30, so thirty doublings cover one quotient slice.
const STEP_COUNT: usize = 30;

/// Drops zero slices from the most significant end.
pub(crate) fn trim(slices: &mut Vec<Slice>) {
    while slices.last() == Some(&0) {
        slices.pop();
    }
}

/// Three-way comparison of two magnitudes.
///
/// More slices means a larger magnitude; equal lengths compare slice by
/// slice from the most significant end.
pub(crate) fn compare(lhs: &[Slice], rhs: &[Slice]) -> Ordering {
    debug_assert!(lhs.last() != Some(&0) && rhs.last() != Some(&0));

    lhs.len()
        .cmp(&rhs.len())
        .then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
}

/// Adds or subtracts `smaller` from `larger`, slice by slice.
///
/// With `subtract` unset this is a carrying sum; with it set it is a
/// borrowing difference and `larger` must not be smaller than `smaller`.
/// The running carry is always -1, 0 or +1.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn combine(larger: &[Slice], smaller: &[Slice], subtract: bool) -> Vec<Slice> {
    debug_assert!(larger.len() >= smaller.len());

    let size = SLICE_SIZE as i64;
    let mut result = Vec::with_capacity(larger.len() + 1);
    let mut carry = 0i64;

    for (i, &slice) in larger.iter().enumerate() {
        let other = i64::from(smaller.get(i).copied().unwrap_or(0));
        let raw = if subtract {
            i64::from(slice) - other + carry
        } else {
            i64::from(slice) + other + carry
        };
        debug_assert!(
            (-size..2 * size).contains(&raw),
            "slice sum {raw} out of range"
        );

        carry = if raw >= size {
            1
        } else if raw < 0 {
            -1
        } else {
            0
        };
        result.push((raw - carry * size) as Slice);
    }

    debug_assert!(carry >= 0, "borrow past the most significant slice");
    if carry == 1 {
        result.push(1);
    }

    trim(&mut result);
    result
}

/// Sum of two magnitudes.
pub(crate) fn add(lhs: &[Slice], rhs: &[Slice]) -> Vec<Slice> {
    if lhs.len() >= rhs.len() {
        combine(lhs, rhs, false)
    } else {
        combine(rhs, lhs, false)
    }
}

/// Difference of two magnitudes, `lhs >= rhs`.
pub(crate) fn sub(lhs: &[Slice], rhs: &[Slice]) -> Vec<Slice> {
    debug_assert!(compare(lhs, rhs) != Ordering::Less);
    combine(lhs, rhs, true)
}

/// Schoolbook product of two magnitudes.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn mul(lhs: &[Slice], rhs: &[Slice]) -> Vec<Slice> {
    if lhs.is_empty() || rhs.is_empty() {
        return Vec::new();
    }

    // Iterate the shorter operand in the outer loop.
    let (short, long) = if lhs.len() <= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };

    let mut acc = vec![0u64; short.len() + long.len()];
    for (i, &a) in short.iter().enumerate() {
        if a == 0 {
            continue;
        }

        let mut carry = 0u64;
        for (j, &b) in long.iter().enumerate() {
            let cur = acc[i + j] + u64::from(a) * u64::from(b) + carry;
            acc[i + j] = cur % SLICE_SIZE;
            carry = cur / SLICE_SIZE;
        }

        let mut k = i + long.len();
        while carry > 0 {
            let cur = acc[k] + carry;
            acc[k] = cur % SLICE_SIZE;
            carry = cur / SLICE_SIZE;
            k += 1;
        }
    }

    let mut result: Vec<Slice> = acc.into_iter().map(|v| v as Slice).collect();
    trim(&mut result);
    result
}

/// Adds one to a magnitude, rippling the carry across full slices.
pub(crate) fn increment(slices: &mut Vec<Slice>) {
    for slice in slices.iter_mut() {
        if *slice == SLICE_MAX {
            *slice = 0;
        } else {
            *slice += 1;
            return;
        }
    }
    slices.push(1);
}

/// Subtracts one from a non-zero magnitude, rippling the borrow across
/// empty slices.
pub(crate) fn decrement(slices: &mut Vec<Slice>) {
    debug_assert!(!slices.is_empty(), "decrement of a zero magnitude");

    for slice in slices.iter_mut() {
        if *slice == 0 {
            *slice = SLICE_MAX;
        } else {
            *slice -= 1;
            break;
        }
    }
    trim(slices);
}

/// Builds `divisor * 2^k` for `k` in `0..STEP_COUNT` by repeated doubling.
fn step_table(divisor: &[Slice]) -> Vec<Vec<Slice>> {
    let mut steps = Vec::with_capacity(STEP_COUNT);
    let mut step = divisor.to_vec();
    for _ in 0..STEP_COUNT {
        let next = add(&step, &step);
        steps.push(step);
        step = next;
    }
    steps
}

/// Truncating long division of two magnitudes, returning the quotient and
/// the remainder.
///
/// The dividend is consumed one slice at a time from the most significant
/// end. Each quotient slice is found greedily against a table of the divisor
/// doubled up to 2^29 times, so every slice costs at most thirty
/// subtractions regardless of the quotient's value.
///
/// # Panics
///
/// Panics in debug builds if `divisor` is zero.
pub(crate) fn div_rem(dividend: &[Slice], divisor: &[Slice]) -> (Vec<Slice>, Vec<Slice>) {
    debug_assert!(!divisor.is_empty(), "division by a zero magnitude");

    if compare(dividend, divisor) == Ordering::Less {
        return (Vec::new(), dividend.to_vec());
    }

    tracing::trace!(
        dividend_slices = dividend.len(),
        divisor_slices = divisor.len(),
        "long division"
    );

    let steps = step_table(divisor);
    let mut quotient = vec![0; dividend.len()];
    let mut remainder: Vec<Slice> = Vec::with_capacity(divisor.len() + 1);

    for (i, &slice) in dividend.iter().enumerate().rev() {
        // remainder = remainder * SLICE_SIZE + slice
        if !remainder.is_empty() || slice != 0 {
            remainder.insert(0, slice);
        }

        let mut digit: Slice = 0;
        for (k, step) in steps.iter().enumerate().rev() {
            if compare(&remainder, step) != Ordering::Less {
                remainder = sub(&remainder, step);
                digit += 1 << k;
            }
        }
        debug_assert!(digit <= SLICE_MAX);
        quotient[i] = digit;
    }

    trim(&mut quotient);
    (quotient, remainder)
}
