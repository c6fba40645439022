//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Canonical decimal strings spanning several slices
    fn big_decimal() -> impl Strategy<Value = String> {
        "0|-?[1-9][0-9]{0,40}"
    }

    fn big_int() -> impl Strategy<Value = Integer> {
        big_decimal().prop_map(|s| s.parse().unwrap())
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    fn is_canonical(r: &Rational) -> bool {
        r.denominator().positive()
            && !r.denominator().is_zero()
            && r.numerator().gcd(r.denominator()).is_one()
    }

    proptest! {
        // Parsing and rendering

        #[test]
        fn integer_string_round_trip(s in big_decimal()) {
            let n: Integer = s.parse().unwrap();
            prop_assert_eq!(n.to_string(), s);
        }

        #[test]
        fn integer_matches_machine_rendering(a in any::<i64>()) {
            prop_assert_eq!(Integer::new(a).to_string(), a.to_string());
            prop_assert_eq!(Integer::new(a).to_i64(), Some(a));
        }

        // Agreement with i128 arithmetic

        #[test]
        fn integer_ops_match_i128(a in any::<i64>(), b in any::<i64>()) {
            let (x, y) = (Integer::new(a), Integer::new(b));
            let (wa, wb) = (i128::from(a), i128::from(b));
            prop_assert_eq!((&x + &y).to_string(), (wa + wb).to_string());
            prop_assert_eq!((&x - &y).to_string(), (wa - wb).to_string());
            prop_assert_eq!((&x * &y).to_string(), (wa * wb).to_string());
            if b != 0 {
                prop_assert_eq!(x.checked_rem(&y).unwrap().to_string(), (wa % wb).to_string());
                if wa.abs() >= wb.abs() {
                    prop_assert_eq!((&x / &y).to_string(), (wa / wb).to_string());
                }
            }
        }

        #[test]
        fn integer_ordering_matches_i64(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(Integer::new(a).cmp(&Integer::new(b)), a.cmp(&b));
        }

        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in big_int(), b in big_int()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn integer_add_associative(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!(
                (&a + &b) + &c,
                a.clone() + (&b + &c)
            );
        }

        #[test]
        fn integer_mul_commutative(a in big_int(), b in big_int()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn integer_distributive(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!(
                &a * &(&b + &c),
                &a * &b + &a * &c
            );
        }

        #[test]
        fn integer_identities(a in big_int()) {
            prop_assert_eq!(&a + &Integer::zero(), a.clone());
            prop_assert_eq!(&a * &Integer::one(), a.clone());
            prop_assert!((&a * &Integer::zero()).is_zero());
            prop_assert_eq!(&a - &a, Integer::zero());
            prop_assert_eq!(a.increment().decrement(), a.clone());
            prop_assert_eq!(a.increment(), &a + &Integer::one());
        }

        #[test]
        fn integer_division_identity(a in big_int(), b in big_int()) {
            prop_assume!(!b.is_zero());
            let (a, b) = if a.abs() >= b.abs() { (a, b) } else { (b, a) };
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(&(&q * &b) + &r, a);
            prop_assert!(r.abs() < b.abs());
        }

        #[test]
        fn integer_total_order(a in big_int(), b in big_int()) {
            let holds = [a < b, a == b, b < a];
            prop_assert_eq!(holds.iter().filter(|&&h| h).count(), 1);
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            // g should divide both a and b
            prop_assert!(a.checked_rem(&g).unwrap().is_zero());
            prop_assert!(b.checked_rem(&g).unwrap().is_zero());
        }

        #[test]
        fn gcd_commutative(a in big_int(), b in big_int()) {
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                &a * &(&b + &c),
                &a * &b + &a * &c
            );
        }

        #[test]
        fn rational_results_are_canonical(a in rational(), b in rational()) {
            prop_assert!(is_canonical(&a));
            prop_assert!(is_canonical(&(&a + &b)));
            prop_assert!(is_canonical(&(&a - &b)));
            prop_assert!(is_canonical(&(&a * &b)));
            prop_assert!(is_canonical(&a.increment()));
            prop_assert!(is_canonical(&a.pow(&Rational::from(3)).unwrap()));
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den).unwrap();
            let inv = a.recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_whole_division(a in small_int(), b in non_zero_int()) {
            let quotient = Rational::from(a).checked_div(&Rational::from(b)).unwrap();
            prop_assert_eq!(quotient, Rational::from_i64(a, b).unwrap());
        }

        #[test]
        fn rational_order_matches_cross_multiplication(a in rational(), b in rational()) {
            let lhs = a.numerator() * b.denominator();
            let rhs = b.numerator() * a.denominator();
            prop_assert_eq!(a.cmp(&b), lhs.cmp(&rhs));
        }

        #[test]
        fn rational_string_round_trip(a in rational()) {
            prop_assert_eq!(a.to_string().parse::<Rational>().unwrap(), a);
        }
    }
}
