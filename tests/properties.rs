use fixed_big_num::BigInt;
use proptest::prelude::*;

/// Wide enough for any product of two `i64` values.
type Big = BigInt<40>;

fn big(n: i128) -> Big {
    n.to_string().parse().unwrap()
}

/// Decimal operands up to 18 digits, including runs of zero blocks that
/// random `i64` values rarely hit.
fn decimal() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("0".to_string()),
        "-?[1-9][0-9]{0,17}",
        "-?[1-9]0{3,12}[0-9]{0,4}",
        "-?9{1,18}",
        "-?10{4,17}",
    ]
}

proptest! {
    #[test]
    fn prop_canonical_text_round_trips(s in "-?[1-9][0-9]{0,39}") {
        let value: Big = s.parse().unwrap();
        prop_assert_eq!(value.to_string(), s);
    }

    #[test]
    fn prop_leading_zeros_are_dropped(zeros in 0usize..10, n in any::<u32>()) {
        let text = format!("+{}{}", "0".repeat(zeros), n);
        let value: Big = text.parse().unwrap();
        prop_assert_eq!(value.to_string(), n.to_string());
    }

    #[test]
    fn prop_add_matches_native(a in any::<i64>(), b in any::<i64>()) {
        let sum = big(a as i128) + big(b as i128);
        prop_assert_eq!(sum.to_string(), (a as i128 + b as i128).to_string());
    }

    #[test]
    fn prop_sub_matches_native(a in any::<i64>(), b in any::<i64>()) {
        let diff = big(a as i128) - big(b as i128);
        prop_assert_eq!(diff.to_string(), (a as i128 - b as i128).to_string());
    }

    #[test]
    fn prop_mul_matches_native(a in any::<i64>(), b in any::<i64>()) {
        let product = big(a as i128) * big(b as i128);
        prop_assert_eq!(product.to_string(), (a as i128 * b as i128).to_string());
    }

    #[test]
    fn prop_decimal_operands_match_native(a in decimal(), b in decimal()) {
        let (x, y): (Big, Big) = (a.parse().unwrap(), b.parse().unwrap());
        let (m, n): (i128, i128) = (a.parse().unwrap(), b.parse().unwrap());
        prop_assert_eq!((&x + &y).to_string(), (m + n).to_string());
        prop_assert_eq!((&x - &y).to_string(), (m - n).to_string());
        prop_assert_eq!((&x * &y).to_string(), (m * n).to_string());
        let mut acc = x.clone();
        acc.try_mul_assign(&y).unwrap();
        acc.try_sub_assign(&x).unwrap();
        prop_assert_eq!(acc.to_string(), (m * n - m).to_string());
    }

    #[test]
    fn prop_add_laws(a in any::<i64>(), b in any::<i64>()) {
        let (a, b) = (big(a as i128), big(b as i128));
        prop_assert_eq!(&a + &b, &b + &a);
        let zero = &a + &(-&a);
        prop_assert!(zero.is_zero() && !zero.is_negative());
        prop_assert!((&a - &a).is_zero());
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn prop_mul_identities(a in any::<i64>()) {
        let a = big(a as i128);
        let zero = Big::zero();
        let one = big(1);
        prop_assert!((&a * &zero).is_zero());
        prop_assert!(!(&zero * &a).is_negative());
        prop_assert_eq!(&a * &one, a);
    }

    #[test]
    fn prop_order_matches_native(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(big(a as i128).cmp(&big(b as i128)), a.cmp(&b));
        prop_assert_eq!(big(a as i128) == big(b as i128), a == b);
    }

    #[test]
    fn prop_inc_dec_inverse(a in any::<i64>()) {
        let original = big(a as i128);
        let mut value = original.clone();
        value.inc().unwrap();
        value.dec().unwrap();
        prop_assert_eq!(&value, &original);
        value.dec().unwrap();
        value.inc().unwrap();
        prop_assert_eq!(value, original);
    }

    #[test]
    fn prop_native_round_trip(a in any::<i64>()) {
        let value = Big::try_from(a).unwrap();
        prop_assert_eq!(i64::try_from(&value).unwrap(), a);
        prop_assert_eq!(value.to_string(), a.to_string());
    }

    #[test]
    fn prop_overflow_is_reported(a in 1u64..=99_999_999, b in 1u64..=99_999_999) {
        let x = BigInt::<8>::try_from(a).unwrap();
        let y = BigInt::<8>::try_from(b).unwrap();
        let exact = a + b;
        match x.checked_add(&y) {
            Ok(sum) => prop_assert_eq!(sum.to_string(), exact.to_string()),
            Err(err) => {
                prop_assert!(err.is_overflow());
                prop_assert!(exact > 99_999_999);
            }
        }
        let exact = a as u128 * b as u128;
        match x.checked_mul(&y) {
            Ok(product) => prop_assert_eq!(product.to_string(), exact.to_string()),
            Err(err) => {
                prop_assert!(err.is_overflow());
                prop_assert!(exact > 99_999_999);
            }
        }
    }
}
