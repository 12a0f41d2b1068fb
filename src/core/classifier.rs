//! Pure numeric predicates behind the classification endpoint.
//!
//! Prime and perfect checks take the signed integer; Armstrong and digit sum
//! work on the absolute value, so the sign never changes those two.

use crate::domain::model::{Number, Property};

/// Trial division over 6k ± 1 candidates.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// True when `n` equals the sum of its proper divisors.
pub fn is_perfect(n: i64) -> bool {
    if n <= 0 {
        return false;
    }
    proper_divisor_sum(n.unsigned_abs()) == u128::from(n.unsigned_abs())
}

fn proper_divisor_sum(n: u64) -> u128 {
    if n == 1 {
        return 0;
    }

    // 1 pairs with n itself, which is excluded.
    let mut sum: u128 = 1;
    let mut i: u64 = 2;
    while i <= n / i {
        if n % i == 0 {
            let paired = n / i;
            sum += u128::from(i);
            if paired != i {
                sum += u128::from(paired);
            }
        }
        i += 1;
    }
    sum
}

/// True when |n| equals the sum of its digits, each raised to the digit count.
pub fn is_armstrong(n: i64) -> bool {
    let value = n.unsigned_abs();
    let digits = decimal_digits(value);
    let power = digits.len() as u32;

    let sum: u128 = digits.iter().map(|&d| u128::from(d).pow(power)).sum();
    sum == u128::from(value)
}

/// Sum of the decimal digits of |n|.
pub fn digit_sum(n: i64) -> u64 {
    decimal_digits(n.unsigned_abs())
        .into_iter()
        .map(u64::from)
        .sum()
}

/// Property tags in response order, plus the digit sum.
pub fn number_properties(number: &Number) -> (Vec<Property>, u64) {
    let whole = number.truncated();
    let mut properties = Vec::with_capacity(2);

    if is_armstrong(whole) {
        properties.push(Property::Armstrong);
    }

    if whole % 2 != 0 {
        properties.push(Property::Odd);
    } else {
        properties.push(Property::Even);
    }

    (properties, digit_sum(whole))
}

fn decimal_digits(value: u64) -> Vec<u8> {
    value.to_string().bytes().map(|b| b - b'0').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(is_prime(17));
        assert!(is_prime(97));
        assert!(is_prime(7919));
        assert!(!is_prime(1));
        assert!(!is_prime(0));
        assert!(!is_prime(-7));
        assert!(!is_prime(18));
        assert!(!is_prime(25));
        assert!(!is_prime(629)); // 17 * 37
    }

    #[test]
    fn test_is_prime_large_values() {
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(1_000_000_007 * 3));
        assert!(!is_prime(i64::MAX)); // 7^2 * 73 * 127 * 337 * 92737 * 649657
    }

    #[test]
    fn test_is_perfect() {
        assert!(is_perfect(6));
        assert!(is_perfect(28));
        assert!(is_perfect(496));
        assert!(is_perfect(8128));
        assert!(!is_perfect(5));
        assert!(!is_perfect(1));
        assert!(!is_perfect(0));
        assert!(!is_perfect(-6));
        assert!(!is_perfect(i64::MIN));
    }

    #[test]
    fn test_is_perfect_square_divisor_counted_once() {
        // 36: 1+2+3+4+6+9+12+18 = 55; double-counting 6 would give 61.
        assert_eq!(proper_divisor_sum(36), 55);
        assert_eq!(proper_divisor_sum(4), 3);
        assert_eq!(proper_divisor_sum(7), 1);
        assert_eq!(proper_divisor_sum(1), 0);
    }

    #[test]
    fn test_is_armstrong() {
        assert!(is_armstrong(153));
        assert!(is_armstrong(370));
        assert!(is_armstrong(371));
        assert!(is_armstrong(9474));
        assert!(is_armstrong(0));
        assert!(is_armstrong(7));
        assert!(is_armstrong(-153));
        assert!(!is_armstrong(154));
        assert!(!is_armstrong(10));
        assert!(!is_armstrong(i64::MIN));
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(153), 9);
        assert_eq!(digit_sum(371), 11);
        assert_eq!(digit_sum(-5), 5);
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(i64::MIN), 89);
    }

    #[test]
    fn test_number_properties_armstrong_odd() {
        let (properties, sum) = number_properties(&Number::Integer(153));
        assert_eq!(properties, vec![Property::Armstrong, Property::Odd]);
        assert_eq!(sum, 9);
    }

    #[test]
    fn test_number_properties_even_without_armstrong() {
        let (properties, sum) = number_properties(&Number::Integer(28));
        assert_eq!(properties, vec![Property::Even]);
        assert_eq!(sum, 10);
    }

    #[test]
    fn test_number_properties_negative_uses_signed_parity() {
        let (properties, sum) = number_properties(&Number::Integer(-5));
        assert_eq!(properties, vec![Property::Armstrong, Property::Odd]);
        assert_eq!(sum, 5);
    }

    #[test]
    fn test_number_properties_truncates_floats() {
        let (properties, sum) = number_properties(&Number::Float(153.9));
        assert_eq!(properties, vec![Property::Armstrong, Property::Odd]);
        assert_eq!(sum, 9);

        let (properties, sum) = number_properties(&Number::Float(-0.5));
        assert_eq!(properties, vec![Property::Armstrong, Property::Even]);
        assert_eq!(sum, 0);
    }
}
