//! Built-in not-prime rules.
//!
//! Each rule answers one question about its input and never looks at
//! the others. [`standard_rules`] returns them in the order the
//! evaluator applies by default: cheapest and most discriminating first.

use std::fmt;

use super::types::PrimalityRule;

/// Exact integer square root: the largest `r` with `r * r <= n`.
///
/// Returns `None` for negative inputs. The `f64` estimate is corrected
/// with `i128` arithmetic, so the result is exact over all of `i64`.
///
/// # Examples
///
/// ```
/// use prime_rules::primality::isqrt;
///
/// assert_eq!(isqrt(80), Some(8));
/// assert_eq!(isqrt(81), Some(9));
/// assert_eq!(isqrt(-1), None);
/// ```
pub fn isqrt(n: i64) -> Option<i64> {
    if n < 0 {
        return None;
    }
    let target = i128::from(n);
    let mut root = (n as f64).sqrt() as i128;
    while root * root > target {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= target {
        root += 1;
    }
    i64::try_from(root).ok()
}

/// Rejects everything below 2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LessThanTwo;

impl PrimalityRule for LessThanTwo {
    fn name(&self) -> &str {
        "LessThanTwo"
    }

    fn not_prime(&self, n: i64) -> bool {
        n < 2
    }
}

/// Rejects even numbers other than 2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsEven;

impl PrimalityRule for IsEven {
    fn name(&self) -> &str {
        "IsEven"
    }

    fn not_prime(&self, n: i64) -> bool {
        n != 2 && n % 2 == 0
    }
}

/// Rejects perfect squares `k * k` with `k > 1`.
///
/// Decided with [`isqrt`] rather than by comparing a float root with its
/// floor, which misreports large non-squares as squares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsPerfectSquare;

impl PrimalityRule for IsPerfectSquare {
    fn name(&self) -> &str {
        "IsPerfectSquare"
    }

    fn not_prime(&self, n: i64) -> bool {
        matches!(isqrt(n), Some(root) if root > 1 && root * root == n)
    }
}

/// Rejects numbers with an odd divisor `d` where `3 <= d < sqrt(n)`.
///
/// The bound is the real square root, exclusive. For a non-square `n`
/// that is every odd `d <= isqrt(n)`; for a perfect square the root
/// itself is skipped and left to [`IsPerfectSquare`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HasOddDivisor;

impl PrimalityRule for HasOddDivisor {
    fn name(&self) -> &str {
        "HasOddDivisor"
    }

    fn not_prime(&self, n: i64) -> bool {
        let Some(root) = isqrt(n) else {
            return false;
        };
        let end = if root * root == n { root } else { root + 1 };
        (3..end).step_by(2).any(|d| n % d == 0)
    }
}

/// A named closure used as a rule.
///
/// # Examples
///
/// ```
/// use prime_rules::primality::{FnRule, PrimalityEvaluator};
///
/// let evaluator = PrimalityEvaluator::standard()
///     .with_rule(FnRule::new("BelowHundred", |n: i64| n >= 100));
///
/// assert!(evaluator.is_prime(97));
/// assert!(!evaluator.is_prime(101));
/// ```
pub struct FnRule<F> {
    name: String,
    predicate: F,
}

impl<F> FnRule<F>
where
    F: Fn(i64) -> bool + Send + Sync,
{
    /// Wraps `predicate`; it must return `true` only for inputs it proves not prime.
    pub fn new(name: impl Into<String>, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

impl<F> PrimalityRule for FnRule<F>
where
    F: Fn(i64) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn not_prime(&self, n: i64) -> bool {
        (self.predicate)(n)
    }
}

impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule").field("name", &self.name).finish()
    }
}

static STANDARD_RULES: [&dyn PrimalityRule; 4] =
    [&LessThanTwo, &IsEven, &IsPerfectSquare, &HasOddDivisor];

/// The canonical rule list, in evaluation order.
pub fn standard_rules() -> &'static [&'static dyn PrimalityRule] {
    &STANDARD_RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isqrt_small_values() {
        let expected = [0, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3];
        for (n, &root) in expected.iter().enumerate() {
            assert_eq!(isqrt(n as i64), Some(root), "isqrt({n})");
        }
    }

    #[test]
    fn test_isqrt_extremes() {
        assert_eq!(isqrt(i64::MAX), Some(3_037_000_499));
        assert_eq!(isqrt(i64::MIN), None);
        assert_eq!(isqrt(-1), None);
    }

    #[test]
    fn test_isqrt_around_large_square() {
        // (2^31 - 1)^2 and its neighbours, where the f64 root is inexact
        let k: i64 = 2_147_483_647;
        let sq = k * k;
        assert_eq!(isqrt(sq), Some(k));
        assert_eq!(isqrt(sq - 1), Some(k - 1));
        assert_eq!(isqrt(sq + 1), Some(k));
    }

    #[test]
    fn test_less_than_two() {
        for n in [i64::MIN, -7, -1, 0, 1] {
            assert!(LessThanTwo.not_prime(n), "{n} should be rejected");
        }
        for n in [2, 3, 4, 1_000] {
            assert!(!LessThanTwo.not_prime(n), "{n} should pass");
        }
    }

    #[test]
    fn test_is_even_special_cases_two() {
        assert!(!IsEven.not_prime(2));
        assert!(IsEven.not_prime(4));
        assert!(IsEven.not_prime(86));
        assert!(IsEven.not_prime(0));
        assert!(IsEven.not_prime(-2));
        assert!(!IsEven.not_prime(3));
        assert!(!IsEven.not_prime(-3));
    }

    #[test]
    fn test_is_perfect_square() {
        for n in [4, 9, 25, 81, 3_037_000_499 * 3_037_000_499] {
            assert!(IsPerfectSquare.not_prime(n), "{n} is a square");
        }
        for n in [0, 1, 2, 3, 8, 10, 80, 82, -9] {
            assert!(!IsPerfectSquare.not_prime(n), "{n} is not a square > 1");
        }
    }

    #[test]
    fn test_perfect_square_large_non_square() {
        // f64 sqrt of this rounds to an integer; the exact check must not
        let n = 3_037_000_499 * 3_037_000_499 - 1;
        assert!(!IsPerfectSquare.not_prime(n));
    }

    #[test]
    fn test_odd_divisor_found() {
        assert!(HasOddDivisor.not_prime(21));
        assert!(HasOddDivisor.not_prime(15));
        assert!(HasOddDivisor.not_prime(35));
        assert!(HasOddDivisor.not_prime(3 * 1_000_003));
    }

    #[test]
    fn test_odd_divisor_skips_exact_root() {
        // 9 = 3 * 3 and 49 = 7 * 7: the only divisor is the root itself
        assert!(!HasOddDivisor.not_prime(9));
        assert!(!HasOddDivisor.not_prime(49));
        // 75 = 3 * 25 has 3 < sqrt(75)
        assert!(HasOddDivisor.not_prime(75));
    }

    #[test]
    fn test_odd_divisor_inconclusive_for_primes_and_small_inputs() {
        for n in [i64::MIN, -15, 0, 1, 2, 3, 5, 7, 29, 953, 2309] {
            assert!(!HasOddDivisor.not_prime(n), "{n} has no odd divisor below its root");
        }
    }

    #[test]
    fn test_fn_rule() {
        let rule = FnRule::new("MultipleOfFive", |n: i64| n != 5 && n % 5 == 0);
        assert_eq!(rule.name(), "MultipleOfFive");
        assert!(rule.not_prime(25));
        assert!(!rule.not_prime(5));
        assert!(format!("{rule:?}").contains("MultipleOfFive"));
    }

    #[test]
    fn test_standard_rules_order() {
        let names: Vec<&str> = standard_rules().iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec!["LessThanTwo", "IsEven", "IsPerfectSquare", "HasOddDivisor"]
        );
    }
}
