//! Core trait for primality rules.

/// A predicate that can prove an integer is not prime.
///
/// `not_prime` returns `true` only when the rule is certain the input is
/// composite (or below 2). Returning `false` means "inconclusive": the
/// evaluator moves on to the next rule.
///
/// Rules must be total over `i64`. Negative numbers, zero and one are
/// valid inputs and must never panic.
///
/// # Examples
///
/// ```
/// use prime_rules::primality::{PrimalityEvaluator, PrimalityRule};
///
/// struct DivisibleBySeven;
///
/// impl PrimalityRule for DivisibleBySeven {
///     fn name(&self) -> &str { "DivisibleBySeven" }
///     fn not_prime(&self, n: i64) -> bool { n != 7 && n % 7 == 0 }
/// }
///
/// let evaluator = PrimalityEvaluator::new().with_rule(DivisibleBySeven);
/// assert!(!evaluator.is_prime(49));
/// assert!(evaluator.is_prime(7));
/// ```
pub trait PrimalityRule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Returns `true` if `n` is certainly not prime for this rule's reason.
    fn not_prime(&self, n: i64) -> bool;
}
