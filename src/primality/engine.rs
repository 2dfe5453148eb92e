//! Rule composition engine.
//!
//! # Algorithm
//!
//! 1. Apply each rule to the input, in list order
//! 2. Stop at the first rule that reports "not prime" and return `false`
//! 3. If every rule is inconclusive, return `true`
//!
//! This is a short-circuiting OR over the rule predicates, negated. No
//! rule holds state, so an evaluator can be shared across threads and
//! called any number of times with the same answer.

use std::fmt;
use std::ops::Range;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::EvaluatorConfig;
use super::error::ConfigError;
use super::rules::standard_rules;
use super::types::PrimalityRule;

/// Returns `true` if `n` is prime, using the canonical rule set.
///
/// Never panics; every `i64` has an answer. Inputs below 2 are not prime.
///
/// # Examples
///
/// ```
/// use prime_rules::primality::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(953));
/// assert!(!is_prime(1));
/// assert!(!is_prime(-7));
/// assert!(!is_prime(81));
/// ```
pub fn is_prime(n: i64) -> bool {
    first_rejection(standard_rules().iter().copied(), n).is_none()
}

/// Applies a single rule on its own.
///
/// Returns `false` when `rule` proves `n` is not prime and `true`
/// otherwise. A `true` here only means this one rule found nothing.
pub fn check_strategy<R: PrimalityRule + ?Sized>(rule: &R, n: i64) -> bool {
    !rule.not_prime(n)
}

fn first_rejection<'r, I>(rules: I, n: i64) -> Option<&'r (dyn PrimalityRule + 'static)>
where
    I: IntoIterator<Item = &'r (dyn PrimalityRule + 'static)>,
{
    let rule = rules.into_iter().find(|rule| rule.not_prime(n))?;
    tracing::trace!(input = n, rule = rule.name(), "rejected as not prime");
    Some(rule)
}

/// Outcome of evaluating one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict<'a> {
    /// The evaluated input.
    pub input: i64,
    /// Name of the rule that rejected the input, if any.
    pub rejected_by: Option<&'a str>,
}

impl Verdict<'_> {
    /// Whether the input is prime.
    pub fn is_prime(&self) -> bool {
        self.rejected_by.is_none()
    }
}

/// Composes an ordered list of [`PrimalityRule`]s into a primality test.
///
/// # Examples
///
/// ```
/// use prime_rules::primality::{IsEven, LessThanTwo, PrimalityEvaluator};
///
/// let evaluator = PrimalityEvaluator::standard();
/// assert!(evaluator.is_prime(29));
/// assert_eq!(evaluator.evaluate(21).rejected_by, Some("HasOddDivisor"));
///
/// let cheap = PrimalityEvaluator::new()
///     .with_rule(LessThanTwo)
///     .with_rule(IsEven);
/// assert_eq!(cheap.rule_names(), vec!["LessThanTwo", "IsEven"]);
/// ```
pub struct PrimalityEvaluator {
    rules: Vec<Box<dyn PrimalityRule>>,
    parallel: bool,
}

impl PrimalityEvaluator {
    /// Creates an evaluator with no rules. It accepts every input until
    /// rules are added.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            parallel: false,
        }
    }

    /// Creates an evaluator with the canonical rule set.
    pub fn standard() -> Self {
        Self::from_validated(&EvaluatorConfig::default())
    }

    /// Creates an evaluator from configuration.
    pub fn from_config(config: &EvaluatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: &EvaluatorConfig) -> Self {
        #[cfg(not(feature = "parallel"))]
        if config.parallel {
            tracing::warn!("parallel evaluation requested but the `parallel` feature is disabled");
        }
        let rules = config.rules.iter().map(|kind| kind.build()).collect();
        tracing::debug!(rules = ?config.rules, parallel = config.parallel, "evaluator built");
        Self {
            rules,
            parallel: config.parallel,
        }
    }

    /// Appends a rule. Rules run in the order they are added.
    pub fn with_rule<R: PrimalityRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Enables or disables parallel batch evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the number of rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Returns `true` if no rule rejects `n`.
    pub fn is_prime(&self, n: i64) -> bool {
        self.rejecting_rule(n).is_none()
    }

    /// Evaluates `n` and reports which rule, if any, rejected it.
    pub fn evaluate(&self, n: i64) -> Verdict<'_> {
        Verdict {
            input: n,
            rejected_by: self.rejecting_rule(n).map(|rule| rule.name()),
        }
    }

    fn rejecting_rule(&self, n: i64) -> Option<&(dyn PrimalityRule + 'static)> {
        first_rejection(self.rules.iter().map(|rule| &**rule), n)
    }

    /// Tests every input, returning results in input order.
    pub fn classify(&self, inputs: &[i64]) -> Vec<bool> {
        #[cfg(feature = "parallel")]
        if self.parallel {
            return inputs.par_iter().map(|&n| self.is_prime(n)).collect();
        }
        inputs.iter().map(|&n| self.is_prime(n)).collect()
    }

    /// Returns the primes in `range`, ascending.
    pub fn primes_in(&self, range: Range<i64>) -> Vec<i64> {
        #[cfg(feature = "parallel")]
        if self.parallel {
            return range.into_par_iter().filter(|&n| self.is_prime(n)).collect();
        }
        range.filter(|&n| self.is_prime(n)).collect()
    }
}

impl Default for PrimalityEvaluator {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for PrimalityEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimalityEvaluator")
            .field("rules", &self.rule_names())
            .field("parallel", &self.parallel)
            .finish()
    }
}
