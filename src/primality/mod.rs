//! Rule-based primality evaluation.
//!
//! The evaluator is a short-circuiting OR over "not prime" predicates:
//!
//! 1. [`LessThanTwo`]: `n < 2`
//! 2. [`IsEven`]: even and not 2
//! 3. [`IsPerfectSquare`]: `n = k * k` for some `k > 1`
//! 4. [`HasOddDivisor`]: an odd `d` with `3 <= d < sqrt(n)` divides `n`
//!
//! The perfect-square rule covers the divisor equal to `sqrt(n)`, which
//! the half-open divisor search never reaches.
//!
//! # Design
//!
//! Rules are stateless values implementing [`PrimalityRule`]. They hold
//! no reference to a successor; ordering lives entirely in the
//! evaluator's rule list, so any rule can be reused, reordered or
//! checked on its own via [`check_strategy`].

mod config;
mod engine;
mod error;
mod rules;
mod types;

pub use config::{EvaluatorConfig, RuleKind};
pub use engine::{check_strategy, is_prime, PrimalityEvaluator, Verdict};
pub use error::ConfigError;
pub use rules::{
    isqrt, standard_rules, FnRule, HasOddDivisor, IsEven, IsPerfectSquare, LessThanTwo,
};
pub use types::PrimalityRule;
