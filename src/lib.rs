//! Primality testing built from composable rejection rules.
//!
//! A number is tested by running it through an ordered list of
//! independent rules. Each rule can prove the input is **not** prime for
//! one specific reason; the first rule that does so decides the result.
//! When no rule objects, the input is prime.
//!
//! - **Rules**: [`primality::LessThanTwo`], [`primality::IsEven`],
//!   [`primality::IsPerfectSquare`] and [`primality::HasOddDivisor`],
//!   applied cheapest first.
//! - **Evaluator**: [`primality::PrimalityEvaluator`] composes any rule
//!   list, built-in or user supplied, and reports which rule rejected.
//! - **Configuration**: [`primality::EvaluatorConfig`] selects built-in
//!   rules by name.
//!
//! ```
//! assert!(prime_rules::primality::is_prime(2309));
//! assert!(!prime_rules::primality::is_prime(21));
//! ```

pub mod primality;
