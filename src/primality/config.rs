//! Evaluator configuration.
//!
//! [`EvaluatorConfig`] selects which built-in rules run, in which order,
//! and whether batch operations may use rayon.

use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;
use super::rules::{HasOddDivisor, IsEven, IsPerfectSquare, LessThanTwo};
use super::types::PrimalityRule;

/// Names one of the built-in rules.
///
/// Parsed from and displayed as kebab-case: `less-than-two`, `is-even`,
/// `is-perfect-square`, `has-odd-divisor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RuleKind {
    LessThanTwo,
    IsEven,
    IsPerfectSquare,
    HasOddDivisor,
}

impl RuleKind {
    /// All built-in rules in canonical evaluation order.
    pub const ALL: [RuleKind; 4] = [
        RuleKind::LessThanTwo,
        RuleKind::IsEven,
        RuleKind::IsPerfectSquare,
        RuleKind::HasOddDivisor,
    ];

    /// The kebab-case name used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::LessThanTwo => "less-than-two",
            RuleKind::IsEven => "is-even",
            RuleKind::IsPerfectSquare => "is-perfect-square",
            RuleKind::HasOddDivisor => "has-odd-divisor",
        }
    }

    /// Instantiates the rule.
    pub fn build(self) -> Box<dyn PrimalityRule> {
        match self {
            RuleKind::LessThanTwo => Box::new(LessThanTwo),
            RuleKind::IsEven => Box::new(IsEven),
            RuleKind::IsPerfectSquare => Box::new(IsPerfectSquare),
            RuleKind::HasOddDivisor => Box::new(HasOddDivisor),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigError::UnknownRule(s.to_string()))
    }
}

/// Configuration for a [`PrimalityEvaluator`](super::PrimalityEvaluator).
///
/// # Examples
///
/// ```
/// use prime_rules::primality::{EvaluatorConfig, PrimalityEvaluator, RuleKind};
///
/// let config = EvaluatorConfig::from_names(&["less-than-two", "is-even"])
///     .unwrap()
///     .with_parallel(true);
/// assert_eq!(config.rules, vec![RuleKind::LessThanTwo, RuleKind::IsEven]);
///
/// let evaluator = PrimalityEvaluator::from_config(&config).unwrap();
/// assert!(!evaluator.is_prime(10));
/// assert!(evaluator.is_prime(9)); // squares are not checked
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvaluatorConfig {
    /// Rules to apply, in order.
    pub rules: Vec<RuleKind>,

    /// Whether batch operations run in parallel.
    ///
    /// Only honoured when the crate is built with the `parallel` feature.
    pub parallel: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            rules: RuleKind::ALL.to_vec(),
            parallel: false,
        }
    }
}

impl EvaluatorConfig {
    /// Builds a configuration from rule names, keeping the given order.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        let rules = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<RuleKind>, _>>()?;
        let config = Self {
            rules,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the rule list.
    pub fn with_rules(mut self, rules: Vec<RuleKind>) -> Self {
        self.rules = rules;
        self
    }

    /// Enables or disables parallel batch evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks that the rule list is non-empty and free of duplicates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.is_empty() {
            return Err(ConfigError::EmptyRuleSet);
        }
        for (i, kind) in self.rules.iter().enumerate() {
            if self.rules[..i].contains(kind) {
                return Err(ConfigError::DuplicateRule(*kind));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = EvaluatorConfig::default();
        assert_eq!(config.rules, RuleKind::ALL.to_vec());
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = EvaluatorConfig::default()
            .with_rules(vec![RuleKind::IsEven])
            .with_parallel(true);

        assert_eq!(config.rules, vec![RuleKind::IsEven]);
        assert!(config.parallel);
    }

    #[test]
    fn test_rule_kind_round_trips_through_names() {
        for kind in RuleKind::ALL {
            assert_eq!(kind.to_string().parse::<RuleKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_rule_kind_parse_is_lenient_on_case_and_whitespace() {
        assert_eq!(" Is-Even ".parse::<RuleKind>(), Ok(RuleKind::IsEven));
    }

    #[test]
    fn test_rule_kind_parse_unknown() {
        assert_eq!(
            "is-odd".parse::<RuleKind>(),
            Err(ConfigError::UnknownRule("is-odd".to_string()))
        );
    }

    #[test]
    fn test_rule_kind_build_matches_name() {
        let names: Vec<String> = RuleKind::ALL
            .iter()
            .map(|kind| kind.build().name().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["LessThanTwo", "IsEven", "IsPerfectSquare", "HasOddDivisor"]
        );
    }

    #[test]
    fn test_from_names_preserves_order() {
        let config = EvaluatorConfig::from_names(&["has-odd-divisor", "less-than-two"]).unwrap();
        assert_eq!(
            config.rules,
            vec![RuleKind::HasOddDivisor, RuleKind::LessThanTwo]
        );
    }

    #[test]
    fn test_from_names_rejects_unknown() {
        let err = EvaluatorConfig::from_names(&["is-even", "sieve"]).unwrap_err();
        assert_eq!(err, ConfigError::UnknownRule("sieve".to_string()));
        assert_eq!(err.to_string(), "unknown rule name: \"sieve\"");
    }

    #[test]
    fn test_validate_empty() {
        let names: [&str; 0] = [];
        assert_eq!(
            EvaluatorConfig::from_names(&names),
            Err(ConfigError::EmptyRuleSet)
        );
    }

    #[test]
    fn test_validate_duplicate() {
        let config = EvaluatorConfig::default().with_rules(vec![
            RuleKind::IsEven,
            RuleKind::LessThanTwo,
            RuleKind::IsEven,
        ]);
        let err = config.validate().unwrap_err();
        assert_eq!(err, ConfigError::DuplicateRule(RuleKind::IsEven));
        assert_eq!(err.to_string(), "rule is-even listed more than once");
    }
}
