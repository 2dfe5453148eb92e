//! Errors raised while building an evaluator from configuration.

use super::config::RuleKind;

/// Invalid evaluator configuration.
///
/// Evaluation itself never fails; only the rule selection can be wrong.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown rule name: {0:?}")]
    UnknownRule(String),

    #[error("rule set is empty")]
    EmptyRuleSet,

    #[error("rule {0} listed more than once")]
    DuplicateRule(RuleKind),
}
