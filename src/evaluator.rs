//! Password rule evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::rules::RULES;
use crate::verdict::Verdict;

/// Runs every rule against the candidate and collects the failures.
///
/// Rules never short-circuit: each failing rule contributes its message,
/// in declaration order. Any string is accepted, including the empty one.
///
/// # Arguments
/// * `candidate` - The password to check, exactly as received
///
/// # Returns
/// A `Verdict` that is valid when no rule failed.
pub fn evaluate(candidate: &SecretString) -> Verdict {
    let mut errors = Vec::new();

    for rule in RULES.iter() {
        if let Some(message) = rule.apply(candidate) {
            #[cfg(feature = "tracing")]
            tracing::debug!(rule = rule.name, "password rule failed");
            errors.push(message.to_string());
        }
    }

    Verdict::from_errors(errors)
}

/// Convenience wrapper for callers holding a plain `&str`.
pub fn evaluate_str(candidate: &str) -> Verdict {
    evaluate(&SecretString::new(candidate.into()))
}
