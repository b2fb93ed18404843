//! Password rules
//!
//! Each rule checks one property of the candidate. The order of [`RULES`] is
//! the order failure messages are reported in.

mod length;
mod variety;

use secrecy::{ExposeSecret, SecretString};

pub use length::{has_min_length, MIN_LENGTH, MIN_LENGTH_MESSAGE};
pub use variety::{
    has_digit, has_special, has_uppercase, DIGIT_MESSAGE, SPECIAL_CHARS, SPECIAL_MESSAGE,
    UPPERCASE_MESSAGE,
};

/// Result type for a single rule.
/// - `Some(message)` - Rule failed with message
/// - `None` - Rule passed
pub type RuleResult = Option<&'static str>;

/// A named predicate over the candidate, paired with its failure message.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub message: &'static str,
    check: fn(&str) -> bool,
}

impl Rule {
    /// Runs the predicate against the candidate.
    pub fn apply(&self, candidate: &SecretString) -> RuleResult {
        if (self.check)(candidate.expose_secret()) {
            None
        } else {
            Some(self.message)
        }
    }
}

/// The fixed rule set, in declaration order.
pub static RULES: [Rule; 4] = [
    Rule {
        name: "min_length",
        message: MIN_LENGTH_MESSAGE,
        check: has_min_length,
    },
    Rule {
        name: "uppercase",
        message: UPPERCASE_MESSAGE,
        check: has_uppercase,
    },
    Rule {
        name: "digit",
        message: DIGIT_MESSAGE,
        check: has_digit,
    },
    Rule {
        name: "special",
        message: SPECIAL_MESSAGE,
        check: has_special,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_declaration_order() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(names, ["min_length", "uppercase", "digit", "special"]);
    }

    #[test]
    fn test_rule_apply_returns_message_on_failure() {
        let pwd = SecretString::new("abc".into());
        assert_eq!(RULES[0].apply(&pwd), Some(MIN_LENGTH_MESSAGE));
        assert_eq!(RULES[1].apply(&pwd), Some(UPPERCASE_MESSAGE));
    }

    #[test]
    fn test_rule_apply_passes() {
        let pwd = SecretString::new("Abcdefg1!".into());
        assert!(RULES.iter().all(|r| r.apply(&pwd).is_none()));
    }
}
