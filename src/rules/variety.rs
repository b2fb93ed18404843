//! Character variety rules - uppercase, digit and special character presence.

/// Characters accepted by the special-character rule.
pub const SPECIAL_CHARS: [char; 8] = ['!', '@', '#', '$', '%', '^', '&', '*'];

pub const UPPERCASE_MESSAGE: &str = "A senha precisa ter pelo menos 1 letra maiúscula.";
pub const DIGIT_MESSAGE: &str = "A senha precisa ter pelo menos 1 número.";
pub const SPECIAL_MESSAGE: &str =
    "A senha precisa ter pelo menos 1 caractere especial (ex: !@#$%^&*).";

/// At least one character in `A-Z`.
pub fn has_uppercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_uppercase())
}

/// At least one character in `0-9`.
pub fn has_digit(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_digit())
}

/// At least one character from [`SPECIAL_CHARS`].
pub fn has_special(pwd: &str) -> bool {
    pwd.chars().any(|c| SPECIAL_CHARS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_missing() {
        assert!(!has_uppercase("lowercase123!"));
    }

    #[test]
    fn test_uppercase_ascii_only() {
        assert!(!has_uppercase("ÁÉÍÓÚ"));
        assert!(has_uppercase("áéZ"));
    }

    #[test]
    fn test_digit_missing() {
        assert!(!has_digit("NoNumbers!"));
    }

    #[test]
    fn test_digit_ascii_only() {
        // Arabic-Indic digit three
        assert!(!has_digit("٣"));
        assert!(has_digit("x9"));
    }

    #[test]
    fn test_special_each_char_accepted() {
        for c in SPECIAL_CHARS {
            assert!(has_special(&format!("abc{}", c)), "{} should count", c);
        }
    }

    #[test]
    fn test_special_outside_set_rejected() {
        assert!(!has_special("NoSpecial123-_.()?+= "));
    }
}
