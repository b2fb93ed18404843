//! Length rule - checks candidate minimum length.

pub const MIN_LENGTH: usize = 8;

pub const MIN_LENGTH_MESSAGE: &str = "A senha precisa ter no mínimo 8 caracteres.";

/// Checks if the candidate meets the minimum length.
///
/// Length is counted in UTF-16 code units, so `é` counts once and an emoji
/// outside the BMP counts twice.
pub fn has_min_length(pwd: &str) -> bool {
    pwd.encode_utf16().count() >= MIN_LENGTH
}
