//! Ownership token generation.

use uuid::Uuid;

use uuid_filelock_core::error::{LockError, LockResult};

/// Builds a fresh ownership token: `prefix` followed by a random v4 UUID.
///
/// The UUID carries 122 random bits, so two live handles never share a
/// token in practice.
pub fn generate_token(prefix: &str) -> String {
    format!("{prefix}{}", Uuid::new_v4().hyphenated())
}

/// Rejects prefixes that could never survive the trimmed read-back.
///
/// Lock file content is trimmed before comparison, and a token with
/// whitespace in it would be ambiguous to anyone inspecting the file.
pub fn validate_prefix(prefix: &str) -> LockResult<()> {
    if let Some(ch) = prefix.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(LockError::InvalidName(format!(
            "token prefix {prefix:?} contains disallowed character {ch:?}"
        )));
    }
    Ok(())
}
