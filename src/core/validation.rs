//! Input validation for secrets ids.

use crate::error::{ResolveError, Result};

/// Whether `ch` may not appear in a single file name on this platform.
#[cfg(windows)]
pub fn is_invalid_file_name_char(ch: char) -> bool {
    matches!(ch, '"' | '<' | '>' | '|' | ':' | '*' | '?' | '\\' | '/') || (ch as u32) < 32
}

/// Whether `ch` may not appear in a single file name on this platform.
#[cfg(not(windows))]
pub fn is_invalid_file_name_char(ch: char) -> bool {
    matches!(ch, '/' | '\0')
}

/// Validate a user secrets id.
///
/// The id becomes a directory name, so it must be non-empty and free of
/// characters the host file system rejects in a path component.
///
/// # Errors
///
/// - `ResolveError::InvalidArgument` if `id` is empty.
/// - `ResolveError::InvalidIdentifier` for the first illegal character,
///   with its zero-based character index.
pub fn validate_secrets_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(ResolveError::InvalidArgument.into());
    }

    if let Some((index, ch)) = id
        .chars()
        .enumerate()
        .find(|(_, ch)| is_invalid_file_name_char(*ch))
    {
        return Err(ResolveError::InvalidIdentifier { ch, index }.into());
    }

    Ok(())
}
