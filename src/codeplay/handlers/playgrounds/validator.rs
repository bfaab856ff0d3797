//! Pure field validators for playground entries.
//!
//! Trimming happens at the call site, never here; these checks see each
//! value exactly as it will be stored.

use regex::Regex;

use super::{MAX_NAME_LENGTH, MAX_PYGMENTS_LANGUAGE_LENGTH, MAX_URL_PREFIX_LENGTH};

/// Display label check: length only, any characters allowed.
pub(super) fn check_name(value: &str) -> Result<(), String> {
    check_capped_string("name", value, MAX_NAME_LENGTH)
}

/// Language tag check: restricted character set, then length.
///
/// The tag is deliberately not matched against the set of languages pygments
/// knows about, so realms can hook up playgrounds for custom "languages".
/// The empty string passes; there is no minimum length.
pub(super) fn check_pygments_language(value: &str) -> Result<(), String> {
    let valid = Regex::new(r"^[ A-Za-z0-9_+./#-]*$").is_ok_and(|regex| regex.is_match(value));
    if !valid {
        return Err("Invalid characters in pygments language".to_string());
    }
    check_capped_string("pygments_language", value, MAX_PYGMENTS_LANGUAGE_LENGTH)
}

/// URL template check: syntax and length only.
///
/// Presence of a substitution placeholder is not enforced; link construction
/// is owned by the caller that expands the template.
pub(super) fn check_url_prefix(value: &str) -> Result<(), String> {
    check_capped_string("url_prefix", value, MAX_URL_PREFIX_LENGTH)?;
    match url::Url::parse(value) {
        Ok(_) => Ok(()),
        Err(_) => Err("url_prefix is not a URL".to_string()),
    }
}

fn check_capped_string(field: &str, value: &str, max_length: usize) -> Result<(), String> {
    if value.chars().count() > max_length {
        return Err(format!(
            "{field} is too long (limit: {max_length} characters)"
        ));
    }
    Ok(())
}
