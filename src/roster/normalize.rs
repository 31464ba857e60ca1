//! Per-field text normalization. Every function here is pure.

/// Status assigned when the source has none.
pub const DEFAULT_STATUS: &str = "Active";

/// Title-case a string: the first letter of each word is upper-cased, the
/// remaining letters lower-cased. Any non-alphabetic character starts a new
/// word, so `o'brien` becomes `O'Brien`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_alpha = false;
    for c in value.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Trim and lower-case an email address.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Everything after the first `@` that is followed by at least one character.
/// Empty when there is no such `@` or no email at all.
pub fn email_domain(email: Option<&str>) -> String {
    let Some(email) = email else {
        return String::new();
    };
    email
        .match_indices('@')
        .map(|(i, _)| &email[i + 1..])
        .find(|rest| !rest.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// `first + " " + last`, with a missing part treated as empty.
pub fn full_name(first: Option<&str>, last: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default())
}

/// Replace a missing value with `default`.
pub fn fill_missing(value: Option<String>, default: &str) -> String {
    value.unwrap_or_else(|| default.to_string())
}
