//! Primitive field rules shared by the forms.

use url::Url;

/// At least `min` characters.
pub(crate) fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Syntactic email check.
///
/// Local part: letters, digits and `_ ' + - .`, not starting with a dot and
/// not ending with `'` or `.`. Domain: one or more labels of letters, digits
/// and hyphens (not starting with a hyphen) followed by an alphabetic TLD of
/// two or more letters. Consecutive dots are rejected anywhere.
pub(crate) fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if value.contains("..") || local.is_empty() || local.starts_with('.') {
        return false;
    }

    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.'));
    let last_ok = local
        .chars()
        .last()
        .is_some_and(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-'));
    if !local_ok || !last_ok {
        return false;
    }

    let Some((labels, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    let labels_ok = labels.split('.').all(|label| {
        let mut chars = label.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    tld_ok && labels_ok
}

/// Absolute URL as understood by a WHATWG URL parser.
pub(crate) fn is_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}
