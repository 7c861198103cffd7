use crate::types::names::DerivedNames;

const FULL_SLUG_PREFIX: &str = "wptravelengine";
const ROOT_NAMESPACE: &str = "WPTravelEngine";

/// Derive every naming convention from the raw addon name.
///
/// Pure and deterministic: the output depends only on `addon_name` and
/// `is_gateway`. An empty name passes through as empty strings; callers
/// reject blank input before getting here.
pub fn derive(addon_name: &str, is_gateway: bool) -> DerivedNames {
    let without_prefix = strip_product_prefix(addon_name);
    let clean_name = if is_gateway {
        strip_gateway_suffix(without_prefix)
    } else {
        without_prefix.to_string()
    };

    let slug = separated_lower(&clean_name, '-');
    let function_slug = separated_lower(&clean_name, '_');

    let full_slug = if is_gateway {
        format!("{}-{}-payment", FULL_SLUG_PREFIX, slug)
    } else {
        format!("{}-{}", FULL_SLUG_PREFIX, slug)
    };

    let namespace = format!("{}{}", ROOT_NAMESPACE, pascal_case(&clean_name));
    let constant = slug.replace('-', "_").to_uppercase();
    let settings_key = slug
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .collect::<String>();
    let gateway_id = if is_gateway {
        format!("{}_enable", slug.replace('-', "_"))
    } else {
        String::new()
    };

    DerivedNames {
        slug,
        full_slug,
        function_slug,
        namespace,
        constant,
        settings_key,
        gateway_id,
        title: clean_name,
    }
}

/// Strips a leading "WP Travel Engine - " product prefix, case-insensitive,
/// tolerant of repeated whitespace between words and of a missing space
/// around the dash. Returns the input unchanged when the prefix is absent.
fn strip_product_prefix(name: &str) -> &str {
    let mut rest = name;
    for (i, word) in ["wp", "travel", "engine"].iter().enumerate() {
        if i > 0 {
            let trimmed = rest.trim_start();
            if trimmed.len() == rest.len() {
                return name;
            }
            rest = trimmed;
        }
        match rest.get(..word.len()) {
            Some(head) if head.eq_ignore_ascii_case(word) => rest = &rest[word.len()..],
            _ => return name,
        }
    }
    match rest.trim_start().strip_prefix('-') {
        Some(tail) => tail.trim_start(),
        None => name,
    }
}

/// Removes a trailing "Payment Gateway", "Gateway", or "Payment" from a
/// gateway addon name, case-insensitive, then trims the remainder.
fn strip_gateway_suffix(name: &str) -> String {
    for suffix in ["payment gateway", "gateway", "payment"] {
        if let Some(stripped) = strip_suffix_words(name.trim_end(), suffix) {
            return stripped.trim().to_string();
        }
    }
    name.trim().to_string()
}

/// Case-insensitive suffix match where a single space in `suffix` matches a
/// run of whitespace in `value`.
fn strip_suffix_words<'a>(value: &'a str, suffix: &str) -> Option<&'a str> {
    let mut rest = value;
    for (i, word) in suffix.split(' ').rev().enumerate() {
        if i > 0 {
            let trimmed = rest.trim_end();
            if trimmed.len() == rest.len() {
                return None;
            }
            rest = trimmed;
        }
        let cut = rest.len().checked_sub(word.len())?;
        match rest.get(cut..) {
            Some(tail) if tail.eq_ignore_ascii_case(word) => rest = &rest[..cut],
            _ => return None,
        }
    }
    Some(rest)
}

/// Lowercases `value`, replacing every run of non-alphanumeric characters
/// with a single `sep` and dropping leading/trailing separators.
fn separated_lower(value: &str, sep: char) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending = false;
    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            if pending && !out.is_empty() {
                out.push(sep);
            }
            pending = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending = true;
        }
    }
    out
}

/// Capitalizes each word boundary (space, hyphen, underscore), removes the
/// separators, and keeps the rest of each word as written.
fn pascal_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut boundary = true;
    for c in value.chars() {
        if matches!(c, ' ' | '-' | '_') {
            boundary = true;
        } else if boundary {
            out.extend(c.to_uppercase());
            boundary = false;
        } else {
            out.push(c);
        }
    }
    out
}
