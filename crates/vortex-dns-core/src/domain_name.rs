use crate::FilterError;

/// RFC1035 limit for a full name
const MAX_DOMAIN_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

/// Normalizes a raw domain name to its canonical lowercase form.
///
/// Surrounding whitespace, one trailing dot and mixed case are accepted
/// and folded away. Everything else has to look like a plausible
/// hostname: dot-separated labels of `[a-z0-9-]` with no hyphen at
/// either edge, at least two labels, and an alphabetic TLD of two or
/// more characters.
pub fn normalize_domain(raw: &str) -> Result<String, FilterError> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    let domain = trimmed.to_ascii_lowercase();

    if domain.is_empty() || domain.len() > MAX_DOMAIN_LENGTH {
        return Err(FilterError::InvalidDomain(raw.to_string()));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(FilterError::InvalidDomain(raw.to_string()));
    }
    for label in &labels {
        let valid = !label.is_empty()
            && label.len() <= MAX_LABEL_LENGTH
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|byte| byte.is_ascii_alphanumeric() || byte == b'-');
        if !valid {
            return Err(FilterError::InvalidDomain(raw.to_string()));
        }
    }

    // Bad TLD: 'example.b' or 'example.t3st'
    let tld = labels[labels.len() - 1];
    if tld.len() < 2 || !tld.bytes().all(|byte| byte.is_ascii_alphabetic()) {
        return Err(FilterError::InvalidDomain(raw.to_string()));
    }

    Ok(domain)
}
