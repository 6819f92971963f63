//! URL slug derivation for category names.

/// Lowercase ASCII alphanumerics joined by single hyphens.
///
/// Every run of other characters collapses to one `-`, and the result
/// never starts or ends with a hyphen. Non-ASCII input may produce an
/// empty slug.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for ch in input.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch);
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
