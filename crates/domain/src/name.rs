//! DNS name helpers: normalization between stored (no trailing dot) and
//! fully-qualified forms, and the case-insensitive, wildcard-aware label
//! comparison used by the wildcard search.

/// Removes at most one trailing dot. The root name stays `"."`.
pub fn strip_fqdn(name: &str) -> &str {
    if name == "." {
        return name;
    }
    name.strip_suffix('.').unwrap_or(name)
}

/// Rewrites a stored owner name to its fully-qualified form.
pub fn to_fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Label-wise comparison of two dot-stripped names. A `*` label on
/// either side matches any single label, but the label counts must
/// still be equal. The root name matches anything.
pub fn wildcard_match(query: &str, pattern: &str) -> bool {
    if query == "." || pattern == "." {
        return true;
    }

    let q: Vec<&str> = query.split('.').collect();
    let p: Vec<&str> = pattern.split('.').collect();

    if q.len() != p.len() {
        return false;
    }

    q.iter().zip(p.iter()).all(|(a, b)| labels_equal(a, b))
}

fn labels_equal(a: &str, b: &str) -> bool {
    if a == "*" || b == "*" {
        return true;
    }

    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }

    // Back-to-front, mirroring the reference matcher. Not observable
    // from the outside but kept for consistency.
    for i in (0..a.len()).rev() {
        if a[i].to_ascii_lowercase() != b[i].to_ascii_lowercase() {
            return false;
        }
    }
    true
}
