//! Route pattern matching for permission grants.

/// Check whether a permission `pattern` governs a concrete `route`.
///
/// Matches when the two are equal, or when `route` is a path-segment
/// descendant of `pattern`:
///
/// Pattern: "/product"
/// Matches: "/product", "/product/location"
/// Rejects: "/productX", "/Product"
///
/// No wildcard syntax and no trailing-slash normalization.
pub fn match_route(pattern: &str, route: &str) -> bool {
    match route.strip_prefix(pattern) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
