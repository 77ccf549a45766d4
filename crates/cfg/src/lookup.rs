//! Keyword lookup: turning a raw `name=value` identifier into a descriptor.
//!
//! The original implementation scans the keyword table linearly on every
//! lookup, splitting off a `left`/`right` prefix and retrying as needed. We
//! keep the exact match order (bare name, then leftright-prefixed, then
//! `x-`/`X-` comment fallback) but precompute two lookup maps once, at first
//! use, instead of rescanning the table on every call — see the redesign
//! note this carries forward from the source material.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::keyword::{KeywordDef, COMMENT_KEYWORD, KEYWORDS};
use crate::validity::Validity;

/// Which endpoint a `left`/`right`-prefixed keyword addressed, if any.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    None,
    Left,
    Right,
}

struct KeywordIndex {
    /// Non-leftright keywords, by their literal name.
    bare: HashMap<&'static str, &'static KeywordDef>,
    /// Leftright keywords, keyed by the name with the `left`/`right` prefix
    /// stripped (the empty string covers bare `left=`/`right=`).
    leftright: HashMap<&'static str, &'static KeywordDef>,
}

fn build_index() -> KeywordIndex {
    let mut bare = HashMap::default();
    let mut leftright = HashMap::default();
    for kw in KEYWORDS {
        if kw.validity.contains(Validity::LEFTRIGHT) {
            leftright.insert(kw.name, kw);
        } else {
            bare.insert(kw.name, kw);
        }
    }
    KeywordIndex { bare, leftright }
}

static INDEX: LazyLock<KeywordIndex> = LazyLock::new(build_index);

/// Split a candidate identifier into an optional `left`/`right` prefix and
/// the remaining suffix, the way the original prefix-stripping scan does.
fn strip_side(s: &str) -> Option<(Side, &str)> {
    if let Some(rest) = s.strip_prefix("left") {
        Some((Side::Left, rest))
    } else if let Some(rest) = s.strip_prefix("right") {
        Some((Side::Right, rest))
    } else {
        None
    }
}

/// Look up `name` against the keyword table.
///
/// Returns the matching descriptor plus which side (if any) it addressed.
/// `None` means the name is genuinely unknown and parsing should fail with
/// an "unknown keyword" diagnostic.
pub fn lookup(name: &str) -> Option<(&'static KeywordDef, Side)> {
    let lower = name.to_ascii_lowercase();
    if let Some(kw) = INDEX.bare.get(lower.as_str()) {
        return Some((kw, Side::None));
    }
    if let Some((side, suffix)) = strip_side(&lower) {
        if let Some(kw) = INDEX.leftright.get(suffix) {
            return Some((kw, side));
        }
    }
    if lower.starts_with("x-") || lower.starts_with("x_") {
        return Some((&COMMENT_KEYWORD, Side::None));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_keyword_matches() {
        let (kw, side) = lookup("authby").expect("authby is a real keyword");
        assert_eq!(kw.name, "authby");
        assert_eq!(side, Side::None);
    }

    #[test]
    fn leftright_prefix_matches_and_reports_side() {
        let (kw, side) = lookup("leftsubnet").expect("leftsubnet resolves to subnet");
        assert_eq!(kw.name, "subnet");
        assert_eq!(side, Side::Left);

        let (kw, side) = lookup("rightsubnet").expect("rightsubnet resolves to subnet");
        assert_eq!(kw.name, "subnet");
        assert_eq!(side, Side::Right);
    }

    #[test]
    fn bare_left_and_right_match_the_host_entry() {
        let (kw, side) = lookup("left").expect("bare left is the host keyword");
        assert_eq!(kw.name, "");
        assert_eq!(side, Side::Left);

        let (kw, side) = lookup("right").expect("bare right is the host keyword");
        assert_eq!(side, Side::Right);
    }

    #[test]
    fn x_prefixed_names_are_comments() {
        let (kw, _) = lookup("x-my-private-note").expect("x- prefix is always accepted");
        assert_eq!(kw.name, "x-comment");
        let (kw, _) = lookup("X_another_note").expect("X_ prefix is case-insensitively accepted");
        assert_eq!(kw.name, "x-comment");
    }

    #[test]
    fn unknown_keyword_is_none() {
        assert!(lookup("not-a-real-keyword").is_none());
    }

    #[test]
    fn dns_match_id_without_trailing_comma_does_not_match() {
        assert!(lookup("dns-match-id").is_none());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let (kw, side) = lookup("Authby").expect("mixed case still resolves");
        assert_eq!(kw.name, "authby");
        assert_eq!(side, Side::None);

        let (kw, _) = lookup("AUTHBY").expect("all-uppercase still resolves");
        assert_eq!(kw.name, "authby");

        let (kw, side) = lookup("LeftSubnet").expect("mixed-case leftright prefix still resolves");
        assert_eq!(kw.name, "subnet");
        assert_eq!(side, Side::Left);
    }
}
