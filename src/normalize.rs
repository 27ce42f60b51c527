use std::sync::LazyLock;

use regex::Regex;

const CANONICAL_PREFIX: &str = "https://www.";

// scheme, then "//", then "www.", each optional, anchored at the start
static PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:https?:)?(?://)?(?:www\.)?").unwrap());

/// Rewrite a URL into the `https://www.<rest>` form.
///
/// Pure string transform: nothing is validated, so garbage in gives
/// garbage out with the canonical prefix on the front.
pub fn normalize(raw: &str) -> String {
    let rest = PREFIX_RE.replace(raw, "");
    format!("{}{}", CANONICAL_PREFIX, rest)
}
