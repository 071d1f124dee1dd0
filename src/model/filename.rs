use regex::Regex;
use std::sync::LazyLock;

// ASCII whitespace only; non-ASCII spaces are dropped like any other
// non-ASCII character.
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\t\n\x0C\r -]").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\n\x0C\r ]+").expect("valid regex"));
static HYPHENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid regex"));

/// Turn a title into a filename-safe slug.
///
/// Non-ASCII letters are dropped, not transliterated, so a title with no
/// retainable characters yields an empty slug.
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lower, "");
    let hyphenated = WHITESPACE.replace_all(&stripped, "-");
    let collapsed = HYPHENS.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// `NNNN-slug.md`, zero-padded to at least four digits.
pub fn format_filename(number: u32, title: &str) -> String {
    format!("{:04}-{}.md", number, slugify(title))
}
