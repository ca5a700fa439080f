//! Section extraction.
//!
//! A section is the text between `{TAG}` and `{TAG_END}`. Matching is
//! non-greedy per occurrence and spans newlines, so a template may repeat a
//! tag (e.g. two `USER_CONFIG` blocks for a few-shot prompt).

use regex::Regex;

/// Return the trimmed contents of every `{tag}...{tag_END}` block, in document order.
///
/// The tag is matched literally. An absent tag yields an empty vector.
///
/// # Examples
///
/// ```
/// use promptrun::template::extract_sections;
///
/// let text = "{USER_CONFIG} one {USER_CONFIG_END}\n{USER_CONFIG}\ntwo\n{USER_CONFIG_END}";
/// assert_eq!(extract_sections(text, "USER_CONFIG"), vec!["one", "two"]);
/// ```
pub fn extract_sections(text: &str, tag: &str) -> Vec<String> {
    let escaped = regex::escape(tag);
    let pattern = format!(r"(?s)\{{{escaped}\}}(.*?)\{{{escaped}_END\}}");
    // The pattern is built from an escaped literal, so it always compiles.
    let Ok(re) = Regex::new(&pattern) else {
        return Vec::new();
    };

    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect()
}
