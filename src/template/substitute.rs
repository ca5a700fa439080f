//! Placeholder substitution.
//!
//! `{name}` is replaced by the bound value of `name`. Unlike a format-string
//! engine this one is permissive:
//!
//! - `{name}` with no binding is left exactly as written
//! - a `{` without a closing `}` is literal text
//! - there is no `{{` escape; `{{name}` renders as `{` followed by the value
//! - a name may itself contain `}`; the shortest bound name after `{` wins
//!
//! Substitution is a single left-to-right pass over the template. Inserted
//! values are copied to the output and never rescanned, so braces inside a
//! value cannot form new placeholders or swallow a section marker.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Placeholder bindings: name to string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: BTreeMap<String, String>,
}

impl Bindings {
    /// Create an empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to the string form of `value`, replacing any earlier binding.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) -> &mut Self {
        self.values.insert(name.into(), value.to_string());
        self
    }

    /// Builder-style `insert`.
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Bindings
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bindings = Bindings::new();
        for (k, v) in iter {
            bindings.insert(k, v);
        }
        bindings
    }
}

/// Substitute bound placeholders in `text`.
///
/// # Examples
///
/// ```
/// use promptrun::template::{Bindings, substitute};
///
/// let vars = Bindings::new().with("NAME", "A{B}C");
/// let out = substitute("Hi {NAME}, {UNBOUND} stays", &vars);
/// assert_eq!(out, "Hi A{B}C, {UNBOUND} stays");
/// ```
pub fn substitute(text: &str, bindings: &Bindings) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let bound = after_open.match_indices('}').find_map(|(close, _)| {
            bindings
                .get(&after_open[..close])
                .map(|value| (value, &after_open[close + 1..]))
        });

        match bound {
            Some((value, remainder)) => {
                result.push_str(value);
                rest = remainder;
            }
            None => {
                // Not a bound placeholder; keep the brace and rescan after it so
                // `{{NAME}` still finds `{NAME}`.
                result.push('{');
                rest = after_open;
            }
        }
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Bindings {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_simple_substitution() {
        let vars = vars(&[("name", "Alice"), ("greeting", "Hello")]);
        assert_eq!(substitute("{greeting}, {name}!", &vars), "Hello, Alice!");
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(substitute("Just plain text", &Bindings::new()), "Just plain text");
        assert_eq!(substitute("", &Bindings::new()), "");
    }

    #[test]
    fn test_unbound_placeholder_left_verbatim() {
        let vars = vars(&[("A", "1")]);
        assert_eq!(substitute("{A} {UNBOUND} {A}", &vars), "1 {UNBOUND} 1");
    }

    #[test]
    fn test_section_markers_survive() {
        let vars = vars(&[("TOPIC", "addition")]);
        let text = "{SYSTEM_CONFIG}Be brief.{SYSTEM_CONFIG_END}{USER_CONFIG}{TOPIC}{USER_CONFIG_END}";
        assert_eq!(
            substitute(text, &vars),
            "{SYSTEM_CONFIG}Be brief.{SYSTEM_CONFIG_END}{USER_CONFIG}addition{USER_CONFIG_END}"
        );
    }

    #[test]
    fn test_braces_in_value_are_literal() {
        let vars = vars(&[("NAME", "A{B}C"), ("B", "boom")]);
        assert_eq!(substitute("{NAME} and {B}", &vars), "A{B}C and boom");
    }

    #[test]
    fn test_value_that_looks_like_another_placeholder() {
        // Substituting X must not produce a `{Y}` that is then filled in.
        let vars = vars(&[("X", "{Y}"), ("Y", "wrong")]);
        assert_eq!(substitute("[{X}]", &vars), "[{Y}]");
    }

    #[test]
    fn test_value_with_section_end_marker_does_not_leak() {
        let vars = vars(&[("CODE", "fn f() { return {x}; }")]);
        let out = substitute("{USER_CONFIG}{CODE}{USER_CONFIG_END}", &vars);
        assert_eq!(out, "{USER_CONFIG}fn f() { return {x}; }{USER_CONFIG_END}");
    }

    #[test]
    fn test_double_open_brace() {
        let vars = vars(&[("NAME", "v")]);
        assert_eq!(substitute("{{NAME}}", &vars), "{v}");
    }

    #[test]
    fn test_unclosed_brace_is_literal() {
        let vars = vars(&[("NAME", "v")]);
        assert_eq!(substitute("a { b {NAME", &vars), "a { b {NAME");
        assert_eq!(substitute("trailing {", &vars), "trailing {");
    }

    #[test]
    fn test_lone_closing_brace() {
        assert_eq!(substitute("a } b", &Bindings::new()), "a } b");
    }

    #[test]
    fn test_adjacent_and_repeated() {
        let vars = vars(&[("a", "A"), ("b", "B")]);
        assert_eq!(substitute("{a}{b}{a}", &vars), "ABA");
    }

    #[test]
    fn test_prefix_keys_do_not_interfere() {
        let vars = vars(&[("NAME", "n"), ("NAME_FULL", "full")]);
        assert_eq!(substitute("{NAME} {NAME_FULL}", &vars), "n full");
    }

    #[test]
    fn test_empty_value() {
        let vars = vars(&[("empty", "")]);
        assert_eq!(substitute("before{empty}after", &vars), "beforeafter");
    }

    #[test]
    fn test_multiline_value() {
        let vars = vars(&[("multi", "line1\nline2")]);
        assert_eq!(substitute("Content:\n{multi}", &vars), "Content:\nline1\nline2");
    }

    #[test]
    fn test_unicode_around_placeholders() {
        let vars = vars(&[("nivel", "fácil")]);
        assert_eq!(substitute("nível: {nivel} ✓", &vars), "nível: fácil ✓");
    }

    #[test]
    fn test_whitespace_in_name_is_not_trimmed() {
        let vars = vars(&[("name", "x")]);
        assert_eq!(substitute("{ name }", &vars), "{ name }");
    }

    #[test]
    fn test_display_values_are_stringified() {
        let mut vars = Bindings::new();
        vars.insert("N", 42).insert("F", 0.5);
        assert_eq!(substitute("{N}/{F}", &vars), "42/0.5");
    }

    #[test]
    fn test_name_containing_closing_brace() {
        let vars = vars(&[("a}b", "K")]);
        assert_eq!(substitute("{a}b}", &vars), "K");
        assert_eq!(substitute("[{a}b}] {a}", &vars), "[K] {a}");
    }

    #[test]
    fn test_shortest_bound_name_wins() {
        let vars = vars(&[("a", "1"), ("a}b", "2")]);
        assert_eq!(substitute("{a}b}", &vars), "1b}");
    }
}
