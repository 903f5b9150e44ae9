use regex::bytes::Regex;
use std::borrow::Cow;

/// A single whitespace-normalization transformation.
///
/// Patterns run against the entire file content as one buffer, never
/// line-by-line: several rules span multiple lines.
pub struct Rule {
    pub label: &'static str,
    pattern: Regex,
    replacement: &'static [u8],
}

impl Rule {
    fn new(label: &'static str, pattern: &str, replacement: &'static [u8]) -> Self {
        // A pattern that does not compile is a defect in the catalog below,
        // not a runtime condition.
        let pattern = Regex::new(pattern).expect("rule pattern must compile");
        Rule {
            label,
            pattern,
            replacement,
        }
    }

    pub fn apply<'a>(&self, contents: &'a [u8]) -> Cow<'a, [u8]> {
        self.pattern.replace_all(contents, self.replacement)
    }
}

/// The rule catalog, in application order.
///
/// Ordering is part of the contract: each rule sees the output of the
/// previous one. Line endings are normalized first so the later rules only
/// ever deal with `\n`, and blank-line runs are collapsed before the brace
/// rules prune what remains.
pub fn catalog() -> Vec<Rule> {
    vec![
        Rule::new("Windows-style EOF", r"\r\n?", b"\n"),
        Rule::new("trailing whitespace", r"[ \t]+\n", b"\n"),
        Rule::new("consecutive empty lines", r"\n\n\n+", b"\n\n"),
        Rule::new("empty lines after an opening brace", r"\{\n\n+", b"{\n"),
        // $1 keeps the closing line's own leading whitespace intact.
        Rule::new(
            "empty lines before a closing brace",
            r"\n+\n(\s*\})",
            b"\n$1",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::catalog;

    #[test]
    fn catalog_order_is_stable() {
        let labels: Vec<&str> = catalog().iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                "Windows-style EOF",
                "trailing whitespace",
                "consecutive empty lines",
                "empty lines after an opening brace",
                "empty lines before a closing brace",
            ]
        );
    }

    #[test]
    fn closing_brace_rule_preserves_indentation() {
        let rule = &catalog()[4];
        let out = rule.apply(b"x;\n\n\n  }\n");
        assert_eq!(out.as_ref(), b"x;\n  }\n");
    }
}
