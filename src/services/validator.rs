use crate::services::rules::Rule;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of checking one file: which rules matched, and the fully-fixed
/// buffer. An empty `violations` list guarantees `fixed` is byte-identical
/// to what was read from disk.
pub struct FileCheck {
    pub path: PathBuf,
    pub violations: Vec<&'static str>,
    pub fixed: Vec<u8>,
}

impl FileCheck {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Runs every rule in catalog order, each against the output of the
/// previous one, recording a rule's label iff its substitution changed the
/// buffer.
pub fn apply_rules(rules: &[Rule], contents: &[u8]) -> (Vec<&'static str>, Vec<u8>) {
    let mut current = contents.to_vec();
    let mut violations = Vec::new();
    for rule in rules {
        let replaced = rule.apply(&current);
        if replaced.as_ref() != current.as_slice() {
            violations.push(rule.label);
            current = replaced.into_owned();
        }
    }
    (violations, current)
}

/// Reads the file whole (raw bytes, no encoding assumption) and applies the
/// catalog. An unreadable file is fatal to the invocation.
pub fn check_file(rules: &[Rule], path: &Path) -> anyhow::Result<FileCheck> {
    let contents =
        fs::read(path).with_context(|| format!("could not read {}", path.display()))?;
    let (violations, fixed) = apply_rules(rules, &contents);
    Ok(FileCheck {
        path: path.to_path_buf(),
        violations,
        fixed,
    })
}

#[cfg(test)]
mod tests {
    use super::apply_rules;
    use crate::services::rules::catalog;

    fn fix(input: &[u8]) -> (Vec<&'static str>, Vec<u8>) {
        apply_rules(&catalog(), input)
    }

    #[test]
    fn clean_input_reports_nothing_and_is_untouched() {
        let input = b"fn main() {\n    body;\n}\n";
        let (violations, fixed) = fix(input);
        assert!(violations.is_empty());
        assert_eq!(fixed, input);
    }

    #[test]
    fn trailing_whitespace_only() {
        let (violations, fixed) = fix(b"a \nb\t\n");
        assert_eq!(violations, vec!["trailing whitespace"]);
        assert_eq!(fixed, b"a\nb\n");
    }

    #[test]
    fn crlf_runs_collapse_across_rules() {
        // Rule order matters: CRLF normalization must happen before the
        // blank-line collapse sees the buffer.
        let (violations, fixed) = fix(b"\r\n\r\n\r\n");
        assert_eq!(
            violations,
            vec!["Windows-style EOF", "consecutive empty lines"]
        );
        assert_eq!(fixed, b"\n\n");
    }

    #[test]
    fn bare_carriage_return_is_normalized() {
        let (violations, fixed) = fix(b"a\rb\r\n");
        assert_eq!(violations, vec!["Windows-style EOF"]);
        assert_eq!(fixed, b"a\nb\n");
    }

    #[test]
    fn blank_lines_before_closing_brace_keep_indentation() {
        let (violations, fixed) = fix(b"{\n  x;\n\n\n  }\n");
        assert_eq!(
            violations,
            vec![
                "consecutive empty lines",
                "empty lines before a closing brace"
            ]
        );
        assert_eq!(fixed, b"{\n  x;\n  }\n");
    }

    #[test]
    fn blank_lines_after_opening_brace_are_removed() {
        let (violations, fixed) = fix(b"fn f() {\n\n    body;\n}\n");
        assert_eq!(violations, vec!["empty lines after an opening brace"]);
        assert_eq!(fixed, b"fn f() {\n    body;\n}\n");
    }

    #[test]
    fn labels_come_out_in_catalog_order() {
        // Input violates rules 2, 3 and 1; the report must follow catalog
        // order, not discovery order.
        let (violations, _) = fix(b"x \n\n\n\ny\r\nz\n");
        assert_eq!(
            violations,
            vec![
                "Windows-style EOF",
                "trailing whitespace",
                "consecutive empty lines"
            ]
        );
    }

    #[test]
    fn fixing_is_idempotent() {
        let inputs: [&[u8]; 6] = [
            b"a \r\nb\t\n\n\n\nx\n",
            b"{\n\n\n  y;\n\n\n  }\n",
            b"\r\r\r",
            b"plain\n",
            b"",
            b"no trailing newline",
        ];
        for input in inputs {
            let (_, once) = fix(input);
            let (violations, twice) = fix(&once);
            assert!(violations.is_empty(), "second pass matched on {:?}", input);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn output_never_grows_and_never_contains_cr() {
        let inputs: [&[u8]; 5] = [
            b"a \r\nb\t\n\n\n\nx\n",
            b"\r\n\r\n\r\n",
            b"{\n\n\n}\n",
            b"mixed\rline\r\nend \n",
            b"clean\n",
        ];
        for input in inputs {
            let (_, fixed) = fix(input);
            assert!(fixed.len() <= input.len());
            assert!(!fixed.contains(&b'\r'));
        }
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        let (violations, fixed) = fix(b"\xff\xfe binary-ish \nok\n");
        assert_eq!(violations, vec!["trailing whitespace"]);
        assert_eq!(fixed, b"\xff\xfe binary-ish\nok\n");
    }
}
