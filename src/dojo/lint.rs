//! Cheap line-based static checks for practice code
//!
//! These are not real parsers. Each language gets a handful of
//! string heuristics that catch the mistakes beginners actually make.

use crate::dojo::models::{Language, LintFinding, LintSeverity};

pub fn lint(language: Language, code: &str) -> Vec<LintFinding> {
    match language {
        Language::Python => lint_python(code),
        Language::JavaScript | Language::Java | Language::Cpp => lint_braced(code),
        Language::Web => lint_web(code),
    }
}

fn lint_python(code: &str) -> Vec<LintFinding> {
    let mut findings = Vec::new();
    for (idx, line) in code.lines().enumerate() {
        let trimmed = line.trim();
        if (trimmed.starts_with("def ") || trimmed.starts_with("if ")
            || trimmed.starts_with("for ") || trimmed.starts_with("while "))
            && !trimmed.ends_with(':')
        {
            findings.push(LintFinding {
                line: idx + 1,
                severity: LintSeverity::Error,
                message: "Expected ':' at end of statement".to_string(),
            });
        }
    }
    findings
}

fn lint_braced(code: &str) -> Vec<LintFinding> {
    let mut findings = Vec::new();
    for (idx, line) in code.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed.starts_with("//")
            || trimmed.ends_with('{')
            || trimmed.ends_with('}')
            || trimmed.ends_with(';')
            || trimmed.ends_with(',')
            || trimmed.ends_with('(')
        {
            continue;
        }
        findings.push(LintFinding {
            line: idx + 1,
            severity: LintSeverity::Warning,
            message: "Possibly missing ';' at end of statement".to_string(),
        });
    }
    let opens = code.matches('{').count();
    let closes = code.matches('}').count();
    if opens != closes {
        findings.push(LintFinding {
            line: code.lines().count().max(1),
            severity: LintSeverity::Error,
            message: format!("Unbalanced braces: {} '{{' vs {} '}}'", opens, closes),
        });
    }
    findings
}

fn lint_web(code: &str) -> Vec<LintFinding> {
    let mut findings = Vec::new();
    for tag in ["div", "h1", "h2", "p", "span", "ul", "li"] {
        let opens = code.matches(&format!("<{}", tag)).count();
        let closes = code.matches(&format!("</{}>", tag)).count();
        if opens > closes {
            findings.push(LintFinding {
                line: 1,
                severity: LintSeverity::Error,
                message: format!("Unclosed <{}> tag", tag),
            });
        }
    }
    if code.contains("var ") && !code.contains("<script") {
        findings.push(LintFinding {
            line: 1,
            severity: LintSeverity::Warning,
            message: "JavaScript outside a <script> block".to_string(),
        });
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_missing_colon() {
        let findings = lint(Language::Python, "def greet(name)\n    print(name)\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 1);
        assert_eq!(findings[0].severity, LintSeverity::Error);
    }

    #[test]
    fn test_python_clean() {
        let findings = lint(Language::Python, "def greet(name):\n    print(name)\n");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_javascript_missing_semicolon() {
        let findings = lint(Language::JavaScript, "const x = 1\n");
        assert!(findings
            .iter()
            .any(|f| f.message.contains("missing ';'")));
    }

    #[test]
    fn test_unbalanced_braces() {
        let findings = lint(Language::Java, "class A {\n");
        assert!(findings
            .iter()
            .any(|f| f.severity == LintSeverity::Error && f.message.contains("Unbalanced")));
    }

    #[test]
    fn test_web_unclosed_tag() {
        let findings = lint(Language::Web, "<div class=\"card\">\n<p>hi</p>\n");
        assert!(findings.iter().any(|f| f.message.contains("<div>")));
    }
}
