//! Follow-up question extraction from free-text model output.
//!
//! The model is asked for a numbered list but nothing enforces it. Lines of
//! the form `<digits>.<whitespace><question>` are kept; everything else is
//! dropped.

use regex::Regex;
use std::sync::OnceLock;

fn numbered_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\d+\.\s*(.+)$").expect("valid regex"))
}

/// Parse the numbered list in `output` into questions, in order.
pub fn parse_questions(output: &str) -> Vec<String> {
    numbered_line()
        .captures_iter(output)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end().to_string())
        .filter(|q| !q.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbered_list() {
        let output = "1. What is X?\n2. Why Y?\nNote: ignore this\n3. How Z?";
        assert_eq!(
            parse_questions(output),
            vec!["What is X?", "Why Y?", "How Z?"]
        );
    }

    #[test]
    fn test_non_conforming_lines_are_excluded() {
        let output = "Here are some questions:\nQ1: What?\n- Why?\n10.When did it start?";
        assert_eq!(parse_questions(output), vec!["When did it start?"]);
    }

    #[test]
    fn test_no_matches_is_empty() {
        assert!(parse_questions("I could not come up with questions.").is_empty());
        assert!(parse_questions("").is_empty());
    }

    #[test]
    fn test_crlf_output() {
        let output = "1. First?\r\n2. Second?\r\n";
        assert_eq!(parse_questions(output), vec!["First?", "Second?"]);
    }
}
