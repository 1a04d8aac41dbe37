#[derive(Clone, Debug, PartialEq)]
pub struct StaggeredToken {
    pub text: String,
    pub delay_secs: f64,
    /// Starts a new line (the source text had a newline before this word).
    pub line_break: bool,
}

/// Splits `text` into whitespace-delimited words, each delayed `step_secs`
/// more than the previous one. Newlines are preserved as `line_break` on the
/// following word; the delay keeps counting across lines.
pub fn stagger_tokens(text: &str, step_secs: f64) -> Vec<StaggeredToken> {
    let mut tokens = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        for (word_no, word) in line.split_whitespace().enumerate() {
            let index = tokens.len();
            tokens.push(StaggeredToken {
                text: word.to_string(),
                delay_secs: index as f64 * step_secs,
                line_break: line_no > 0 && word_no == 0,
            });
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn delays_increase_per_word() {
        let tokens = stagger_tokens("We Build for", 0.1);
        let words: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, ["We", "Build", "for"]);
        assert!(close(tokens[0].delay_secs, 0.0));
        assert!(close(tokens[1].delay_secs, 0.1));
        assert!(close(tokens[2].delay_secs, 0.2));
        assert!(tokens.iter().all(|t| !t.line_break));
    }

    #[test]
    fn newline_marks_break_and_keeps_counting() {
        let tokens = stagger_tokens("We Build for\nEvery Lifestyle.", 0.1);
        assert_eq!(tokens.len(), 5);
        assert!(tokens[3].line_break);
        assert_eq!(tokens[3].text, "Every");
        assert!(close(tokens[4].delay_secs, 0.4));
    }

    #[test]
    fn collapses_repeated_whitespace() {
        let tokens = stagger_tokens("  a \t b  ", 0.5);
        assert_eq!(tokens.len(), 2);
        assert!(close(tokens[1].delay_secs, 0.5));
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(stagger_tokens("", 0.1).is_empty());
        assert!(stagger_tokens(" \n ", 0.1).is_empty());
    }
}
