use crate::error::ShellError;

use super::GrowBuffer;

/// Initial size of the token list, and the amount it grows by.
pub const TOKEN_BUFSIZE: usize = 64;

/// Space, tab, carriage return, newline and bell.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

/// Tokens of one line, borrowed from it in left-to-right order.
#[derive(Debug)]
pub struct Tokens<'a> {
    items: GrowBuffer<&'a str>,
}

impl<'a> Tokens<'a> {
    pub fn as_slice(&self) -> &[&'a str] {
        self.items.as_slice()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }
}

pub fn split_line(line: &str) -> Result<Tokens<'_>, ShellError> {
    split_line_with_step(line, TOKEN_BUFSIZE)
}

pub fn split_line_with_step(line: &str, step: usize) -> Result<Tokens<'_>, ShellError> {
    let mut items = GrowBuffer::with_step(step)?;
    for token in line
        .split(|c: char| DELIMITERS.contains(&c))
        .filter(|t| !t.is_empty())
    {
        // on failure the partial list is dropped here
        items.push(token)?;
    }
    Ok(Tokens { items })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_runs_of_spaces() {
        let tokens = split_line("cd  /tmp").unwrap();
        assert_eq!(tokens.as_slice(), &["cd", "/tmp"]);
    }

    #[test]
    fn test_every_delimiter_splits() {
        let tokens = split_line("a\tb\rc\nd\x07e f").unwrap();
        assert_eq!(tokens.as_slice(), &["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_only_delimiters_is_empty() {
        assert!(split_line(" \t\r\n\x07  ").unwrap().is_empty());
        assert!(split_line("").unwrap().is_empty());
    }

    #[test]
    fn test_leading_and_trailing_delimiters() {
        let tokens = split_line("   ls -la   ").unwrap();
        assert_eq!(tokens.as_slice(), &["ls", "-la"]);
    }

    #[test]
    fn test_quotes_are_not_special() {
        let tokens = split_line("echo \"a b\"").unwrap();
        assert_eq!(tokens.as_slice(), &["echo", "\"a", "b\""]);
    }

    #[test]
    fn test_growth_preserves_order() {
        let words: Vec<String> = (0..150).map(|i| format!("arg{}", i)).collect();
        let line = words.join(" ");

        let tokens = split_line(&line).unwrap();
        assert_eq!(tokens.len(), 150);
        assert_eq!(tokens.capacity(), 3 * TOKEN_BUFSIZE);
        let expected: Vec<&str> = words.iter().map(String::as_str).collect();
        assert_eq!(tokens.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_small_step_growth() {
        let tokens = split_line_with_step("a b c d e", 2).unwrap();
        assert_eq!(tokens.capacity(), 6);
        assert_eq!(tokens.as_slice(), &["a", "b", "c", "d", "e"]);
    }
}
