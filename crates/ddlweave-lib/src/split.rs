//! Splitting multi-statement DDL scripts.

use std::ops::Range;

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    /// Inside a quoted run closed by the given character.
    Quoted(char),
    LineComment,
    BlockComment,
}

/// Split `script` on `;` outside string literals, delimited identifiers and
/// comments. Statements are trimmed; empty ones and ones holding only comments are
/// dropped.
pub fn split_statements(script: &str) -> Vec<&str> {
    split_statement_ranges(script)
        .into_iter()
        .map(|range| &script[range])
        .collect()
}

/// Byte ranges of the statements [`split_statements`] returns.
pub fn split_statement_ranges(script: &str) -> Vec<Range<usize>> {
    let mut statements = Vec::new();
    let mut state = State::Code;
    let mut start = 0;
    let mut has_code = false;
    let mut chars = script.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match state {
            State::Code => match c {
                ';' => {
                    if has_code {
                        statements.push(trimmed(script, start..i));
                    }
                    start = i + 1;
                    has_code = false;
                }
                '-' if chars.peek().is_some_and(|&(_, next)| next == '-') => {
                    chars.next();
                    state = State::LineComment;
                }
                '/' if chars.peek().is_some_and(|&(_, next)| next == '*') => {
                    chars.next();
                    state = State::BlockComment;
                }
                '\'' | '"' | '`' => {
                    state = State::Quoted(c);
                    has_code = true;
                }
                '[' => {
                    state = State::Quoted(']');
                    has_code = true;
                }
                _ => has_code |= !c.is_whitespace(),
            },
            // A doubled quote reads as close-then-reopen, which lands in the same state.
            State::Quoted(close) => {
                if c == close {
                    state = State::Code;
                }
            }
            State::LineComment => {
                if c == '\n' {
                    state = State::Code;
                }
            }
            State::BlockComment => {
                if c == '*' && chars.peek().is_some_and(|&(_, next)| next == '/') {
                    chars.next();
                    state = State::Code;
                }
            }
        }
    }

    if has_code {
        statements.push(trimmed(script, start..script.len()));
    }
    statements
}

fn trimmed(script: &str, range: Range<usize>) -> Range<usize> {
    let text = &script[range.clone()];
    let start = range.start + (text.len() - text.trim_start().len());
    let end = range.end - (text.len() - text.trim_end().len());
    start..end
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod split_tests;
