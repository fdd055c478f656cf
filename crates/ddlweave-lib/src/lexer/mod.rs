//! SQL lexer.
//!
//! A fixed chain of producers is tried at every position. The first producer that
//! claims the input wins. Producers that yield a run (words, integers, strings,
//! delimited identifiers) only claim it when the run is followed by a terminator:
//! end of input, whitespace, a control character or structural punctuation. This
//! is what makes `12abc` or `'x'y` a lexical error instead of two tokens.

mod config;
mod error;
mod token;

#[cfg(test)]
mod lexer_tests;

pub use config::{IdentifierDelimiter, LexerConfig};
pub use error::LexError;
pub use token::{Position, Span, Token, TokenKind};

use tracing::instrument;

#[derive(Debug, Clone, Default)]
pub struct Lexer {
    config: LexerConfig,
}

impl Lexer {
    pub fn new(config: LexerConfig) -> Self {
        Self { config }
    }

    pub fn sqlite() -> Self {
        Self::new(LexerConfig::sqlite())
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    #[instrument(name = "lexer::tokenize", level = "trace", skip_all, fields(len = source.len()))]
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexError> {
        let mut cursor = Cursor::new(source);
        let mut tokens = Vec::new();

        while let Some(ch) = cursor.peek() {
            let lexeme = self.produce(&cursor)?;
            let Some(lexeme) = lexeme else {
                return Err(LexError::UnexpectedCharacter {
                    ch,
                    span: cursor.span(ch.len_utf8()),
                });
            };

            let span = cursor.span(lexeme.len);
            cursor.advance(lexeme.len);
            if let Some(kind) = lexeme.kind {
                tokens.push(Token::new(kind, span));
            }
        }

        tracing::trace!(count = tokens.len(), "tokenized");
        Ok(tokens)
    }

    fn produce(&self, cursor: &Cursor<'_>) -> Result<Option<Lexeme>, LexError> {
        for producer in Producer::ORDER {
            if let Some(lexeme) = producer.produce(cursor, &self.config)? {
                return Ok(Some(lexeme));
            }
        }
        Ok(None)
    }
}

/// Tokenize with the SQLite lexer settings.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::sqlite().tokenize(source)
}

struct Lexeme {
    len: usize,
    /// `None` for trivia.
    kind: Option<TokenKind>,
}

impl Lexeme {
    fn skip(len: usize) -> Self {
        Self { len, kind: None }
    }

    fn token(len: usize, kind: TokenKind) -> Self {
        Self {
            len,
            kind: Some(kind),
        }
    }
}

struct Cursor<'s> {
    source: &'s str,
    offset: usize,
    position: Position,
}

impl<'s> Cursor<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            offset: 0,
            position: Position::START,
        }
    }

    fn rest(&self) -> &'s str {
        &self.source[self.offset..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn span(&self, len: usize) -> Span {
        Span::new(self.offset, self.offset + len, self.position)
    }

    fn advance(&mut self, len: usize) {
        for ch in self.source[self.offset..self.offset + len].chars() {
            if ch == '\n' {
                self.position.line += 1;
                self.position.column = 1;
            } else {
                self.position.column += 1;
            }
        }
        self.offset += len;
    }
}

#[derive(Debug, Clone, Copy)]
enum Producer {
    Trivia,
    Word,
    Punctuation,
    Integer,
    String,
    DelimitedIdentifier,
}

impl Producer {
    const ORDER: [Producer; 6] = [
        Producer::Trivia,
        Producer::Word,
        Producer::Punctuation,
        Producer::Integer,
        Producer::String,
        Producer::DelimitedIdentifier,
    ];

    fn produce(self, cursor: &Cursor<'_>, config: &LexerConfig) -> Result<Option<Lexeme>, LexError> {
        let rest = cursor.rest();
        let Some(first) = rest.chars().next() else {
            return Ok(None);
        };

        let lexeme = match self {
            Producer::Trivia => return trivia(cursor, config),
            Producer::Word => {
                if !(first.is_ascii_alphabetic() || first == '_') {
                    return Ok(None);
                }
                let len = run_length(rest, |c| c.is_ascii_alphanumeric() || c == '_');
                Lexeme::token(len, TokenKind::Word(rest[..len].to_string()))
            }
            Producer::Punctuation => {
                if !config.is_punctuation(first) {
                    return Ok(None);
                }
                return Ok(Some(Lexeme::token(
                    first.len_utf8(),
                    TokenKind::Punctuation(first),
                )));
            }
            Producer::Integer => {
                let sign = usize::from(matches!(first, '+' | '-'));
                let digits = run_length(&rest[sign..], |c| c.is_ascii_digit());
                if digits == 0 {
                    return Ok(None);
                }
                let len = sign + digits;
                if !config.is_terminator(rest[len..].chars().next()) {
                    return Ok(None);
                }
                let text = &rest[..len];
                let value = text.parse::<i64>().map_err(|_| LexError::IntegerOverflow {
                    text: text.to_string(),
                    span: cursor.span(len),
                })?;
                Lexeme::token(len, TokenKind::Integer(value))
            }
            Producer::String => {
                if first != '\'' {
                    return Ok(None);
                }
                let Some((len, value)) = scan_quoted(rest, '\'', true) else {
                    return Err(LexError::UnterminatedString {
                        span: cursor.span(rest.len()),
                    });
                };
                Lexeme::token(len, TokenKind::StringLiteral(value))
            }
            Producer::DelimitedIdentifier => {
                let Some(delimiter) = config.delimiter_opening(first) else {
                    return Ok(None);
                };
                let Some((len, text)) =
                    scan_quoted(rest, delimiter.close(), delimiter.escapes_by_doubling())
                else {
                    return Err(LexError::UnterminatedIdentifier {
                        span: cursor.span(rest.len()),
                    });
                };
                if text.is_empty() {
                    return Err(LexError::EmptyIdentifier {
                        span: cursor.span(len),
                    });
                }
                Lexeme::token(
                    len,
                    TokenKind::Identifier {
                        text,
                        delimited: true,
                    },
                )
            }
        };

        if !config.is_terminator(rest[lexeme.len..].chars().next()) {
            return Ok(None);
        }
        Ok(Some(lexeme))
    }
}

fn trivia(cursor: &Cursor<'_>, config: &LexerConfig) -> Result<Option<Lexeme>, LexError> {
    let rest = cursor.rest();
    let blank = |c: char| c.is_whitespace() || c.is_control();

    let len = run_length(rest, blank);
    if len > 0 {
        return Ok(Some(Lexeme::skip(len)));
    }
    if !config.comments {
        return Ok(None);
    }
    if rest.starts_with("--") {
        // The newline itself is left for the whitespace branch.
        let len = rest.find('\n').unwrap_or(rest.len());
        return Ok(Some(Lexeme::skip(len)));
    }
    if rest.starts_with("/*") {
        return match rest[2..].find("*/") {
            Some(end) => Ok(Some(Lexeme::skip(end + 4))),
            None => Err(LexError::UnterminatedComment {
                span: cursor.span(rest.len()),
            }),
        };
    }
    Ok(None)
}

/// Byte length of the leading run of characters satisfying `accept`.
fn run_length(text: &str, accept: impl Fn(char) -> bool) -> usize {
    text.find(|c: char| !accept(c)).unwrap_or(text.len())
}

/// Scan a quoted run whose opening character is at index 0. Returns the byte length
/// including both quotes and the unescaped content, or `None` when unterminated.
fn scan_quoted(text: &str, close: char, doubling: bool) -> Option<(usize, String)> {
    let mut value = String::new();
    let mut chars = text.char_indices().skip(1).peekable();
    while let Some((index, ch)) = chars.next() {
        if ch == close {
            if doubling && chars.peek().is_some_and(|&(_, next)| next == close) {
                value.push(ch);
                chars.next();
                continue;
            }
            return Some((index + ch.len_utf8(), value));
        }
        value.push(ch);
    }
    None
}
