//! Recursive-descent reader turning grammar text into a mold tree.

use std::collections::HashSet;
use std::ops::Range;

use logos::Logos;
use tracing::instrument;

use super::error::GrammarCompileError;
use super::mold::{GrammarVertexMold, MoldKind};
use super::token::GrammarToken;

type Result<T> = std::result::Result<T, GrammarCompileError>;

/// Compile grammar text into its root mold.
///
/// ```text
/// form = "(" head [NAME] [":values" "(" STRING+ ")"] form* ")"
/// head = IDLE | END | IDENTIFIER | INTEGER | STRING | MULTI-WORD | "literal"
/// ```
#[instrument(name = "grammar::compile", level = "trace", skip_all)]
pub fn compile(source: &str) -> Result<GrammarVertexMold> {
    let tokens = lex(source)?;
    if tokens.is_empty() {
        return Err(GrammarCompileError::EmptyGrammar);
    }

    let mut reader = Reader {
        source,
        tokens,
        pos: 0,
    };
    let root = reader.form()?;

    if let Some(extra) = reader.bump() {
        return Err(match extra.kind {
            GrammarToken::ParenOpen => GrammarCompileError::TrailingForm { span: extra.span },
            GrammarToken::ParenClose => GrammarCompileError::UnbalancedParen { span: extra.span },
            _ => reader.unexpected(&extra),
        });
    }

    check_alternatives(&root)?;
    tracing::debug!(molds = root.count(), "grammar compiled");
    Ok(root)
}

#[derive(Debug, Clone)]
struct Lexeme {
    kind: GrammarToken,
    span: Range<usize>,
}

fn lex(source: &str) -> Result<Vec<Lexeme>> {
    let mut tokens = Vec::new();
    let mut lexer = GrammarToken::lexer(source);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) if kind.is_trivia() => {}
            Ok(kind) => tokens.push(Lexeme { kind, span }),
            Err(()) if source[span.clone()].starts_with('"') => {
                return Err(GrammarCompileError::InvalidString { span });
            }
            Err(()) => {
                return Err(GrammarCompileError::UnexpectedToken {
                    found: format!("`{}`", &source[span.clone()]),
                    span,
                });
            }
        }
    }
    Ok(tokens)
}

struct Reader<'s> {
    source: &'s str,
    tokens: Vec<Lexeme>,
    pos: usize,
}

impl<'s> Reader<'s> {
    fn peek(&self) -> Option<&Lexeme> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<Lexeme> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn text(&self, token: &Lexeme) -> &'s str {
        &self.source[token.span.clone()]
    }

    fn end(&self) -> Range<usize> {
        self.source.len()..self.source.len()
    }

    fn unexpected(&self, token: &Lexeme) -> GrammarCompileError {
        GrammarCompileError::UnexpectedToken {
            found: format!("`{}`", self.text(token)),
            span: token.span.clone(),
        }
    }

    fn form(&mut self) -> Result<GrammarVertexMold> {
        let open = match self.bump() {
            Some(token) if token.kind == GrammarToken::ParenOpen => token,
            Some(token) if token.kind == GrammarToken::ParenClose => {
                return Err(GrammarCompileError::UnbalancedParen { span: token.span });
            }
            Some(token) => return Err(self.unexpected(&token)),
            None => return Err(GrammarCompileError::UnexpectedEnd { span: self.end() }),
        };

        let head = self
            .bump()
            .ok_or_else(|| GrammarCompileError::UnexpectedEnd { span: self.end() })?;
        let mut kind = self.head(&head)?;

        let name = match self.peek() {
            Some(token) if token.kind == GrammarToken::Symbol => {
                let text = self.text(token).to_string();
                self.pos += 1;
                Some(text)
            }
            _ => None,
        };

        if let Some(token) = self.peek().filter(|t| t.kind == GrammarToken::Keyword).cloned() {
            self.pos += 1;
            if self.text(&token) != ":values" {
                return Err(self.unexpected(&token));
            }
            match &mut kind {
                MoldKind::MultiWord(values) => *values = self.values(&token)?,
                other => {
                    return Err(GrammarCompileError::MisplacedValues {
                        head: other.head().to_string(),
                        span: token.span,
                    });
                }
            }
        }

        if let MoldKind::MultiWord(values) = &kind
            && values.is_empty()
            && name.is_none()
        {
            return Err(GrammarCompileError::EmptyAlternatives {
                span: head.span.clone(),
            });
        }

        let mut children = Vec::new();
        let close = loop {
            match self.peek().map(|t| t.kind) {
                Some(GrammarToken::ParenOpen) => children.push(self.form()?),
                Some(GrammarToken::ParenClose) => {
                    let close = self.tokens[self.pos].clone();
                    self.pos += 1;
                    break close;
                }
                Some(_) => return Err(self.unexpected(&self.tokens[self.pos])),
                None => return Err(GrammarCompileError::UnbalancedParen { span: open.span }),
            }
        };

        Ok(GrammarVertexMold {
            kind,
            name,
            children,
            span: open.span.start..close.span.end,
        })
    }

    fn head(&self, token: &Lexeme) -> Result<MoldKind> {
        match token.kind {
            GrammarToken::String => Ok(MoldKind::Literal(self.string(token)?)),
            GrammarToken::Symbol => match self.text(token) {
                "IDLE" => Ok(MoldKind::Idle),
                "END" => Ok(MoldKind::End),
                "IDENTIFIER" => Ok(MoldKind::Identifier),
                "INTEGER" => Ok(MoldKind::Integer),
                "STRING" => Ok(MoldKind::String),
                "MULTI-WORD" => Ok(MoldKind::MultiWord(Vec::new())),
                other => Err(GrammarCompileError::UnknownHead {
                    head: other.to_string(),
                    span: token.span.clone(),
                }),
            },
            _ => Err(self.unexpected(token)),
        }
    }

    /// `( "a" "b" ... )` after `:values`.
    fn values(&mut self, keyword: &Lexeme) -> Result<Vec<String>> {
        match self.bump() {
            Some(token) if token.kind == GrammarToken::ParenOpen => {}
            Some(token) => return Err(self.unexpected(&token)),
            None => return Err(GrammarCompileError::UnexpectedEnd { span: self.end() }),
        }

        let mut values = Vec::new();
        loop {
            match self.bump() {
                Some(token) if token.kind == GrammarToken::String => {
                    values.push(self.string(&token)?);
                }
                Some(token) if token.kind == GrammarToken::ParenClose => break,
                Some(token) => return Err(self.unexpected(&token)),
                None => return Err(GrammarCompileError::UnexpectedEnd { span: self.end() }),
            }
        }

        if values.is_empty() {
            return Err(GrammarCompileError::EmptyAlternatives {
                span: keyword.span.clone(),
            });
        }
        Ok(values)
    }

    fn string(&self, token: &Lexeme) -> Result<String> {
        let invalid = || GrammarCompileError::InvalidString {
            span: token.span.clone(),
        };
        let raw = self.text(token);
        let inner = &raw[1..raw.len() - 1];

        let mut value = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.next() {
                    Some(escaped @ ('"' | '\\')) => value.push(escaped),
                    _ => return Err(invalid()),
                }
            } else {
                value.push(c);
            }
        }

        if value.is_empty() {
            return Err(invalid());
        }
        Ok(value)
    }
}

/// A named `MULTI-WORD` must list its values where it first appears in pre-order,
/// which is the order the graph builder materialises nodes in.
fn check_alternatives(root: &GrammarVertexMold) -> Result<()> {
    let mut defined = HashSet::new();
    let mut error = None;
    root.walk(&mut |mold| {
        if error.is_some() {
            return;
        }
        let (MoldKind::MultiWord(values), Some(name)) = (&mold.kind, &mold.name) else {
            return;
        };
        if !values.is_empty() {
            defined.insert(name.clone());
        } else if !defined.contains(name) {
            error = Some(GrammarCompileError::EmptyAlternatives {
                span: mold.span.clone(),
            });
        }
    });
    error.map_or(Ok(()), Err)
}
