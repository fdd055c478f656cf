//! Builder-pattern printer for rendering errors.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use crate::Error;
use crate::engine::SyntaxError;

/// Renders an [`Error`] as a source snippet pointing at the offending span. Without
/// a source, or for errors that carry no span, it falls back to the plain message.
pub struct ErrorPrinter<'e, 's> {
    error: &'e Error,
    source: Option<&'s str>,
    path: Option<&'s str>,
    statement: Option<Range<usize>>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e Error) -> Self {
        Self {
            error,
            source: None,
            path: None,
            statement: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    /// Byte range of the failing statement within the source. Statement spans are
    /// shifted by its start; a premature end points at its end.
    pub fn statement(mut self, range: Range<usize>) -> Self {
        self.statement = Some(range);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    /// Whether [`render`](Self::render) produces a snippet rather than the bare message.
    pub fn has_snippet(&self) -> bool {
        self.source
            .is_some_and(|source| self.range(source.len()).is_some())
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.format_plain(w);
        };
        let Some(range) = self.range(source.len()) else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.error.to_string();
        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range));
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report = vec![Level::ERROR.primary_title(&message).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        write!(w, "{}", self.error)
    }

    fn range(&self, limit: usize) -> Option<Range<usize>> {
        let offset = self.statement.as_ref().map_or(0, |r| r.start);
        let range = match self.error {
            Error::Grammar(err) => err.span()?,
            Error::Graph(err) => err.span(),
            Error::Syntax(SyntaxError::UnexpectedEnd { .. }) => {
                let end = self.statement.as_ref().map_or(limit, |r| r.end);
                return Some(adjust_range(end..end, limit));
            }
            other => other.span()?.range(),
        };
        Some(adjust_range(
            (range.start + offset)..(range.end + offset),
            limit,
        ))
    }
}

fn adjust_range(range: Range<usize>, limit: usize) -> Range<usize> {
    let start = range.start.min(limit);
    let end = range.end.min(limit);

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
