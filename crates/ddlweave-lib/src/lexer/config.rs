//! Dialect-specific lexer settings.

/// Quoting style for identifiers that may contain spaces or collide with keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierDelimiter {
    /// `[name]`, no escape for `]`.
    Brackets,
    /// `"name"`, `""` inside stands for one quote.
    DoubleQuotes,
    /// `` `name` ``, doubled backtick inside stands for one.
    Backticks,
}

impl IdentifierDelimiter {
    pub fn open(self) -> char {
        match self {
            IdentifierDelimiter::Brackets => '[',
            IdentifierDelimiter::DoubleQuotes => '"',
            IdentifierDelimiter::Backticks => '`',
        }
    }

    pub fn close(self) -> char {
        match self {
            IdentifierDelimiter::Brackets => ']',
            IdentifierDelimiter::DoubleQuotes => '"',
            IdentifierDelimiter::Backticks => '`',
        }
    }

    /// Whether a doubled closing character inside the identifier is an escape.
    pub fn escapes_by_doubling(self) -> bool {
        !matches!(self, IdentifierDelimiter::Brackets)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerConfig {
    pub(crate) delimiters: Vec<IdentifierDelimiter>,
    pub(crate) punctuation: Vec<char>,
    pub(crate) comments: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            delimiters: vec![IdentifierDelimiter::DoubleQuotes],
            punctuation: vec!['(', ')', ','],
            comments: true,
        }
    }
}

impl LexerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brackets and double quotes, `( ) ,`, SQL comments.
    pub fn sqlite() -> Self {
        Self::default().delimiters([
            IdentifierDelimiter::Brackets,
            IdentifierDelimiter::DoubleQuotes,
        ])
    }

    /// Replace the accepted identifier delimiters.
    pub fn delimiters(mut self, delimiters: impl IntoIterator<Item = IdentifierDelimiter>) -> Self {
        self.delimiters = delimiters.into_iter().collect();
        self
    }

    /// Replace the structural punctuation set. These characters also terminate words,
    /// integers, strings and identifiers.
    pub fn punctuation(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.punctuation = chars.into_iter().collect();
        self
    }

    /// Skip `--` and `/* */` comments.
    pub fn comments(mut self, value: bool) -> Self {
        self.comments = value;
        self
    }

    pub fn get_delimiters(&self) -> &[IdentifierDelimiter] {
        &self.delimiters
    }

    pub fn get_punctuation(&self) -> &[char] {
        &self.punctuation
    }

    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.contains(&c)
    }

    pub(crate) fn delimiter_opening(&self, c: char) -> Option<IdentifierDelimiter> {
        self.delimiters.iter().copied().find(|d| d.open() == c)
    }

    /// A run may end at end of input, whitespace, a control character or structural
    /// punctuation.
    pub(crate) fn is_terminator(&self, next: Option<char>) -> bool {
        match next {
            None => true,
            Some(c) => c.is_whitespace() || c.is_control() || self.is_punctuation(c),
        }
    }
}
