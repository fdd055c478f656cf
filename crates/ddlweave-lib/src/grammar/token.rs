//! Tokens of the S-expression grammar language.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarToken {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    /// Double-quoted literal; `\"` and `\\` are the only escapes.
    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    String,

    /// `:values` and friends.
    #[regex(r":[a-zA-Z][a-zA-Z0-9\-]*")]
    Keyword,

    /// Node heads (`IDLE`, `MULTI-WORD`, ...) and node names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_\-]*")]
    Symbol,

    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    #[regex(r";[^\n]*", allow_greedy = true)]
    Comment,
}

impl GrammarToken {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            GrammarToken::Whitespace | GrammarToken::Newline | GrammarToken::Comment
        )
    }
}
