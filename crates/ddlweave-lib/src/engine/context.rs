use crate::lexer::Token;

use super::error::AccumulatorError;
use super::result::ParsingResult;

/// What a hook sees: the token that triggered it, the rest of the statement and
/// the result being accumulated.
pub struct ParsingContext<'t, 'r> {
    tokens: &'t [Token],
    position: usize,
    token: Option<&'t Token>,
    result: &'r mut ParsingResult,
}

impl<'t, 'r> ParsingContext<'t, 'r> {
    pub(crate) fn new(
        tokens: &'t [Token],
        position: usize,
        token: Option<&'t Token>,
        result: &'r mut ParsingResult,
    ) -> Self {
        Self {
            tokens,
            position,
            token,
            result,
        }
    }

    /// Token matched by the node, or the lookahead for idle nodes. `None` at end of
    /// input.
    pub fn token(&self) -> Option<&'t Token> {
        self.token
    }

    pub fn require_token(&self) -> Result<&'t Token, AccumulatorError> {
        self.token.ok_or(AccumulatorError::MissingToken)
    }

    /// Tokens not consumed yet.
    pub fn remaining(&self) -> &'t [Token] {
        &self.tokens[self.position..]
    }

    pub fn result(&self) -> &ParsingResult {
        &*self.result
    }

    pub fn result_mut(&mut self) -> &mut ParsingResult {
        &mut *self.result
    }
}
