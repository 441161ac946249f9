use std::fmt::Display;

use crate::{
    operators::table::specs_of,
    values::{literals::value_from_str, value::{Value, NULL}},
    Span,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Spaces,
    Comment,
    String,
    Number,
    ErrorNumber,

    Operator,
    OperatorMonadic,
    OperatorDiadic,
    OperatorFunction,
    OperatorCommand,
    OperatorBoth,

    Flow,
    Keyword,
    Unresolved,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Spaces => "SPACES",
            TokenKind::Comment => "COMMENT",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::ErrorNumber => "ERROR_NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::OperatorMonadic => "OPERATOR_MONADIC",
            TokenKind::OperatorDiadic => "OPERATOR_DIADIC",
            TokenKind::OperatorFunction => "OPERATOR_FUNCTION",
            TokenKind::OperatorCommand => "OPERATOR_COMMAND",
            TokenKind::OperatorBoth => "OPERATOR_BOTH",
            TokenKind::Flow => "FLOW",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Unresolved => "UNRESOLVED",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#<:{} '{}'>", self.kind, self.value)
    }
}

impl Token {
    pub fn is_resolved(&self) -> bool {
        self.kind != TokenKind::Unresolved
    }

    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_operator(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::Operator,
            TokenKind::OperatorMonadic,
            TokenKind::OperatorDiadic,
        ])
    }

    /// Table precedences for operator tokens, one per overload.
    pub fn precedences(&self) -> Vec<i16> {
        if !self.is_operator() {
            return vec![];
        }

        specs_of(&self.value)
            .map(|specs| specs.iter().map(|spec| spec.precedence).collect())
            .unwrap_or_default()
    }

    /// The value a NUMBER or STRING token denotes.
    pub fn literal_value(&self) -> Option<Value> {
        match self.kind {
            TokenKind::Number => value_from_str(&self.value),
            TokenKind::String => {
                let inner = self.value.strip_prefix('"')?.strip_suffix('"')?;
                if inner.is_empty() {
                    Some(NULL)
                } else {
                    Some(Value::string(inner))
                }
            }
            _ => None,
        }
    }
}

pub fn unresolved_tokens(tokens: &[Token]) -> Vec<&Token> {
    tokens.iter().filter(|token| !token.is_resolved()).collect()
}

pub fn is_resolved(tokens: &[Token]) -> bool {
    tokens.iter().all(Token::is_resolved)
}
