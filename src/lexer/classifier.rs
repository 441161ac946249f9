use crate::{
    catalogue::catalogue::SymbolCatalogue,
    operators::table::{is_flow_keyword, is_operator, is_reserved},
};

use super::tokens::{Token, TokenKind};

/// Final kind for a name that survived both stages, or `Unresolved` when
/// neither the catalogue nor the operator table knows it.
pub fn kind_for_symbol<C: SymbolCatalogue + ?Sized>(name: &str, catalogue: &C) -> TokenKind {
    if catalogue.is_function_only(name) {
        TokenKind::OperatorFunction
    } else if catalogue.is_command_only(name) {
        TokenKind::OperatorCommand
    } else if catalogue.is_both(name) {
        TokenKind::OperatorBoth
    } else if is_operator(name) {
        TokenKind::Operator
    } else if is_flow_keyword(name) {
        TokenKind::Flow
    } else if is_reserved(name) {
        TokenKind::Keyword
    } else {
        TokenKind::Unresolved
    }
}

/// Assigns final kinds to every unresolved token, in place.
pub fn mark_tokens<C: SymbolCatalogue + ?Sized>(tokens: &mut [Token], catalogue: &C) {
    for token in tokens.iter_mut().filter(|token| !token.is_resolved()) {
        token.kind = kind_for_symbol(&token.value, catalogue);

        if token.is_resolved() {
            log::trace!("classified {:?} as {}", token.value, token.kind);
        } else {
            log::debug!("unresolved symbol {:?} at {}", token.value, token.span.start);
        }
    }
}
