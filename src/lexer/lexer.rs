use std::{collections::BTreeSet, rc::Rc};

use crate::{
    catalogue::catalogue::SymbolCatalogue,
    errors::errors::{Error, ErrorImpl},
    reader::reader::{Reader, StringReader},
};

use super::{
    classifier::mark_tokens,
    config::LexerConfig,
    tokenizer::{Stage, Tokenizer},
    tokens::{unresolved_tokens, Token},
};

/// Runs the tokenizer stages over a line and classifies what is left.
pub struct Lexer<'a, C: SymbolCatalogue + ?Sized> {
    catalogue: &'a C,
    config: LexerConfig,
}

impl<'a, C: SymbolCatalogue + ?Sized> Lexer<'a, C> {
    pub fn new(catalogue: &'a C, config: LexerConfig) -> Lexer<'a, C> {
        Lexer { catalogue, config }
    }

    pub fn tokenize(&self, source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
        self.tokenize_reader(StringReader::new(source), file)
    }

    /// Stage 1 reads the whole reader; every unresolved span it leaves is
    /// handed to the next stage and the results are spliced in order.
    pub fn tokenize_reader<R: Reader>(&self, reader: R, file: Option<String>) -> Result<Vec<Token>, Error> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let seed = Tokenizer::new(Stage::FIRST, reader, self.config, Rc::clone(&file_name), 0).into_tokens()?;

        let mut tokens = Vec::with_capacity(seed.len());
        for token in seed {
            tokens.extend(self.retokenize(token, Stage::FIRST.next(), &file_name)?);
        }

        mark_tokens(&mut tokens, self.catalogue);
        log::debug!("{}: {} tokens", file_name, tokens.len());

        Ok(tokens)
    }

    fn retokenize(&self, token: Token, stage: Option<Stage>, file: &Rc<String>) -> Result<Vec<Token>, Error> {
        let Some(stage) = stage else {
            return Ok(vec![token]);
        };
        if token.is_resolved() {
            return Ok(vec![token]);
        }

        let subtokens = Tokenizer::from_text(stage, &token.value, self.config, Rc::clone(file), token.span.start.0)
            .into_tokens()?;
        if subtokens.is_empty() {
            return Ok(vec![token]);
        }

        let mut spliced = Vec::with_capacity(subtokens.len());
        for subtoken in subtokens {
            check_splice(&token, &subtoken)?;
            spliced.extend(self.retokenize(subtoken, stage.next(), file)?);
        }

        log::trace!("{} split into {} tokens by {:?}", token, spliced.len(), stage);
        Ok(spliced)
    }

    /// Tokenizes every line of `text` and collects the sorted set of names
    /// nothing could classify. Lines that fail to tokenize are logged and
    /// skipped.
    pub fn unresolved_symbols(&self, text: &str, file: Option<String>) -> BTreeSet<String> {
        let mut symbols = BTreeSet::new();

        for line in split_lines(text) {
            match self.tokenize(line, file.clone()) {
                Ok(tokens) => symbols.extend(unresolved_names(&tokens)),
                Err(error) => log::warn!("skipping {:?}: {}", line, error),
            }
        }

        symbols
    }
}

/// A sub-token must lie inside the token it replaces.
pub(crate) fn check_splice(parent: &Token, subtoken: &Token) -> Result<(), Error> {
    if parent.span.contains(&subtoken.span) {
        return Ok(());
    }

    log::warn!("{} does not fit inside {}", subtoken, parent);
    Err(Error::new(
        ErrorImpl::ConsistencyViolation { token: parent.value.clone() },
        parent.span.start.clone(),
    ))
}

/// Texts of the tokens left UNRESOLVED.
pub fn unresolved_names(tokens: &[Token]) -> impl Iterator<Item = String> + '_ {
    unresolved_tokens(tokens).into_iter().map(|token| token.value.clone())
}

/// Non-empty lines of a source file, split on `\r` or `\n`.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n']).filter(|line| !line.is_empty())
}

pub fn tokenize<C: SymbolCatalogue + ?Sized>(source: String, file: Option<String>, catalogue: &C) -> Result<Vec<Token>, Error> {
    Lexer::new(catalogue, LexerConfig::default()).tokenize(&source, file)
}
