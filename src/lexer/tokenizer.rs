use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    operators::table::is_operator,
    reader::reader::{Reader, StringReader},
    values::literals::is_number,
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::{config::LexerConfig, tokens::{Token, TokenKind}};

pub const TOKEN_DELIMS: &[u8] = b"-+*/:;=()^%!<>,|[]";
pub const DOUBLE_KEYS: [&str; 4] = [":=", "<>", ">=", "<="];
const DOUBLE_KEYS_FIRST_CHARS: &[u8] = b":<>";

/// Lexer passes, in the order the driver applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Splits comments and strings away from code.
    CommentAndString,
    /// Splits code into operators, numbers, identifiers and spaces.
    Operator,
}

impl Stage {
    pub const FIRST: Stage = Stage::CommentAndString;

    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::CommentAndString => Some(Stage::Operator),
            Stage::Operator => None,
        }
    }
}

pub type CharHandler<R> = fn(&mut Tokenizer<R>, u8) -> Result<(), Error>;

pub struct Tokenizer<R: Reader> {
    stage: Stage,
    reader: R,
    config: LexerConfig,
    tokens: Vec<Token>,
    done: bool,
    word: Vec<u8>,
    word_start: usize,
    in_comment: bool,
    in_string: bool,
    file: Rc<String>,
    base: u32,
}

impl Tokenizer<StringReader> {
    pub fn from_text(stage: Stage, text: &str, config: LexerConfig, file: Rc<String>, base: u32) -> Self {
        Tokenizer::new(stage, StringReader::new(text), config, file, base)
    }
}

impl<R: Reader> Tokenizer<R> {
    /// `base` is the offset of the reader's first byte within the whole line,
    /// so spans stay line-relative when a token is re-lexed.
    pub fn new(stage: Stage, reader: R, config: LexerConfig, file: Rc<String>, base: u32) -> Self {
        Tokenizer {
            stage,
            reader,
            config,
            tokens: vec![],
            done: false,
            word: vec![],
            word_start: 0,
            in_comment: false,
            in_string: false,
            file,
            base,
        }
    }

    /// Runs the stage once over the whole reader; later calls return the
    /// same tokens.
    pub fn tokens(&mut self) -> Result<&[Token], Error> {
        if !self.done {
            self.reader.rewind();
            self.tokens.clear();
            self.word.clear();
            self.reset_state();

            match self.stage {
                Stage::CommentAndString => self.run_comment_and_string()?,
                Stage::Operator => self.run_operator()?,
            }
            self.done = true;
        }

        Ok(&self.tokens)
    }

    pub fn into_tokens(mut self) -> Result<Vec<Token>, Error> {
        self.tokens()?;
        Ok(self.tokens)
    }

    pub fn unresolved_tokens(&self) -> Vec<&Token> {
        self.tokens.iter().filter(|token| !token.is_resolved()).collect()
    }

    pub fn is_resolved(&self) -> bool {
        self.unresolved_tokens().is_empty()
    }

    fn reset_state(&mut self) {
        self.in_comment = false;
        self.in_string = false;
    }

    fn push_char(&mut self, ch: u8) {
        if self.word.is_empty() {
            self.word_start = self.reader.position().saturating_sub(1);
        }
        self.word.push(ch);
    }

    fn last_char(&self) -> Option<u8> {
        self.word.last().copied()
    }

    /// Flushes the pending word as a token. Empty words, or words that are
    /// only whitespace when spacing is not preserved, are dropped.
    fn push_token(&mut self, kind: TokenKind) {
        let text = String::from_utf8_lossy(&self.word).into_owned();
        self.word.clear();

        let (text, start) = if self.config.preserve_spacing {
            (text, self.word_start)
        } else {
            let leading = text.len() - text.trim_start().len();
            (text.trim().to_string(), self.word_start + leading)
        };

        if text.is_empty() {
            return;
        }

        let start = self.base + start as u32;
        let end = start + text.len() as u32;
        self.tokens.push(MK_TOKEN!(kind, text, MK_SPAN!(start, end, self.file)));
    }

    fn run_comment_and_string(&mut self) -> Result<(), Error> {
        if self.reader.is_eof() {
            return Ok(());
        }

        while let Some(ch) = self.reader.getc() {
            let handler: Option<CharHandler<R>> = match ch {
                b'|' => Some(single_comment_handler),
                b'"' => Some(string_handler),
                b'`' => Some(quote_comment_handler),
                _ => None,
            };

            match handler {
                Some(handler) => handler(self, ch)?,
                None => self.push_char(ch),
            }

            if self.reader.is_eof() {
                break;
            }
        }

        self.push_token(TokenKind::Unresolved);
        Ok(())
    }

    fn run_operator(&mut self) -> Result<(), Error> {
        while let Some(ch) = self.reader.getc() {
            let handler: Option<CharHandler<R>> = if ch.is_ascii_uppercase() {
                Some(namespace_handler)
            } else if ch == b'.' || ch.is_ascii_digit() {
                Some(number_handler)
            } else if TOKEN_DELIMS.contains(&ch) {
                Some(nonword_handler)
            } else if is_space(ch) {
                Some(skip_spaces_handler)
            } else {
                None
            };

            match handler {
                Some(handler) => handler(self, ch)?,
                None => self.push_char(ch),
            }

            if self.reader.is_eof() {
                break;
            }
        }

        self.push_token(TokenKind::Unresolved);
        Ok(())
    }

    /// Reads up to and including `delimiter`. False when the input ran out first.
    fn collect_until(&mut self, delimiter: u8) -> bool {
        while !self.reader.is_eof() {
            let Some(ch) = self.reader.getc() else {
                break;
            };
            self.push_char(ch);
            if ch == delimiter {
                return true;
            }
        }
        false
    }

    fn collect_quoted(&mut self, delimiter: u8, kind: TokenKind) -> Result<(), Error> {
        self.push_token(TokenKind::Unresolved);
        self.push_char(delimiter);

        if self.collect_until(delimiter) {
            self.push_token(kind);
            return Ok(());
        }

        let text = String::from_utf8_lossy(&self.word).into_owned();
        self.reader.ungetc(self.word.len() - 1);
        log::warn!("{} not closed in {:?}", delimiter as char, text);

        Err(Error::new(
            ErrorImpl::UnterminatedLiteral { delimiter: delimiter as char, text },
            Position(self.base + self.reader.position() as u32, Rc::clone(&self.file)),
        ))
    }
}

fn is_line_break(ch: u8) -> bool {
    ch == b'\n' || ch == b'\r'
}

/// Line breaks count as spacing so lines pulled from a `LineReader` split cleanly.
fn is_space(ch: u8) -> bool {
    ch == b' ' || ch == b'\t' || is_line_break(ch)
}

fn is_namespace_char(ch: u8) -> bool {
    ch.is_ascii_uppercase() || ch.is_ascii_digit() || matches!(ch, b'_' | b'$' | b'#')
}

fn is_number_char(ch: u8) -> bool {
    ch.is_ascii_digit() || matches!(ch, b'-' | b'+' | b'.' | b'e' | b'E')
}

fn single_comment_handler<R: Reader>(tokenizer: &mut Tokenizer<R>, ch: u8) -> Result<(), Error> {
    if tokenizer.in_string {
        return Ok(());
    }

    tokenizer.in_comment = true;
    tokenizer.push_token(TokenKind::Unresolved);
    tokenizer.push_char(ch);

    // Runs to the end of the line; the line break itself is left for Stage 2.
    while let Some(next) = tokenizer.reader.getc() {
        if is_line_break(next) {
            tokenizer.reader.ungetc(1);
            break;
        }
        tokenizer.push_char(next);
    }

    tokenizer.push_token(TokenKind::Comment);
    tokenizer.in_comment = false;
    Ok(())
}

fn string_handler<R: Reader>(tokenizer: &mut Tokenizer<R>, ch: u8) -> Result<(), Error> {
    if tokenizer.in_comment || tokenizer.in_string {
        return Ok(());
    }

    tokenizer.in_string = true;
    tokenizer.collect_quoted(ch, TokenKind::String)?;
    tokenizer.in_string = false;
    Ok(())
}

fn quote_comment_handler<R: Reader>(tokenizer: &mut Tokenizer<R>, ch: u8) -> Result<(), Error> {
    if tokenizer.in_comment || tokenizer.in_string {
        return Ok(());
    }

    tokenizer.in_comment = true;
    tokenizer.collect_quoted(ch, TokenKind::Comment)?;
    tokenizer.in_comment = false;
    Ok(())
}

fn namespace_handler<R: Reader>(tokenizer: &mut Tokenizer<R>, ch: u8) -> Result<(), Error> {
    tokenizer.push_char(ch);
    let mut unget = false;

    while let Some(next) = tokenizer.reader.getc() {
        if !is_namespace_char(next) {
            unget = true;
            break;
        }
        tokenizer.push_char(next);
        if tokenizer.reader.is_eof() {
            break;
        }
    }

    tokenizer.push_token(TokenKind::Unresolved);
    if unget {
        tokenizer.reader.ungetc(1);
    }
    Ok(())
}

fn number_handler<R: Reader>(tokenizer: &mut Tokenizer<R>, ch: u8) -> Result<(), Error> {
    // A pending `-` is the sign of this number.
    if tokenizer.last_char() != Some(b'-') {
        tokenizer.push_token(TokenKind::Unresolved);
    }
    tokenizer.push_char(ch);
    let mut unget = false;

    while let Some(next) = tokenizer.reader.getc() {
        if !is_number_char(next) {
            unget = true;
            break;
        }
        if (next == b'-' || next == b'+') && tokenizer.last_char().is_some_and(|c| c.is_ascii_digit()) {
            unget = true;
            break;
        }
        tokenizer.push_char(next);
        if tokenizer.reader.is_eof() {
            break;
        }
    }

    let text = String::from_utf8_lossy(&tokenizer.word).into_owned();
    if is_number(&text) {
        tokenizer.push_token(TokenKind::Number);
    } else {
        tokenizer.push_token(TokenKind::ErrorNumber);
    }

    if unget {
        tokenizer.reader.ungetc(1);
    }
    Ok(())
}

fn nonword_handler<R: Reader>(tokenizer: &mut Tokenizer<R>, ch: u8) -> Result<(), Error> {
    tokenizer.push_token(TokenKind::Unresolved);
    tokenizer.push_char(ch);

    // At end of input the character stays pending and is flushed last.
    let Some(next) = tokenizer.reader.getc() else {
        return Ok(());
    };
    let mut unget = true;

    if DOUBLE_KEYS_FIRST_CHARS.contains(&ch) {
        let pair = [ch, next];
        if DOUBLE_KEYS.iter().any(|key| key.as_bytes() == &pair[..]) {
            tokenizer.push_char(next);
            unget = false;
        }
        tokenizer.push_token(TokenKind::Operator);
    } else if ch == b'+' || ch == b'-' {
        if is_space(next) {
            tokenizer.push_token(TokenKind::OperatorDiadic);
        } else if ch == b'-' && (next == b'.' || next.is_ascii_digit()) {
            // Left pending as the sign of the number that follows.
        } else {
            tokenizer.push_token(TokenKind::OperatorMonadic);
        }
    } else {
        let text = String::from_utf8_lossy(&tokenizer.word).into_owned();
        let kind = if is_operator(&text) { TokenKind::Operator } else { TokenKind::Unresolved };
        tokenizer.push_token(kind);
    }

    if unget {
        tokenizer.reader.ungetc(1);
    }
    Ok(())
}

fn skip_spaces_handler<R: Reader>(tokenizer: &mut Tokenizer<R>, ch: u8) -> Result<(), Error> {
    let preserve = tokenizer.config.preserve_spacing;

    tokenizer.push_token(TokenKind::Unresolved);
    if preserve {
        tokenizer.push_char(ch);
    }

    while let Some(next) = tokenizer.reader.getc() {
        if !is_space(next) {
            tokenizer.reader.ungetc(1);
            break;
        }
        if preserve {
            tokenizer.push_char(next);
        }
    }

    if preserve {
        tokenizer.push_token(TokenKind::Spaces);
    }
    Ok(())
}
