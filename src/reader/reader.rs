/// Pull-based byte source the tokenizer stages read from.
///
/// `ungetc` never fails: rewinding past the start clamps to position 0.
pub trait Reader {
    fn getc(&mut self) -> Option<u8>;
    fn ungetc(&mut self, n: usize);
    /// Consumes and returns everything left, `None` once the input is used up.
    fn gets(&mut self) -> Option<String>;
    /// True when the next `getc` would return `None`.
    fn is_eof(&mut self) -> bool;
    fn rewind(&mut self);
    fn position(&self) -> usize;
    fn all(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct StringReader {
    text: Vec<u8>,
    pos: usize,
}

impl StringReader {
    pub fn new(text: &str) -> StringReader {
        StringReader {
            text: text.as_bytes().to_vec(),
            pos: 0,
        }
    }
}

impl Reader for StringReader {
    fn getc(&mut self) -> Option<u8> {
        let ch = self.text.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn ungetc(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
    }

    fn gets(&mut self) -> Option<String> {
        if self.is_eof() {
            return None;
        }

        let rest = String::from_utf8_lossy(&self.text[self.pos..]).into_owned();
        self.pos = self.text.len();
        Some(rest)
    }

    fn is_eof(&mut self) -> bool {
        self.pos >= self.text.len()
    }

    fn rewind(&mut self) {
        self.pos = 0;
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn all(&self) -> String {
        String::from_utf8_lossy(&self.text).into_owned()
    }
}

/// Reader fed one line at a time by an outside source, such as a prompt.
///
/// Lines are pulled only when the buffered text runs out, and each one is
/// kept with a trailing newline so a later `rewind` replays the whole session.
pub struct LineReader<I: Iterator<Item = String>> {
    source: I,
    buffer: Vec<u8>,
    lines: usize,
    pos: usize,
    exhausted: bool,
}

impl<I: Iterator<Item = String>> LineReader<I> {
    pub fn new(source: I) -> LineReader<I> {
        LineReader {
            source,
            buffer: vec![],
            lines: 0,
            pos: 0,
            exhausted: false,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines
    }

    fn fill_buffer(&mut self) -> bool {
        if self.exhausted {
            return false;
        }

        match self.source.next() {
            Some(line) => {
                self.buffer.extend_from_slice(line.as_bytes());
                self.buffer.push(b'\n');
                self.lines += 1;
                true
            }
            None => {
                self.exhausted = true;
                false
            }
        }
    }
}

impl<I: Iterator<Item = String>> Reader for LineReader<I> {
    fn getc(&mut self) -> Option<u8> {
        if self.pos >= self.buffer.len() && !self.fill_buffer() {
            return None;
        }

        let ch = self.buffer.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn ungetc(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
    }

    fn gets(&mut self) -> Option<String> {
        if self.pos >= self.buffer.len() && !self.fill_buffer() {
            return None;
        }

        let rest = String::from_utf8_lossy(&self.buffer[self.pos..]).into_owned();
        self.pos = self.buffer.len();
        Some(rest)
    }

    fn is_eof(&mut self) -> bool {
        self.pos >= self.buffer.len() && !self.fill_buffer()
    }

    fn rewind(&mut self) {
        self.pos = 0;
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn all(&self) -> String {
        String::from_utf8_lossy(&self.buffer).into_owned()
    }
}
