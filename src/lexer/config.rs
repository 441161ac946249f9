use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Emit whitespace runs as SPACES tokens so the original spacing can be
    /// rebuilt. When off, whitespace is dropped and words are trimmed.
    pub preserve_spacing: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            preserve_spacing: env::var("GPL_PRESERVE_SPACING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

impl LexerConfig {
    pub fn with_preserve_spacing(mut self, preserve_spacing: bool) -> Self {
        self.preserve_spacing = preserve_spacing;
        self
    }
}
