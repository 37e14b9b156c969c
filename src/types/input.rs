//! Input lines and per-line tokenization results.

/// Arrival index of a dispatched line.
pub type LineId = usize;

/// One line of input exactly as supplied, not yet checked for UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawLine {
    bytes: Vec<u8>,
}

impl RawLine {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Borrow the line as text, or report where decoding stopped.
    pub fn as_text(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.bytes)
    }
}

impl From<&str> for RawLine {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl From<String> for RawLine {
    fn from(s: String) -> Self {
        Self::new(s.into_bytes())
    }
}

impl From<Vec<u8>> for RawLine {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

/// Input as delivered by the host: a single value or a batch of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInput {
    SingleLine(RawLine),
    LineBatch(Vec<RawLine>),
}

impl TextInput {
    /// Resolve to the uniform line sequence the dispatcher consumes.
    pub fn into_lines(self) -> Vec<RawLine> {
        match self {
            TextInput::SingleLine(line) => vec![line],
            TextInput::LineBatch(lines) => lines,
        }
    }
}

impl From<&str> for TextInput {
    fn from(s: &str) -> Self {
        TextInput::SingleLine(s.into())
    }
}

impl From<String> for TextInput {
    fn from(s: String) -> Self {
        TextInput::SingleLine(s.into())
    }
}

impl From<Vec<u8>> for TextInput {
    fn from(bytes: Vec<u8>) -> Self {
        TextInput::SingleLine(bytes.into())
    }
}

impl From<RawLine> for TextInput {
    fn from(line: RawLine) -> Self {
        TextInput::SingleLine(line)
    }
}

impl From<Vec<String>> for TextInput {
    fn from(lines: Vec<String>) -> Self {
        TextInput::LineBatch(lines.into_iter().map(RawLine::from).collect())
    }
}

impl From<Vec<&str>> for TextInput {
    fn from(lines: Vec<&str>) -> Self {
        TextInput::LineBatch(lines.into_iter().map(RawLine::from).collect())
    }
}

impl From<Vec<RawLine>> for TextInput {
    fn from(lines: Vec<RawLine>) -> Self {
        TextInput::LineBatch(lines)
    }
}

/// Tokens that survived stop-word filtering for one line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineResult {
    pub line: LineId,
    pub tokens: Vec<String>,
}

impl LineResult {
    pub fn new(line: LineId, tokens: Vec<String>) -> Self {
        Self { line, tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
