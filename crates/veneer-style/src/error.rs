use std::fmt;

/// Which stage rejected the sheet.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Bad character, color, number, unit, string or comment.
    Lexical,
    /// Tokens in the wrong order.
    Syntax,
    /// A `name` / `name:state` block defined twice.
    DuplicateStyle,
}

/// A parse error from a `.vnr` style sheet.
///
/// Positions are 1-based. Errors raised inside a `style` block name it, and
/// errors inside a property value name the property.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub line: usize,
    pub col: usize,
    /// Enclosing block as written in the sheet, e.g. `card:focused`.
    pub style: Option<String>,
    pub property: Option<String>,
}

impl ParseError {
    pub(crate) fn lexical(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self::new(ParseErrorKind::Lexical, msg, line, col)
    }

    pub(crate) fn syntax(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self::new(ParseErrorKind::Syntax, msg, line, col)
    }

    pub(crate) fn new(kind: ParseErrorKind, msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self { kind, message: msg.into(), line, col, style: None, property: None }
    }

    /// Names the enclosing block unless an inner block already did.
    pub(crate) fn in_style(mut self, style: impl Into<String>) -> Self {
        self.style.get_or_insert_with(|| style.into());
        self
    }

    pub(crate) fn in_property(mut self, key: &str) -> Self {
        self.property.get_or_insert_with(|| key.to_string());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "style parse error at {}:{}", self.line, self.col)?;
        match (&self.style, &self.property) {
            (Some(style), Some(prop)) => write!(f, " in `{style}` property `{prop}`")?,
            (Some(style), None) => write!(f, " in `{style}`")?,
            (None, Some(prop)) => write!(f, " in property `{prop}`")?,
            (None, None) => {}
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for ParseError {}
