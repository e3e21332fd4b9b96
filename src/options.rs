/// How a double quote is escaped inside a quoted value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteEscape {
    /// `"` becomes `\"`
    #[default]
    Backslash,
    /// `"` becomes `\n`, as lines written by older encoders do.
    /// Consumers cannot tell such a quote from a newline.
    Newline,
}

impl QuoteEscape {
    pub(crate) fn marker(self) -> [u8; 2] {
        match self {
            QuoteEscape::Backslash => *b"\\\"",
            QuoteEscape::Newline => *b"\\n",
        }
    }
}

/// Severity of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

/// Options for configuring line encoding and the logger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Escape used for `"` inside quoted values
    pub quote_escape: QuoteEscape,
    /// Lines below this level are dropped by `Logger`
    pub min_level: Level,
    /// Whether `Logger` starts each line with a `level=<name>` field
    pub level_field: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            quote_escape: QuoteEscape::default(),
            min_level: Level::Debug,
            level_field: true,
        }
    }
}

impl Options {
    #[allow(clippy::must_use_candidate)]
    /// Creates new default options
    pub fn new() -> Self {
        Self::default()
    }
}
