use thiserror::Error;

/// Errors raised by the palette engine.
///
/// Only malformed color text can fail: every computation on an
/// already parsed color is total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The text is not `#rrggbb` or `rrggbb` (hex digits, any case).
    #[error("invalid hex color {text:?}{}", entry_suffix(.entry))]
    InvalidColorFormat {
        text: String,
        /// Position (0-based) and name of the batch entry the text
        /// came from, if any.
        entry: Option<(usize, String)>,
    },
}

fn entry_suffix(entry: &Option<(usize, String)>) -> String {
    match entry {
        Some((i, name)) => format!(" for color {} ({name})", i + 1),
        None => String::new(),
    }
}

impl Error {
    pub(crate) fn invalid(text: &str) -> Self {
        Error::InvalidColorFormat { text: text.to_string(), entry: None }
    }

    /// Attach the batch position and name of the entry that failed.
    pub(crate) fn at_entry(self, index: usize, name: &str) -> Self {
        match self {
            Error::InvalidColorFormat { text, .. } =>
                Error::InvalidColorFormat {
                    text, entry: Some((index, name.to_string())) },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
