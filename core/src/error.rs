use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed user input. Recoverable: the caller re-prompts or aborts the action.
    #[error("{0}")]
    Validation(String),

    /// A search or selection matched nothing.
    #[error("{0}")]
    Lookup(String),

    /// A persisted record could not be parsed.
    #[error("Corrupt data in {}{}: {reason}", .path.display(), line_suffix(.line))]
    DataCorruption {
        path: PathBuf,
        line: Option<u64>,
        reason: String,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corruption(
        path: impl Into<PathBuf>,
        line: Option<u64>,
        reason: impl Into<String>,
    ) -> Self {
        Error::DataCorruption {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Map a csv error from reading `path`: I/O failures stay I/O, everything else is
    /// a malformed record.
    pub(crate) fn from_csv(path: impl Into<PathBuf>, err: csv::Error) -> Self {
        let path = path.into();
        let line = err.position().map(csv::Position::line);
        let reason = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Error::Io { path, source },
            _ => Error::DataCorruption { path, line, reason },
        }
    }

    /// True for errors the shell recovers from without ending the session.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::Lookup(_))
    }
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, Error>;
