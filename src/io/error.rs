use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "I/O error for {path_desc}: {source}",
        path_desc = PathDisplay(path)
    )]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "failed to parse JSON {path_desc}: {details} (line {line}, column {column})",
        path_desc = PathDisplay(path)
    )]
    Parse {
        path: Option<PathBuf>,
        line: usize,
        column: usize,
        details: String,
    },

    #[error(
        "failed to serialize JSON for {path_desc}: {details}",
        path_desc = PathDisplay(path)
    )]
    Serialize {
        path: Option<PathBuf>,
        details: String,
    },
}

impl Error {
    pub fn from_io(source: std::io::Error, path: Option<PathBuf>) -> Self {
        Self::Io { path, source }
    }

    pub fn parse(
        path: Option<PathBuf>,
        line: usize,
        column: usize,
        details: impl Into<String>,
    ) -> Self {
        Self::Parse {
            path,
            line,
            column,
            details: details.into(),
        }
    }

    pub fn serialize(path: Option<PathBuf>, details: impl Into<String>) -> Self {
        Self::Serialize {
            path,
            details: details.into(),
        }
    }
}

struct PathDisplay<'a>(&'a Option<PathBuf>);

impl<'a> fmt::Display for PathDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(p) => write!(f, "file '{}'", p.display()),
            None => write!(f, "stream source"),
        }
    }
}
