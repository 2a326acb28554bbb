use crate::parse;
use std::{
    fmt::{self, Display, Formatter},
    io,
    path::PathBuf,
};

#[derive(Debug)]
pub enum Error {
    /// the menu document could not be opened or read
    ResourceAccess { path: PathBuf, source: io::Error },
    Parse(parse::Error),
    Io(io::Error),
    Json(serde_json::Error),
}

impl Error {
    pub fn resource_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ResourceAccess {
            path: path.into(),
            source,
        }
    }
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceAccess { path, source } => {
                write!(f, "Resource access error: {}: {source}", path.display())
            }
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Json(e) => write!(f, "Json error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ResourceAccess { source, .. } | Self::Io(source) => Some(source),
            Self::Parse(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
