use std::fmt::Display;
use std::io;
use std::path::PathBuf;

use digest_traits::{Algorithm, ErrorKind, Source};

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// A provider could not be constructed. Nothing has run yet.
    #[error("{side} provider setup failed: {message}")]
    Setup { side: Source, message: String },

    /// One provider failed one algorithm.
    #[error("{algorithm} ({side}): {message}")]
    Provider {
        algorithm: Algorithm,
        side: Source,
        kind: ErrorKind,
        message: String,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("cannot read input file {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write report: {0}")]
    Report(#[from] io::Error),
}

impl HarnessError {
    pub fn setup<E: digest_traits::Error + Display>(side: Source, err: E) -> Self {
        HarnessError::Setup { side, message: err.to_string() }
    }

    pub fn provider<E: digest_traits::Error + Display>(algorithm: Algorithm, side: Source, err: &E) -> Self {
        HarnessError::Provider {
            algorithm,
            side,
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Error kind for provider failures, `None` for everything else.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            HarnessError::Provider { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Fatal errors end the run without a report.
    pub fn is_fatal(&self) -> bool {
        match self {
            HarnessError::Provider { kind, .. } => kind.is_fatal(),
            _ => true,
        }
    }
}
