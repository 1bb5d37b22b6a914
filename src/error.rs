use std::path::PathBuf;

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to access `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse json in `{path}`: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{set}: mismatched column lengths ({detail})")]
    LengthMismatch { set: &'static str, detail: String },

    #[error("timestamp {0} cannot be represented as a calendar time")]
    InvalidTimestamp(f64),

    #[error("unsupported output format for `{}` (expected .png, .svg or .pdf)", path.display())]
    UnsupportedOutputFormat { path: PathBuf },

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ChartError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
