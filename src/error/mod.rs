use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {}", path.display())]
    FileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not decode JSON from {}", path.display())]
    DecodeFailure {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("the {document} file is empty or is not a list of records")]
    EmptyInput { document: &'static str },
    #[error("could not write results to {}", path.display())]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Catalog(#[from] crate::domain::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
