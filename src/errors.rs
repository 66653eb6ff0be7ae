use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read edge list {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("edge list {path} contains no edges")]
    Empty { path: PathBuf },
    #[error("too many {what}: the index layout addresses at most {limit}")]
    Capacity { what: &'static str, limit: u64 },
}

impl LoadError {
    pub fn unreadable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        LoadError::Unreadable {
            path: path.into(),
            source,
        }
    }

    pub fn empty<P: Into<PathBuf>>(path: P) -> Self {
        LoadError::Empty { path: path.into() }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("graph has no nodes")]
    EmptyGraph,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl QueryError {
    pub fn invalid_argument<T: Into<String>>(msg: T) -> Self {
        QueryError::InvalidArgument(msg.into())
    }
}

#[derive(Debug, Error)]
pub enum NeuronetError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
