//! Content loading errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("block {id:?} has an empty blocktype")]
    EmptyBlockType { id: String },

    #[error("invalid {blocktype} block {id:?}: {source}")]
    InvalidBlock {
        id: String,
        blocktype: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed block: {0}")]
    MalformedBlock(#[source] serde_json::Error),

    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}
