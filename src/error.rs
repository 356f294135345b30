//! # error
//!
//! Error taxonomy for wrapper operations

use thiserror::Error;

use crate::client::ProtocolError;

/// Result alias for wrapper operations
pub type WrapperResult<T> = Result<T, WrapperError>;

/// Failure of a wrapper operation.
///
/// Remote client failures propagate to the immediate caller without retries
/// or suppression; only stat probes downgrade them to an absent result.
#[derive(Debug, Error)]
pub enum WrapperError {
    /// URL does not classify as required by the operation
    #[error("malformed smb url: {0}")]
    MalformedUrl(String),
    /// listing or enumeration failed, or the target was not among the
    /// enumerated entries
    #[error("remote listing failed: {0}")]
    RemoteList(#[source] ProtocolError),
    /// path definitively absent per remote metadata
    #[error("no such file or directory: {0}")]
    NotFound(String),
    /// fetch or upload of file content failed
    #[error("transfer failed: {0}")]
    Transfer(#[source] ProtocolError),
    /// client failure from a mutating operation, propagated unchanged
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    /// local scratch file i/o failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WrapperError {
    pub fn is_malformed_url(&self) -> bool {
        matches!(self, Self::MalformedUrl(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
