//! # client
//!
//! Remote client contract towards the external smb tool

use std::path::Path;

use remotefs::File;
use thiserror::Error;

use crate::url::SmbUrl;

/// Unified failure kind raised by a [`ShareClient`] on any underlying
/// protocol, process or parsing error. Finer categorization is the
/// collaborator's concern, not this crate's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("smb client error: {0}")]
pub struct ProtocolError(String);

impl ProtocolError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// What a host reports when asked to enumerate itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostListing {
    pub shares: Vec<String>,
    pub servers: Vec<String>,
    pub workgroups: Vec<String>,
}

/// Collaborator performing the actual protocol operations against a share.
///
/// All operations are synchronous and may block on network or process I/O;
/// timeout and retry policy belong to the implementation, never to the
/// wrapper. The locator carries host, share, path and credentials.
pub trait ShareClient {
    /// Enumerate shares, servers and workgroups visible on the url's host
    fn list_shares(&mut self, url: &SmbUrl) -> Result<HostListing, ProtocolError>;

    /// List a directory; entry order must be preserved as reported
    fn list_directory(&mut self, url: &SmbUrl) -> Result<Vec<File>, ProtocolError>;

    /// Download the full remote object into the local file at `dest`
    fn fetch(&mut self, url: &SmbUrl, dest: &Path) -> Result<(), ProtocolError>;

    /// Upload the local file at `src` as the remote object
    fn upload(&mut self, url: &SmbUrl, src: &Path) -> Result<(), ProtocolError>;

    /// Remove a remote file
    fn delete(&mut self, url: &SmbUrl) -> Result<(), ProtocolError>;

    /// Rename within one share; fails if the locators span hosts or shares
    fn rename(&mut self, from: &SmbUrl, to: &SmbUrl) -> Result<(), ProtocolError>;

    /// Create a remote directory
    fn make_directory(&mut self, url: &SmbUrl) -> Result<(), ProtocolError>;

    /// Remove a remote directory
    fn remove_directory(&mut self, url: &SmbUrl) -> Result<(), ProtocolError>;
}
