#![crate_name = "smbvfs"]
#![crate_type = "lib"]

//! # smbvfs
//!
//! smbvfs exposes a remote SMB/CIFS share as a virtual filesystem through a
//! stream-wrapper interface: ordinary path operations (open, read, write,
//! stat, list, rename, mkdir, delete) translate into operations against a
//! remote share reachable through an external command-line client.
//!
//! The crate provides the adapter layer only: URL-addressed dispatch
//! ([`SmbUrl`]), directory-listing caching, write-back staging through local
//! scratch files and stat synthesis. The actual protocol work is delegated
//! to a [`ShareClient`] implementation, which is the integration point for
//! whatever smb tooling the embedding application uses.
//!
//! ## Get started
//!
//! Provide a [`ShareClient`] and drive the wrapper with urls of the form
//! `smb://[user[:password]@]host[/share[/path]]`:
//!
//! ```rust
//! use smbvfs::{HostListing, ProtocolError, ShareClient, SmbStreamWrapper, SmbUrl, UrlKind};
//! # use std::path::Path;
//! # use remotefs::File;
//!
//! struct StaticHost;
//!
//! impl ShareClient for StaticHost {
//!     fn list_shares(&mut self, _url: &SmbUrl) -> Result<HostListing, ProtocolError> {
//!         Ok(HostListing {
//!             shares: vec!["public".to_string()],
//!             ..Default::default()
//!         })
//!     }
//! #    fn list_directory(&mut self, url: &SmbUrl) -> Result<Vec<File>, ProtocolError> {
//! #        Err(ProtocolError::new(format!("cannot list {url}")))
//! #    }
//! #    fn fetch(&mut self, _url: &SmbUrl, _dest: &Path) -> Result<(), ProtocolError> {
//! #        Err(ProtocolError::new("offline"))
//! #    }
//! #    fn upload(&mut self, _url: &SmbUrl, _src: &Path) -> Result<(), ProtocolError> {
//! #        Err(ProtocolError::new("offline"))
//! #    }
//! #    fn delete(&mut self, _url: &SmbUrl) -> Result<(), ProtocolError> {
//! #        Err(ProtocolError::new("offline"))
//! #    }
//! #    fn rename(&mut self, _from: &SmbUrl, _to: &SmbUrl) -> Result<(), ProtocolError> {
//! #        Err(ProtocolError::new("offline"))
//! #    }
//! #    fn make_directory(&mut self, _url: &SmbUrl) -> Result<(), ProtocolError> {
//! #        Err(ProtocolError::new("offline"))
//! #    }
//! #    fn remove_directory(&mut self, _url: &SmbUrl) -> Result<(), ProtocolError> {
//! #        Err(ProtocolError::new("offline"))
//! #    }
//!     // ...remaining ShareClient operations elided
//! }
//!
//! // classify a url
//! let url = SmbUrl::parse("smb://guest@fileserver/public/reports/2013.xml");
//! assert_eq!(url.kind(), UrlKind::Path);
//! assert_eq!(url.share(), "public");
//! assert_eq!(url.command_path(), r"reports\2013.xml");
//!
//! // list the shares of a host
//! let mut wrapper = SmbStreamWrapper::new(StaticHost);
//! wrapper.dir_opendir("smb://fileserver").unwrap();
//! assert_eq!(wrapper.dir_readdir(), Some("public".to_string()));
//! assert_eq!(wrapper.dir_readdir(), None);
//! ```
//!
//! The process-wide scheme registry is explicit:
//!
//! ```rust
//! use smbvfs::{registry, SMB_SCHEME};
//!
//! assert!(registry::register(SMB_SCHEME));
//! assert!(registry::is_registered(SMB_SCHEME));
//! assert!(registry::unregister(SMB_SCHEME));
//! ```
//!
//! these features are supported:
//!
//! - `no-log`: disable logging. By default, this library will log via the
//!   `log` crate.
//!

// -- crates
#[macro_use]
extern crate log;

mod cache;
mod client;
mod error;
pub mod registry;
mod session;
mod url;
mod wrapper;

pub use client::{HostListing, ProtocolError, ShareClient};
pub use error::{WrapperError, WrapperResult};
pub use session::{OpenMode, StreamSession};
pub use url::{SmbUrl, UrlKind, SMB_SCHEME};
pub use wrapper::{SmbStreamWrapper, StatRecord};

// -- utils
pub(crate) mod utils;
// -- mock
#[cfg(test)]
pub(crate) mod mock;
