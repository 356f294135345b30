//! ## Mock
//!
//! Contains mock for test units

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, UNIX_EPOCH};

use remotefs::fs::{FileType, Metadata};
use remotefs::File;

use crate::client::{HostListing, ProtocolError, ShareClient};
use crate::url::SmbUrl;

// -- logger

#[allow(dead_code)]
pub fn logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a directory-listing entry; `modified` is epoch seconds, 0 meaning
/// unknown.
pub fn entry(name: &str, size: u64, modified: u64, dir: bool) -> File {
    let file_type = if dir { FileType::Directory } else { FileType::File };
    let mut metadata = Metadata::default().file_type(file_type).size(size);
    if modified != 0 {
        metadata = metadata.modified(UNIX_EPOCH + Duration::from_secs(modified));
    }
    File {
        path: PathBuf::from(name),
        metadata,
    }
}

/// Scripted in-memory share. Listings and object content are keyed by
/// canonical url; every operation is recorded so tests can assert on call
/// counts and locators.
#[derive(Debug, Default)]
pub struct MockClient {
    pub listing: HostListing,
    pub dirs: HashMap<String, Vec<File>>,
    pub objects: HashMap<String, Vec<u8>>,
    pub fail_list_shares: bool,
    pub fail_list_directory: bool,
    pub fail_fetch: bool,
    pub fail_upload: bool,
    pub list_share_calls: usize,
    pub list_directory_calls: usize,
    pub fetches: Vec<SmbUrl>,
    pub uploads: Vec<SmbUrl>,
    pub deletes: Vec<SmbUrl>,
    pub renames: Vec<(SmbUrl, SmbUrl)>,
    pub mkdirs: Vec<SmbUrl>,
    pub rmdirs: Vec<SmbUrl>,
}

impl ShareClient for MockClient {
    fn list_shares(&mut self, _url: &SmbUrl) -> Result<HostListing, ProtocolError> {
        self.list_share_calls += 1;
        if self.fail_list_shares {
            return Err(ProtocolError::new("host enumeration failed"));
        }
        Ok(self.listing.clone())
    }

    fn list_directory(&mut self, url: &SmbUrl) -> Result<Vec<File>, ProtocolError> {
        self.list_directory_calls += 1;
        if self.fail_list_directory {
            return Err(ProtocolError::new("listing failed"));
        }
        self.dirs
            .get(&url.canonical())
            .cloned()
            .ok_or_else(|| ProtocolError::new(format!("cannot list {url}")))
    }

    fn fetch(&mut self, url: &SmbUrl, dest: &Path) -> Result<(), ProtocolError> {
        self.fetches.push(url.clone());
        if self.fail_fetch {
            return Err(ProtocolError::new("fetch failed"));
        }
        let content = self
            .objects
            .get(&url.canonical())
            .cloned()
            .ok_or_else(|| ProtocolError::new(format!("no such object {url}")))?;
        fs::write(dest, content).map_err(|e| ProtocolError::new(e.to_string()))
    }

    fn upload(&mut self, url: &SmbUrl, src: &Path) -> Result<(), ProtocolError> {
        self.uploads.push(url.clone());
        if self.fail_upload {
            return Err(ProtocolError::new("upload failed"));
        }
        let content = fs::read(src).map_err(|e| ProtocolError::new(e.to_string()))?;
        self.objects.insert(url.canonical(), content);
        Ok(())
    }

    fn delete(&mut self, url: &SmbUrl) -> Result<(), ProtocolError> {
        self.deletes.push(url.clone());
        self.objects.remove(&url.canonical());
        Ok(())
    }

    fn rename(&mut self, from: &SmbUrl, to: &SmbUrl) -> Result<(), ProtocolError> {
        self.renames.push((from.clone(), to.clone()));
        if let Some(content) = self.objects.remove(&from.canonical()) {
            self.objects.insert(to.canonical(), content);
        }
        Ok(())
    }

    fn make_directory(&mut self, url: &SmbUrl) -> Result<(), ProtocolError> {
        self.mkdirs.push(url.clone());
        self.dirs.entry(url.canonical()).or_default();
        Ok(())
    }

    fn remove_directory(&mut self, url: &SmbUrl) -> Result<(), ProtocolError> {
        self.rmdirs.push(url.clone());
        self.dirs.remove(&url.canonical());
        Ok(())
    }
}
