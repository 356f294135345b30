//! # smb utils
//!
//! SMB metadata utilities

use remotefs::fs::FileType;
use remotefs::File;

use crate::utils::fmt::epoch_secs;
use crate::wrapper::StatRecord;

/// Synthesize a `StatRecord` from a directory-listing entry.
/// Directories always report size 0; a missing mtime reports as 0.
pub fn file_to_stat(file: &File) -> StatRecord {
    let file_type = file.metadata().file_type;
    StatRecord {
        size: if file_type == FileType::Directory {
            0
        } else {
            file.metadata().size
        },
        modified: file.metadata().modified.map(epoch_secs).unwrap_or(0),
        file_type,
    }
}
