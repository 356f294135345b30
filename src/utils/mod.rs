//! # utils
//!
//! utilities for smbvfs

pub mod fmt;
pub mod smb;
