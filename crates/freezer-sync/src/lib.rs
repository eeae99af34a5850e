//! Remote-document synchronization for the freezer inventory.
//!
//! One JSON document per user in a user-owned cloud drive, discovered
//! by exact filename. [`SyncService::load`] decodes it into items on
//! session start; [`SyncService::persist`] uploads the purged list
//! after mutations. Writes replace the whole document; there is no
//! concurrency token, so a single active writer per document is
//! assumed.

pub mod autosave;
pub mod client;
pub mod codec;
pub mod error;
pub mod multipart;
pub mod service;
pub mod session;

pub use autosave::{DirtyTracker, SaveConfig};
pub use client::{DriveClient, DriveFile, FILE_NAME};
pub use codec::{decode_items, encode_items};
pub use error::{Result, SyncError};
pub use service::{SyncService, SyncState};
pub use session::DriveSession;
