//! Session-level synchronization with the remote document.

use chrono::Utc;
use tracing::{info, warn};

use freezer_engine::purge;
use freezer_model::Item;

use crate::client::{DriveClient, FILE_NAME};
use crate::codec;
use crate::error::Result;
use crate::multipart;

/// Lifecycle of a sync session.
///
/// `Unauthenticated -> Loading -> Synced`; a session re-enters
/// `Loading` only when the host re-authenticates and loads again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncState {
    #[default]
    Unauthenticated,
    Loading,
    Synced,
}

/// Drives load and persist of the canonical list against the single
/// well-known remote document.
///
/// The service never mutates individual items: it reads snapshots to
/// serialize and hands loaded lists back for the host to adopt through
/// a `Replace` command.
#[derive(Debug)]
pub struct SyncService {
    client: DriveClient,
    file_name: String,
    state: SyncState,
}

impl SyncService {
    pub fn new(client: DriveClient) -> Self {
        Self {
            client,
            file_name: FILE_NAME.to_string(),
            state: SyncState::Unauthenticated,
        }
    }

    /// Overrides the well-known document name.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Loads the inventory from the remote store.
    ///
    /// A missing document is an empty inventory, not an error.
    /// Transport failures and malformed payloads propagate; the caller
    /// decides how to surface them.
    pub async fn load(&mut self) -> Result<Vec<Item>> {
        self.state = SyncState::Loading;

        let Some(file) = self.client.find_file(&self.file_name).await? else {
            info!(name = %self.file_name, "no remote document yet; starting empty");
            self.state = SyncState::Synced;
            return Ok(Vec::new());
        };

        let body = self.client.download(&file.id).await?;
        let items = codec::decode_items(&body)?;
        info!(count = items.len(), "loaded inventory from remote document");
        self.state = SyncState::Synced;
        Ok(items)
    }

    /// Persists the full item list as the remote document body.
    ///
    /// Items whose retention window has elapsed are purged from the
    /// snapshot first; the remote document never carries them. The
    /// write is a whole-document replace: last writer wins. On failure
    /// the local session stays usable, but local and remote diverge
    /// until the next successful persist.
    pub async fn persist(&self, items: &[Item]) -> Result<()> {
        let snapshot = purge(items, Utc::now());
        let body = codec::encode_items(&snapshot)?;
        let payload = multipart::build_body(&self.file_name, &body);

        let result = match self.client.find_file(&self.file_name).await? {
            Some(file) => self.client.update(&file.id, payload).await,
            None => self.client.create(payload).await,
        };

        match &result {
            Ok(()) => info!(count = snapshot.len(), "persisted inventory"),
            Err(error) => warn!(%error, "persist failed; remote document is stale"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DriveSession;

    #[test]
    fn test_new_service_is_unauthenticated() {
        let client = DriveClient::new(DriveSession::bearer("token")).unwrap();
        let service = SyncService::new(client);
        assert_eq!(service.state(), SyncState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_load_failure_leaves_session_in_loading() {
        // Unroutable base URL: lookup fails at the transport level.
        let client = DriveClient::new(DriveSession::bearer("token"))
            .unwrap()
            .with_base_url("http://127.0.0.1:1");
        let mut service = SyncService::new(client);

        let result = service.load().await;
        assert!(result.is_err());
        assert_eq!(service.state(), SyncState::Loading);
    }
}
