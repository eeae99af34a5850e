//! Debounced persist scheduling.
//!
//! Mutations can arrive faster than uploads complete. The tracker
//! coalesces rapid successive changes into at most one persist per
//! quiet window, with a cap on how long changes may stay local while
//! the window keeps being reset.

use std::time::Instant;

/// Timing policy for coalesced persists.
#[derive(Debug, Clone, Copy)]
pub struct SaveConfig {
    /// Quiet window after the last change before persisting.
    pub debounce_ms: u64,
    /// Upper bound on how long unsaved changes may accumulate.
    pub max_delay_ms: u64,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 2_000,
            max_delay_ms: 30_000,
        }
    }
}

impl SaveConfig {
    /// Decides whether a persist is due for the given change ages.
    pub fn is_due(&self, since_last_change_ms: u64, since_first_unsaved_ms: u64) -> bool {
        since_last_change_ms >= self.debounce_ms || since_first_unsaved_ms >= self.max_delay_ms
    }
}

/// Tracks local changes that have not reached the remote document yet.
#[derive(Debug, Clone, Default)]
pub struct DirtyTracker {
    dirty: bool,
    persisting: bool,
    last_change: Option<Instant>,
    first_unsaved_change: Option<Instant>,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the local list and remote document may diverge.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// True while a persist is in flight.
    #[inline]
    pub fn is_persisting(&self) -> bool {
        self.persisting
    }

    /// Records a mutation; resets the debounce window.
    pub fn mark_dirty(&mut self) {
        let now = Instant::now();
        self.dirty = true;
        self.last_change = Some(now);
        if self.first_unsaved_change.is_none() {
            self.first_unsaved_change = Some(now);
        }
    }

    /// Marks that a persist has started.
    pub fn persist_started(&mut self) {
        self.persisting = true;
    }

    /// Marks a successful persist; the remote document is current again.
    pub fn persist_complete(&mut self) {
        self.dirty = false;
        self.persisting = false;
        self.first_unsaved_change = None;
    }

    /// Marks a failed persist. The state stays dirty: local and remote
    /// diverge until the next successful persist.
    pub fn persist_failed(&mut self) {
        self.persisting = false;
    }

    /// Whether a persist should be issued now under `config`.
    ///
    /// Never true while another persist is in flight; an in-flight
    /// persist is not cancelled by newer changes.
    pub fn should_persist(&self, config: &SaveConfig) -> bool {
        if !self.dirty || self.persisting {
            return false;
        }
        match (self.last_change, self.first_unsaved_change) {
            (Some(last), Some(first)) => config.is_due(
                last.elapsed().as_millis() as u64,
                first.elapsed().as_millis() as u64,
            ),
            _ => false,
        }
    }
}
