//! Pure inventory state engine.
//!
//! Deterministic building blocks over the canonical item list: the
//! mutation reducer, the sort/filter pipeline, the expiration-warning
//! classifier, and the purge projection. All functions are pure; the
//! only stateful type is [`InventoryStore`], the session's single
//! dispatch point.

pub mod filter;
pub mod purge;
pub mod reducer;
pub mod sort;
pub mod store;
pub mod warning;

pub use filter::filter;
pub use purge::{is_purgeable, purge};
pub use reducer::{Command, apply};
pub use sort::{SortAction, SortedView, reduce_sorted, sort_items};
pub use store::InventoryStore;
pub use warning::{Warning, classify};
