//! Shared data model for the freezer inventory engine.
//!
//! Leaf crate: vocabularies ([`Unit`], [`SortField`], [`SortDirection`]),
//! the [`Item`] entity, the configuration surface, and month arithmetic.
//! No I/O lives here.

pub mod config;
pub mod datetime;
pub mod error;
pub mod item;
pub mod sort;
pub mod unit;

pub use config::{Config, WarningConfig};
pub use error::{FreezerError, Result};
pub use item::Item;
pub use sort::{SortDirection, SortField};
pub use unit::Unit;
