//! CLI argument definitions for the freezer inventory tool.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use freezer_model::{SortField, Unit};

#[derive(Parser)]
#[command(
    name = "freezer",
    version,
    about = "Track a household's frozen-food inventory",
    long_about = "Track a household's frozen-food inventory.\n\n\
                  The inventory lives in a single JSON document in your cloud\n\
                  drive; every command loads it, applies the change, and writes\n\
                  it back."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Path to a JSON configuration file.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Access token for the remote store.
    #[arg(
        long = "access-token",
        env = "FREEZER_ACCESS_TOKEN",
        hide_env_values = true,
        global = true
    )]
    pub access_token: Option<String>,

    /// Token type for the Authorization header.
    #[arg(
        long = "token-type",
        env = "FREEZER_TOKEN_TYPE",
        default_value = "Bearer",
        global = true
    )]
    pub token_type: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the inventory, optionally searched and sorted.
    List(ListArgs),

    /// Add an item to the inventory.
    Add(AddArgs),

    /// Soft-delete an item; it is purged after the retention window.
    Remove(RemoveArgs),

    /// Replace an item's fields.
    Edit(EditArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    /// Search terms; every whitespace-separated term must match the
    /// description, the type, or the unit name.
    #[arg(long = "search", value_name = "TEXT", default_value = "")]
    pub search: String,

    /// Also show soft-deleted items.
    #[arg(long = "include-deleted")]
    pub include_deleted: bool,

    /// Field to sort by.
    #[arg(long = "sort", value_enum, default_value = "description")]
    pub sort: SortFieldArg,

    /// Sort in descending order.
    #[arg(long = "descending")]
    pub descending: bool,
}

#[derive(Parser)]
pub struct AddArgs {
    /// Item description, e.g. "Chicken Breast".
    #[arg(value_name = "DESCRIPTION")]
    pub description: String,

    /// Free-text category, e.g. "Meat".
    #[arg(long = "type", value_name = "TEXT", default_value = "")]
    pub category: String,

    /// Quantity in the chosen unit.
    #[arg(long = "amount", value_name = "N")]
    pub amount: u32,

    /// Measurement unit.
    #[arg(long = "unit", value_enum, default_value = "gram")]
    pub unit: UnitArg,

    /// Date the item entered storage (YYYY-MM-DD, default today).
    #[arg(long = "frozen", value_name = "DATE")]
    pub frozen: Option<NaiveDate>,

    /// Expiration date (YYYY-MM-DD, default today + configured months).
    #[arg(long = "expiration", value_name = "DATE")]
    pub expiration: Option<NaiveDate>,
}

#[derive(Parser)]
pub struct RemoveArgs {
    /// Id of the item to soft-delete.
    #[arg(value_name = "ID")]
    pub id: u64,
}

#[derive(Parser)]
pub struct EditArgs {
    /// Id of the item to replace.
    #[arg(value_name = "ID")]
    pub id: u64,

    /// New description; unchanged when omitted.
    #[arg(long = "description", value_name = "TEXT")]
    pub description: Option<String>,

    /// New category; unchanged when omitted.
    #[arg(long = "type", value_name = "TEXT")]
    pub category: Option<String>,

    /// New amount; unchanged when omitted.
    #[arg(long = "amount", value_name = "N")]
    pub amount: Option<u32>,

    /// New unit; unchanged when omitted.
    #[arg(long = "unit", value_enum)]
    pub unit: Option<UnitArg>,

    /// New frozen date; unchanged when omitted.
    #[arg(long = "frozen", value_name = "DATE")]
    pub frozen: Option<NaiveDate>,

    /// New expiration date; unchanged when omitted.
    #[arg(long = "expiration", value_name = "DATE")]
    pub expiration: Option<NaiveDate>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum UnitArg {
    Gram,
    Pieces,
    Portions,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Gram => Unit::Gram,
            UnitArg::Pieces => Unit::Pieces,
            UnitArg::Portions => Unit::Portions,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortFieldArg {
    Description,
    Type,
    Unit,
    Frozen,
    Expiration,
}

impl From<SortFieldArg> for SortField {
    fn from(arg: SortFieldArg) -> Self {
        match arg {
            SortFieldArg::Description => SortField::Description,
            SortFieldArg::Type => SortField::Type,
            SortFieldArg::Unit => SortField::Unit,
            SortFieldArg::Frozen => SortField::Frozen,
            SortFieldArg::Expiration => SortField::Expiration,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
