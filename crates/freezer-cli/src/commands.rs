//! Command implementations: load, mutate, persist.

use anyhow::{Context, bail};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::info;

use freezer_engine::{
    Command, InventoryStore, SortAction, SortedView, filter, reduce_sorted,
};
use freezer_model::datetime::months_from_now;
use freezer_model::{Config, Item, SortField};
use freezer_sync::SyncService;

use crate::cli::{AddArgs, EditArgs, ListArgs, RemoveArgs};
use crate::table::print_inventory;

/// Everything a command needs: the configuration and a sync session.
pub struct CommandContext {
    pub config: Config,
    pub service: SyncService,
}

impl CommandContext {
    /// Loads the remote document into a fresh store via `Replace`.
    async fn load_store(&mut self) -> anyhow::Result<InventoryStore> {
        let items = self
            .service
            .load()
            .await
            .context("failed to load inventory from the remote store")?;
        let mut store = InventoryStore::new();
        store.dispatch(&Command::Replace(items));
        Ok(store)
    }

    /// Persists the canonical list, surfacing failures to the user.
    async fn persist(&self, store: &InventoryStore) -> anyhow::Result<()> {
        self.service
            .persist(store.items())
            .await
            .context("failed to persist inventory; your change is not saved remotely")
    }
}

pub async fn run_list(ctx: &mut CommandContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.load_store().await?;
    let visible = filter(store.items(), &args.search, args.include_deleted);

    let field = SortField::from(args.sort);
    let mut view = reduce_sorted(&SortedView::new(), SortAction::Update(visible));
    if field != view.field {
        view = reduce_sorted(&view, SortAction::Sort(field));
    }
    if args.descending {
        view = reduce_sorted(&view, SortAction::Sort(field));
    }

    print_inventory(&view, &ctx.config.warnings);
    Ok(())
}

pub async fn run_add(ctx: &mut CommandContext, args: &AddArgs) -> anyhow::Result<()> {
    let today = Utc::now();
    let frozen = args.frozen.map_or(today, date_to_instant);
    let expiration = args
        .expiration
        .map_or_else(|| months_from_now(ctx.config.default_expiration), date_to_instant);

    if frozen > today {
        bail!("frozen date may not be in the future");
    }
    if expiration < today {
        bail!("expiration date may not be in the past");
    }
    let horizon = months_from_now(ctx.config.max_expiration);
    if expiration > horizon {
        bail!(
            "expiration exceeds the configured maximum of {} months",
            ctx.config.max_expiration
        );
    }

    let mut store = ctx.load_store().await?;
    let item = Item::new(
        args.description.clone(),
        args.category.clone(),
        args.amount,
        args.unit.into(),
        frozen,
        expiration,
    );
    let snapshot = store.dispatch(&Command::Add(item));
    let assigned = snapshot.last().map(|item| item.id).unwrap_or_default();

    ctx.persist(&store).await?;
    info!(id = assigned, "item added");
    println!("Added \"{}\" with id {assigned}", args.description);
    Ok(())
}

pub async fn run_remove(ctx: &mut CommandContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let mut store = ctx.load_store().await?;
    let before = store.items().to_vec();

    let after = store.dispatch(&Command::SoftDelete {
        id: args.id,
        months_to_keep_deleted_items: ctx.config.months_to_keep_deleted_items,
    });
    if after == before {
        println!("No live item with id {}; nothing to do", args.id);
        return Ok(());
    }

    ctx.persist(&store).await?;
    println!(
        "Removed item {}; it will be purged after {} month(s)",
        args.id, ctx.config.months_to_keep_deleted_items
    );
    Ok(())
}

pub async fn run_edit(ctx: &mut CommandContext, args: &EditArgs) -> anyhow::Result<()> {
    let mut store = ctx.load_store().await?;

    let Some(existing) = store.items().iter().find(|item| item.id == args.id).cloned() else {
        bail!("no item with id {}", args.id);
    };

    // Full replace: unspecified flags keep the existing values.
    let updated = Item {
        description: args.description.clone().unwrap_or(existing.description),
        category: args.category.clone().unwrap_or(existing.category),
        amount: args.amount.unwrap_or(existing.amount),
        unit: args.unit.map_or(existing.unit, Into::into),
        frozen: args.frozen.map_or(existing.frozen, date_to_instant),
        expiration: args.expiration.map_or(existing.expiration, date_to_instant),
        id: existing.id,
        created: existing.created,
        is_deleted: existing.is_deleted,
        deleted_on: existing.deleted_on,
    };

    store.dispatch(&Command::Update(updated));
    ctx.persist(&store).await?;
    println!("Updated item {}", args.id);
    Ok(())
}

/// Interprets a calendar date as midnight UTC.
fn date_to_instant(date: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc)
}
