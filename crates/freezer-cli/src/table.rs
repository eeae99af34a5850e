//! Table rendering for the inventory view.

use chrono::Utc;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use freezer_engine::{SortedView, Warning, classify};
use freezer_model::{Item, WarningConfig};

/// Prints the sorted view with an expiration-warning column.
pub fn print_inventory(view: &SortedView, warnings: &WarningConfig) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Description"),
        header_cell("Type"),
        header_cell("Amount"),
        header_cell("Unit"),
        header_cell("Frozen"),
        header_cell("Expires"),
        header_cell("Warning"),
    ]);

    let today = Utc::now();
    for item in &view.items {
        let warning = classify(item.expiration, today, warnings);
        table.add_row(vec![
            Cell::new(item.id).set_alignment(CellAlignment::Right),
            description_cell(item),
            Cell::new(&item.category),
            Cell::new(item.amount).set_alignment(CellAlignment::Right),
            Cell::new(item.unit.as_str()),
            Cell::new(item.frozen.format("%Y-%m-%d")),
            Cell::new(item.expiration.format("%Y-%m-%d")),
            warning_cell(warning),
        ]);
    }

    println!("{table}");
    println!(
        "{} item(s), sorted by {} ({})",
        view.items.len(),
        view.field,
        view.direction
    );
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn description_cell(item: &Item) -> Cell {
    if item.is_deleted {
        Cell::new(format!("{} (deleted)", item.description)).add_attribute(Attribute::Dim)
    } else {
        Cell::new(&item.description)
    }
}

fn warning_cell(warning: Warning) -> Cell {
    match warning {
        Warning::Ok => Cell::new(""),
        Warning::FirstWarning => Cell::new(warning.label()).fg(Color::Cyan),
        Warning::SecondWarning => Cell::new(warning.label()).fg(Color::Yellow),
        Warning::Expired => Cell::new(warning.label())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}
