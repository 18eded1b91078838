//! Hand-curated class → English phrases, one table per semantic group.
//!
//! The tables are merged into a single map on first use. A class listed here
//! always wins over the pattern matchers.

use std::collections::HashMap;
use std::sync::LazyLock;

mod accessibility;
mod backgrounds;
mod borders;
mod colors;
mod effects;
mod filters;
mod flexbox_grid;
mod interactivity;
mod layout;
mod positioning;
mod sizing;
mod spacing;
mod svg;
mod tables;
mod transforms;
mod transitions;
mod typography;

pub type MappingTable = &'static [(&'static str, &'static str)];

/// Every group table, by group name.
pub const GROUPS: &[(&str, MappingTable)] = &[
    ("layout", layout::CLASSES),
    ("flexbox-grid", flexbox_grid::CLASSES),
    ("spacing", spacing::CLASSES),
    ("sizing", sizing::CLASSES),
    ("colors", colors::CLASSES),
    ("backgrounds", backgrounds::CLASSES),
    ("borders", borders::CLASSES),
    ("typography", typography::CLASSES),
    ("tables", tables::CLASSES),
    ("transitions", transitions::CLASSES),
    ("transforms", transforms::CLASSES),
    ("interactivity", interactivity::CLASSES),
    ("effects", effects::CLASSES),
    ("filters", filters::CLASSES),
    ("positioning", positioning::CLASSES),
    ("svg", svg::CLASSES),
    ("accessibility", accessibility::CLASSES),
];

static MERGED: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    GROUPS
        .iter()
        .flat_map(|(_, table)| table.iter().copied())
        .collect()
});

pub fn lookup(class: &str) -> Option<&'static str> {
    MERGED.get(class).copied()
}

pub fn len() -> usize {
    MERGED.len()
}
