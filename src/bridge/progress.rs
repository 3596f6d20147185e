//! Migration coverage over the mapping tables. Reporting only.

use serde::Serialize;

use super::{mapping, TokenCategory};

/// Coverage of one category's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryProgress {
    pub category: TokenCategory,
    /// Entries in the table.
    pub total: usize,
    /// Entries with a non-empty external name.
    pub migrated: usize,
    /// `round(100 * migrated / total)`; 0 for an empty table.
    pub percentage: u8,
}

impl CategoryProgress {
    pub fn is_complete(&self) -> bool {
        self.migrated == self.total
    }
}

/// Coverage for every category, in [`TokenCategory::all`] order.
pub fn migration_progress() -> Vec<CategoryProgress> {
    TokenCategory::all()
        .iter()
        .map(|&category| progress_for(category, mapping(category).entries()))
        .collect()
}

/// Coverage of an arbitrary table for `category`.
pub fn progress_for(category: TokenCategory, entries: &[(&str, &str)]) -> CategoryProgress {
    let total = entries.len();
    let migrated = entries.iter().filter(|(_, external)| !external.is_empty()).count();
    CategoryProgress {
        category,
        total,
        migrated,
        percentage: percentage(migrated, total),
    }
}

fn percentage(migrated: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // Integer round-half-up of 100 * migrated / total.
    ((200 * migrated + total) / (2 * total)) as u8
}
