//! Presentation lookup for status indicators.
//!
//! The core computes status maps; how they are drawn is the consumer's
//! business. This module holds the pieces that business needs: a
//! fixed-size symbol table indexed by [`StatusCategory`], a color style
//! per category, and the staged/unstaged placement a renderer derives
//! from the code's character positions (`A ` is a staged add, ` M` an
//! unstaged modify).
//!
//! # Public API
//! - [`DecorationTable`]: Category -> symbol lookup
//! - [`placement`]: Staged/unstaged placement of a code
//! - [`category_style`]: Color function per category
//! - [`print_error`]: Consistent CLI error formatting

use crate::core::status_code::{StatusCategory, StatusCode};
use colored::{ColoredString, Colorize};

/// Where a change sits for display purposes, derived purely from the
/// code's two character positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Staged,
    Unstaged,
    Both,
    Clean,
}

pub fn placement(code: StatusCode) -> Placement {
    if code.index_state() == '?' {
        return Placement::Unstaged;
    }
    let staged = code.index_state() != ' ';
    let unstaged = code.worktree_state() != ' ';
    match (staged, unstaged) {
        (true, true) => Placement::Both,
        (true, false) => Placement::Staged,
        (false, true) => Placement::Unstaged,
        (false, false) => Placement::Clean,
    }
}

/// Fixed-size symbol table indexed by [`StatusCategory::index`]. The
/// symbol set is configuration, not core behavior; consumers may build
/// their own table.
pub struct DecorationTable {
    symbols: [&'static str; StatusCategory::COUNT],
}

impl DecorationTable {
    pub fn new(symbols: [&'static str; StatusCategory::COUNT]) -> Self {
        Self { symbols }
    }

    pub fn symbol(&self, category: StatusCategory) -> &'static str {
        self.symbols[category.index()]
    }
}

impl Default for DecorationTable {
    fn default() -> Self {
        // Order: Conflict, PartiallyStaged, Modified, Added, Renamed,
        // Deleted, Untracked, None.
        Self::new(["✖", "✹", "✗", "✚", "➜", "−", "★", " "])
    }
}

/// Single function to apply color styling based on status category.
/// Returns a closure that can be applied to any text.
pub fn category_style(category: StatusCategory) -> Box<dyn Fn(&str) -> ColoredString> {
    match category {
        StatusCategory::Conflict => Box::new(|text: &str| text.red().bold()),
        StatusCategory::PartiallyStaged => Box::new(|text: &str| text.magenta()),
        StatusCategory::Modified => Box::new(|text: &str| text.yellow()),
        StatusCategory::Added => Box::new(|text: &str| text.green()),
        StatusCategory::Renamed => Box::new(|text: &str| text.blue()),
        StatusCategory::Deleted => Box::new(|text: &str| text.red()),
        StatusCategory::Untracked => Box::new(|text: &str| text.cyan()),
        StatusCategory::None => Box::new(|text: &str| text.normal()),
    }
}

/// Formats and prints an error message with consistent styling
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}
