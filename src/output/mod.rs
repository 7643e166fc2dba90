//! Output formatting for partition results.
//!
//! This module handles formatting and outputting results:
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal tables and tree highlighting
//! - [`export`] - Writing the rendered tree to a file

mod csv;
mod export;
mod terminal;

pub use csv::networks_to_csv;
pub use export::{save_tree, timestamped_tree_file, DEFAULT_TREE_FILE};
pub use terminal::{colorize_tree, format_field, format_network_table, format_summary};
