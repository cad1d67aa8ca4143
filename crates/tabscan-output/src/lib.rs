//! Table rendering.
//!
//! This crate formats a parsed [`Table`] and its column statistics:
//!
//! - **Markdown**: GitHub pipe tables
//! - **HTML**: a `<table>` with escaped cells
//! - **JSON**: an array of objects, keys in header order
//! - **SQL**: one `INSERT` statement per row
//! - **Delimited text**: CSV/TSV that parses back to the same table
//!
//! Every renderer keeps header order and row order exactly as parsed.
//!
//! [`Table`]: tabscan_model::Table

mod delimited;
mod error;
mod html;
mod json;
mod markdown;
mod sql;

pub use delimited::render_delimited;
pub use error::{OutputError, Result};
pub use html::{escape_html, render_html};
pub use json::{render_json, render_stats_json};
pub use markdown::render_markdown;
pub use sql::{quote_identifier, quote_literal, render_sql_inserts};
