use anyhow::{Context, Result};
use clap::ColorChoice;
use tabscan_analyze::analyze_with;
use tabscan_cli::report::{render_stats, render_view};
use tabscan_ingest::{LoadedTable, read_table};
use tabscan_model::Settings;
use tracing::{info, info_span};

use crate::cli::{InputArgs, StatsArgs, ViewArgs};

fn load(input: &InputArgs, settings: &Settings) -> Result<LoadedTable> {
    let options = input.parse_options(settings);
    let loaded = read_table(&input.file, &options)
        .with_context(|| format!("read {}", input.file.display()))?;
    info!(
        encoding = %loaded.encoding,
        delimiter = ?loaded.table.delimiter,
        has_headers = loaded.table.has_headers,
        columns = loaded.table.column_count(),
        rows = loaded.table.row_count(),
        "loaded table"
    );
    Ok(loaded)
}

pub fn run_view(args: &ViewArgs, color: ColorChoice) -> Result<String> {
    let _span = info_span!("view", path = %args.input.file.display()).entered();
    let settings = args.input.settings(Settings::default().top_values_limit);
    let loaded = load(&args.input, &settings)?;
    render_view(&loaded.table, args.format, &args.table_name, color)
}

pub fn run_stats(args: &StatsArgs, color: ColorChoice) -> Result<String> {
    let _span = info_span!("stats", path = %args.input.file.display()).entered();
    let settings = args.input.settings(args.top);
    let loaded = load(&args.input, &settings)?;
    let stats = analyze_with(&loaded.table, &settings.analyze_options());
    render_stats(&loaded.table, &stats, args.json, color)
}
