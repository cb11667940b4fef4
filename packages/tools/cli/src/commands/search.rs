//! Search 명령어

use rowgate_store::Store;

use crate::commands::output;
use crate::OutputFormat;

pub async fn search(
    store: &Store,
    format: OutputFormat,
    table: &str,
    term: &str,
) -> anyhow::Result<()> {
    let rows = store.search(table, term).await?;
    tracing::info!(table, matches = rows.len(), "search finished");
    output::print_rows(format, &rows)
}

pub async fn search_all(store: &Store, format: OutputFormat, term: &str) -> anyhow::Result<()> {
    let groups = store.search_global(term).await?;
    tracing::info!(tables = groups.len(), "global search finished");
    output::print_grouped(format, &groups)
}
