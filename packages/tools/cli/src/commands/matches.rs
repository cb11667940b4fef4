//! 대전 기록 명령어

use rowgate_core::matches::MatchColumns;
use rowgate_core::{MutationSet, RowKey};
use rowgate_store::Store;
use serde_json::json;

use crate::commands::{output, parse_assignments, text_value};
use crate::OutputFormat;

pub async fn insert(
    store: &Store,
    format: OutputFormat,
    table: &str,
    columns: &MatchColumns,
    sets: &[String],
    required: &[String],
) -> anyhow::Result<()> {
    let values: MutationSet = parse_assignments(sets)?;
    let required: Vec<&str> = required.iter().map(String::as_str).collect();

    store.insert_match(table, columns, &values, &required).await?;
    output::print_message(
        format,
        &format!("Inserted match into {table}"),
        json!({ "table": table, "inserted": values }),
    )
}

pub async fn set_winner(
    store: &Store,
    format: OutputFormat,
    table: &str,
    columns: &MatchColumns,
    keys: &[String],
    winner: &str,
) -> anyhow::Result<()> {
    let key: RowKey = parse_assignments(keys)?;

    let updated = store
        .set_match_winner(table, columns, &key, text_value(winner))
        .await?;
    let message = if updated {
        format!("Winner set in {table}")
    } else {
        format!("No match found for the key in {table}")
    };
    output::print_message(format, &message, json!({ "table": table, "updated": updated }))
}
