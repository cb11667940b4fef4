//! 순차 코드 명령어

use rowgate_store::Store;
use serde_json::json;

use crate::commands::output;
use crate::OutputFormat;

pub async fn next_id(
    store: &Store,
    format: OutputFormat,
    table: &str,
    column: &str,
    prefix: &str,
) -> anyhow::Result<()> {
    let id = store.next_id(table, column, prefix).await?;
    output::print_message(format, &id, json!({ "next_id": id }))
}
