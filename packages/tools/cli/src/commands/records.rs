//! 행 조회/편집 명령어

use rowgate_core::schema::TableDescriptor;
use rowgate_core::{MutationSet, RowKey};
use rowgate_store::Store;
use serde_json::json;

use crate::commands::{output, parse_assignments};
use crate::OutputFormat;

pub async fn view(store: &Store, format: OutputFormat, table: &str, limit: u64) -> anyhow::Result<()> {
    let rows = store.view(table, limit).await?;
    output::print_rows(format, &rows)
}

pub async fn recent(
    store: &Store,
    format: OutputFormat,
    table: &str,
    pk: Option<&str>,
    limit: u64,
) -> anyhow::Result<()> {
    let rows = store.recent(table, pk, limit).await?;
    output::print_rows(format, &rows)
}

pub async fn insert(
    store: &Store,
    format: OutputFormat,
    table: &str,
    sets: &[String],
    pk: Option<&str>,
    prefix: Option<&str>,
) -> anyhow::Result<()> {
    let values: MutationSet = parse_assignments(sets)?;

    let inserted = match pk {
        Some(pk) => {
            let descriptor = TableDescriptor::new(table, &[pk], prefix)?;
            store.insert_with_descriptor(&descriptor, values).await?
        }
        None => {
            store.insert(table, &values).await?;
            values
        }
    };

    output::print_message(
        format,
        &format!("Inserted into {table}"),
        json!({ "table": table, "inserted": inserted }),
    )
}

pub async fn update(
    store: &Store,
    format: OutputFormat,
    table: &str,
    keys: &[String],
    sets: &[String],
) -> anyhow::Result<()> {
    let key: RowKey = parse_assignments(keys)?;
    let values: MutationSet = parse_assignments(sets)?;

    let affected = store.update(table, &key, &values).await?;
    if affected == 0 {
        tracing::warn!(table, "no row matched the key");
    }
    output::print_message(
        format,
        &format!("Updated {affected} row(s) in {table}"),
        json!({ "table": table, "affected": affected }),
    )
}

pub async fn delete(
    store: &Store,
    format: OutputFormat,
    table: &str,
    keys: &[String],
) -> anyhow::Result<()> {
    let key: RowKey = parse_assignments(keys)?;

    match store.delete(table, &key).await {
        Ok(affected) => output::print_message(
            format,
            &format!("Deleted {affected} row(s) from {table}"),
            json!({ "table": table, "affected": affected }),
        ),
        Err(e) if e.is_constraint() => Err(anyhow::anyhow!(
            "Cannot delete from {table}: other rows still reference it ({e})"
        )),
        Err(e) => Err(e.into()),
    }
}
