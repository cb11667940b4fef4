//! Schema 명령어

use rowgate_store::Store;
use serde_json::json;

use crate::commands::output;
use crate::OutputFormat;

pub async fn tables(store: &Store, format: OutputFormat) -> anyhow::Result<()> {
    let tables = store.list_tables().await;
    match format {
        OutputFormat::Json => output::print_json(&tables),
        OutputFormat::Text => {
            if tables.is_empty() {
                println!("(no tables)");
            }
            for table in tables {
                println!("{table}");
            }
            Ok(())
        }
    }
}

pub async fn columns(
    store: &Store,
    format: OutputFormat,
    table: &str,
    text_only: bool,
) -> anyhow::Result<()> {
    let columns = if text_only {
        store.list_text_columns(table).await
    } else {
        store.list_searchable_columns(table).await
    };

    match format {
        OutputFormat::Json => output::print_json(&json!(columns)),
        OutputFormat::Text => {
            if columns.is_empty() {
                println!("(no searchable columns)");
            }
            for column in columns {
                println!(
                    "{}\t{}\t{}",
                    column.name,
                    column.native_type,
                    column.category.as_str()
                );
            }
            Ok(())
        }
    }
}
