//! 결과 출력

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use rowgate_core::Row;

use crate::OutputFormat;

/// 행 목록 출력
///
/// text: 탭 구분 헤더 + 행, json: 배열
pub fn print_rows(format: OutputFormat, rows: &[Row]) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Text => {
            for line in render_rows(rows) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

/// 테이블별 행 목록 출력
pub fn print_grouped(format: OutputFormat, groups: &BTreeMap<String, Vec<Row>>) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(groups),
        OutputFormat::Text => {
            if groups.is_empty() {
                println!("(no matches)");
            }
            for (table, rows) in groups {
                println!("== {} ({} rows)", table, rows.len());
                for line in render_rows(rows) {
                    println!("{line}");
                }
            }
            Ok(())
        }
    }
}

/// 단일 메시지/값 출력
pub fn print_message(format: OutputFormat, message: &str, value: Value) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(&value),
        OutputFormat::Text => {
            println!("{message}");
            Ok(())
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_rows(rows: &[Row]) -> Vec<String> {
    let Some(first) = rows.first() else {
        return vec!["(no rows)".to_string()];
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(first.keys().cloned().collect::<Vec<_>>().join("\t"));
    for row in rows {
        lines.push(row.values().map(cell).collect::<Vec<_>>().join("\t"));
    }
    lines
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::String(s) => s.replace(['\t', '\n'], " "),
        other => other.to_string(),
    }
}
