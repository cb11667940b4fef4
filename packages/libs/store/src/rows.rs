//! MySQL 행 → JSON

use serde_json::{Map, Number, Value};
use sqlx::mysql::MySqlRow;
use sqlx::{Column, Row as _, TypeInfo};

use rowgate_core::Row;

/// 행을 컬럼 순서대로 JSON 맵으로 변환
///
/// 디코딩할 수 없는 값은 `null`이 됩니다.
pub(crate) fn row_to_json(row: &MySqlRow) -> Row {
    let mut obj = Map::new();
    for column in row.columns() {
        let idx = column.ordinal();
        let type_name = column.type_info().name().to_ascii_uppercase();
        let value = decode(row, idx, &type_name).unwrap_or(Value::Null);
        obj.insert(column.name().to_string(), value);
    }
    obj
}

fn decode(row: &MySqlRow, idx: usize, type_name: &str) -> Option<Value> {
    match type_name {
        "NULL" => None,
        "BOOLEAN" => row.try_get::<Option<bool>, _>(idx).ok().flatten().map(Value::Bool),
        t if t.ends_with("UNSIGNED") => row
            .try_get::<Option<u64>, _>(idx)
            .ok()
            .flatten()
            .map(|v| Value::Number(v.into())),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => row
            .try_get::<Option<i64>, _>(idx)
            .ok()
            .flatten()
            .map(|v| Value::Number(v.into())),
        "YEAR" => row
            .try_get_unchecked::<Option<u16>, _>(idx)
            .ok()
            .flatten()
            .map(|v| Value::Number(v.into())),
        "FLOAT" => row
            .try_get::<Option<f32>, _>(idx)
            .ok()
            .flatten()
            .and_then(|v| Number::from_f64(f64::from(v)))
            .map(Value::Number),
        "DOUBLE" => row
            .try_get::<Option<f64>, _>(idx)
            .ok()
            .flatten()
            .and_then(Number::from_f64)
            .map(Value::Number),
        // 정밀도 보존을 위해 문자열
        "DECIMAL" => row
            .try_get_unchecked::<Option<String>, _>(idx)
            .ok()
            .flatten()
            .map(Value::String),
        "DATE" => row
            .try_get::<Option<chrono::NaiveDate>, _>(idx)
            .ok()
            .flatten()
            .map(|v| Value::String(v.format("%Y-%m-%d").to_string())),
        "DATETIME" | "TIMESTAMP" => row
            .try_get::<Option<chrono::NaiveDateTime>, _>(idx)
            .ok()
            .flatten()
            .map(|v| Value::String(v.format("%Y-%m-%d %H:%M:%S").to_string())),
        "TIME" => row
            .try_get::<Option<chrono::NaiveTime>, _>(idx)
            .ok()
            .flatten()
            .map(|v| Value::String(v.format("%H:%M:%S").to_string())),
        "JSON" => row
            .try_get_unchecked::<Option<String>, _>(idx)
            .ok()
            .flatten()
            .map(|raw| serde_json::from_str(&raw).unwrap_or(Value::String(raw))),
        _ => decode_text(row, idx),
    }
}

/// 문자열로 읽고, 실패하면 바이트를 손실 허용 UTF-8로 읽습니다.
///
/// information_schema 컬럼은 서버 버전에 따라 바이너리로 올 수 있습니다.
pub(crate) fn decode_text(row: &MySqlRow, idx: usize) -> Option<Value> {
    match row.try_get::<Option<String>, _>(idx) {
        Ok(v) => v.map(Value::String),
        Err(_) => row
            .try_get_unchecked::<Option<Vec<u8>>, _>(idx)
            .ok()
            .flatten()
            .map(|bytes| Value::String(String::from_utf8_lossy(&bytes).into_owned())),
    }
}
