//! CLI 명령어 구현

pub mod ids;
pub mod matches;
pub mod output;
pub mod records;
pub mod schema;
pub mod search;

use serde_json::Value;

/// `column=value` 인자 목록 파싱
///
/// 값이 비어 있으면 NULL입니다. 값은 문자열로 전달되며 형 변환은 서버가
/// 합니다.
pub fn parse_assignments<C>(args: &[String]) -> anyhow::Result<C>
where
    C: FromIterator<(String, Value)>,
{
    args.iter()
        .map(|arg| {
            let (column, value) = arg
                .split_once('=')
                .ok_or_else(|| anyhow::anyhow!("Expected column=value, got {arg:?}"))?;
            let column = column.trim();
            if column.is_empty() {
                anyhow::bail!("Missing column name in {arg:?}");
            }
            Ok((column.to_string(), text_value(value)))
        })
        .collect()
}

/// 빈 문자열은 NULL
pub fn text_value(raw: &str) -> Value {
    if raw.is_empty() {
        Value::Null
    } else {
        Value::String(raw.to_string())
    }
}
