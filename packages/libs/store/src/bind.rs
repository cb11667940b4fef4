//! sea-query 값 → sqlx 바인딩

use sea_query::{Value, Values};
use sqlx::mysql::{MySql, MySqlArguments};
use sqlx::query::Query;

use rowgate_core::Error;

use crate::error::Result;

type MySqlQuery<'q> = Query<'q, MySql, MySqlArguments>;

/// 플레이스홀더 순서대로 값 바인딩
pub(crate) fn bind_values(mut query: MySqlQuery<'_>, values: Values) -> Result<MySqlQuery<'_>> {
    for value in values.0 {
        query = match value {
            Value::Bool(v) => query.bind(v),
            Value::TinyInt(v) => query.bind(v),
            Value::SmallInt(v) => query.bind(v),
            Value::Int(v) => query.bind(v),
            Value::BigInt(v) => query.bind(v),
            Value::TinyUnsigned(v) => query.bind(v),
            Value::SmallUnsigned(v) => query.bind(v),
            Value::Unsigned(v) => query.bind(v),
            Value::BigUnsigned(v) => query.bind(v),
            Value::Float(v) => query.bind(v),
            Value::Double(v) => query.bind(v),
            Value::String(v) => query.bind(v.map(|s| *s)),
            Value::Char(v) => query.bind(v.map(String::from)),
            Value::Bytes(v) => query.bind(v.map(|b| *b)),
            #[allow(unreachable_patterns)]
            other => {
                return Err(Error::QueryBuild {
                    message: format!("unsupported bind value: {other:?}"),
                }
                .into())
            }
        };
    }
    Ok(query)
}
