//! 실행 가능한 문장
//!
//! SQL 텍스트와 바인딩 값의 쌍입니다. 값은 절대 SQL 텍스트에 들어가지 않습니다.

use sea_query::{MysqlQueryBuilder, QueryStatementWriter, Values};

/// SQL + 바인딩 값
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// `?` 플레이스홀더를 포함한 SQL
    pub sql: String,

    /// 플레이스홀더 순서대로의 값
    pub values: Values,
}

impl Statement {
    /// SeaQuery 문장을 MySQL 방언으로 변환
    pub(crate) fn build<S: QueryStatementWriter>(stmt: &S) -> Self {
        let (sql, values) = stmt.build(MysqlQueryBuilder);
        Self { sql, values }
    }

    /// 정적 SQL + 값
    pub fn raw(sql: impl Into<String>, values: Vec<sea_query::Value>) -> Self {
        Self {
            sql: sql.into(),
            values: Values(values),
        }
    }

    #[cfg(test)]
    pub(crate) fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}
