//! information_schema 조회 SQL
//!
//! 현재 연결된 데이터베이스(`DATABASE()`)로 범위를 한정합니다.

use rowgate_core::Ident;

use crate::statement::Statement;

/// 현재 데이터베이스의 테이블 목록
pub const LIST_TABLES: &str = "SELECT table_name AS table_name \
     FROM information_schema.tables \
     WHERE table_schema = DATABASE() AND table_type = 'BASE TABLE' \
     ORDER BY table_name";

/// 테이블의 컬럼 이름과 네이티브 타입 (정의 순서)
pub const LIST_COLUMNS: &str = "SELECT column_name AS column_name, data_type AS data_type \
     FROM information_schema.columns \
     WHERE table_schema = DATABASE() AND table_name = ? \
     ORDER BY ordinal_position";

pub fn list_tables() -> Statement {
    Statement::raw(LIST_TABLES, Vec::new())
}

/// 테이블 이름은 바인딩 값으로 전달됩니다.
pub fn list_columns(table: &Ident) -> Statement {
    Statement::raw(LIST_COLUMNS, vec![table.as_str().into()])
}
