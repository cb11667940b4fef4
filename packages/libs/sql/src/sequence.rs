//! 순차 코드 최대값 조회

use sea_query::{Expr, Order, Query};

use rowgate_core::Ident;

use crate::escape_like;
use crate::iden::DynIden;
use crate::statement::Statement;

/// 접두사로 시작하는 값 중 최대값을 읽는 쿼리
///
/// `SELECT c FROM t WHERE c LIKE ? ORDER BY c DESC LIMIT ?`
///
/// 정렬은 문자열 기준입니다. 알파벳 블록 길이가 늘어난 뒤(`AAAA001`)에는
/// 짧은 블록의 값이 더 크게 정렬됩니다.
pub struct SequenceQuery<'a> {
    table: &'a Ident,
    column: &'a Ident,
}

impl<'a> SequenceQuery<'a> {
    pub fn new(table: &'a Ident, column: &'a Ident) -> Self {
        Self { table, column }
    }

    pub fn latest(&self, prefix: &str) -> Statement {
        let pattern = format!("{}%", escape_like(prefix));

        let mut query = Query::select();
        query
            .column(DynIden::new(self.column))
            .from(DynIden::new(self.table))
            .and_where(Expr::col(DynIden::new(self.column)).like(pattern))
            .order_by(DynIden::new(self.column), Order::Desc)
            .limit(1);
        Statement::build(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_query::Value as SqlValue;

    #[test]
    fn test_latest_query() {
        let table = Ident::parse("League").unwrap();
        let column = Ident::parse("league_id").unwrap();
        let stmt = SequenceQuery::new(&table, &column).latest("L");

        assert_eq!(
            stmt.sql,
            "SELECT `league_id` FROM `League` WHERE `league_id` LIKE ? ORDER BY `league_id` DESC LIMIT ?"
        );
        assert_eq!(
            stmt.values.0[0],
            SqlValue::String(Some(Box::new("L%".to_string())))
        );
    }

    #[test]
    fn test_prefix_is_escaped() {
        let table = Ident::parse("Code").unwrap();
        let column = Ident::parse("code").unwrap();
        let stmt = SequenceQuery::new(&table, &column).latest("A_");
        assert_eq!(
            stmt.values.0[0],
            SqlValue::String(Some(Box::new("A\\_%".to_string())))
        );
    }
}
