//! CRUD SQL 빌더
//!
//! 검증된 테이블 이름과 변경 집합/행 키를 받아 SQL을 생성합니다.
//! 컬럼 이름은 빌드 시점에 모두 다시 검증하며, 하나라도 실패하면
//! SQL을 만들지 않습니다. 값은 전부 바인딩 파라미터로 나갑니다.

use sea_query::{Asterisk, Cond, Expr, Order, Query, SimpleExpr};
use serde_json::Value;

use rowgate_core::{Error, Ident, MutationSet, Result, RowKey};

use crate::iden::DynIden;
use crate::statement::Statement;

// ─────────────────────────────────────────────────────────────────────────────
// INSERT
// ─────────────────────────────────────────────────────────────────────────────

/// INSERT 쿼리 빌더
pub struct InsertBuilder<'a> {
    table: &'a Ident,
}

impl<'a> InsertBuilder<'a> {
    pub fn new(table: &'a Ident) -> Self {
        Self { table }
    }

    /// `INSERT INTO t (c1, c2, ...) VALUES (?, ?, ...)`
    ///
    /// 컬럼 순서는 변경 집합의 순서를 따릅니다.
    pub fn build(&self, values: &MutationSet) -> Result<Statement> {
        if values.is_empty() {
            return Err(Error::EmptyInput {
                what: "mutation set",
            });
        }

        let columns = validated_columns(values.columns())?;
        let exprs: Vec<SimpleExpr> = values.iter().map(|(_, v)| value_to_expr(v)).collect();

        let mut query = Query::insert();
        query
            .into_table(DynIden::new(self.table))
            .columns(columns)
            .values(exprs)
            .map_err(|e| Error::QueryBuild {
                message: e.to_string(),
            })?;

        Ok(Statement::build(&query))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UPDATE
// ─────────────────────────────────────────────────────────────────────────────

/// UPDATE 쿼리 빌더
pub struct UpdateBuilder<'a> {
    table: &'a Ident,
}

impl<'a> UpdateBuilder<'a> {
    pub fn new(table: &'a Ident) -> Self {
        Self { table }
    }

    /// `UPDATE t SET c1 = ?, ... WHERE k1 = ? AND ...`
    ///
    /// 바인딩 순서: SET 값 전부, 그 다음 키 값. 키는 변경 전 값이어야
    /// 합니다 (PK 자체를 바꾸는 경우 포함).
    pub fn build(&self, key: &RowKey, values: &MutationSet) -> Result<Statement> {
        if values.is_empty() {
            return Err(Error::EmptyInput {
                what: "mutation set",
            });
        }
        if key.is_empty() {
            return Err(Error::EmptyInput { what: "row key" });
        }

        let set_columns = validated_columns(values.columns())?;
        let key_columns = validated_columns(key.columns())?;

        let mut query = Query::update();
        query.table(DynIden::new(self.table));

        for (column, (_, value)) in set_columns.into_iter().zip(values.iter()) {
            query.value(column, value_to_expr(value));
        }
        query.cond_where(key_condition(key_columns, key));

        Ok(Statement::build(&query))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DELETE
// ─────────────────────────────────────────────────────────────────────────────

/// DELETE 쿼리 빌더
pub struct DeleteBuilder<'a> {
    table: &'a Ident,
}

impl<'a> DeleteBuilder<'a> {
    pub fn new(table: &'a Ident) -> Self {
        Self { table }
    }

    /// `DELETE FROM t WHERE k1 = ? AND ...`
    pub fn build(&self, key: &RowKey) -> Result<Statement> {
        if key.is_empty() {
            return Err(Error::EmptyInput { what: "row key" });
        }
        let key_columns = validated_columns(key.columns())?;

        let mut query = Query::delete();
        query
            .from_table(DynIden::new(self.table))
            .cond_where(key_condition(key_columns, key));

        Ok(Statement::build(&query))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SELECT
// ─────────────────────────────────────────────────────────────────────────────

/// 단순 SELECT 빌더 (보기/최근 행/키 조회)
pub struct SelectBuilder<'a> {
    table: &'a Ident,
}

impl<'a> SelectBuilder<'a> {
    pub fn new(table: &'a Ident) -> Self {
        Self { table }
    }

    /// `SELECT * FROM t LIMIT ?`
    pub fn view(&self, limit: u64) -> Statement {
        let mut query = Query::select();
        query
            .column(Asterisk)
            .from(DynIden::new(self.table))
            .limit(limit);
        Statement::build(&query)
    }

    /// 최근 행: PK 내림차순 (PK가 없으면 정렬 없이)
    pub fn recent(&self, order_by: Option<&Ident>, limit: u64) -> Statement {
        let mut query = Query::select();
        query.column(Asterisk).from(DynIden::new(self.table));
        if let Some(column) = order_by {
            query.order_by(DynIden::new(column), Order::Desc);
        }
        query.limit(limit);
        Statement::build(&query)
    }

    /// 키로 한 행 조회
    pub fn by_key(&self, key: &RowKey) -> Result<Statement> {
        if key.is_empty() {
            return Err(Error::EmptyInput { what: "row key" });
        }
        let key_columns = validated_columns(key.columns())?;

        let mut query = Query::select();
        query
            .column(Asterisk)
            .from(DynIden::new(self.table))
            .cond_where(key_condition(key_columns, key))
            .limit(1);
        Ok(Statement::build(&query))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// 공통
// ─────────────────────────────────────────────────────────────────────────────

fn validated_columns<'c>(columns: impl Iterator<Item = &'c str>) -> Result<Vec<DynIden>> {
    columns
        .map(|c| Ident::parse(c).map(|ident| DynIden::new(&ident)))
        .collect()
}

/// 키 컬럼 AND 조건
///
/// NULL 키 값도 `= ?`로 바인딩하므로 어떤 행과도 일치하지 않습니다.
fn key_condition(columns: Vec<DynIden>, key: &RowKey) -> Cond {
    columns
        .into_iter()
        .zip(key.iter())
        .fold(Cond::all(), |cond, (column, (_, value))| {
            cond.add(Expr::col(column).eq(value_to_expr(value)))
        })
}

/// JSON 값을 바인딩 표현식으로 변환
pub(crate) fn value_to_expr(value: &Value) -> SimpleExpr {
    match value {
        Value::Null => Expr::val(Option::<String>::None).into(),
        Value::Bool(b) => Expr::val(*b).into(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Expr::val(i).into()
            } else if let Some(u) = n.as_u64() {
                Expr::val(u).into()
            } else if let Some(f) = n.as_f64() {
                Expr::val(f).into()
            } else {
                Expr::val(n.to_string()).into()
            }
        }
        Value::String(s) => Expr::val(s.as_str()).into(),
        Value::Array(_) | Value::Object(_) => {
            // JSON 텍스트로 저장
            Expr::val(value.to_string()).into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_query::Value as SqlValue;
    use serde_json::json;

    fn ident(s: &str) -> Ident {
        Ident::parse(s).unwrap()
    }

    fn string(s: &str) -> SqlValue {
        SqlValue::String(Some(Box::new(s.to_string())))
    }

    #[test]
    fn test_insert_builder() {
        let table = ident("Gamer");
        let values = MutationSet::new()
            .with("gamer_id", json!("GAAA001"))
            .with("name", json!("Kai"))
            .with("age", json!(31));

        let stmt = InsertBuilder::new(&table).build(&values).unwrap();
        assert_eq!(
            stmt.sql,
            "INSERT INTO `Gamer` (`gamer_id`, `name`, `age`) VALUES (?, ?, ?)"
        );
        assert_eq!(
            stmt.values.0,
            vec![string("GAAA001"), string("Kai"), SqlValue::BigInt(Some(31))]
        );
    }

    #[test]
    fn test_insert_rejects_bad_column() {
        let table = ident("Gamer");
        let values = MutationSet::new()
            .with("name", json!("Kai"))
            .with("name; DROP TABLE Gamer", json!("x"));

        let err = InsertBuilder::new(&table).build(&values).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_insert_empty() {
        let table = ident("Gamer");
        let err = InsertBuilder::new(&table)
            .build(&MutationSet::new())
            .unwrap_err();
        assert_eq!(err.code(), "EMPTY_INPUT");
    }

    #[test]
    fn test_insert_value_stays_out_of_sql() {
        let table = ident("Gamer");
        let values = MutationSet::new().with("name", json!("Robert'); DROP TABLE Gamer;--"));
        let stmt = InsertBuilder::new(&table).build(&values).unwrap();
        assert!(!stmt.sql.contains("DROP"));
        assert_eq!(stmt.placeholder_count(), 1);
    }

    #[test]
    fn test_update_composite_key() {
        let table = ident("TournamentMatch");
        let key = RowKey::new()
            .with("tournament_id", json!("TAAA001"))
            .with("match_number", json!(2));
        let values = MutationSet::new().with("winner_id", json!("GAAA002"));

        let stmt = UpdateBuilder::new(&table).build(&key, &values).unwrap();
        assert_eq!(
            stmt.sql,
            "UPDATE `TournamentMatch` SET `winner_id` = ? WHERE `tournament_id` = ? AND `match_number` = ?"
        );
        assert_eq!(
            stmt.values.0,
            vec![string("GAAA002"), string("TAAA001"), SqlValue::BigInt(Some(2))]
        );
    }

    #[test]
    fn test_update_can_change_key_column() {
        let table = ident("League");
        let key = RowKey::new().with("league_id", json!("LAAA001"));
        let values = MutationSet::new().with("league_id", json!("LAAA009"));

        let stmt = UpdateBuilder::new(&table).build(&key, &values).unwrap();
        assert_eq!(
            stmt.sql,
            "UPDATE `League` SET `league_id` = ? WHERE `league_id` = ?"
        );
        assert_eq!(stmt.values.0, vec![string("LAAA009"), string("LAAA001")]);
    }

    #[test]
    fn test_update_empty_inputs() {
        let table = ident("League");
        let key = RowKey::new().with("league_id", json!("LAAA001"));
        let values = MutationSet::new().with("name", json!("Spring"));

        let err = UpdateBuilder::new(&table)
            .build(&key, &MutationSet::new())
            .unwrap_err();
        assert!(matches!(err, Error::EmptyInput { what: "mutation set" }));

        let err = UpdateBuilder::new(&table)
            .build(&RowKey::new(), &values)
            .unwrap_err();
        assert!(matches!(err, Error::EmptyInput { what: "row key" }));
    }

    #[test]
    fn test_update_rejects_bad_key_column() {
        let table = ident("League");
        let key = RowKey::new().with("league_id OR 1=1", json!("x"));
        let values = MutationSet::new().with("name", json!("Spring"));
        let err = UpdateBuilder::new(&table).build(&key, &values).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_update_null_value() {
        let table = ident("TournamentMatch");
        let key = RowKey::new().with("match_id", json!("MAAA001"));
        let values = MutationSet::new().with("winner_id", Value::Null);
        let stmt = UpdateBuilder::new(&table).build(&key, &values).unwrap();
        assert_eq!(stmt.values.0[0], SqlValue::String(None));
    }

    #[test]
    fn test_delete_builder() {
        let table = ident("City");
        let key = RowKey::new().with("city_id", json!("CAAA002"));
        let stmt = DeleteBuilder::new(&table).build(&key).unwrap();
        assert_eq!(stmt.sql, "DELETE FROM `City` WHERE `city_id` = ?");
        assert_eq!(stmt.values.0, vec![string("CAAA002")]);

        let err = DeleteBuilder::new(&table).build(&RowKey::new()).unwrap_err();
        assert_eq!(err.code(), "EMPTY_INPUT");
    }

    #[test]
    fn test_null_key_value_is_bound() {
        let table = ident("Gamer");
        let key = RowKey::new().with("city_id", Value::Null);
        let stmt = DeleteBuilder::new(&table).build(&key).unwrap();
        assert_eq!(stmt.sql, "DELETE FROM `Gamer` WHERE `city_id` = ?");
        assert_eq!(stmt.values.0, vec![SqlValue::String(None)]);

        let key = RowKey::new()
            .with("a", json!("x"))
            .with("b", Value::Null);
        let values = MutationSet::new().with("name", json!("Kai"));
        let stmt = UpdateBuilder::new(&table).build(&key, &values).unwrap();
        assert_eq!(
            stmt.sql,
            "UPDATE `Gamer` SET `name` = ? WHERE `a` = ? AND `b` = ?"
        );
        assert_eq!(
            stmt.values.0,
            vec![string("Kai"), string("x"), SqlValue::String(None)]
        );
    }

    #[test]
    fn test_select_view_and_recent() {
        let table = ident("League");
        let stmt = SelectBuilder::new(&table).view(100);
        assert!(stmt.sql.starts_with("SELECT * FROM `League` LIMIT"));

        let pk = ident("league_id");
        let stmt = SelectBuilder::new(&table).recent(Some(&pk), 5);
        assert!(stmt
            .sql
            .starts_with("SELECT * FROM `League` ORDER BY `league_id` DESC LIMIT"));

        let stmt = SelectBuilder::new(&table).recent(None, 5);
        assert!(!stmt.sql.contains("ORDER BY"));
    }

    #[test]
    fn test_select_by_key() {
        let table = ident("League");
        let key = RowKey::new().with("league_id", json!("LAAA001"));
        let stmt = SelectBuilder::new(&table).by_key(&key).unwrap();
        assert!(stmt
            .sql
            .starts_with("SELECT * FROM `League` WHERE `league_id` = ? LIMIT"));
        assert_eq!(stmt.values.0[0], string("LAAA001"));
    }
}
