//! Store: 풀 + 문장 실행
//!
//! 모든 공개 메서드는 호출자가 준 테이블/컬럼 이름을 먼저 검증한 뒤
//! `rowgate-sql` 빌더로 문장을 만들고 실행합니다. 스키마 조회는 실패해도
//! 빈 결과로 대체되며(경고 로그), 그 외 실패는 모두 호출자에게 전파됩니다.

use std::collections::BTreeMap;

use serde_json::Value;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};

use rowgate_core::id::next_id;
use rowgate_core::matches::{validate_winner, MatchColumns};
use rowgate_core::schema::{ColumnDescriptor, TableDescriptor, TypeCategory};
use rowgate_core::{Error, Ident, MutationSet, Row, RowKey};
use rowgate_sql::{
    catalog, DeleteBuilder, InsertBuilder, SearchBuilder, SearchTerm, SelectBuilder,
    SequenceQuery, Statement, UpdateBuilder,
};

use crate::bind::bind_values;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::rows::{decode_text, row_to_json};

/// MySQL 데이터 접근 계층
#[derive(Debug, Clone)]
pub struct Store {
    pool: MySqlPool,
}

impl Store {
    /// 설정으로 풀 생성 후 연결
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        tracing::info!(
            max_connections = config.max_connections,
            "connecting to MySQL: {:?}",
            config.target
        );
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(config.connect_options()?)
            .await?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Schema
    // ─────────────────────────────────────────────────────────────────────────────

    /// 현재 데이터베이스의 테이블 목록
    ///
    /// 실패하면 빈 목록을 반환합니다.
    pub async fn list_tables(&self) -> Vec<String> {
        match self.fetch_raw(catalog::list_tables()).await {
            Ok(rows) => rows.iter().filter_map(|r| text_at(r, 0)).collect(),
            Err(e) => {
                tracing::warn!(error = %e, "listing tables failed");
                Vec::new()
            }
        }
    }

    /// 검색 가능한 컬럼 (text/numeric/date)
    ///
    /// 테이블 이름이 유효하지 않거나 조회에 실패하면 빈 목록을 반환합니다.
    pub async fn list_searchable_columns(&self, table: &str) -> Vec<ColumnDescriptor> {
        let table = match Ident::parse(table) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(error = %e, "column lookup skipped");
                return Vec::new();
            }
        };

        match self.fetch_raw(catalog::list_columns(&table)).await {
            Ok(rows) => rows
                .iter()
                .filter_map(|r| Some(ColumnDescriptor::new(text_at(r, 0)?, text_at(r, 1)?)))
                .filter(ColumnDescriptor::is_searchable)
                .collect(),
            Err(e) => {
                tracing::warn!(table = %table, error = %e, "listing columns failed");
                Vec::new()
            }
        }
    }

    /// 텍스트 컬럼만
    pub async fn list_text_columns(&self, table: &str) -> Vec<ColumnDescriptor> {
        self.list_searchable_columns(table)
            .await
            .into_iter()
            .filter(|c| c.category == TypeCategory::Text)
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Sequence
    // ─────────────────────────────────────────────────────────────────────────────

    /// 다음 순차 코드
    ///
    /// 조회와 INSERT 사이는 원자적이지 않습니다. 같은 컬럼에 동시에 삽입하는
    /// 호출자는 직렬화해야 합니다.
    pub async fn next_id(&self, table: &str, column: &str, prefix: &str) -> Result<String> {
        let table = Ident::parse(table)?;
        let column = Ident::parse(column)?;

        let rows = self
            .fetch(SequenceQuery::new(&table, &column).latest(prefix))
            .await?;
        let latest = rows
            .first()
            .and_then(|row| row.values().next())
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            });

        let next = next_id(prefix, latest.as_deref());
        if let Some(malformed) = &next.reset_from {
            tracing::warn!(
                table = %table,
                column = %column,
                value = %malformed,
                "malformed sequence value, restarting at {}",
                next.value
            );
        }
        Ok(next.value)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────────

    /// 테이블 하나에서 검색
    ///
    /// 조건이 하나도 만들어지지 않으면 쿼리 없이 빈 결과를 반환합니다.
    pub async fn search(&self, table: &str, term: &str) -> Result<Vec<Row>> {
        let table = Ident::parse(table)?;
        let columns = self.list_searchable_columns(table.as_str()).await;
        let term = SearchTerm::classify(term);

        match SearchBuilder::new(&table, &columns).build(&term) {
            Some(stmt) => self.fetch(stmt).await,
            None => {
                tracing::debug!(table = %table, "no search predicates, skipping query");
                Ok(Vec::new())
            }
        }
    }

    /// 모든 테이블에서 검색
    ///
    /// 결과가 있는 테이블만 포함됩니다.
    pub async fn search_global(&self, term: &str) -> Result<BTreeMap<String, Vec<Row>>> {
        let mut found = BTreeMap::new();
        for table in self.list_tables().await {
            let rows = match self.search(&table, term).await {
                Ok(rows) => rows,
                Err(crate::StoreError::Core(e @ Error::Validation { .. })) => {
                    tracing::warn!(error = %e, "skipping table");
                    continue;
                }
                Err(e) => return Err(e),
            };
            if !rows.is_empty() {
                found.insert(table, rows);
            }
        }
        Ok(found)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Read
    // ─────────────────────────────────────────────────────────────────────────────

    pub async fn view(&self, table: &str, limit: u64) -> Result<Vec<Row>> {
        let table = Ident::parse(table)?;
        self.fetch(SelectBuilder::new(&table).view(limit)).await
    }

    /// 최근 행 (키 컬럼 내림차순)
    pub async fn recent(&self, table: &str, key_column: Option<&str>, limit: u64) -> Result<Vec<Row>> {
        let table = Ident::parse(table)?;
        let key_column = key_column.map(Ident::parse).transpose()?;
        self.fetch(SelectBuilder::new(&table).recent(key_column.as_ref(), limit))
            .await
    }

    pub async fn find(&self, table: &str, key: &RowKey) -> Result<Option<Row>> {
        let table = Ident::parse(table)?;
        let stmt = SelectBuilder::new(&table).by_key(key)?;
        Ok(self.fetch(stmt).await?.into_iter().next())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────────

    /// INSERT, 영향받은 행 수 반환
    pub async fn insert(&self, table: &str, values: &MutationSet) -> Result<u64> {
        let table = Ident::parse(table)?;
        self.execute(InsertBuilder::new(&table).build(values)?).await
    }

    /// 디스크립터 기반 INSERT
    ///
    /// 접두사가 설정된 단일 PK가 비어 있으면 `next_id`로 채웁니다.
    /// 실제로 삽입된 값을 반환합니다.
    pub async fn insert_with_descriptor(
        &self,
        descriptor: &TableDescriptor,
        mut values: MutationSet,
    ) -> Result<MutationSet> {
        if let Some((column, prefix)) = descriptor.id_to_generate(&values) {
            let id = self
                .next_id(descriptor.name.as_str(), column.as_str(), prefix)
                .await?;
            tracing::debug!(table = %descriptor.name, column = %column, id = %id, "generated id");
            values.insert(column.as_str(), Value::String(id));
        }

        self.insert(descriptor.name.as_str(), &values).await?;
        Ok(values)
    }

    /// UPDATE
    ///
    /// 일치하는 행이 없어도 성공입니다. 영향받은 행 수로 판단하세요.
    pub async fn update(&self, table: &str, key: &RowKey, values: &MutationSet) -> Result<u64> {
        let table = Ident::parse(table)?;
        self.execute(UpdateBuilder::new(&table).build(key, values)?)
            .await
    }

    /// DELETE
    ///
    /// 다른 행이 참조 중이면 `StoreError::Constraint`.
    pub async fn delete(&self, table: &str, key: &RowKey) -> Result<u64> {
        let table = Ident::parse(table)?;
        self.execute(DeleteBuilder::new(&table).build(key)?).await
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Match records
    // ─────────────────────────────────────────────────────────────────────────────

    /// 대전 기록 INSERT
    ///
    /// `required` 컬럼이 모두 있어야 하고 승자 불변식을 만족해야 합니다.
    pub async fn insert_match(
        &self,
        table: &str,
        columns: &MatchColumns,
        values: &MutationSet,
        required: &[&str],
    ) -> Result<u64> {
        for field in required {
            match values.get(field) {
                None | Some(Value::Null) => {
                    return Err(Error::MissingField {
                        field: field.to_string(),
                    }
                    .into())
                }
                Some(_) => {}
            }
        }
        columns.check(values)?;
        self.insert(table, values).await
    }

    /// 승자 갱신
    ///
    /// 현재 참가자 값을 읽어 불변식을 확인한 뒤 갱신합니다. 키와 일치하는
    /// 행이 없으면 `false`. 영향받은 행 수는 일치한 행 기준이므로 같은 승자를
    /// 다시 설정해도 `true`입니다.
    pub async fn set_match_winner(
        &self,
        table: &str,
        columns: &MatchColumns,
        key: &RowKey,
        winner: Value,
    ) -> Result<bool> {
        let Some(row) = self.find(table, key).await? else {
            return Ok(false);
        };

        validate_winner(
            row.get(columns.first.as_str()),
            row.get(columns.second.as_str()),
            Some(&winner),
        )?;

        let values = MutationSet::new().with(columns.winner.as_str(), winner);
        let affected = self.update(table, key, &values).await?;
        Ok(affected > 0)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // 실행
    // ─────────────────────────────────────────────────────────────────────────────

    async fn fetch_raw(&self, stmt: Statement) -> Result<Vec<MySqlRow>> {
        let Statement { sql, values } = stmt;
        tracing::debug!(sql = %sql, params = values.0.len(), "fetch");
        let rows = bind_values(sqlx::query(&sql), values)?
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch(&self, stmt: Statement) -> Result<Vec<Row>> {
        let rows = self.fetch_raw(stmt).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }

    async fn execute(&self, stmt: Statement) -> Result<u64> {
        let Statement { sql, values } = stmt;
        tracing::debug!(sql = %sql, params = values.0.len(), "execute");
        let result = bind_values(sqlx::query(&sql), values)?
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

fn text_at(row: &MySqlRow, idx: usize) -> Option<String> {
    match decode_text(row, idx)? {
        Value::String(s) => Some(s),
        _ => None,
    }
}
