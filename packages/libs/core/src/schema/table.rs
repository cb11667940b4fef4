//! 테이블 디스크립터
//!
//! 호출자(CLI 등)가 알고 있는 테이블 정보입니다: 이름, PK 컬럼(복합 키 가능),
//! 생성 ID 접두사.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::ident::Ident;
use crate::row::{MutationSet, Row, RowKey};

/// 테이블 디스크립터
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    /// 테이블 이름
    pub name: Ident,

    /// PK 컬럼 (하나 이상)
    pub primary_key: Vec<Ident>,

    /// 생성 ID 접두사 (예: "L" → `LAAA001`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_prefix: Option<String>,
}

impl TableDescriptor {
    /// 디스크립터 생성
    ///
    /// 모든 이름을 검증하며, PK는 최소 하나 있어야 합니다.
    pub fn new(name: &str, primary_key: &[&str], id_prefix: Option<&str>) -> Result<Self> {
        let name = Ident::parse(name)?;
        if primary_key.is_empty() {
            return Err(Error::InvalidTable {
                table: name.to_string(),
                reason: "at least one primary key column is required".to_string(),
            });
        }
        let primary_key = Ident::parse_all(primary_key.iter().copied())?;

        Ok(Self {
            name,
            primary_key,
            id_prefix: id_prefix.map(str::to_string),
        })
    }

    /// 단일 PK라면 그 컬럼
    pub fn single_key(&self) -> Option<&Ident> {
        match self.primary_key.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// ID를 생성해야 하는 컬럼
    ///
    /// 접두사가 있고, 단일 PK이며, 값이 비어 있을 때만 반환합니다.
    pub fn id_to_generate(&self, values: &MutationSet) -> Option<(&Ident, &str)> {
        let prefix = self.id_prefix.as_deref()?;
        let key = self.single_key()?;
        match values.get(key.as_str()) {
            None | Some(Value::Null) => Some((key, prefix)),
            Some(Value::String(s)) if s.trim().is_empty() => Some((key, prefix)),
            Some(_) => None,
        }
    }

    /// 조회한 행에서 RowKey 추출
    ///
    /// UPDATE의 WHERE 절은 변경 전 값을 가리켜야 하므로, 편집 전에 읽은 행에서
    /// 키를 뽑아 둡니다.
    pub fn row_key(&self, row: &Row) -> Result<RowKey> {
        let mut key = RowKey::new();
        for column in &self.primary_key {
            let value = row
                .get(column.as_str())
                .ok_or_else(|| Error::MissingField {
                    field: column.to_string(),
                })?;
            key.insert(column.as_str(), value.clone());
        }
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_requires_primary_key() {
        let err = TableDescriptor::new("League", &[], None).unwrap_err();
        assert_eq!(err.code(), "INVALID_TABLE");
    }

    #[test]
    fn test_rejects_bad_names() {
        assert!(TableDescriptor::new("League;", &["league_id"], None).is_err());
        assert!(TableDescriptor::new("League", &["league id"], None).is_err());
    }

    #[test]
    fn test_composite_key_from_row() {
        let table =
            TableDescriptor::new("TournamentMatch", &["tournament_id", "match_number"], None)
                .unwrap();
        assert!(table.single_key().is_none());

        let r = row(json!({
            "tournament_id": "TAAA001",
            "match_number": 3,
            "winner_id": null
        }));
        let key = table.row_key(&r).unwrap();
        assert_eq!(key.len(), 2);
        assert_eq!(key.get("match_number"), Some(&json!(3)));

        let partial = row(json!({ "tournament_id": "TAAA001" }));
        let err = table.row_key(&partial).unwrap_err();
        assert!(matches!(err, Error::MissingField { field } if field == "match_number"));
    }

    #[test]
    fn test_id_to_generate() {
        let table = TableDescriptor::new("League", &["league_id"], Some("L")).unwrap();

        let empty = MutationSet::new();
        let (col, prefix) = table.id_to_generate(&empty).unwrap();
        assert_eq!(col.as_str(), "league_id");
        assert_eq!(prefix, "L");

        let mut blank = MutationSet::new();
        blank.insert("league_id", json!("  "));
        assert!(table.id_to_generate(&blank).is_some());

        let mut given = MutationSet::new();
        given.insert("league_id", json!("LAAA010"));
        assert!(table.id_to_generate(&given).is_none());

        let no_prefix = TableDescriptor::new("League", &["league_id"], None).unwrap();
        assert!(no_prefix.id_to_generate(&empty).is_none());
    }
}
