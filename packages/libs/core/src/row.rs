//! 행 키와 변경 집합
//!
//! 단일 PK와 복합 PK를 구분하지 않습니다. 둘 다 "컬럼 이름 → 값" 맵이며
//! 항목 수만 다릅니다. 삽입 순서를 유지하므로 바인딩 순서가 호출자가 넣은
//! 순서와 같습니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 조회 결과 한 행 (드라이버가 준 컬럼 순서 유지)
pub type Row = Map<String, Value>;

macro_rules! column_map {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Map<String, Value>);

        impl $name {
            pub fn new() -> Self {
                Self(Map::new())
            }

            pub fn insert(&mut self, column: impl Into<String>, value: Value) -> Option<Value> {
                self.0.insert(column.into(), value)
            }

            /// 빌더 스타일 추가
            pub fn with(mut self, column: impl Into<String>, value: Value) -> Self {
                self.insert(column, value);
                self
            }

            pub fn get(&self, column: &str) -> Option<&Value> {
                self.0.get(column)
            }

            pub fn contains(&self, column: &str) -> bool {
                self.0.contains_key(column)
            }

            pub fn remove(&mut self, column: &str) -> Option<Value> {
                self.0.shift_remove(column)
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn columns(&self) -> impl Iterator<Item = &str> {
                self.0.keys().map(String::as_str)
            }

            pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
                self.0.iter().map(|(k, v)| (k.as_str(), v))
            }

            pub fn into_inner(self) -> Map<String, Value> {
                self.0
            }
        }

        impl From<Map<String, Value>> for $name {
            fn from(map: Map<String, Value>) -> Self {
                Self(map)
            }
        }

        impl<K: Into<String>> FromIterator<(K, Value)> for $name {
            fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
                Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
            }
        }
    };
}

column_map! {
    /// 한 행을 가리키는 PK 값들 (UPDATE/DELETE의 WHERE 절)
    ///
    /// 값은 저장된 그대로의 데이터이며 식별자로 검증하지 않습니다.
    /// 비어 있으면 안 됩니다 (빌더가 거부).
    RowKey
}

column_map! {
    /// INSERT/UPDATE할 컬럼 값들
    ///
    /// 키(컬럼 이름)는 빌더에서 모두 검증됩니다. PK 컬럼을 포함해도 됩니다.
    MutationSet
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insertion_order_preserved() {
        let set = MutationSet::new()
            .with("name", json!("Kai"))
            .with("age", json!(31))
            .with("city_id", json!("CAAA002"));
        let cols: Vec<_> = set.columns().collect();
        assert_eq!(cols, vec!["name", "age", "city_id"]);
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut key: RowKey = [("a", json!(1)), ("b", json!(2)), ("c", json!(3))]
            .into_iter()
            .collect();
        key.remove("a");
        let cols: Vec<_> = key.columns().collect();
        assert_eq!(cols, vec!["b", "c"]);
        assert!(!key.contains("a"));
    }

    #[test]
    fn test_transparent_serde() {
        let key: RowKey = serde_json::from_str(r#"{"tournament_id":"T1","match_number":2}"#).unwrap();
        assert_eq!(key.len(), 2);
        assert_eq!(
            serde_json::to_string(&key).unwrap(),
            r#"{"tournament_id":"T1","match_number":2}"#
        );
    }
}
