//! 검색 타입 분류
//!
//! MySQL `information_schema.columns.data_type` 값을 검색 엔진이 쓰는
//! 닫힌 분류로 매핑합니다.

use serde::{Deserialize, Serialize};

/// 컬럼 타입 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    /// 문자열 (부분 일치 검색)
    Text,

    /// 숫자 (정확히 일치)
    Numeric,

    /// 날짜/시간 (DATE() 또는 YEAR() 일치)
    Date,

    /// 검색 대상 아님
    Other,
}

impl TypeCategory {
    /// 네이티브 타입 이름에서 분류
    ///
    /// 대소문자는 구분하지 않습니다. 목록에 없는 타입은 `Other`입니다.
    pub fn from_native(type_name: &str) -> Self {
        match type_name.trim().to_ascii_lowercase().as_str() {
            "char" | "varchar" | "text" | "mediumtext" | "longtext" | "enum" => {
                TypeCategory::Text
            }
            "int" | "bigint" | "smallint" | "mediumint" | "decimal" | "float" | "double"
            | "tinyint" => TypeCategory::Numeric,
            "date" | "datetime" | "timestamp" | "year" | "time" => TypeCategory::Date,
            _ => TypeCategory::Other,
        }
    }

    /// 검색 대상 여부
    pub fn is_searchable(&self) -> bool {
        !matches!(self, TypeCategory::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeCategory::Text => "text",
            TypeCategory::Numeric => "numeric",
            TypeCategory::Date => "date",
            TypeCategory::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_type_mapping() {
        for t in ["char", "varchar", "text", "mediumtext", "longtext", "enum"] {
            assert_eq!(TypeCategory::from_native(t), TypeCategory::Text, "{t}");
        }
        for t in [
            "int", "bigint", "smallint", "mediumint", "decimal", "float", "double", "tinyint",
        ] {
            assert_eq!(TypeCategory::from_native(t), TypeCategory::Numeric, "{t}");
        }
        for t in ["date", "datetime", "timestamp", "year", "time"] {
            assert_eq!(TypeCategory::from_native(t), TypeCategory::Date, "{t}");
        }
    }

    #[test]
    fn test_case_insensitive_and_unknown() {
        assert_eq!(TypeCategory::from_native("VARCHAR"), TypeCategory::Text);
        assert_eq!(TypeCategory::from_native("DateTime"), TypeCategory::Date);
        assert_eq!(TypeCategory::from_native("blob"), TypeCategory::Other);
        assert_eq!(TypeCategory::from_native("json"), TypeCategory::Other);
        assert_eq!(TypeCategory::from_native("tinytext"), TypeCategory::Other);
        assert!(!TypeCategory::Other.is_searchable());
        assert!(TypeCategory::Date.is_searchable());
    }
}
