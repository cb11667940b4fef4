//! 컬럼 디스크립터

use serde::{Deserialize, Serialize};

use super::types::TypeCategory;

/// 카탈로그에서 읽은 컬럼 정보
///
/// `name`은 카탈로그가 돌려준 원문 그대로입니다. SQL 텍스트에 넣기 전에
/// 다시 검증해야 합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// 컬럼 이름
    pub name: String,

    /// 네이티브 타입 이름 (소문자)
    pub native_type: String,

    /// 검색 분류
    pub category: TypeCategory,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, native_type: impl Into<String>) -> Self {
        let native_type = native_type.into().trim().to_ascii_lowercase();
        let category = TypeCategory::from_native(&native_type);
        Self {
            name: name.into(),
            native_type,
            category,
        }
    }

    pub fn is_searchable(&self) -> bool {
        self.category.is_searchable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_classifies_on_construction() {
        let col = ColumnDescriptor::new("start_date", "DATE");
        assert_eq!(col.native_type, "date");
        assert_eq!(col.category, TypeCategory::Date);
        assert!(col.is_searchable());

        let col = ColumnDescriptor::new("payload", "json");
        assert_eq!(col.category, TypeCategory::Other);
        assert!(!col.is_searchable());
    }
}
