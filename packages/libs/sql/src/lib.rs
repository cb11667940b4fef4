//! rowgate-sql: 동적 SQL 생성 라이브러리
//!
//! 런타임에 받은 테이블/컬럼 이름으로 MySQL 문을 생성합니다.
//! SeaQuery로 SQL을 만들고, 모든 값은 `?` 플레이스홀더 + 바인딩 값으로
//! 분리됩니다. SQL 텍스트에 들어가는 이름은 모두 `Ident` 검증을 거칩니다.
//!
//! # 모듈 구조
//!
//! - `builder`: INSERT/UPDATE/DELETE/SELECT 빌더
//! - `search`: 검색어 분류와 타입별 OR 조건 생성
//! - `sequence`: 순차 코드 최대값 조회
//! - `catalog`: information_schema 조회 SQL
//! - `statement`: SQL 텍스트 + 바인딩 값

pub mod builder;
pub mod catalog;
mod iden;
pub mod search;
pub mod sequence;
pub mod statement;

pub use builder::{DeleteBuilder, InsertBuilder, SelectBuilder, UpdateBuilder};
pub use search::{SearchBuilder, SearchPredicate, SearchTerm};
pub use sequence::SequenceQuery;
pub use statement::Statement;

/// LIKE 메타문자(`%`, `_`, `\`) 이스케이프
///
/// MySQL 기본 이스케이프 문자(`\`)를 사용합니다.
pub fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("abc"), "abc");
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\"), "c:\\\\");
    }
}
