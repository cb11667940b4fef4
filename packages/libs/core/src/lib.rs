//! rowgate-core: 공통 핵심 라이브러리
//!
//! SQL 빌더(`rowgate-sql`), 실행 계층(`rowgate-store`), CLI가 공유하는
//! 핵심 타입과 로직을 제공합니다. DB 드라이버에 의존하지 않습니다.
//!
//! # 모듈 구조
//!
//! - `ident`: 테이블/컬럼 식별자 화이트리스트 검증
//! - `schema`: 테이블/컬럼 디스크립터와 타입 분류
//! - `row`: 행 키(RowKey)와 변경 집합(MutationSet)
//! - `id`: 접두사 + 3글자 + 3숫자 순차 코드
//! - `matches`: 대전 기록의 승자 불변식
//! - `error`: 공통 에러 타입

pub mod error;
pub mod id;
pub mod ident;
pub mod matches;
pub mod row;
pub mod schema;

pub use error::{Error, Result};
pub use ident::{validate, Ident};
pub use row::{MutationSet, Row, RowKey};
