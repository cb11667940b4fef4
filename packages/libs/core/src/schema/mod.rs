//! 스키마 디스크립터
//!
//! # 개요
//!
//! rowgate는 고정된 모델을 두지 않습니다. 테이블 구조는 호출할 때마다
//! DB 카탈로그(information_schema)에서 읽어오며, 이 모듈은 그 결과를 담는
//! 불변 타입을 정의합니다. 캐시하지 않습니다.
//!
//! # 모듈 구조
//!
//! - `types`: 네이티브 타입 → 검색 타입 분류 (text/numeric/date/other)
//! - `column`: 컬럼 디스크립터
//! - `table`: 테이블 디스크립터 (PK, ID 접두사)

mod column;
mod table;
mod types;

pub use column::ColumnDescriptor;
pub use table::TableDescriptor;
pub use types::TypeCategory;
