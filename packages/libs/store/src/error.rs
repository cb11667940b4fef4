//! 실행 계층 에러 타입

use sqlx::mysql::MySqlDatabaseError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// MySQL 참조 무결성 에러 번호
///
/// - 1451: 참조 중인 부모 행 삭제/수정
/// - 1452: 존재하지 않는 부모를 참조하는 자식 행
/// - 1216, 1217: 구버전 서버의 같은 의미 코드
const REFERENTIAL_ERRORS: [u16; 4] = [1451, 1452, 1216, 1217];

/// 실행 계층 에러
#[derive(Debug, Error)]
pub enum StoreError {
    /// 검증/입력 에러 (SQL을 보내기 전에 발생)
    #[error(transparent)]
    Core(#[from] rowgate_core::Error),

    #[error("referential integrity violation: {message}")]
    Constraint { message: String },

    #[error("database error: {0}")]
    Connectivity(sqlx::Error),

    #[error("configuration error: {message}")]
    Config { message: String },
}

impl StoreError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        StoreError::Config {
            message: message.into(),
        }
    }

    /// 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Core(e) => e.code(),
            StoreError::Constraint { .. } => "CONSTRAINT_ERROR",
            StoreError::Connectivity(_) => "CONNECTIVITY_ERROR",
            StoreError::Config { .. } => "CONFIG_ERROR",
        }
    }

    pub fn is_constraint(&self) -> bool {
        matches!(self, StoreError::Constraint { .. })
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            let number = db_err
                .try_downcast_ref::<MySqlDatabaseError>()
                .map(MySqlDatabaseError::number);
            if db_err.is_foreign_key_violation() || number.is_some_and(is_referential_violation) {
                return StoreError::Constraint {
                    message: db_err.message().to_string(),
                };
            }
        }
        StoreError::Connectivity(err)
    }
}

/// 서버 에러 번호가 참조 무결성 위반인지 여부
pub fn is_referential_violation(number: u16) -> bool {
    REFERENTIAL_ERRORS.contains(&number)
}
