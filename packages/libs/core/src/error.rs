//! 공통 에러 타입
//!
//! 드라이버와 무관하게 발생하는 에러를 정의합니다.
//! 실행 단계의 에러(연결 실패, 제약 위반)는 `rowgate-store`가 감쌉니다.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// rowgate 공통 에러
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────────
    // Identifier Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("invalid identifier: {identifier:?}")]
    Validation { identifier: String },

    #[error("table descriptor for '{table}' is invalid: {reason}")]
    InvalidTable { table: String, reason: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Input Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("{what} must not be empty")]
    EmptyInput { what: &'static str },

    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("invalid match winner: {reason}")]
    InvalidMatchWinner { reason: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Build/Serialization Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("query build error: {message}")]
    QueryBuild { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn validation(identifier: impl Into<String>) -> Self {
        Error::Validation {
            identifier: identifier.into(),
        }
    }

    /// 에러 코드 (클라이언트용)
    pub fn code(&self) -> &'static str {
        match self {
            Error::Validation { .. } => "VALIDATION_ERROR",
            Error::InvalidTable { .. } => "INVALID_TABLE",
            Error::EmptyInput { .. } => "EMPTY_INPUT",
            Error::MissingField { .. } => "MISSING_FIELD",
            Error::InvalidMatchWinner { .. } => "INVALID_MATCH_WINNER",
            Error::QueryBuild { .. } => "QUERY_BUILD_ERROR",
            Error::Json(_) => "JSON_ERROR",
        }
    }
}
