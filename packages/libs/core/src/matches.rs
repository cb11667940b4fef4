//! 대전 기록 승자 검증
//!
//! 두 참가자(participant)와 승자(winner) 참조를 갖는 테이블에 공통으로
//! 적용되는 불변식입니다.
//!
//! - 승자가 NULL이면 항상 유효 (미진행/무승부)
//! - 두 참가자가 모두 NULL이면 승자는 NULL이어야 함
//! - 그 외에는 승자가 두 참가자 중 하나와 같아야 함

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::ident::Ident;
use crate::row::MutationSet;

/// 참가자/승자 컬럼 이름
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchColumns {
    pub first: Ident,
    pub second: Ident,
    pub winner: Ident,
}

impl MatchColumns {
    pub fn new(first: &str, second: &str, winner: &str) -> Result<Self> {
        Ok(Self {
            first: Ident::parse(first)?,
            second: Ident::parse(second)?,
            winner: Ident::parse(winner)?,
        })
    }

    /// 변경 집합에서 세 값을 읽어 검증
    pub fn check(&self, values: &MutationSet) -> Result<()> {
        validate_winner(
            values.get(self.first.as_str()),
            values.get(self.second.as_str()),
            values.get(self.winner.as_str()),
        )
    }
}

/// 승자 불변식 검증
///
/// JSON `null`은 값이 없는 것과 같게 취급합니다.
pub fn validate_winner(
    first: Option<&Value>,
    second: Option<&Value>,
    winner: Option<&Value>,
) -> Result<()> {
    let present = |v: Option<&Value>| v.filter(|v| !v.is_null()).cloned();
    let (first, second) = (present(first), present(second));

    let Some(winner) = present(winner) else {
        return Ok(());
    };

    if first.is_none() && second.is_none() {
        return Err(Error::InvalidMatchWinner {
            reason: "both participants are empty".to_string(),
        });
    }

    if first.as_ref() != Some(&winner) && second.as_ref() != Some(&winner) {
        return Err(Error::InvalidMatchWinner {
            reason: format!("winner {winner} is not one of the participants"),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_winner_always_valid() {
        assert!(validate_winner(None, None, None).is_ok());
        assert!(validate_winner(None, None, Some(&Value::Null)).is_ok());
        assert!(validate_winner(Some(&json!("G1")), Some(&json!("G2")), None).is_ok());
    }

    #[test]
    fn test_winner_must_be_participant() {
        let (a, b) = (json!("GAAA001"), json!("GAAA002"));
        assert!(validate_winner(Some(&a), Some(&b), Some(&a)).is_ok());
        assert!(validate_winner(Some(&a), Some(&b), Some(&b)).is_ok());

        let err = validate_winner(Some(&a), Some(&b), Some(&json!("GAAA003"))).unwrap_err();
        assert_eq!(err.code(), "INVALID_MATCH_WINNER");
    }

    #[test]
    fn test_no_participants_rejects_winner() {
        let err = validate_winner(None, Some(&Value::Null), Some(&json!("G1"))).unwrap_err();
        assert!(err.to_string().contains("both participants"));
    }

    #[test]
    fn test_single_participant() {
        let a = json!("G1");
        assert!(validate_winner(Some(&a), None, Some(&a)).is_ok());
        assert!(validate_winner(None, Some(&a), Some(&a)).is_ok());
        assert!(validate_winner(Some(&a), None, Some(&json!("G2"))).is_err());
    }

    #[test]
    fn test_check_reads_configured_columns() {
        let cols = MatchColumns::new("manager1_id", "manager2_id", "winner_id").unwrap();
        let values = MutationSet::new()
            .with("manager1_id", json!("G1"))
            .with("manager2_id", json!("G2"))
            .with("winner_id", json!("G2"));
        assert!(cols.check(&values).is_ok());

        let bad = values.with("winner_id", json!("G9"));
        assert!(cols.check(&bad).is_err());
    }
}
