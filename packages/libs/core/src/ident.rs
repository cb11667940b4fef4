//! 식별자 검증
//!
//! 테이블/컬럼 이름은 바인딩 파라미터로 보낼 수 없으므로 SQL 텍스트에
//! 직접 들어갑니다. 여기를 통과한 문자열만 SQL 텍스트에 들어갈 수 있습니다.
//! 허용 문자는 `[A-Za-z0-9_]`이며 토큰 전체를 검사합니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 식별자 검증
///
/// 유효하면 입력을 그대로 반환하고, 아니면 `Error::Validation`을 반환합니다.
pub fn validate(identifier: &str) -> Result<&str> {
    if is_valid(identifier) {
        Ok(identifier)
    } else {
        Err(Error::validation(identifier))
    }
}

fn is_valid(identifier: &str) -> bool {
    !identifier.is_empty()
        && identifier
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// 검증을 통과한 테이블/컬럼 식별자
///
/// 생성 경로가 `Ident::parse` 하나뿐이므로, 이 타입의 값은 항상
/// 화이트리스트를 만족합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ident(String);

impl Ident {
    /// 문자열을 검증하여 식별자 생성
    pub fn parse(identifier: &str) -> Result<Self> {
        validate(identifier).map(|s| Ident(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 여러 이름을 한꺼번에 검증 (하나라도 실패하면 에러)
    pub fn parse_all<'a, I>(names: I) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().map(Ident::parse).collect()
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ident {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ident::parse(s)
    }
}

impl TryFrom<String> for Ident {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        if is_valid(&value) {
            Ok(Ident(value))
        } else {
            Err(Error::validation(value))
        }
    }
}

impl From<Ident> for String {
    fn from(ident: Ident) -> Self {
        ident.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_whitelisted_names() {
        for name in ["users", "Player", "manager1_id", "_internal", "T2", "9lives"] {
            assert_eq!(validate(name).unwrap(), name);
            assert_eq!(Ident::parse(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_rejects_anything_else() {
        for name in [
            "",
            "users;",
            "users; DROP TABLE users",
            "a b",
            "name`",
            "col-name",
            "schema.table",
            "\"quoted\"",
            "é",
            "tab\t",
            "x\n",
            "1=1--",
        ] {
            let err = validate(name).unwrap_err();
            match err {
                Error::Validation { identifier } => assert_eq!(identifier, name),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let once = validate("league_id").unwrap();
        assert_eq!(validate(once).unwrap(), "league_id");
    }

    #[test]
    fn test_parse_all_fails_on_first_bad_name() {
        assert!(Ident::parse_all(["a", "b", "c"]).is_ok());
        assert!(Ident::parse_all(["a", "b c"]).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Ident = serde_json::from_str("\"club_id\"").unwrap();
        assert_eq!(ok.as_str(), "club_id");
        assert!(serde_json::from_str::<Ident>("\"club id\"").is_err());
    }
}
