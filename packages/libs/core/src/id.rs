//! 순차 코드 생성
//!
//! `{prefix}{ALPHA}{NNN}` 형태의 사람이 읽을 수 있는 PK 값을 다룹니다.
//! (예: `LAAA001`, `LAAA002`, ..., `LAAA999`, `LAAB001`)
//!
//! 프로세스 내 카운터는 두지 않습니다. 다음 값은 항상 DB에 저장된 최대값에서
//! 계산됩니다. 조회와 INSERT 사이는 원자적이지 않으므로 같은
//! (table, column, prefix)에 대한 동시 호출은 같은 값을 받을 수 있습니다.
//! 동시 사용 시에는 호출자가 생성+INSERT를 직렬화하거나, 유니크 제약 충돌 시
//! 재시도해야 합니다.

use std::fmt;

const MAX_NUMBER: u16 = 999;

/// 접두사를 제외한 코드 (`AAA001`의 `AAA`와 `1`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceCode {
    alpha: String,
    number: u16,
}

impl SequenceCode {
    /// 첫 코드 (`AAA001`)
    pub fn initial() -> Self {
        Self {
            alpha: "AAA".to_string(),
            number: 1,
        }
    }

    /// 접미사 파싱
    ///
    /// 끝이 `[A-Z]+` 바로 뒤에 숫자 3개로 끝나야 합니다 (`([A-Z]+)(\d{3})$`).
    /// 알파벳 블록 앞의 문자는 무시합니다.
    pub fn parse_suffix(suffix: &str) -> Option<Self> {
        let bytes = suffix.as_bytes();
        if bytes.len() < 4 {
            return None;
        }

        let (head, digits) = bytes.split_at(bytes.len() - 3);
        if !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }

        let alpha_len = head
            .iter()
            .rev()
            .take_while(|b| b.is_ascii_uppercase())
            .count();
        if alpha_len == 0 {
            return None;
        }

        let alpha = &head[head.len() - alpha_len..];
        let number = digits
            .iter()
            .fold(0u16, |acc, d| acc * 10 + u16::from(d - b'0'));

        Some(Self {
            alpha: String::from_utf8_lossy(alpha).into_owned(),
            number,
        })
    }

    /// 다음 코드
    ///
    /// 숫자가 999를 넘으면 1로 돌아가고 알파벳 블록이 하나 증가합니다.
    pub fn succ(&self) -> Self {
        if self.number >= MAX_NUMBER {
            Self {
                alpha: increment_alpha(&self.alpha),
                number: 1,
            }
        } else {
            Self {
                alpha: self.alpha.clone(),
                number: self.number + 1,
            }
        }
    }

    pub fn alpha(&self) -> &str {
        &self.alpha
    }

    pub fn number(&self) -> u16 {
        self.number
    }
}

impl fmt::Display for SequenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.alpha, self.number)
    }
}

/// 알파벳 블록 증가 (A-Z 26진 올림)
///
/// `Z`는 `A`가 되고 윗자리로 올림합니다. 최상위 자리까지 넘치면 앞에 `A`를
/// 붙입니다 (`ZZZ` → `AAAA`).
pub fn increment_alpha(alpha: &str) -> String {
    let mut chars: Vec<u8> = alpha.bytes().collect();

    for c in chars.iter_mut().rev() {
        if *c == b'Z' {
            *c = b'A';
        } else {
            *c += 1;
            return String::from_utf8_lossy(&chars).into_owned();
        }
    }

    let mut out = String::with_capacity(chars.len() + 1);
    out.push('A');
    out.push_str(&String::from_utf8_lossy(&chars));
    out
}

/// 다음 ID 계산 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextId {
    /// 생성된 ID (접두사 포함)
    pub value: String,

    /// 저장된 최대값이 형식에 맞지 않아 `AAA001`로 되돌린 경우 그 원래 값
    pub reset_from: Option<String>,
}

/// 저장된 최대값(`latest`)으로부터 다음 ID 계산
///
/// - `latest`가 없으면 `{prefix}AAA001`
/// - 접미사가 형식에 맞지 않으면 `{prefix}AAA001` (`reset_from`에 원래 값 기록)
pub fn next_id(prefix: &str, latest: Option<&str>) -> NextId {
    let Some(latest) = latest else {
        return NextId {
            value: format!("{prefix}{}", SequenceCode::initial()),
            reset_from: None,
        };
    };

    // 접두사 비교는 DB 콜레이션에 맡기고 여기서는 길이만큼 잘라냅니다.
    let code = latest
        .get(prefix.len()..)
        .and_then(SequenceCode::parse_suffix);

    match code {
        Some(code) => NextId {
            value: format!("{prefix}{}", code.succ()),
            reset_from: None,
        },
        None => NextId {
            value: format!("{prefix}{}", SequenceCode::initial()),
            reset_from: Some(latest.to_string()),
        },
    }
}
