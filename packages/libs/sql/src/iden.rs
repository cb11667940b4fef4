//! SeaQuery 식별자 어댑터

use sea_query::Iden;

use rowgate_core::Ident;

/// 동적 테이블/컬럼 식별자
///
/// 검증된 `Ident`로만 만들 수 있습니다.
#[derive(Debug, Clone)]
pub(crate) struct DynIden(String);

impl DynIden {
    pub(crate) fn new(ident: &Ident) -> Self {
        Self(ident.as_str().to_string())
    }
}

impl Iden for DynIden {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        // String 버퍼에 쓰므로 실패하지 않습니다.
        let _ = s.write_str(&self.0);
    }
}

/// SQL 함수 이름 (DATE, YEAR)
#[derive(Debug, Clone, Copy)]
pub(crate) struct SqlFunction(pub(crate) &'static str);

impl Iden for SqlFunction {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        let _ = s.write_str(self.0);
    }
}
