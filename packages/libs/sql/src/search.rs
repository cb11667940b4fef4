//! 타입별 검색
//!
//! 자유 텍스트 검색어 하나를 테이블의 검색 가능한 컬럼 전체에 대해 OR로
//! 묶인 조건으로 바꿉니다. 검색어는 텍스트, 숫자, 날짜로 동시에 해석될 수
//! 있으며, 해석에 성공한 종류마다 해당 타입 컬럼에 조건이 붙습니다.
//!
//! | 컬럼 분류 | 검색어 해석 | 조건 |
//! |---|---|---|
//! | text | 항상 | `LOWER(c) LIKE LOWER(?)` (`%term%`) |
//! | numeric | 정수 또는 실수 | `c = ?` |
//! | date | `YYYY-MM-DD` / `YYYY-MM-DD HH:MM:SS` | `DATE(c) = ?` |
//! | date | `YYYY` | `YEAR(c) = ?` |

use chrono::{NaiveDate, NaiveDateTime};
use sea_query::{Asterisk, BinOper, Cond, Expr, Func, Query, SimpleExpr};

use rowgate_core::schema::{ColumnDescriptor, TypeCategory};
use rowgate_core::Ident;

use crate::escape_like;
use crate::iden::{DynIden, SqlFunction};
use crate::statement::Statement;

// ─────────────────────────────────────────────────────────────────────────────
// 검색어 분류
// ─────────────────────────────────────────────────────────────────────────────

/// 숫자 해석 (정수 우선)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// 날짜 해석
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateMatch {
    /// 날짜 전체 (시각이 있으면 날짜 부분만)
    Day(NaiveDate),
    /// 연도만
    Year(i32),
}

/// 분류된 검색어
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTerm {
    /// 부분 문자열 검색에 쓰는 원문
    pub text: String,
    pub number: Option<Number>,
    pub date: Option<DateMatch>,
}

impl SearchTerm {
    /// 검색어 분류
    ///
    /// 숫자 해석만 앞뒤 공백을 무시합니다. 날짜 형식과 텍스트 검색은
    /// 원문을 그대로 씁니다.
    pub fn classify(term: &str) -> Self {
        Self {
            text: term.to_string(),
            number: parse_number(term.trim()),
            date: parse_date(term),
        }
    }
}

fn parse_number(s: &str) -> Option<Number> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(Number::Int(i));
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(Number::Float(f)),
        _ => None,
    }
}

fn parse_date(s: &str) -> Option<DateMatch> {
    if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(DateMatch::Day(day));
    }
    if let Ok(at) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(DateMatch::Day(at.date()));
    }
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        return s
            .parse::<i32>()
            .ok()
            .filter(|year| *year >= 1)
            .map(DateMatch::Year);
    }
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// 조건
// ─────────────────────────────────────────────────────────────────────────────

/// 컬럼 하나에 대한 검색 조건
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPredicate {
    /// 대소문자 무시 부분 문자열
    Contains { column: Ident, pattern: String },
    NumberEq { column: Ident, number: Number },
    DateEq { column: Ident, date: NaiveDate },
    YearEq { column: Ident, year: i32 },
}

impl SearchPredicate {
    pub fn column(&self) -> &Ident {
        match self {
            Self::Contains { column, .. }
            | Self::NumberEq { column, .. }
            | Self::DateEq { column, .. }
            | Self::YearEq { column, .. } => column,
        }
    }

    fn to_expr(&self) -> SimpleExpr {
        let col = Expr::col(DynIden::new(self.column()));
        match self {
            Self::Contains { pattern, .. } => Expr::expr(Func::lower(col)).binary(
                BinOper::Like,
                Func::lower(Expr::val(pattern.as_str())),
            ),
            Self::NumberEq { number, .. } => match number {
                Number::Int(i) => col.eq(*i),
                Number::Float(f) => col.eq(*f),
            },
            Self::DateEq { date, .. } => {
                Expr::expr(Func::cust(SqlFunction("DATE")).arg(col))
                    .eq(date.format("%Y-%m-%d").to_string())
            }
            Self::YearEq { year, .. } => {
                Expr::expr(Func::cust(SqlFunction("YEAR")).arg(col)).eq(*year)
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// 빌더
// ─────────────────────────────────────────────────────────────────────────────

/// 검색 SELECT 빌더
pub struct SearchBuilder<'a> {
    table: &'a Ident,
    columns: &'a [ColumnDescriptor],
}

impl<'a> SearchBuilder<'a> {
    pub fn new(table: &'a Ident, columns: &'a [ColumnDescriptor]) -> Self {
        Self { table, columns }
    }

    /// 컬럼별 조건 목록 (컬럼 순서 유지)
    ///
    /// 이름이 식별자 검증에 실패한 컬럼은 건너뜁니다.
    pub fn predicates(&self, term: &SearchTerm) -> Vec<SearchPredicate> {
        let mut out = Vec::new();

        for descriptor in self.columns {
            let Ok(column) = Ident::parse(&descriptor.name) else {
                tracing::debug!(column = %descriptor.name, "skipping column with invalid name");
                continue;
            };

            match descriptor.category {
                TypeCategory::Text => out.push(SearchPredicate::Contains {
                    column,
                    pattern: format!("%{}%", escape_like(&term.text)),
                }),
                TypeCategory::Numeric => {
                    if let Some(number) = term.number {
                        out.push(SearchPredicate::NumberEq { column, number });
                    }
                }
                TypeCategory::Date => match term.date {
                    Some(DateMatch::Day(date)) => {
                        out.push(SearchPredicate::DateEq { column, date })
                    }
                    Some(DateMatch::Year(year)) => {
                        out.push(SearchPredicate::YearEq { column, year })
                    }
                    None => {}
                },
                TypeCategory::Other => {}
            }
        }

        out
    }

    /// `SELECT * FROM t WHERE p1 OR p2 OR ...`
    ///
    /// 조건이 하나도 없으면 `None` (쿼리하지 않음).
    pub fn build(&self, term: &SearchTerm) -> Option<Statement> {
        let predicates = self.predicates(term);
        if predicates.is_empty() {
            return None;
        }

        let cond = predicates
            .iter()
            .fold(Cond::any(), |cond, p| cond.add(p.to_expr()));

        let mut query = Query::select();
        query
            .column(Asterisk)
            .from(DynIden::new(self.table))
            .cond_where(cond);
        Some(Statement::build(&query))
    }
}
