use chrono::{Local, NaiveDate};

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::validation::ValidationPolicy;

/// 요청과 저장소에서 사용하는 날짜 형식
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// 생년월일 (미래 날짜 불가)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// 오늘(서버 로컬 날짜) 기준으로 검증하여 생성합니다.
    pub fn create(date: Option<NaiveDate>, policy: &ValidationPolicy) -> AppResult<Self> {
        Self::create_as_of(date, Local::now().date_naive(), policy)
    }

    /// 주어진 기준일로 검증하여 생성합니다.
    pub fn create_as_of(date: Option<NaiveDate>, today: NaiveDate, policy: &ValidationPolicy) -> AppResult<Self> {
        policy.validate_birth_date(date, today).map(Self)
    }

    /// `YYYY-MM-DD` 문자열을 해석한 뒤 검증합니다.
    pub fn parse(raw: Option<&str>, policy: &ValidationPolicy) -> AppResult<Self> {
        Self::create(parse_date(raw)?, policy)
    }

    pub fn reconstruct(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn to_iso_string(&self) -> String {
        self.0.format(BIRTH_DATE_FORMAT).to_string()
    }
}

/// 비어 있으면 `None`, 형식이 틀리면 `INVALID_BIRTH_DATE`
fn parse_date(raw: Option<&str>) -> AppResult<Option<NaiveDate>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(raw, BIRTH_DATE_FORMAT).map(Some).map_err(|_| {
        AppError::validation(
            ErrorCode::InvalidBirthDate,
            "생년월일은 YYYY-MM-DD 형식이어야 합니다",
        )
    })
}
