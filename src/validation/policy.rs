//! 검증 정책 객체
//!
//! 로그인 ID, 비밀번호, 이름, 이메일, 생년월일 검증 규칙의 모든 임계값과 플래그를
//! [`PolicySettings`]에 이름을 붙여 모아 두고, 정규식은 [`ValidationPolicy`] 생성 시
//! 한 번만 컴파일합니다. 정책 객체는 애플리케이션 시작 시 한 번 만들어
//! `Arc`로 필요한 컴포넌트에 전달합니다. 전역 상태는 없습니다.

use regex::Regex;

use crate::errors::{AppError, AppResult};

/// 비밀번호에 포함되면 안 되는 생년월일 파생 문자열 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthDatePattern {
    /// `YYYYMMDD` (예: 19900115)
    FullDate,
    /// `YYMMDD` (예: 900115)
    ShortYearDate,
    /// `MMDD` (예: 0115)
    MonthDay,
    /// `DDMM` (예: 1501)
    DayMonth,
    /// `YYYY-MM-DD` (예: 1990-01-15)
    Dashed,
}

impl BirthDatePattern {
    /// chrono 포맷 문자열
    pub fn format_str(&self) -> &'static str {
        match self {
            BirthDatePattern::FullDate => "%Y%m%d",
            BirthDatePattern::ShortYearDate => "%y%m%d",
            BirthDatePattern::MonthDay => "%m%d",
            BirthDatePattern::DayMonth => "%d%m",
            BirthDatePattern::Dashed => "%Y-%m-%d",
        }
    }

    /// 설정 문자열에서 패턴을 파싱합니다 (`yyyymmdd`, `yymmdd`, `mmdd`, `ddmm`, `dashed`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "yyyymmdd" => Some(BirthDatePattern::FullDate),
            "yymmdd" => Some(BirthDatePattern::ShortYearDate),
            "mmdd" => Some(BirthDatePattern::MonthDay),
            "ddmm" => Some(BirthDatePattern::DayMonth),
            "dashed" | "yyyy-mm-dd" => Some(BirthDatePattern::Dashed),
            _ => None,
        }
    }
}

/// 검증 규칙의 이름 붙은 임계값과 플래그
///
/// 기본값이 서비스의 정식 규칙입니다. 모든 길이는 문자(code point) 수 기준이며
/// 경계값을 포함합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySettings {
    /// 로그인 ID 최소 길이 (기본 4)
    pub login_id_min_length: usize,
    /// 로그인 ID 최대 길이 (기본 20)
    pub login_id_max_length: usize,
    /// 첫 글자가 영문자여야 하는지 여부 (숫자만으로 된 ID 거부)
    pub login_id_require_leading_letter: bool,
    /// 가입할 수 없는 예약어 (정규화된 소문자 기준)
    pub reserved_login_ids: Vec<String>,
    /// 비밀번호 최소 길이 (기본 8)
    pub password_min_length: usize,
    /// 비밀번호 최대 길이 (기본 16)
    pub password_max_length: usize,
    /// 비밀번호에 허용되는 특수문자 집합
    pub password_special_characters: String,
    /// {대문자, 소문자, 숫자, 특수문자} 중 최소 포함 종류 수 (기본 3)
    pub password_min_character_classes: usize,
    /// 비밀번호에 포함되면 거부할 생년월일 형식
    pub birth_date_patterns: Vec<BirthDatePattern>,
    /// 한글 이름 최대 길이
    pub name_korean_max_length: usize,
    /// 영문 이름 최대 길이
    pub name_latin_max_length: usize,
    /// 이메일 최대 길이
    pub email_max_length: usize,
    /// 허용되는 가장 이른 출생 연도
    pub birth_date_min_year: i32,
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            login_id_min_length: 4,
            login_id_max_length: 20,
            login_id_require_leading_letter: true,
            reserved_login_ids: ["admin", "administrator", "root", "system", "null", "undefined"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            password_min_length: 8,
            password_max_length: 16,
            password_special_characters: "!@#$%^&*()-_=+[]{};:'\",.<>/?\\|`~".to_string(),
            password_min_character_classes: 3,
            birth_date_patterns: vec![BirthDatePattern::FullDate, BirthDatePattern::ShortYearDate],
            name_korean_max_length: 5,
            name_latin_max_length: 50,
            email_max_length: 255,
            birth_date_min_year: 1900,
        }
    }
}

/// 컴파일된 정규식을 포함한 상태 없는 검증 정책
///
/// 형식 검증기([`validators`](super::validators))와 생년월일 교차 검증
/// ([`birth_date_rule`](super::birth_date_rule))이 이 타입의 메서드로 구현됩니다.
#[derive(Debug, Clone)]
pub struct ValidationPolicy {
    pub(crate) settings: PolicySettings,
    pub(crate) login_id_pattern: Regex,
    pub(crate) korean_name_pattern: Regex,
    pub(crate) latin_name_pattern: Regex,
    pub(crate) email_pattern: Regex,
}

impl ValidationPolicy {
    /// 설정을 검사하고 정규식을 컴파일하여 정책을 생성합니다.
    ///
    /// 설정 자체가 모순되면 `InternalError`를 반환합니다. 이는 시작 시점의
    /// 치명적 설정 오류이며 사용자 입력 검증 실패와는 구분됩니다.
    pub fn new(settings: PolicySettings) -> AppResult<Self> {
        check_range("로그인 ID", settings.login_id_min_length, settings.login_id_max_length)?;
        check_range("비밀번호", settings.password_min_length, settings.password_max_length)?;
        check_range("한글 이름", 1, settings.name_korean_max_length)?;

        if !(1..=4).contains(&settings.password_min_character_classes) {
            return Err(AppError::InternalError(format!(
                "비밀번호 문자 종류 요구 개수는 1-4 사이여야 합니다: {}",
                settings.password_min_character_classes
            )));
        }

        if settings.birth_date_patterns.is_empty() {
            return Err(AppError::InternalError(
                "생년월일 금지 패턴이 하나 이상 필요합니다".to_string(),
            ));
        }

        let login_id_regex = if settings.login_id_require_leading_letter {
            r"^[a-z][a-z0-9]*$"
        } else {
            r"^[a-z0-9]+$"
        };

        Ok(Self {
            login_id_pattern: compile(login_id_regex)?,
            korean_name_pattern: compile(r"^[가-힣]+$")?,
            latin_name_pattern: compile(r"^[A-Za-z]+$")?,
            email_pattern: compile(
                r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
            )?,
            settings,
        })
    }

    /// 현재 정책 설정
    pub fn settings(&self) -> &PolicySettings {
        &self.settings
    }
}

fn check_range(field: &str, min: usize, max: usize) -> AppResult<()> {
    if min == 0 || min > max {
        return Err(AppError::InternalError(format!(
            "{} 길이 설정이 올바르지 않습니다: {}-{}",
            field, min, max
        )));
    }
    Ok(())
}

fn compile(pattern: &str) -> AppResult<Regex> {
    Regex::new(pattern)
        .map_err(|e| AppError::InternalError(format!("정규식 컴파일 실패 ({}): {}", pattern, e)))
}
