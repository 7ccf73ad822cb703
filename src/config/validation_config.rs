//! 검증 정책 설정 모듈
//!
//! 로그인 ID/비밀번호 길이, 문자 종류 요구 개수, 생년월일 금지 패턴 등
//! [`PolicySettings`]의 이름 붙은 임계값들을 환경 변수로 덮어쓸 수 있게 합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export LOGIN_ID_MIN_LENGTH=4
//! export LOGIN_ID_MAX_LENGTH=20
//! export PASSWORD_MIN_LENGTH=8
//! export PASSWORD_MAX_LENGTH=16
//! export PASSWORD_MIN_CHARACTER_CLASSES=3
//! export BIRTH_DATE_PATTERNS="yyyymmdd,yymmdd"   # mmdd, ddmm, dashed 추가 가능
//! ```
//!
//! 값이 잘못된 경우 경고 로그를 남기고 기본값을 유지합니다.

use std::env;
use std::str::FromStr;

use crate::validation::{BirthDatePattern, PolicySettings, ValidationPolicy};

/// 환경 변수 기반 검증 정책 설정
pub struct ValidationConfig;

impl ValidationConfig {
    /// 프로세스 환경 변수로부터 정책 설정을 구성합니다.
    pub fn settings() -> PolicySettings {
        Self::settings_from(|key| env::var(key).ok())
    }

    /// 키 조회 함수로부터 정책 설정을 구성합니다.
    ///
    /// 값 하나하나는 해석되더라도 조합이 모순이면(최소 길이가 최대 길이보다 큰 경우 등)
    /// 경고를 남기고 기본 설정 전체를 사용합니다.
    /// 테스트에서는 프로세스 환경을 건드리지 않고 조회 함수를 주입합니다.
    pub fn settings_from<F>(lookup: F) -> PolicySettings
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = PolicySettings::default();

        override_value(&lookup, "LOGIN_ID_MIN_LENGTH", &mut settings.login_id_min_length);
        override_value(&lookup, "LOGIN_ID_MAX_LENGTH", &mut settings.login_id_max_length);
        override_value(&lookup, "PASSWORD_MIN_LENGTH", &mut settings.password_min_length);
        override_value(&lookup, "PASSWORD_MAX_LENGTH", &mut settings.password_max_length);
        override_value(
            &lookup,
            "PASSWORD_MIN_CHARACTER_CLASSES",
            &mut settings.password_min_character_classes,
        );
        override_value(&lookup, "NAME_KOREAN_MAX_LENGTH", &mut settings.name_korean_max_length);

        if let Some(raw) = lookup("BIRTH_DATE_PATTERNS") {
            match parse_patterns(&raw) {
                Some(patterns) => settings.birth_date_patterns = patterns,
                None => log::warn!("BIRTH_DATE_PATTERNS 값 '{}'이(가) 유효하지 않아 기본값을 사용합니다", raw),
            }
        }

        if let Err(e) = ValidationPolicy::new(settings.clone()) {
            log::warn!("검증 정책 환경 변수 조합이 올바르지 않아 기본 설정을 사용합니다: {}", e);
            return PolicySettings::default();
        }

        settings
    }
}

fn override_value<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = lookup(key) {
        match raw.trim().parse::<T>() {
            Ok(value) => *target = value,
            Err(_) => log::warn!("{} 값 '{}'을(를) 해석할 수 없어 기본값을 사용합니다", key, raw),
        }
    }
}

/// 쉼표로 구분된 패턴 목록을 파싱합니다. 하나라도 모르는 이름이면 `None`.
fn parse_patterns(raw: &str) -> Option<Vec<BirthDatePattern>> {
    let patterns = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(BirthDatePattern::parse)
        .collect::<Option<Vec<_>>>()?;

    if patterns.is_empty() { None } else { Some(patterns) }
}
