//! 비밀번호-생년월일 교차 검증
//!
//! 비밀번호 형식 검증을 통과한 값에 대해서만 실행됩니다.
//! 설정된 각 [`BirthDatePattern`]으로 생년월일을 문자열로 만든 뒤 비밀번호가
//! 그 문자열을 부분 문자열로 포함하는지 검사합니다.

use chrono::NaiveDate;

use crate::errors::{AppError, AppResult, ErrorCode};

use super::policy::{BirthDatePattern, ValidationPolicy};

impl BirthDatePattern {
    /// 생년월일을 이 패턴의 문자열로 변환합니다.
    pub fn render(&self, birth_date: NaiveDate) -> String {
        birth_date.format(self.format_str()).to_string()
    }
}

impl ValidationPolicy {
    /// 비밀번호가 생년월일 파생 문자열을 포함하지 않는지 검사합니다.
    pub fn check_not_contains_birth_date(&self, raw_password: &str, birth_date: NaiveDate) -> AppResult<()> {
        let found = self
            .settings
            .birth_date_patterns
            .iter()
            .find(|pattern| raw_password.contains(&pattern.render(birth_date)));

        if let Some(pattern) = found {
            log::debug!("비밀번호에 생년월일 패턴 포함: {:?}", pattern);
            return Err(AppError::validation(
                ErrorCode::PasswordContainsBirthDate,
                "비밀번호에 생년월일을 포함할 수 없습니다",
            ));
        }

        Ok(())
    }

    /// 형식 검증 후 생년월일 교차 검증을 순서대로 수행합니다.
    pub fn validate_password_for(&self, raw_password: &str, birth_date: NaiveDate) -> AppResult<()> {
        self.validate_password(raw_password)?;
        self.check_not_contains_birth_date(raw_password, birth_date)
    }
}
