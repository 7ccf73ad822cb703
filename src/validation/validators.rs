//! 필드 형식 검증기
//!
//! 각 검증기는 원시 입력을 받아 정규화된 값을 돌려주거나 필드별
//! [`ErrorCode`]를 담은 `ValidationError`를 반환합니다. 검증기는 순수 함수이며
//! 어떤 상태도 바꾸지 않습니다.

use chrono::{Datelike, NaiveDate};
use validator::ValidateEmail;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::utils::string_utils::validate_required_string;

use super::policy::ValidationPolicy;

impl ValidationPolicy {
    /// 로그인 ID 정규화 (앞뒤 공백 제거 후 소문자)
    ///
    /// 저장, 중복 검사, 조회 모두 이 정규화된 형태를 사용합니다.
    pub fn normalize_login_id(&self, raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// 로그인 ID 형식 검증
    ///
    /// 영문자로 시작하는 영문/숫자 조합, 길이 제한, 예약어 금지를 검사하고
    /// 정규화된 ID를 반환합니다.
    pub fn validate_login_id(&self, raw: &str) -> AppResult<String> {
        let code = ErrorCode::InvalidLoginIdFormat;
        let trimmed = validate_required_string(raw, code, "로그인 ID")?;

        // U+212A처럼 소문자화하면 ASCII가 되는 문자가 있으므로 변환 전에 검사
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::validation(code, "로그인 ID는 영문/숫자만 사용할 수 있습니다"));
        }

        let login_id = self.normalize_login_id(&trimmed);

        let length = login_id.chars().count();
        let (min, max) = (self.settings.login_id_min_length, self.settings.login_id_max_length);
        if length < min || length > max {
            return Err(AppError::validation(
                code,
                format!("로그인 ID는 {}-{}자여야 합니다", min, max),
            ));
        }

        if !self.login_id_pattern.is_match(&login_id) {
            return Err(AppError::validation(
                code,
                "로그인 ID는 영문자로 시작하는 영문/숫자 조합이어야 합니다",
            ));
        }

        if self.settings.reserved_login_ids.iter().any(|r| r == &login_id) {
            return Err(AppError::validation(code, "사용할 수 없는 로그인 ID입니다"));
        }

        Ok(login_id)
    }

    /// 비밀번호 형식 검증
    ///
    /// 길이, 허용 문자 집합, 최소 문자 종류 수를 검사합니다.
    /// 생년월일 포함 여부는 [`check_not_contains_birth_date`](Self::check_not_contains_birth_date)가
    /// 형식 검증 이후에 따로 검사합니다.
    pub fn validate_password(&self, raw: &str) -> AppResult<()> {
        let code = ErrorCode::InvalidPasswordFormat;

        if raw.trim().is_empty() {
            return Err(AppError::validation(code, "비밀번호는 필수입니다"));
        }

        let length = raw.chars().count();
        let (min, max) = (self.settings.password_min_length, self.settings.password_max_length);
        if length < min || length > max {
            return Err(AppError::validation(
                code,
                format!("비밀번호는 {}-{}자여야 합니다", min, max),
            ));
        }

        let specials = &self.settings.password_special_characters;
        if let Some(c) = raw
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && !specials.contains(*c))
        {
            log::debug!("비밀번호에 허용되지 않은 문자 포함 (U+{:04X})", c as u32);
            return Err(AppError::validation(
                code,
                "비밀번호는 영문 대소문자, 숫자, 특수문자만 사용할 수 있습니다",
            ));
        }

        let classes = [
            raw.chars().any(|c| c.is_ascii_uppercase()),
            raw.chars().any(|c| c.is_ascii_lowercase()),
            raw.chars().any(|c| c.is_ascii_digit()),
            raw.chars().any(|c| specials.contains(c)),
        ]
        .iter()
        .filter(|present| **present)
        .count();

        let required = self.settings.password_min_character_classes;
        if classes < required {
            return Err(AppError::validation(
                code,
                format!(
                    "비밀번호는 대문자, 소문자, 숫자, 특수문자 중 {}종류 이상을 포함해야 합니다",
                    required
                ),
            ));
        }

        Ok(())
    }

    /// 이름 검증
    ///
    /// 공백 제거 후 비어 있으면 `NAME_REQUIRED`, 한글 또는 영문 중 한 가지 문자 체계만
    /// 허용하며 길이 제한은 문자 체계별로 다릅니다. 정리된 이름을 반환합니다.
    pub fn validate_name(&self, raw: &str) -> AppResult<String> {
        let name = validate_required_string(raw, ErrorCode::NameRequired, "이름")?;
        let length = name.chars().count();
        let code = ErrorCode::InvalidNameFormat;

        if self.korean_name_pattern.is_match(&name) {
            let max = self.settings.name_korean_max_length;
            if length > max {
                return Err(AppError::validation(code, format!("한글 이름은 {}자 이하여야 합니다", max)));
            }
            return Ok(name);
        }

        if self.latin_name_pattern.is_match(&name) {
            let max = self.settings.name_latin_max_length;
            if length > max {
                return Err(AppError::validation(code, format!("영문 이름은 {}자 이하여야 합니다", max)));
            }
            return Ok(name);
        }

        Err(AppError::validation(code, "이름은 한글 또는 영문으로만 입력해야 합니다"))
    }

    /// 이메일 형식 검증
    ///
    /// 도메인 부분은 점으로 시작하거나 끝나거나 연속된 점을 포함할 수 없습니다.
    pub fn validate_email(&self, raw: &str) -> AppResult<String> {
        let code = ErrorCode::InvalidEmailFormat;
        let email = validate_required_string(raw, code, "이메일")?;

        if email.chars().count() > self.settings.email_max_length {
            return Err(AppError::validation(
                code,
                format!("이메일은 {}자 이하여야 합니다", self.settings.email_max_length),
            ));
        }

        if !self.email_pattern.is_match(&email) || !email.validate_email() {
            return Err(AppError::validation(code, "이메일 형식이 올바르지 않습니다"));
        }

        Ok(email)
    }

    /// 생년월일 검증
    ///
    /// 값이 없거나, `today`보다 미래이거나, 허용 연도보다 이르면 실패합니다.
    pub fn validate_birth_date(&self, date: Option<NaiveDate>, today: NaiveDate) -> AppResult<NaiveDate> {
        let code = ErrorCode::InvalidBirthDate;
        let date = date.ok_or_else(|| AppError::validation(code, "생년월일은 필수입니다"))?;

        if date > today {
            return Err(AppError::validation(code, "생년월일은 미래 날짜일 수 없습니다"));
        }

        if date.year() < self.settings.birth_date_min_year {
            return Err(AppError::validation(
                code,
                format!("생년월일은 {}년 이후여야 합니다", self.settings.birth_date_min_year),
            ));
        }

        Ok(date)
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{AppError, ErrorCode};
    use crate::validation::{PolicySettings, ValidationPolicy};
    use chrono::NaiveDate;

    fn policy() -> ValidationPolicy {
        ValidationPolicy::new(PolicySettings::default()).unwrap()
    }

    fn code_of<T: std::fmt::Debug>(result: Result<T, AppError>) -> ErrorCode {
        result.unwrap_err().code()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_login_id_valid_and_normalized() {
        let policy = policy();
        assert_eq!(policy.validate_login_id("testuser1").unwrap(), "testuser1");
        assert_eq!(policy.validate_login_id("  TestUser1 ").unwrap(), "testuser1");
    }

    #[test]
    fn test_login_id_length_bounds() {
        let policy = policy();
        assert!(policy.validate_login_id("abcd").is_ok());
        assert!(policy.validate_login_id(&"a".repeat(20)).is_ok());
        assert_eq!(code_of(policy.validate_login_id("abc")), ErrorCode::InvalidLoginIdFormat);
        assert_eq!(code_of(policy.validate_login_id(&"a".repeat(21))), ErrorCode::InvalidLoginIdFormat);
    }

    #[test]
    fn test_login_id_rejects_bad_characters() {
        let policy = policy();
        for raw in ["", "   ", "1234abcd", "test_user", "test user", "테스트유저", "user-01"] {
            assert_eq!(
                code_of(policy.validate_login_id(raw)),
                ErrorCode::InvalidLoginIdFormat,
                "input: {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_login_id_rejects_non_ascii_that_lowercases_to_ascii() {
        let policy = policy();
        assert_eq!(
            code_of(policy.validate_login_id("\u{212A}imuser")),
            ErrorCode::InvalidLoginIdFormat
        );
        assert_eq!(
            code_of(policy.validate_login_id("\u{0130}stanbul")),
            ErrorCode::InvalidLoginIdFormat
        );
        assert_eq!(policy.validate_login_id("Kimuser").unwrap(), "kimuser");
    }

    #[test]
    fn test_login_id_reserved_words_are_case_insensitive() {
        let policy = policy();
        assert!(policy.validate_login_id("admin").is_err());
        assert!(policy.validate_login_id("ROOT").is_err());
        assert!(policy.validate_login_id("admin1").is_ok());
    }

    #[test]
    fn test_password_valid() {
        let policy = policy();
        assert!(policy.validate_password("Password1!").is_ok());
        assert!(policy.validate_password("abcdefg1!").is_ok());
        assert!(policy.validate_password("Abcdefg1").is_ok());
    }

    #[test]
    fn test_password_length_bounds() {
        let policy = policy();
        assert!(policy.validate_password("Abcdef1!").is_ok());
        assert!(policy.validate_password("Abcdefgh12345!@#").is_ok());
        assert_eq!(code_of(policy.validate_password("Abcde1!")), ErrorCode::InvalidPasswordFormat);
        assert_eq!(
            code_of(policy.validate_password("Abcdefgh12345!@#$")),
            ErrorCode::InvalidPasswordFormat
        );
    }

    #[test]
    fn test_password_rejects_disallowed_characters() {
        let policy = policy();
        assert!(policy.validate_password("Pass word1!").is_err());
        assert!(policy.validate_password("Password1!한글").is_err());
        assert!(policy.validate_password("        ").is_err());
    }

    #[test]
    fn test_password_character_classes() {
        let policy = policy();
        assert!(policy.validate_password("abcdefgh").is_err());
        assert!(policy.validate_password("abcdefg1").is_err());
        assert!(policy.validate_password("abcdefG1").is_ok());

        let strict = ValidationPolicy::new(PolicySettings {
            password_min_character_classes: 4,
            ..PolicySettings::default()
        })
        .unwrap();
        assert!(strict.validate_password("abcdefG1").is_err());
        assert!(strict.validate_password("abcdeG1!").is_ok());
    }

    #[test]
    fn test_name_korean_and_latin() {
        let policy = policy();
        assert_eq!(policy.validate_name(" 홍길동 ").unwrap(), "홍길동");
        assert_eq!(policy.validate_name("John").unwrap(), "John");
        assert!(policy.validate_name("홍").is_ok());
        assert!(policy.validate_name("가나다라마").is_ok());
        assert_eq!(code_of(policy.validate_name("가나다라마바")), ErrorCode::InvalidNameFormat);
        assert!(policy.validate_name(&"a".repeat(50)).is_ok());
        assert!(policy.validate_name(&"a".repeat(51)).is_err());
    }

    #[test]
    fn test_korean_name_allows_up_to_five_syllables() {
        let policy = policy();
        assert_eq!(policy.settings().name_korean_max_length, 5);
        assert!(policy.validate_name("남궁민수").is_ok());
        assert_eq!(policy.validate_name("황보가나다").unwrap(), "황보가나다");
        assert_eq!(code_of(policy.validate_name("황보가나다라")), ErrorCode::InvalidNameFormat);

        let four = ValidationPolicy::new(PolicySettings {
            name_korean_max_length: 4,
            ..PolicySettings::default()
        })
        .unwrap();
        assert!(four.validate_name("남궁민수").is_ok());
        assert!(four.validate_name("황보가나다").is_err());
    }

    #[test]
    fn test_name_blank_and_mixed() {
        let policy = policy();
        assert_eq!(code_of(policy.validate_name("   ")), ErrorCode::NameRequired);
        assert_eq!(code_of(policy.validate_name("홍John")), ErrorCode::InvalidNameFormat);
        assert_eq!(code_of(policy.validate_name("John Doe")), ErrorCode::InvalidNameFormat);
        assert_eq!(code_of(policy.validate_name("ㅎㄱㄷ")), ErrorCode::InvalidNameFormat);
        assert_eq!(code_of(policy.validate_name("홍길동1")), ErrorCode::InvalidNameFormat);
    }

    #[test]
    fn test_email_valid() {
        let policy = policy();
        assert_eq!(policy.validate_email(" test@example.com ").unwrap(), "test@example.com");
        assert!(policy.validate_email("first.last+tag@sub.example.co.kr").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        let policy = policy();
        for raw in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@.example.com",
            "user@example..com",
            "user@example.com.",
            "user@example",
        ] {
            assert_eq!(
                code_of(policy.validate_email(raw)),
                ErrorCode::InvalidEmailFormat,
                "input: {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_email_length_limit() {
        let policy = policy();
        let long = format!("{}@example.com", "a".repeat(250));
        assert!(policy.validate_email(&long).is_err());
    }

    #[test]
    fn test_birth_date_rules() {
        let policy = policy();
        let today = date(2024, 6, 1);

        assert_eq!(policy.validate_birth_date(Some(date(1990, 1, 15)), today).unwrap(), date(1990, 1, 15));
        assert!(policy.validate_birth_date(Some(today), today).is_ok());
        assert_eq!(
            code_of(policy.validate_birth_date(Some(date(2024, 6, 2)), today)),
            ErrorCode::InvalidBirthDate
        );
        assert_eq!(code_of(policy.validate_birth_date(None, today)), ErrorCode::InvalidBirthDate);
        assert!(policy.validate_birth_date(Some(date(1899, 12, 31)), today).is_err());
    }
}
