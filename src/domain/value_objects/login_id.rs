use std::fmt;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::utils::string_utils::is_blank;
use crate::validation::ValidationPolicy;

/// 정규화된(소문자) 로그인 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoginId(String);

impl LoginId {
    /// 형식 검증 후 정규화된 로그인 ID를 생성합니다.
    pub fn create(raw: &str, policy: &ValidationPolicy) -> AppResult<Self> {
        policy.validate_login_id(raw).map(Self)
    }

    /// 저장소에서 읽은 값으로 복원합니다. 형식 검증은 다시 하지 않습니다.
    pub fn reconstruct(stored: impl Into<String>) -> AppResult<Self> {
        let stored = stored.into();
        if is_blank(&stored) {
            return Err(AppError::validation(
                ErrorCode::InvalidLoginIdFormat,
                "저장된 로그인 ID가 비어 있습니다",
            ));
        }
        Ok(Self(stored))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::PolicySettings;

    #[test]
    fn test_create_normalizes() {
        let policy = ValidationPolicy::new(PolicySettings::default()).unwrap();
        let login_id = LoginId::create(" TestUser1 ", &policy).unwrap();
        assert_eq!(login_id.as_str(), "testuser1");
        assert_eq!(login_id, LoginId::create("testuser1", &policy).unwrap());
    }

    #[test]
    fn test_create_rejects_invalid() {
        let policy = ValidationPolicy::new(PolicySettings::default()).unwrap();
        let err = LoginId::create("ab", &policy).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidLoginIdFormat);
    }

    #[test]
    fn test_reconstruct_requires_value() {
        assert!(LoginId::reconstruct("legacyuser").is_ok());
        assert!(LoginId::reconstruct("  ").is_err());
    }
}
