use crate::errors::{AppError, AppResult, ErrorCode};
use crate::utils::string_utils::is_blank;
use crate::validation::ValidationPolicy;

/// 이메일 주소
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn create(raw: &str, policy: &ValidationPolicy) -> AppResult<Self> {
        policy.validate_email(raw).map(Self)
    }

    pub fn reconstruct(stored: impl Into<String>) -> AppResult<Self> {
        let stored = stored.into();
        if is_blank(&stored) {
            return Err(AppError::validation(
                ErrorCode::InvalidEmailFormat,
                "저장된 이메일이 비어 있습니다",
            ));
        }
        Ok(Self(stored))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
