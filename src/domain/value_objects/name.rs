use crate::errors::{AppError, AppResult, ErrorCode};
use crate::utils::masking::mask_name;
use crate::utils::string_utils::is_blank;
use crate::validation::ValidationPolicy;

/// 회원 이름 (한글 또는 영문)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    pub fn create(raw: &str, policy: &ValidationPolicy) -> AppResult<Self> {
        policy.validate_name(raw).map(Self)
    }

    pub fn reconstruct(stored: impl Into<String>) -> AppResult<Self> {
        let stored = stored.into();
        if is_blank(&stored) {
            return Err(AppError::validation(ErrorCode::NameRequired, "저장된 이름이 비어 있습니다"));
        }
        Ok(Self(stored))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 마지막 글자를 가린 표시용 이름
    pub fn masked(&self) -> String {
        mask_name(&self.0)
    }
}
