use std::fmt;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::services::auth::PasswordEncoder;
use crate::utils::string_utils::is_blank;
use crate::validation::ValidationPolicy;

use super::BirthDate;

/// 인코딩된 비밀번호
///
/// 원시 비밀번호는 보관하지 않으며, 비교는 항상 인코더의 검증 함수를 거칩니다.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    encoded: String,
}

impl Password {
    /// 원시 비밀번호를 검증한 뒤 인코딩합니다.
    pub fn create(
        raw: &str,
        birth_date: &BirthDate,
        policy: &ValidationPolicy,
        encoder: &dyn PasswordEncoder,
    ) -> AppResult<Self> {
        Self::validate_raw(raw, birth_date, policy)?;
        Self::encode_validated(raw, encoder)
    }

    /// 형식 검증 후 생년월일 포함 여부를 검사합니다.
    pub fn validate_raw(raw: &str, birth_date: &BirthDate, policy: &ValidationPolicy) -> AppResult<()> {
        policy.validate_password_for(raw, birth_date.date())
    }

    /// 이미 [`validate_raw`](Self::validate_raw)를 통과한 원시 비밀번호를 인코딩합니다.
    pub(crate) fn encode_validated(raw: &str, encoder: &dyn PasswordEncoder) -> AppResult<Self> {
        Ok(Self {
            encoded: encoder.encode(raw)?,
        })
    }

    /// 저장된 인코딩 값으로 복원합니다.
    pub fn reconstruct(encoded: impl Into<String>) -> AppResult<Self> {
        let encoded = encoded.into();
        if is_blank(&encoded) {
            return Err(AppError::validation(
                ErrorCode::InvalidPassword,
                "저장된 비밀번호가 비어 있습니다",
            ));
        }
        Ok(Self { encoded })
    }

    /// 원시 비밀번호가 이 값과 일치하는지 검증합니다.
    pub fn matches(&self, raw: &str, encoder: &dyn PasswordEncoder) -> AppResult<bool> {
        encoder.verify(raw, &self.encoded)
    }

    pub fn as_encoded(&self) -> &str {
        &self.encoded
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(****)")
    }
}
