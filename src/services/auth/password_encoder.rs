//! 비밀번호 인코더
//!
//! 원시 비밀번호를 저장용 표현으로 단방향 변환하고, 원시 비밀번호와 저장된 표현을
//! 비교하는 검증 함수를 제공합니다.
//!
//! ## 구현
//!
//! - [`BcryptPasswordEncoder`] - 솔트가 포함된 적응형 해시 (기본값)
//! - [`Sha256PasswordEncoder`] - SHA-256 다이제스트의 base64 표현 (레거시 호환용)
//!
//! SHA-256 방식은 솔트가 없고 빠르기 때문에 오프라인 무차별 대입에 취약합니다.
//! 기존 데이터와의 호환이 필요한 경우에만 `PASSWORD_ENCODER=sha256`으로 선택합니다.
//!
//! bcrypt는 호출당 CPU 비용이 큰 동기 연산이므로 비동기 요청 경로에서는
//! [`run_blocking`](crate::utils::blocking::run_blocking)으로 감싸서 호출해야 합니다.

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::config::PasswordEncoderKind;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::utils::string_utils::is_blank;

/// 비밀번호 인코딩 전략
///
/// `verify(raw, &encode(raw)?)`는 항상 `Ok(true)`여야 합니다.
/// 비어 있거나 공백뿐인 원시 비밀번호는 두 연산 모두 `INVALID_PASSWORD`로 거부합니다.
pub trait PasswordEncoder: Send + Sync {
    /// 원시 비밀번호를 저장용 표현으로 인코딩합니다.
    fn encode(&self, raw: &str) -> AppResult<String>;

    /// 원시 비밀번호가 저장된 표현과 일치하는지 검증합니다.
    fn verify(&self, raw: &str, encoded: &str) -> AppResult<bool>;
}

fn ensure_not_blank(raw: &str) -> AppResult<()> {
    if is_blank(raw) {
        return Err(AppError::validation(
            ErrorCode::InvalidPassword,
            "비밀번호가 비어 있습니다",
        ));
    }
    Ok(())
}

/// bcrypt 기반 인코더
#[derive(Debug, Clone)]
pub struct BcryptPasswordEncoder {
    cost: u32,
}

impl BcryptPasswordEncoder {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl PasswordEncoder for BcryptPasswordEncoder {
    fn encode(&self, raw: &str) -> AppResult<String> {
        ensure_not_blank(raw)?;

        let started = std::time::Instant::now();
        let encoded = bcrypt::hash(raw, self.cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", started.elapsed());

        Ok(encoded)
    }

    fn verify(&self, raw: &str, encoded: &str) -> AppResult<bool> {
        ensure_not_blank(raw)?;

        let started = std::time::Instant::now();
        let result = match bcrypt::verify(raw, encoded) {
            Ok(matched) => matched,
            // bcrypt 형식이 아닌 저장값은 일치하지 않는 것으로 취급
            Err(e) => {
                log::warn!("저장된 비밀번호 해시를 해석할 수 없습니다: {}", e);
                false
            }
        };
        log::debug!("Password verification took: {:?}", started.elapsed());

        Ok(result)
    }
}

/// SHA-256 + base64 인코더 (레거시)
#[derive(Debug, Clone, Default)]
pub struct Sha256PasswordEncoder;

impl Sha256PasswordEncoder {
    fn digest(raw: &str) -> String {
        general_purpose::STANDARD.encode(Sha256::digest(raw.as_bytes()))
    }
}

impl PasswordEncoder for Sha256PasswordEncoder {
    fn encode(&self, raw: &str) -> AppResult<String> {
        ensure_not_blank(raw)?;
        Ok(Self::digest(raw))
    }

    fn verify(&self, raw: &str, encoded: &str) -> AppResult<bool> {
        ensure_not_blank(raw)?;
        Ok(Self::digest(raw).as_bytes().ct_eq(encoded.as_bytes()).into())
    }
}

/// 설정된 방식의 인코더를 생성합니다.
pub fn build_password_encoder(kind: PasswordEncoderKind, bcrypt_cost: u32) -> Arc<dyn PasswordEncoder> {
    match kind {
        PasswordEncoderKind::Bcrypt => Arc::new(BcryptPasswordEncoder::new(bcrypt_cost)),
        PasswordEncoderKind::Sha256 => {
            log::warn!("SHA-256 레거시 비밀번호 인코더를 사용합니다");
            Arc::new(Sha256PasswordEncoder)
        }
    }
}
