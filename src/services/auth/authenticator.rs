//! 헤더 자격 증명 인증 절차
//!
//! 1. 로그인 ID나 비밀번호가 비어 있으면 저장소 조회 없이 실패
//! 2. 정규화된 로그인 ID로 회원 조회, 없으면 실패
//! 3. 인코더로 비밀번호 검증, 불일치하면 실패
//!
//! 세 경우 모두 같은 [`AppError::unauthorized`] 에러를 반환하여
//! 로그인 ID의 존재 여부가 응답으로 드러나지 않게 합니다.
//! 없는 로그인 ID도 더미 해시로 검증을 한 번 수행하므로 응답 시간 차이도 생기지 않습니다.

use std::sync::Arc;

use crate::domain::entities::members::Member;
use crate::errors::{AppError, AppResult};
use crate::repositories::members::MemberRepository;
use crate::utils::blocking::run_blocking;
use crate::utils::string_utils::is_blank;
use crate::validation::ValidationPolicy;

use super::password_encoder::PasswordEncoder;

const DUMMY_PASSWORD: &str = "dummy-Password-0";

pub struct Authenticator {
    member_repo: Arc<dyn MemberRepository>,
    encoder: Arc<dyn PasswordEncoder>,
    policy: Arc<ValidationPolicy>,
    /// 존재하지 않는 로그인 ID 검증에 쓰는 해시
    dummy_hash: Option<String>,
}

impl Authenticator {
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        encoder: Arc<dyn PasswordEncoder>,
        policy: Arc<ValidationPolicy>,
    ) -> Self {
        let dummy_hash = encoder
            .encode(DUMMY_PASSWORD)
            .map_err(|e| log::warn!("더미 비밀번호 해시 생성 실패: {}", e))
            .ok();

        Self {
            member_repo,
            encoder,
            policy,
            dummy_hash,
        }
    }

    /// 로그인 ID와 원시 비밀번호로 회원을 인증합니다.
    pub async fn authenticate(&self, login_id: &str, raw_password: &str) -> AppResult<Member> {
        if is_blank(login_id) || is_blank(raw_password) {
            log::warn!("인증 실패: 자격 증명 헤더 누락");
            return Err(AppError::unauthorized());
        }

        let login_id = self.policy.normalize_login_id(login_id);

        let found = self.member_repo.find_by_login_id(&login_id).await?;

        let stored = found
            .as_ref()
            .map(|member| member.password().as_encoded().to_string())
            .or_else(|| self.dummy_hash.clone());

        let matched = match stored {
            Some(encoded) => {
                let encoder = Arc::clone(&self.encoder);
                let raw_password = raw_password.to_string();
                run_blocking(move || encoder.verify(&raw_password, &encoded)).await?
            }
            None => false,
        };

        let member = match found {
            Some(member) if matched => member,
            _ => {
                log::warn!("인증 실패: 로그인 ID '{}'", login_id);
                return Err(AppError::unauthorized());
            }
        };

        log::debug!("인증 성공: {}", login_id);
        Ok(member)
    }
}
