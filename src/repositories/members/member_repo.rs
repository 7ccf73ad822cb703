use async_trait::async_trait;

use crate::domain::entities::members::Member;
use crate::errors::AppResult;

/// 회원 저장소 포트
///
/// 모든 조회 키는 정규화된(소문자) 로그인 ID입니다. 구현체는 비밀번호 변경 직후의
/// 조회가 새 비밀번호를 반영하도록 read-your-writes를 보장해야 합니다.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// 로그인 ID로 회원을 조회합니다.
    async fn find_by_login_id(&self, login_id: &str) -> AppResult<Option<Member>>;

    /// 로그인 ID 사용 여부
    async fn exists_by_login_id(&self, login_id: &str) -> AppResult<bool>;

    /// 새 회원을 저장하고 식별자가 부여된 회원을 반환합니다.
    ///
    /// 이미 같은 로그인 ID가 있으면 `ConflictError`를 반환합니다.
    async fn insert(&self, member: Member) -> AppResult<Member>;

    /// 회원의 인코딩된 비밀번호를 갱신합니다.
    async fn update_password(&self, member: &Member) -> AppResult<()>;
}
