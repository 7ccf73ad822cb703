//! # 회원 서비스 구현
//!
//! 회원 가입, 헤더 자격 증명 인증, 내 정보 조회, 비밀번호 변경을 담당하는
//! 애플리케이션 서비스입니다. Spring의 `@Service` 클래스에 해당하며,
//! 저장소와 인코더, 검증 정책은 생성자로 명시적으로 주입받습니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! register:        값 객체 생성 → 비밀번호 검증 → 중복 확인 → 인코딩 → 저장
//! get_my_info:     인증 → 마스킹된 응답
//! change_password: 인증 → 새 비밀번호 검증/동일성 확인/인코딩 → 저장
//! ```
//!
//! bcrypt 연산은 [`run_blocking`]으로 블로킹 스레드 풀에서 실행됩니다.

use std::sync::Arc;

use crate::domain::dto::members::request::RegisterMemberRequest;
use crate::domain::dto::members::response::MemberResponse;
use crate::domain::entities::members::Member;
use crate::domain::value_objects::{BirthDate, Email, LoginId, Name, Password};
use crate::errors::{AppError, AppResult};
use crate::repositories::members::MemberRepository;
use crate::services::auth::{Authenticator, PasswordEncoder};
use crate::utils::blocking::run_blocking;
use crate::validation::ValidationPolicy;

pub struct MemberService {
    member_repo: Arc<dyn MemberRepository>,
    encoder: Arc<dyn PasswordEncoder>,
    policy: Arc<ValidationPolicy>,
    authenticator: Authenticator,
}

impl MemberService {
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        encoder: Arc<dyn PasswordEncoder>,
        policy: Arc<ValidationPolicy>,
    ) -> Self {
        let authenticator = Authenticator::new(
            Arc::clone(&member_repo),
            Arc::clone(&encoder),
            Arc::clone(&policy),
        );

        Self {
            member_repo,
            encoder,
            policy,
            authenticator,
        }
    }

    /// 새 회원을 가입시킵니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Member)` - 식별자가 부여된 회원
    /// * `Err(AppError::ValidationError)` - 필드 형식 오류 또는 비밀번호에 생년월일 포함
    /// * `Err(AppError::ConflictError)` - 이미 사용 중인 로그인 ID
    pub async fn register(&self, request: RegisterMemberRequest) -> AppResult<Member> {
        let policy = self.policy.as_ref();

        let login_id = LoginId::create(request.login_id.as_deref().unwrap_or_default(), policy)?;
        let name = Name::create(request.name.as_deref().unwrap_or_default(), policy)?;
        let birth_date = BirthDate::parse(request.birth_date.as_deref(), policy)?;
        let email = Email::create(request.email.as_deref().unwrap_or_default(), policy)?;

        let raw_password = request.password.unwrap_or_default();
        Password::validate_raw(&raw_password, &birth_date, policy)?;

        if self.member_repo.exists_by_login_id(login_id.as_str()).await? {
            log::warn!("회원 가입 실패: 중복 로그인 ID '{}'", login_id);
            return Err(AppError::ConflictError("이미 사용 중인 로그인 ID입니다".to_string()));
        }

        let encoder = Arc::clone(&self.encoder);
        let password = run_blocking(move || Password::encode_validated(&raw_password, encoder.as_ref())).await?;

        let member = self
            .member_repo
            .insert(Member::register(login_id, password, name, birth_date, email))
            .await?;

        log::info!("회원 가입 완료: {}", member.login_id());
        Ok(member)
    }

    /// 헤더 자격 증명으로 회원을 인증합니다.
    pub async fn authenticate(&self, login_id: &str, raw_password: &str) -> AppResult<Member> {
        self.authenticator.authenticate(login_id, raw_password).await
    }

    /// 인증된 회원의 정보를 이름을 가린 형태로 반환합니다.
    pub async fn get_my_info(&self, login_id: &str, raw_password: &str) -> AppResult<MemberResponse> {
        let member = self.authenticate(login_id, raw_password).await?;
        Ok(MemberResponse::from(&member))
    }

    /// 현재 비밀번호로 인증한 뒤 비밀번호를 변경합니다.
    ///
    /// 새 비밀번호는 형식 검증, 생년월일 포함 검사, 기존 비밀번호와의 동일성 검사를
    /// 순서대로 거칩니다.
    pub async fn change_password(
        &self,
        login_id: &str,
        current_raw_password: &str,
        new_raw_password: Option<String>,
    ) -> AppResult<Member> {
        let mut member = self.authenticate(login_id, current_raw_password).await?;

        let policy = Arc::clone(&self.policy);
        let encoder = Arc::clone(&self.encoder);
        let new_raw_password = new_raw_password.unwrap_or_default();

        let member = run_blocking(move || {
            member.change_password(&new_raw_password, &policy, encoder.as_ref())?;
            Ok(member)
        })
        .await?;

        self.member_repo.update_password(&member).await?;

        log::info!("비밀번호 변경 완료: {}", member.login_id());
        Ok(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::repositories::members::InMemoryMemberRepository;
    use crate::services::auth::BcryptPasswordEncoder;
    use crate::validation::PolicySettings;

    fn service() -> MemberService {
        MemberService::new(
            Arc::new(InMemoryMemberRepository::new()),
            Arc::new(BcryptPasswordEncoder::new(4)),
            Arc::new(ValidationPolicy::new(PolicySettings::default()).unwrap()),
        )
    }

    fn request() -> RegisterMemberRequest {
        RegisterMemberRequest {
            login_id: Some("testuser1".to_string()),
            password: Some("Password1!".to_string()),
            name: Some("홍길동".to_string()),
            birth_date: Some("1990-01-15".to_string()),
            email: Some("test@example.com".to_string()),
        }
    }

    #[actix_web::test]
    async fn test_register_success() {
        let service = service();
        let member = service.register(request()).await.unwrap();

        assert!(member.id().is_some());
        assert_eq!(member.login_id().as_str(), "testuser1");
        assert_ne!(member.password().as_encoded(), "Password1!");
    }

    #[actix_web::test]
    async fn test_register_duplicate_login_id_is_case_insensitive() {
        let service = service();
        service.register(request()).await.unwrap();

        let err = service
            .register(RegisterMemberRequest {
                login_id: Some("TESTUSER1".to_string()),
                ..request()
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateLoginId);
    }

    #[actix_web::test]
    async fn test_register_field_errors() {
        let service = service();

        let cases = [
            (RegisterMemberRequest { login_id: None, ..request() }, ErrorCode::InvalidLoginIdFormat),
            (RegisterMemberRequest { name: Some(" ".to_string()), ..request() }, ErrorCode::NameRequired),
            (RegisterMemberRequest { birth_date: None, ..request() }, ErrorCode::InvalidBirthDate),
            (RegisterMemberRequest { email: Some("bad".to_string()), ..request() }, ErrorCode::InvalidEmailFormat),
            (RegisterMemberRequest { password: None, ..request() }, ErrorCode::InvalidPasswordFormat),
            (
                RegisterMemberRequest { password: Some("Pw19900115!".to_string()), ..request() },
                ErrorCode::PasswordContainsBirthDate,
            ),
        ];

        for (request, expected) in cases {
            assert_eq!(service.register(request).await.unwrap_err().code(), expected);
        }
    }

    #[actix_web::test]
    async fn test_get_my_info_masks_name() {
        let service = service();
        service.register(request()).await.unwrap();

        let info = service.get_my_info("testuser1", "Password1!").await.unwrap();
        assert_eq!(info.name, "홍길*");
        assert_eq!(info.birth_date, "1990-01-15");
    }

    #[actix_web::test]
    async fn test_change_password_then_reauthenticate() {
        let service = service();
        service.register(request()).await.unwrap();

        service
            .change_password("testuser1", "Password1!", Some("NewPass12!".to_string()))
            .await
            .unwrap();

        assert!(service.authenticate("testuser1", "NewPass12!").await.is_ok());
        assert_eq!(
            service.authenticate("testuser1", "Password1!").await.unwrap_err(),
            AppError::unauthorized()
        );
    }

    #[actix_web::test]
    async fn test_change_password_errors() {
        let service = service();
        service.register(request()).await.unwrap();

        let wrong_current = service
            .change_password("testuser1", "Wrong123!", Some("NewPass12!".to_string()))
            .await
            .unwrap_err();
        assert_eq!(wrong_current.code(), ErrorCode::Unauthorized);

        let same = service
            .change_password("testuser1", "Password1!", Some("Password1!".to_string()))
            .await
            .unwrap_err();
        assert_eq!(same.code(), ErrorCode::SamePassword);

        let birth = service
            .change_password("testuser1", "Password1!", Some("New900115!".to_string()))
            .await
            .unwrap_err();
        assert_eq!(birth.code(), ErrorCode::PasswordContainsBirthDate);

        let missing = service.change_password("testuser1", "Password1!", None).await.unwrap_err();
        assert_eq!(missing.code(), ErrorCode::InvalidPasswordFormat);
    }
}
