//! 회원 애그리거트
//!
//! 검증을 마친 값 객체들로만 구성되므로 `Member` 인스턴스는 항상 유효한 상태입니다.
//! 비밀번호 변경 규칙(형식, 생년월일 포함 금지, 기존 비밀번호 재사용 금지)도
//! 이 타입이 직접 적용합니다.

use std::fmt;

use crate::domain::value_objects::{BirthDate, Email, LoginId, Name, Password};
use crate::errors::{AppError, AppResult};
use crate::services::auth::PasswordEncoder;
use crate::validation::ValidationPolicy;

/// 저장소가 부여한 회원 식별자
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 가입된 회원
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    id: Option<MemberId>,
    login_id: LoginId,
    password: Password,
    name: Name,
    birth_date: BirthDate,
    email: Email,
}

impl Member {
    /// 새 회원을 만듭니다. 식별자는 저장 시점에 부여됩니다.
    pub fn register(
        login_id: LoginId,
        password: Password,
        name: Name,
        birth_date: BirthDate,
        email: Email,
    ) -> Self {
        Self {
            id: None,
            login_id,
            password,
            name,
            birth_date,
            email,
        }
    }

    /// 저장소에서 읽은 회원을 복원합니다.
    pub fn reconstruct(
        id: MemberId,
        login_id: LoginId,
        password: Password,
        name: Name,
        birth_date: BirthDate,
        email: Email,
    ) -> Self {
        Self {
            id: Some(id),
            login_id,
            password,
            name,
            birth_date,
            email,
        }
    }

    /// 저장소가 부여한 식별자를 설정합니다.
    pub fn with_id(mut self, id: MemberId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<&MemberId> {
        self.id.as_ref()
    }

    pub fn login_id(&self) -> &LoginId {
        &self.login_id
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn birth_date(&self) -> &BirthDate {
        &self.birth_date
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    /// 비밀번호를 변경합니다.
    ///
    /// 1. 새 비밀번호 형식 검증
    /// 2. 이 회원의 생년월일 포함 여부 검사
    /// 3. 기존 비밀번호와 같으면 `SamePasswordError`
    /// 4. 인코딩 후 교체
    ///
    /// bcrypt 인코더를 사용하면 블로킹 연산이므로 비동기 경로에서는
    /// 블로킹 스레드 풀에서 호출합니다.
    pub fn change_password(
        &mut self,
        new_raw: &str,
        policy: &ValidationPolicy,
        encoder: &dyn PasswordEncoder,
    ) -> AppResult<()> {
        Password::validate_raw(new_raw, &self.birth_date, policy)?;

        if self.password.matches(new_raw, encoder)? {
            return Err(AppError::SamePasswordError(
                "새 비밀번호가 기존 비밀번호와 동일합니다".to_string(),
            ));
        }

        self.password = Password::encode_validated(new_raw, encoder)?;
        Ok(())
    }
}
