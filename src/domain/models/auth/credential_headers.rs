//! 요청 헤더 기반 자격 증명
//!
//! `X-Login-Id` / `X-Login-Pw` 헤더에서 로그인 ID와 비밀번호를 꺼내는 추출기입니다.
//! 추출 자체는 실패하지 않습니다. 헤더가 없거나 UTF-8이 아니면 빈 문자열이 되고,
//! 인증 절차가 이를 `UNAUTHORIZED`로 거부합니다.

use std::future::{Ready, ready};

use actix_web::{Error, FromRequest, HttpRequest};

pub const LOGIN_ID_HEADER: &str = "X-Login-Id";
pub const LOGIN_PASSWORD_HEADER: &str = "X-Login-Pw";

/// 헤더로 전달된 로그인 자격 증명
#[derive(Clone, Default)]
pub struct CredentialHeaders {
    pub login_id: String,
    pub password: String,
}

impl CredentialHeaders {
    fn header_value(req: &HttpRequest, name: &str) -> String {
        req.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }
}

impl std::fmt::Debug for CredentialHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialHeaders")
            .field("login_id", &self.login_id)
            .field("password", &"****")
            .finish()
    }
}

impl FromRequest for CredentialHeaders {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(CredentialHeaders {
            login_id: Self::header_value(req, LOGIN_ID_HEADER),
            password: Self::header_value(req, LOGIN_PASSWORD_HEADER),
        }))
    }
}
