//! 회원 API 핸들러
//!
//! | Method | Path | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/v1/members` | 회원 가입 (201) |
//! | `GET` | `/api/v1/members/me` | 내 정보 조회 (헤더 인증) |
//! | `PATCH` | `/api/v1/members/me/password` | 비밀번호 변경 (헤더 인증) |
//!
//! 인증이 필요한 요청은 `X-Login-Id`, `X-Login-Pw` 헤더로 자격 증명을 전달합니다.

use actix_web::{HttpResponse, get, patch, post, web};

use crate::domain::dto::members::request::{ChangePasswordRequest, RegisterMemberRequest};
use crate::domain::dto::members::response::MemberResponse;
use crate::domain::models::auth::CredentialHeaders;
use crate::errors::AppError;
use crate::services::members::MemberService;

#[post("")]
pub async fn register_member(
    service: web::Data<MemberService>,
    payload: web::Json<RegisterMemberRequest>,
) -> Result<HttpResponse, AppError> {
    let member = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(MemberResponse::from(&member)))
}

#[get("/me")]
pub async fn get_my_info(
    service: web::Data<MemberService>,
    credentials: CredentialHeaders,
) -> Result<HttpResponse, AppError> {
    let response = service
        .get_my_info(&credentials.login_id, &credentials.password)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[patch("/me/password")]
pub async fn change_password(
    service: web::Data<MemberService>,
    credentials: CredentialHeaders,
    payload: web::Json<ChangePasswordRequest>,
) -> Result<HttpResponse, AppError> {
    let member = service
        .change_password(
            &credentials.login_id,
            &credentials.password,
            payload.into_inner().new_password,
        )
        .await?;

    Ok(HttpResponse::Ok().json(MemberResponse::from(&member)))
}
