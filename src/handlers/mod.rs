//! HTTP 요청 핸들러 모듈
//!
//! Spring의 `@RestController`에 해당하는 actix-web 핸들러들입니다.
//! 핸들러는 요청을 추출해 서비스에 위임하고, 서비스가 반환한 [`AppError`](crate::errors::AppError)는
//! `ResponseError` 구현을 통해 그대로 HTTP 에러 응답이 됩니다.
//!
//! ```rust,ignore
//! #[get("/me")]
//! pub async fn get_my_info(
//!     service: web::Data<MemberService>,
//!     credentials: CredentialHeaders,
//! ) -> Result<HttpResponse, AppError> {
//!     let response = service.get_my_info(&credentials.login_id, &credentials.password).await?;
//!     Ok(HttpResponse::Ok().json(response))
//! }
//! ```

pub mod members;
