//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 회원 가입/인증 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 모든 에러는 기계가 읽을 수 있는 [`ErrorCode`]와 사람이 읽을 수 있는 메시지를 함께 가집니다.
//! 검증 실패, 인증 실패, 중복 가입 등은 모두 호출자가 복구할 수 있는 정상적인 실패이며,
//! 자동 재시도 없이 즉시 호출자에게 전달됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, ErrorCode};
//!
//! fn check(raw: &str) -> Result<(), AppError> {
//!     if raw.trim().is_empty() {
//!         return Err(AppError::validation(
//!             ErrorCode::InvalidLoginIdFormat,
//!             "로그인 ID는 필수입니다",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// 기계가 읽을 수 있는 에러 코드
///
/// HTTP 응답의 `code` 필드로 직렬화됩니다 (`INVALID_LOGIN_ID_FORMAT` 형태).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidLoginIdFormat,
    InvalidPasswordFormat,
    InvalidNameFormat,
    /// 공백 제거 후 비어 있는 이름 (형식 오류와 구분)
    NameRequired,
    InvalidEmailFormat,
    InvalidBirthDate,
    PasswordContainsBirthDate,
    /// 인코더에 null/공백 비밀번호가 전달됨
    InvalidPassword,
    DuplicateLoginId,
    Unauthorized,
    SamePassword,
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    /// 직렬화 결과와 동일한 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidLoginIdFormat => "INVALID_LOGIN_ID_FORMAT",
            ErrorCode::InvalidPasswordFormat => "INVALID_PASSWORD_FORMAT",
            ErrorCode::InvalidNameFormat => "INVALID_NAME_FORMAT",
            ErrorCode::NameRequired => "NAME_REQUIRED",
            ErrorCode::InvalidEmailFormat => "INVALID_EMAIL_FORMAT",
            ErrorCode::InvalidBirthDate => "INVALID_BIRTH_DATE",
            ErrorCode::PasswordContainsBirthDate => "PASSWORD_CONTAINS_BIRTH_DATE",
            ErrorCode::InvalidPassword => "INVALID_PASSWORD",
            ErrorCode::DuplicateLoginId => "DUPLICATE_LOGIN_ID",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::SamePassword => "SAME_PASSWORD",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 회원 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 형식 검증기, 생년월일 교차 검증, 인코더 입력 검증이 모두 이 변형을 사용합니다.
    #[error("Validation error: {message}")]
    ValidationError { code: ErrorCode, message: String },

    /// 로그인 ID 중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    ///
    /// 헤더 누락, 존재하지 않는 ID, 틀린 비밀번호를 구분하지 않습니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 새 비밀번호가 기존 비밀번호와 동일 (400 Bad Request)
    #[error("Same password: {0}")]
    SamePasswordError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    ///
    /// 해싱 백엔드 실패처럼 호출자가 복구할 수 없는 경로에만 사용합니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 검증 에러 생성 헬퍼
    pub fn validation(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError::ValidationError {
            code,
            message: message.into(),
        }
    }

    /// 모든 인증 실패에 사용하는 단일 에러
    ///
    /// 실패 원인(헤더 누락, 미가입 ID, 틀린 비밀번호)이 응답으로 새어 나가지 않도록
    /// 항상 같은 메시지를 사용합니다.
    pub fn unauthorized() -> Self {
        AppError::AuthenticationError("로그인 ID 또는 비밀번호가 올바르지 않습니다".to_string())
    }

    /// 에러에 대응하는 기계 판독용 코드
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::ValidationError { code, .. } => *code,
            AppError::ConflictError(_) => ErrorCode::DuplicateLoginId,
            AppError::AuthenticationError(_) => ErrorCode::Unauthorized,
            AppError::SamePasswordError(_) => ErrorCode::SamePassword,
            AppError::DatabaseError(_) => ErrorCode::DatabaseError,
            AppError::InternalError(_) => ErrorCode::InternalError,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            AppError::SamePasswordError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 내부 정보를 숨기고 일반 메시지만 내려보냅니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();
        let message = if status.is_server_error() {
            log::error!("요청 처리 중 서버 오류: {}", self);
            "서버 오류가 발생했습니다".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "code": self.code(),
            "error": message
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::validation(ErrorCode::InvalidEmailFormat, "이메일 형식이 올바르지 않습니다");
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.code(), ErrorCode::InvalidEmailFormat);
    }

    #[test]
    fn test_conflict_maps_to_duplicate_login_id() {
        let error = AppError::ConflictError("이미 사용 중인 로그인 ID입니다".to_string());

        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
        assert_eq!(error.code(), ErrorCode::DuplicateLoginId);
    }

    #[test]
    fn test_unauthorized_response() {
        let error = AppError::unauthorized();

        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.code(), ErrorCode::Unauthorized);
    }

    #[test]
    fn test_unauthorized_is_always_identical() {
        assert_eq!(AppError::unauthorized(), AppError::unauthorized());
    }

    #[test]
    fn test_same_password_response() {
        let error = AppError::SamePasswordError("기존 비밀번호와 동일합니다".to_string());

        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.code(), ErrorCode::SamePassword);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_code_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::PasswordContainsBirthDate).unwrap();
        assert_eq!(json, "\"PASSWORD_CONTAINS_BIRTH_DATE\"");
        assert_eq!(ErrorCode::PasswordContainsBirthDate.as_str(), "PASSWORD_CONTAINS_BIRTH_DATE");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
