//! 인증 관련 요청 모델

pub mod credential_headers;

pub use credential_headers::{CredentialHeaders, LOGIN_ID_HEADER, LOGIN_PASSWORD_HEADER};
