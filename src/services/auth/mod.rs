//! 인증 및 보안 서비스 모듈
//!
//! 비밀번호 인코딩과 헤더 자격 증명 인증 절차를 제공합니다.
//!
//! # Features
//!
//! - bcrypt(기본) / SHA-256(레거시) 비밀번호 인코더
//! - 실패 원인을 드러내지 않는 인증 절차
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{Authenticator, BcryptPasswordEncoder};
//!
//! let encoder = Arc::new(BcryptPasswordEncoder::new(12));
//! let authenticator = Authenticator::new(repo, encoder, policy);
//! let member = authenticator.authenticate("testuser1", "Password1!").await?;
//! ```

pub mod authenticator;
pub mod password_encoder;

pub use authenticator::Authenticator;
pub use password_encoder::{
    BcryptPasswordEncoder, PasswordEncoder, Sha256PasswordEncoder, build_password_encoder,
};
