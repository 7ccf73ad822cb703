//! 회원 관리 서비스 모듈
//!
//! 회원 가입, 인증, 정보 조회, 비밀번호 변경 비즈니스 로직을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::members::MemberService;
//!
//! let service = MemberService::new(repo, encoder, policy);
//! let member = service.register(request).await?;
//! ```

pub mod member_service;

pub use member_service::MemberService;
