//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하며, 테스트와 로컬 실행을 위한 인메모리 구현을 함께 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::members::InMemoryMemberRepository;
//!
//! let repo = InMemoryMemberRepository::new();
//! let exists = repo.exists_by_login_id("testuser1").await?;
//! ```

pub mod members;
