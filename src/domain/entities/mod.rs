//! # Domain Entities
//!
//! 식별자를 가진 영속 가능한 도메인 객체들입니다.
//!
//! - [`members`] - 회원 애그리거트

pub mod members;
