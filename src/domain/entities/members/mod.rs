//! Members Entity Module
//!
//! 회원 애그리거트([`Member`](member::Member))와 식별자를 정의합니다.

pub mod member;

pub use member::{Member, MemberId};
