//! 회원 관련 응답 DTO 모듈

pub mod member_response;

pub use member_response::MemberResponse;
