//! # 회원 관련 요청 DTO 모듈
//!
//! 클라이언트가 보낸 JSON 본문을 담는 타입들입니다. 필드는 모두 `Option`이며
//! 검증은 값 객체 생성 단계에서 수행됩니다.

pub mod change_password_request;
pub mod register_member_request;

pub use change_password_request::ChangePasswordRequest;
pub use register_member_request::RegisterMemberRequest;
