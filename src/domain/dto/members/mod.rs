//! 회원 API의 요청/응답 DTO

pub mod request;
pub mod response;
