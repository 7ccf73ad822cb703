//! # Domain Models
//!
//! 엔티티나 DTO가 아닌, HTTP 요청에서 추출되는 보조 모델들입니다.
//!
//! - [`auth`] - 헤더 기반 자격 증명 추출기

pub mod auth;
