//! # Member Auth Service
//!
//! 커머스 회원 가입과 헤더 자격 증명 인증을 제공하는 actix-web 기반 서비스입니다.
//!
//! ## 계층 구조
//!
//! ```text
//! handlers / routes   HTTP 요청 추출과 응답 변환
//!        │
//! services            회원 가입, 인증, 비밀번호 변경
//!        │
//! domain              자기 검증 값 객체, 회원 애그리거트, DTO
//!        │
//! validation          형식 검증기와 비밀번호-생년월일 교차 검증
//!        │
//! repositories / db   MongoDB 및 인메모리 저장소
//! ```
//!
//! 모든 의존성은 `main`에서 생성자로 조립됩니다.

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;
