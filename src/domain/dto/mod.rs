//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 오가는 요청/응답 타입들입니다.
//! Spring의 `@RequestBody` / `@ResponseBody` 객체와 같은 역할을 합니다.

pub mod members;
