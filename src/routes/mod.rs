//! 라우트 구성
//!
//! 모든 엔드포인트를 한곳에서 등록합니다. `main`과 HTTP 테스트가 같은
//! [`configure_all_routes`]를 사용합니다.

use actix_web::web;
use serde_json::json;

use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_member_routes(cfg);
}

fn configure_member_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/members")
            .service(handlers::members::register_member)
            // 헤더 자격 증명 필요
            .service(handlers::members::get_my_info)
            .service(handlers::members::change_password),
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "member_auth_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
