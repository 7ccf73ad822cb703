use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use member_auth_service::config::{
    MemberStoreKind, PasswordConfig, ServerConfig, StoreConfig, ValidationConfig,
};
use member_auth_service::db::Database;
use member_auth_service::domain::models::auth::{LOGIN_ID_HEADER, LOGIN_PASSWORD_HEADER};
use member_auth_service::repositories::members::{
    InMemoryMemberRepository, MemberRepository, MongoMemberRepository,
};
use member_auth_service::routes::configure_all_routes;
use member_auth_service::services::auth::build_password_encoder;
use member_auth_service::services::members::MemberService;
use member_auth_service::validation::ValidationPolicy;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    // .env의 RUST_LOG가 적용되도록 파일을 먼저 읽고, 로드 결과는 로거 초기화 후 출력
    let env_file = load_env_file();
    init_logging();
    env_file.report();

    info!("🚀 회원 서비스 시작중...");

    let member_service = web::Data::new(build_member_service().await);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(member_service).await
}

/// 검증 정책, 비밀번호 인코더, 저장소를 조립해 서비스를 만듭니다.
async fn build_member_service() -> MemberService {
    let policy = Arc::new(
        ValidationPolicy::new(ValidationConfig::settings()).expect("검증 정책 설정 오류"),
    );
    info!("검증 정책 로드됨: {:?}", policy.settings());

    let encoder_kind = PasswordConfig::encoder_kind();
    let encoder = build_password_encoder(encoder_kind, PasswordConfig::bcrypt_cost());
    info!("비밀번호 인코더: {:?}", encoder_kind);

    MemberService::new(initialize_member_store().await, encoder, policy)
}

async fn initialize_member_store() -> Arc<dyn MemberRepository> {
    match StoreConfig::kind() {
        MemberStoreKind::Memory => {
            info!("🧪 인메모리 회원 저장소 사용 (재시작 시 데이터 소멸)");
            Arc::new(InMemoryMemberRepository::new())
        }
        MemberStoreKind::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Arc::new(Database::new().await.expect("데이터베이스 연결 실패"));
            let repo = MongoMemberRepository::new(database);
            repo.create_indexes().await.expect("인덱스 생성 실패");

            Arc::new(repo)
        }
    }
}

async fn start_http_server(member_service: web::Data<MemberService>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(member_service.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 프로필에 대응하는 환경 파일 (`None`이면 기본 `.env`)
fn env_file_for(profile: &str) -> Option<&'static str> {
    match profile {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    }
}

/// 환경 파일 로드 결과
struct EnvFileLoad {
    profile: String,
    file: &'static str,
    outcome: Result<(), String>,
}

impl EnvFileLoad {
    fn report(&self) {
        info!("Current profile: {}", self.profile);
        match &self.outcome {
            Ok(()) => info!("{} 파일 로드 됨", self.file),
            Err(e) => error!("{} 파일 로드 실패: {}", self.file, e),
        }
    }
}

/// 로거가 아직 없으므로 여기서는 로그를 남기지 않고 결과만 돌려줍니다.
fn load_env_file() -> EnvFileLoad {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let (file, outcome) = match env_file_for(&profile) {
        Some(file) => (
            file,
            dotenv::from_filename(file).map(|_| ()).map_err(|e| e.to_string()),
        ),
        None => {
            // 기본 .env는 없어도 됨
            dotenv().ok();
            (".env", Ok(()))
        }
    };

    EnvFileLoad {
        profile,
        file,
        outcome,
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_methods(vec!["GET", "POST", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT.as_str(),
            header::CONTENT_TYPE.as_str(),
            LOGIN_ID_HEADER,
            LOGIN_PASSWORD_HEADER,
        ])
        .max_age(3600)
}
