//! 계정 세션 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결과 미디어 업로더를 준비한 뒤 JWT 세션 기반 REST API를 제공합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use account_session_backend::config::{
    CookieConfig, CorsConfig, Environment, RateLimitConfig, ServerConfig,
};
use account_session_backend::db::Database;
use account_session_backend::repositories::users::UserRepository;
use account_session_backend::routes::configure_all_routes;
use account_session_backend::services::auth::{PasswordService, SessionService, TokenService};
use account_session_backend::services::media::CloudinaryService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 계정 세션 서비스 시작중...");

    let environment = Environment::current();
    info!("⚙️ 실행 환경: {:?}", environment);
    if environment.is_production() && !CookieConfig::secure() {
        warn!("⚠️ 운영 환경에서 COOKIE_SECURE=false 입니다. 세션 쿠키가 평문 HTTP로 전송될 수 있습니다");
    }

    let (sessions, tokens) = initialize_services().await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(sessions, tokens).await
}

/// 데이터베이스와 서비스들을 초기화합니다
///
/// 연결 실패는 `io::Error`로 변환되어 프로세스가 종료됩니다.
async fn initialize_services() -> io::Result<(web::Data<SessionService>, web::Data<TokenService>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await.map_err(|e| {
        error!("❌ MongoDB 연결 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ MongoDB 연결 성공 ({})", database.database_name());

    let users = UserRepository::new(&database);
    users.create_indexes().await.map_err(|e| {
        error!("❌ 사용자 인덱스 생성 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    let uploader = CloudinaryService::from_env().map_err(|e| {
        error!("❌ 미디어 업로더 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    let tokens = Arc::new(TokenService::from_env());
    let sessions = SessionService::new(
        Arc::new(users),
        Arc::new(uploader),
        tokens.clone(),
        PasswordService::from_env(),
    );

    Ok((web::Data::new(sessions), web::Data::from(tokens)))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 요청 로깅 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    sessions: web::Data<SessionService>,
    tokens: web::Data<TokenService>,
) -> io::Result<()> {
    let host = ServerConfig::host();
    let port = ServerConfig::port();

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", host, port);
    info!("📍 Health check: http://{}:{}/health", host, port);
    info!("📍 API: http://{}:{}/api/v1/users", host, port);

    let per_second = RateLimitConfig::per_second();
    let burst_size = RateLimitConfig::burst_size();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!("🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개", per_second, burst_size);

    let origins = CorsConfig::allowed_origins();
    info!("🔓 CORS 허용 Origin: {:?}", origins);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&origins))
            .wrap(middleware::Logger::default())
            .app_data(sessions.clone())
            .app_data(tokens.clone())
            .configure(configure_all_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 stderr로 직접 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let file = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    let loaded = if file == ".env" {
        dotenv().map(|_| ())
    } else {
        dotenv::from_filename(file).map(|_| ())
    };

    match loaded {
        Ok(()) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] {} 파일 로드 실패: {}", profile, file, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 "info,actix_web=debug"를 사용합니다.
///
/// ```bash
/// RUST_LOG=account_session_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 쿠키 세션을 위해 자격 증명을 허용하므로 Origin은 명시적으로 나열해야 합니다.
fn configure_cors(origins: &[String]) -> Cors {
    let mut cors = Cors::default();

    for origin in origins {
        if origin == "*" {
            warn!("CORS_ORIGIN='*'는 자격 증명과 함께 사용할 수 없어 무시합니다");
            continue;
        }
        cors = cors.allowed_origin(origin);
    }

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(CorsConfig::max_age())
}
