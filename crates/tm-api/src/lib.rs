use std::env;
use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::connect_info::ConnectInfo,
    extract::DefaultBodyLimit,
    extract::State,
    http::header::{HeaderName, HeaderValue, CONTENT_TYPE},
    http::Method,
    http::Request,
    middleware,
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};
use clap::Parser;
use dotenvy::dotenv;
use governor::{
    clock::DefaultClock, middleware::NoOpMiddleware, state::keyed::DashMapStateStore, Quota,
    RateLimiter,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

pub mod error;
pub mod handlers;

use error::ApiError;
use handlers::{health, leaderboard, profiles, teams};
use tm_core::config::EngineLimits;
use tm_core::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use tm_core::store::{MemoryProfileStore, ProfileStore};

const SHUTDOWN_DRAIN_GRACE: Duration = Duration::from_millis(200);
const MAX_BODY_BYTES: usize = 256 * 1024;

#[derive(Debug, Clone, Parser)]
#[command(name = "tm-api", about = "HTTP API for the teammatch frontend")]
struct Cli {
    /// Server port
    #[arg(long, env = "PORT", default_value_t = 3001)]
    port: u16,

    /// Comma separated list of allowed CORS origins
    #[arg(long, env = "TM_CORS_ORIGINS", default_value = "http://localhost:3000")]
    cors_origins: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    fn from_cli(cli: Cli) -> Result<Self, ApiError> {
        let cors_origins = cli
            .cors_origins
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect::<Vec<_>>();

        if cors_origins.is_empty() || cors_origins.iter().any(|origin| origin == "*") {
            return Err(ApiError::BadRequest(
                "TM_CORS_ORIGINS must list explicit origins".into(),
            ));
        }

        Ok(Self {
            port: cli.port,
            cors_origins,
        })
    }

    pub fn for_tests() -> Self {
        Self {
            port: 3001,
            cors_origins: vec!["http://localhost:3000".into()],
        }
    }
}

type IpRateLimiter = RateLimiter<IpAddr, DashMapStateStore<IpAddr>, DefaultClock, NoOpMiddleware>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_sec: u64,
    pub burst: u32,
}

impl RateLimitConfig {
    fn parse_env_u64(name: &str) -> Option<u64> {
        env::var(name)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|value| *value > 0)
    }

    fn parse_env_u32(name: &str) -> Option<u32> {
        env::var(name)
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|value| *value > 0)
    }

    fn from_env() -> Self {
        Self {
            per_sec: Self::parse_env_u64("TM_RATE_LIMIT_PER_SEC").unwrap_or(20),
            burst: Self::parse_env_u32("TM_RATE_LIMIT_BURST").unwrap_or(40),
        }
    }
}

fn build_ip_limiter(per_second: u64, burst_size: u32) -> Arc<IpRateLimiter> {
    let nanos_per_token = 1_000_000_000u64 / per_second.max(1);
    let quota = Quota::with_period(Duration::from_nanos(nanos_per_token.max(1)))
        .unwrap()
        .allow_burst(NonZeroU32::new(burst_size.max(1)).unwrap());

    Arc::new(RateLimiter::keyed(quota))
}

pub fn default_rate_limit() -> Arc<IpRateLimiter> {
    let cfg = RateLimitConfig::from_env();
    build_ip_limiter(cfg.per_sec, cfg.burst)
}

pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
    pub config: AppConfig,
    pub limits: EngineLimits,
    pub rate_limit: Arc<IpRateLimiter>,
    pub readiness: Arc<AtomicBool>,
}

pub type SharedState = Arc<AppState>;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

fn request_ip<B>(req: &Request<B>) -> Option<IpAddr> {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip())
}

async fn global_rate_limit(
    State(state): State<SharedState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(client_ip) = request_ip(&req) {
        if state.rate_limit.check_key(&client_ip).is_err() {
            return Err(ApiError::TooManyRequests("rate limit exceeded".into()));
        }
    }

    Ok(next.run(req).await)
}

pub fn create_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let request_id_header = HeaderName::from_static("x-request-id");
    let trace_header = request_id_header.clone();

    let trace = TraceLayer::new_for_http().make_span_with(move |request: &Request<Body>| {
        let request_id = request
            .headers()
            .get(&trace_header)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    });

    let api_routes = Router::new()
        .route(
            "/profiles",
            get(profiles::list_profiles).post(profiles::create_profile),
        )
        .route("/profiles/:id", get(profiles::get_profile))
        .route("/teams/build", post(teams::build_team))
        .route("/leaderboard", get(leaderboard::leaderboard));

    Router::new()
        .route("/health", get(health::readyz))
        .route("/livez", get(health::livez))
        .route("/readyz", get(health::readyz))
        .nest("/api", api_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            global_rate_limit,
        ))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(trace)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(
            request_id_header,
            MakeRequestUuid::default(),
        ))
        .layer(cors)
        .with_state(state)
}

pub fn test_state() -> SharedState {
    let limits = EngineLimits::default();

    Arc::new(AppState {
        store: Arc::new(MemoryProfileStore::new(limits.scan_limit)),
        config: AppConfig::for_tests(),
        limits,
        rate_limit: default_rate_limit(),
        readiness: Arc::new(AtomicBool::new(true)),
    })
}

pub async fn run() -> Result<(), ApiError> {
    dotenv().ok();
    init_tracing_subscriber(env!("CARGO_PKG_NAME"));
    install_tracing_panic_hook(env!("CARGO_PKG_NAME"));

    let cli = Cli::parse();
    let config = AppConfig::from_cli(cli)?;
    let limits = EngineLimits::from_env();

    let state = Arc::new(AppState {
        store: Arc::new(MemoryProfileStore::new(limits.scan_limit)),
        config: config.clone(),
        limits,
        rate_limit: default_rate_limit(),
        readiness: Arc::new(AtomicBool::new(true)),
    });

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    let app = create_router(state.clone());

    info!(%addr, "tm-api listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    Ok(())
}

async fn shutdown_signal(state: SharedState) {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
            let _ = sigterm.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    state
        .readiness
        .store(false, std::sync::atomic::Ordering::SeqCst);

    // Give load balancers a brief window to observe /readyz as not ready
    // before axum stops accepting new connections.
    tokio::time::sleep(SHUTDOWN_DRAIN_GRACE).await;
}
