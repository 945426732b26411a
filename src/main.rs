//! Agency site - entry point for the web server binary.

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use agency_site::adapters::ai::{AnthropicConfig, AnthropicProvider, GeminiConfig, GeminiProvider};
use agency_site::adapters::auth::JwtSessionService;
use agency_site::adapters::browser::{CaptureSettings, ChromiumCapturer};
use agency_site::adapters::http::{build_router, AppParts, AppState, CookieSettings, RouterSettings};
use agency_site::adapters::media::LocalMediaStorage;
use agency_site::adapters::{postgres, Repositories};
use agency_site::application::handlers::{AdminCredentials, AnalyzeWebsiteHandler, AnalyzerSettings, SiteIdentity};
use agency_site::config::{AiConfig, AiProvider, AppConfig, ServerConfig};
use agency_site::ports::{AIError, VisionModel};

type BoxError = Box<dyn Error + Send + Sync>;

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    if server.is_production() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// The configured vision model, or `None` when no API key is set.
fn build_vision_model(ai: &AiConfig) -> Result<Option<Arc<dyn VisionModel>>, AIError> {
    let Some(api_key) = ai.api_key.clone().filter(|_| ai.is_enabled()) else {
        tracing::warn!("no AI API key configured; website analyzer disabled");
        return Ok(None);
    };

    let model: Arc<dyn VisionModel> = match ai.provider {
        AiProvider::Gemini => {
            let mut config = GeminiConfig::new(api_key).with_timeout(ai.timeout());
            if let Some(url) = &ai.base_url {
                config = config.with_base_url(url);
            }
            Arc::new(GeminiProvider::new(config)?)
        }
        AiProvider::Anthropic => {
            let mut config = AnthropicConfig::new(api_key).with_timeout(ai.timeout());
            if let Some(url) = &ai.base_url {
                config = config.with_base_url(url);
            }
            Arc::new(AnthropicProvider::new(config)?)
        }
    };
    info!(provider = model.provider_name(), models = ?ai.model_list(), "website analyzer enabled");
    Ok(Some(model))
}

async fn build_repositories(config: &AppConfig) -> Result<Repositories, BoxError> {
    match &config.database {
        Some(database) => {
            info!("connecting to PostgreSQL");
            let pool = postgres::connect(database).await?;
            Ok(Repositories::postgres(pool))
        }
        None => {
            let dir = &config.storage.data_dir;
            tokio::fs::create_dir_all(dir).await?;
            info!(data_dir = %dir.display(), "no database configured; using JSON file storage");
            Ok(Repositories::json_files(dir))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    info!(version = env!("CARGO_PKG_VERSION"), "agency-site starting");

    let repositories = build_repositories(&config).await?;

    let sessions = Arc::new(JwtSessionService::new(
        &config.auth.session_secret,
        config.auth.session_ttl_hours,
    ));
    let credentials = AdminCredentials::new(
        config.auth.admin_email.clone(),
        config.auth.admin_password_sha256.clone(),
    );

    let capturer = Arc::new(ChromiumCapturer::new(CaptureSettings {
        viewport_width: config.analyzer.viewport_width,
        viewport_height: config.analyzer.viewport_height,
        navigation_timeout: config.analyzer.navigation_timeout(),
        chrome_executable: config.analyzer.chrome_executable.as_ref().map(PathBuf::from),
        no_sandbox: config.analyzer.no_sandbox,
    }));
    let analyzer = AnalyzeWebsiteHandler::new(
        capturer,
        build_vision_model(&config.ai)?,
        AnalyzerSettings {
            models: config.ai.model_list(),
            ecommerce_domains: config.analyzer.ecommerce_domain_list(),
        },
    );

    tokio::fs::create_dir_all(&config.storage.uploads_dir).await?;
    let media = Arc::new(LocalMediaStorage::new(
        &config.storage.uploads_dir,
        "/uploads",
        config.storage.max_upload_bytes,
    ));

    let state = AppState::new(AppParts {
        repositories,
        sessions: sessions.clone(),
        issuer: sessions,
        credentials,
        analyzer,
        media,
        identity: SiteIdentity {
            name: config.site.name.clone(),
            tagline: config.site.tagline.clone(),
            contact_email: config.site.contact_email.clone(),
        },
        cookies: CookieSettings {
            secure: config.auth.secure_cookies,
        },
        upload_limit_bytes: usize::try_from(config.storage.max_upload_bytes).unwrap_or(usize::MAX),
        storage_backend: config.storage_backend(),
    })?;

    let settings = RouterSettings {
        uploads_dir: config.storage.uploads_dir.clone(),
        admin_assets_dir: config.storage.admin_assets_dir.clone(),
        cors_origins: config.server.cors_origins_list(),
        request_timeout: config.server.request_timeout(),
    };
    let app = build_router(state, &settings);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, storage = config.storage_backend(), "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
