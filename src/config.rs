use std::path::Path;

use serde::Deserialize;

const DEFAULTS: &str = include_str!("../config/default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// Insert the standard trivia categories when the table is empty.
    pub seed_categories: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionsConfig {
    /// Number of questions returned per `GET /questions` page.
    pub page_size: u32,
    /// When set, `POST /questions` also requires a truthy `rating`.
    pub require_rating: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizConfig {
    /// Fixed RNG seed for quiz draws. Drawn from the OS when unset.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub questions: QuestionsConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        // Fallback: parse the embedded default TOML
        match from_toml_str(DEFAULTS) {
            Ok(cfg) => cfg,
            Err(e) => panic!("Failed to load embedded default config: {}", e),
        }
    }
}

/// Loads configuration: embedded defaults -> trivia.toml -> $TRIVIA_CONFIG -> env.
pub fn load() -> anyhow::Result<AppConfig> {
    // Load .env first (optional)
    let _ = dotenvy::dotenv();

    let mut builder = ::config::Config::builder()
        .add_source(::config::File::from_str(DEFAULTS, ::config::FileFormat::Toml))
        // Optional local file: trivia.toml (in CWD)
        .add_source(::config::File::with_name("trivia").required(false));

    if let Ok(custom_path) = std::env::var("TRIVIA_CONFIG") {
        builder = builder.add_source(::config::File::with_name(&custom_path).required(false));
    }
    // Environment variables last to have highest precedence
    builder = builder.add_source(::config::Environment::with_prefix("TRIVIA").separator("__"));

    let cfg = builder.build()?;
    let app_cfg: AppConfig = cfg.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

/// Builds a validated config from the embedded defaults overlaid with `overrides`.
pub fn from_toml_str(overrides: &str) -> anyhow::Result<AppConfig> {
    let cfg = ::config::Config::builder()
        .add_source(::config::File::from_str(DEFAULTS, ::config::FileFormat::Toml))
        .add_source(::config::File::from_str(overrides, ::config::FileFormat::Toml))
        .build()?;
    let app_cfg: AppConfig = cfg.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    if cfg.server.port == 0 {
        return Err(anyhow::anyhow!("invalid server.port: {}", cfg.server.port));
    }
    #[cfg(unix)]
    if cfg.server.port < 1024 {
        tracing::warn!("Using privileged port {} - may require elevated permissions", cfg.server.port);
    }

    if cfg.database.url.trim().is_empty() {
        return Err(anyhow::anyhow!("database.url must not be empty"));
    }
    if cfg.database.max_connections == 0 {
        return Err(anyhow::anyhow!("database.max_connections must be > 0"));
    }

    if cfg.questions.page_size == 0 || cfg.questions.page_size > 100 {
        return Err(anyhow::anyhow!(
            "questions.page_size must be in 1..=100, got {}",
            cfg.questions.page_size
        ));
    }

    Ok(())
}

pub fn ensure_sqlite_parent_dir(url: &str) -> anyhow::Result<()> {
    let path = match url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:")) {
        Some(p) => p,
        None => return Ok(()),
    };
    // Strip connection options such as ?mode=rwc
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() || path.starts_with(":memory:") {
        return Ok(());
    }
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
