use spheregrid_pool::PoolError;
use thiserror::Error;

/// Errors that can occur when loading a [`GridConfig`](crate::GridConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config extension: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Fatal errors while building a [`SphereGrid`](crate::SphereGrid).
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("pool setup failed: {0}")]
    Pool(#[from] PoolError),
}
