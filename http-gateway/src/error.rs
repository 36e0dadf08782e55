pub type Result<T> = std::result::Result<T, Error>;

/// Startup failures. Nothing here is produced while serving requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("error while loading config: {0}")]
    EnvyError(#[from] envy::Error),

    #[error("{0}")]
    PublicKeyError(#[from] interactions::InvalidPublicKey),

    #[error("invalid handler registry: {0}")]
    RegistryError(#[from] interactions::RegistryError),

    #[error("error while building REST client: {0}")]
    RestError(#[from] interactions::RestError),

    #[error("invalid server address: {0}")]
    AddrParseError(#[from] std::net::AddrParseError),

    #[error("error while binding server: {0}")]
    WarpError(#[from] warp::Error),

    #[cfg(feature = "use-sentry")]
    #[error("invalid sentry dsn: {0}")]
    SentryDsnError(#[from] sentry::types::ParseDsnError),
}

