use crate::{Config, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "use-sentry")]
pub type Guard = sentry::ClientInitGuard;

#[cfg(not(feature = "use-sentry"))]
pub type Guard = ();

/// Installs the global subscriber. Keep the returned guard alive for the
/// lifetime of the process so queued Sentry events are flushed on exit.
pub fn configure(config: &Config) -> Result<Guard> {
    #[cfg(feature = "use-sentry")]
    let guard = {
        use sentry::types::Dsn;
        use std::str::FromStr;

        let dsn = config.sentry_dsn.as_deref().map(Dsn::from_str).transpose()?;

        sentry::init(sentry::ClientOptions {
            dsn,
            release: sentry::release_name!(),
            ..Default::default()
        })
    };

    #[cfg(not(feature = "use-sentry"))]
    let guard = ();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Failed deferred handlers are logged at error level; this is what gets
    // them to Sentry.
    #[cfg(feature = "use-sentry")]
    let registry = registry.with(sentry_tracing::layer().event_filter(|meta| {
        match *meta.level() {
            tracing::Level::ERROR => sentry_tracing::EventFilter::Exception,
            tracing::Level::WARN => sentry_tracing::EventFilter::Breadcrumb,
            _ => sentry_tracing::EventFilter::Ignore,
        }
    }));

    if config.json_log {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    Ok(guard)
}
