use crate::{BackgroundTasks, Config, Result};
use interactions::{Gateway, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal::ctrl_c;
use tracing::{error, info};
use warp::Filter;

pub struct Server {
    pub config: Config,
    pub gateway: Gateway,
    pub tasks: BackgroundTasks,
}

impl Server {
    pub fn new(config: Config, gateway: Gateway) -> Server {
        Server {
            config,
            gateway,
            tasks: BackgroundTasks::new(),
        }
    }

    /// Serves until ctrl-c, then waits for outstanding deferred handlers.
    pub async fn start(self: Arc<Self>) -> Result<()> {
        let address: SocketAddr = self.config.server_addr.parse()?;

        let (address, server) = warp::serve(Arc::clone(&self).filter_handle())
            .try_bind_with_graceful_shutdown(address, async {
                if let Err(e) = ctrl_c().await {
                    error!(error = %e, "Failed to listen for ctrl-c");
                }
            })?;

        info!(%address, "Listening for interactions");
        server.await;

        info!(pending = self.tasks.len(), "Shutting down");
        self.tasks.drain().await;

        Ok(())
    }

    pub fn filter_handle(
        self: Arc<Self>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::post()
            .and(warp::path("interactions"))
            .and(warp::path::end())
            .and(warp::any().map(move || self.clone()))
            .and(warp::header::optional::<String>(SIGNATURE_HEADER))
            .and(warp::header::optional::<String>(TIMESTAMP_HEADER))
            .and(warp::body::bytes())
            .and_then(super::handle)
            .with(warp::trace::request())
    }
}
