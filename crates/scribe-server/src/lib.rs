mod cors;
mod health;

use std::net::SocketAddr;

use axum::Router;
use scribe_config::Config;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the medication catalog is corrupt or the audio
    /// upload directory cannot be created
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Medication template routes (always mounted)
        let formulary_store = formulary::build_store(&config.formulary)?;
        app = app.merge(formulary::endpoint_router().with_state(formulary_store));

        // Audio routes, when a transcription provider is configured
        if let Some(ref stt_config) = config.stt {
            let audio_state = stt::build_state(stt_config)?;
            app = app.merge(stt::endpoint_router(stt_config.max_upload_bytes).with_state(audio_state));
        } else {
            tracing::info!("no transcription provider configured, audio routes disabled");
        }

        // Note generation route, when a generation provider is configured
        if let Some(ref notes_config) = config.notes {
            let notes_state = notes::build_state(notes_config);
            app = app.merge(notes::endpoint_router().with_state(notes_state));
        } else {
            tracing::info!("no note generation provider configured, notes route disabled");
        }

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // CORS
        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
