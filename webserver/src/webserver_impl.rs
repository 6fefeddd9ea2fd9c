//! Main webserver implementation
//!
//! Wires the catalog store into an axum router and runs it until Ctrl+C.

use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use jewel_shared::logging::{self, Component};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::error::{WebServerError, WebServerResult};
use crate::state::{ApiState, WebServerState};
use crate::traits::CatalogStore;
use crate::web::handlers::{api, static_files};

/// Main webserver struct with an injected catalog store
pub struct WebServer<S: CatalogStore> {
    api: ApiState<S>,
    static_dir: Option<PathBuf>,
}

impl<S> WebServer<S>
where
    S: CatalogStore + 'static,
{
    pub fn new(config: &ServerConfig, store: S) -> Self {
        let state = Arc::new(WebServerState::new(config.bind_address));
        Self {
            api: ApiState::new(Arc::new(store), state),
            static_dir: config.static_dir.clone(),
        }
    }

    /// Routes mounted under `/api`
    fn api_routes() -> Router<ApiState<S>> {
        Router::new()
            .route("/states", get(api::list_states::<S>))
            .route("/states/:id", get(api::get_state::<S>))
            .route("/states/:id/sellers", get(api::list_state_sellers::<S>))
            .route("/sellers", get(api::list_sellers::<S>))
            .route("/sellers/:id", get(api::get_seller::<S>))
            .route("/sellers/:id/workshop", get(api::get_seller_workshop::<S>))
            .route("/specialties", get(api::list_specialties::<S>))
            .route("/jewelry", get(api::list_jewelry::<S>))
            .route("/jewelry/:id", get(api::get_jewelry_item::<S>))
            .route("/catalog/categories", get(api::list_categories))
            .route("/catalog/materials", get(api::list_materials))
            .route("/catalog/price-range", get(api::get_price_range::<S>))
            .route("/dashboard/inquiries", get(api::list_inquiries::<S>))
            .route("/dashboard/categories", get(api::list_dashboard_categories::<S>))
            .fallback(static_files::not_found)
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        let router = Router::new()
            .route("/health", get(api::health_check::<S>))
            .nest("/api", Self::api_routes())
            .with_state(self.api.clone());

        let router = match &self.static_dir {
            Some(dir) => router.fallback_service(static_files::spa_service(dir)),
            None => router.fallback(static_files::not_found),
        };

        router
            .layer(middleware::from_fn_with_state(self.api.server.clone(), count_requests))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            )
    }

    /// Bind the configured address and serve until Ctrl+C
    pub async fn run(self) -> WebServerResult<()> {
        let address = self.api.server.bind_address;
        let listener = TcpListener::bind(address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {address}: {e}")))?;

        let state = self.api.server.clone();
        self.serve(listener, shutdown_signal(state)).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_address = listener.local_addr()?;
        jewel_shared::component_info!(
            Component::Server,
            "🌐 Web server listening on http://{}",
            local_address
        );
        if let Some(dir) = &self.static_dir {
            jewel_shared::component_info!(Component::Server, "📁 Serving storefront from {}", dir.display());
        }

        let router = self.build_router();
        axum::serve(listener, router).with_graceful_shutdown(shutdown).await?;

        self.api.server.set_running(false);
        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState> {
        &self.api.server
    }
}

async fn count_requests(State(state): State<Arc<WebServerState>>, request: Request, next: Next) -> Response {
    state.record_request();
    next.run(request).await
}

async fn shutdown_signal(state: Arc<WebServerState>) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(Component::Server, "Received Ctrl+C signal"),
        Err(err) => logging::log_error(Component::Server, "Signal handling", &err),
    }
    state.set_running(false);
}
